//! Arithmetic native functions, generalizing `syscall::math`.

use crate::errors::*;
use crate::native::{NativeFactory, NativeFn};
use crate::value::Value;

#[derive(Default)]
pub struct Factory;

impl Factory {
    pub fn new() -> Factory {
        Factory
    }
}

impl NativeFactory for Factory {
    fn natives(&self) -> Vec<NativeFn> {
        vec![
            NativeFn::a2("+", add),
            NativeFn::a2("-", sub),
            NativeFn::a2("*", mul),
            NativeFn::a2("=", eq),
            NativeFn::a1("zero?", zero_pred),
        ]
    }
}

fn add(a: &Value, b: &Value) -> Result<Value> {
    Ok(Value::Number(a.ensure_number()? + b.ensure_number()?))
}

fn sub(a: &Value, b: &Value) -> Result<Value> {
    Ok(Value::Number(a.ensure_number()? - b.ensure_number()?))
}

fn mul(a: &Value, b: &Value) -> Result<Value> {
    Ok(Value::Number(a.ensure_number()? * b.ensure_number()?))
}

fn eq(a: &Value, b: &Value) -> Result<Value> {
    Ok(Value::Bool(a == b))
}

fn zero_pred(a: &Value) -> Result<Value> {
    Ok(Value::Bool(a.ensure_number()? == 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(&Value::Number(1), &Value::Number(1)).unwrap(), Value::Number(2));
        assert!(add(&Value::Bool(true), &Value::Number(1)).is_err());
    }

    #[test]
    fn test_sub() {
        assert_eq!(sub(&Value::Number(5), &Value::Number(2)).unwrap(), Value::Number(3));
    }

    #[test]
    fn test_zero_pred() {
        assert_eq!(zero_pred(&Value::Number(0)).unwrap(), Value::Bool(true));
        assert_eq!(zero_pred(&Value::Number(1)).unwrap(), Value::Bool(false));
    }
}
