//! Array-related native functions, generalizing `syscall::list` from
//! `Literal::List` to `Value::Array`.

use im::vector::Vector;

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
            NativeFn::a1("len", len),
            NativeFn::a2("cons", cons),
            NativeFn::a1("first", car),
            NativeFn::a1("rest", cdr),
            NativeFn::a1("empty?", empty),
        ]
    }
}

fn len(a: &Value) -> Result<Value> {
    Ok(Value::Number(a.ensure_array()?.len() as i64))
}

// improper lists banned BTFO
fn cons(a: &Value, b: &Value) -> Result<Value> {
    let mut arr = b.ensure_array()?;
    arr.push_front(a.clone());
    Ok(Value::Array(arr))
}

fn car(a: &Value) -> Result<Value> {
    let arr = a.ensure_array()?;
    match arr.len() {
        0 => Err(err_msg("Cannot take first of an empty array")),
        _ => Ok(arr[0].clone()),
    }
}

fn cdr(a: &Value) -> Result<Value> {
    let arr = a.ensure_array()?;
    match arr.len() {
        0 => Err(err_msg("Cannot take rest of an empty array")),
        1 => Ok(Value::Array(Vector::new())),
        _ => {
            let (_, rest) = arr.split_at(1);
            Ok(Value::Array(rest))
        }
    }
}

fn empty(a: &Value) -> Result<Value> {
    Ok(Value::Bool(a.ensure_array()?.is_empty()))
}
