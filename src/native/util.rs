//! Type-predicate native functions, generalizing `syscall::util`.

use std::rc::Rc;

use crate::errors::*;
use crate::errtype::Exception;
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
            NativeFn::a1("array?", array_pred),
            NativeFn::a1("keyword?", keyword_pred),
            NativeFn::a1("nil?", nil_pred),
            NativeFn::a1("raise", raise),
        ]
    }
}

fn array_pred(a: &Value) -> Result<Value> {
    Ok(Value::Bool(a.is_array()))
}

fn keyword_pred(a: &Value) -> Result<Value> {
    Ok(Value::Bool(a.is_keyword()))
}

fn nil_pred(a: &Value) -> Result<Value> {
    Ok(Value::Bool(a.is_nil()))
}

/// Wraps `payload` in a `Value::Exception` carrying `ExceptionKind::UserException`
/// and hands it back as an ordinary return value, so `apply` forwards it
/// unchanged and the driver loop's exception unwind picks it up exactly as
/// it would any other exception.
fn raise(payload: &Value) -> Result<Value> {
    Ok(Value::Exception(Rc::new(Exception::user(payload.clone(), None))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errtype::ExceptionKind;
    use crate::value::array;

    #[test]
    fn test_array_pred() {
        assert_eq!(array_pred(&array(vec![])).unwrap(), Value::Bool(true));
        assert_eq!(array_pred(&Value::Number(1)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_nil_pred() {
        assert_eq!(nil_pred(&Value::Nil).unwrap(), Value::Bool(true));
        assert_eq!(nil_pred(&Value::Number(0)).unwrap(), Value::Bool(false));
    }

    #[test]
    fn raise_wraps_payload_in_user_exception() {
        match raise(&Value::Number(7)).unwrap() {
            Value::Exception(e) => {
                assert_eq!(e.kind, ExceptionKind::UserException);
                assert_eq!(e.payload, Some(Value::Number(7)));
            }
            _ => panic!("expected exception"),
        }
    }
}
