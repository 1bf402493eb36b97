//! The error taxonomy, carried as `Value::Exception` rather than as a
//! Rust `Result::Err`. An exception is a first-class value that propagates
//! through the continuation stack, not a host-language error.

use std::fmt;
use std::rc::Rc;

use crate::meta::{self, Meta};
use crate::value::Value;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExceptionKind {
    /// The head position of an application reduced to a non-callable value.
    NotCallable,
    /// Argument count did not match the callable's declared arity.
    ArityMismatch,
    /// Wraps any failure raised by a native function.
    NativeError,
    /// A first-class user-raised exception value.
    UserException,
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExceptionKind::NotCallable => write!(f, "not-callable"),
            ExceptionKind::ArityMismatch => write!(f, "arity-mismatch"),
            ExceptionKind::NativeError => write!(f, "native-error"),
            ExceptionKind::UserException => write!(f, "user-exception"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Exception {
    pub kind: ExceptionKind,
    pub message: Rc<str>,
    /// Set for `UserException`; the arbitrary payload the user raised.
    pub payload: Option<Value>,
    pub location: Option<Meta>,
}

impl Exception {
    pub fn not_callable(offender: &Value, location: Option<Meta>) -> Exception {
        Exception {
            kind: ExceptionKind::NotCallable,
            message: Rc::from(format!("value is not callable: {:?}", offender)),
            payload: None,
            location,
        }
    }

    pub fn arity_mismatch(expected: usize, got: usize, location: Option<Meta>) -> Exception {
        Exception {
            kind: ExceptionKind::ArityMismatch,
            message: Rc::from(format!("expected {:} argument(s), got {:}", expected, got)),
            payload: None,
            location,
        }
    }

    pub fn native_error(message: impl Into<String>, location: Option<Meta>) -> Exception {
        Exception {
            kind: ExceptionKind::NativeError,
            message: Rc::from(message.into()),
            payload: None,
            location,
        }
    }

    pub fn user(payload: Value, location: Option<Meta>) -> Exception {
        Exception {
            kind: ExceptionKind::UserException,
            message: Rc::from(format!("{:?}", payload)),
            payload: Some(payload),
            location,
        }
    }

    /// The caller is expected to render its kind, message, and location.
    pub fn render(&self) -> String {
        format!(
            "{:}: {:} ({:})",
            self.kind,
            self.message,
            meta::short_location(&self.location)
        )
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_kind_and_location() {
        let loc = Meta::new("test.isl", 1, "(foo)", 1);
        let e = Exception::not_callable(&Value::Nil, Some(loc));
        let rendered = e.render();
        assert!(rendered.starts_with("not-callable:"));
        assert!(rendered.contains("test.isl"));
    }

    #[test]
    fn render_falls_back_to_unknown_location() {
        let e = Exception::arity_mismatch(2, 1, None);
        assert!(e.render().ends_with("(<unknown>)"));
    }
}
