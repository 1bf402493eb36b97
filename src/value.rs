//! Runtime value universe.
//!
//! Only the subset of a full Lisp value universe the interpreter core
//! actually touches is represented here; strings-as-data-structure,
//! bignums, and the rest of a standard library's value zoo belong to the
//! (out-of-scope) runtime.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use derive_is_enum_variant::is_enum_variant;
use im::vector::Vector;

use crate::closure::InterpretedFn;
use crate::errors::*;
use crate::errtype::Exception;
use crate::native::NativeFn;

/// A process-wide mutable cell holding one value, its "root".
#[derive(Clone)]
pub struct Var(Rc<RefCell<Value>>);

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#<var>")
    }
}

impl Var {
    pub fn new(root: Value) -> Var {
        Var(Rc::new(RefCell::new(root)))
    }

    pub fn root_get(&self) -> Value {
        self.0.borrow().clone()
    }

    pub fn root_set(&self, v: Value) {
        *self.0.borrow_mut() = v;
    }

    pub fn ptr_eq(&self, other: &Var) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, is_enum_variant)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(i64),
    Str(Rc<str>),
    Keyword(Rc<str>),
    Var(Var),
    Array(Vector<Value>),
    Fn(Rc<InterpretedFn>),
    NativeFn(Rc<NativeFn>),
    Exception(Rc<Exception>),
}

/// Helper for constructing `Array` values from a plain `Vec`.
pub fn array(v: Vec<Value>) -> Value {
    Value::Array(v.into_iter().collect())
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(true) => write!(f, "#t"),
            Value::Bool(false) => write!(f, "#f"),
            Value::Number(n) => write!(f, "{:?}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Keyword(k) => write!(f, ":{:}", k),
            Value::Var(_) => write!(f, "#<var>"),
            Value::Array(v) => write!(f, "{:?}", v),
            Value::Fn(fun) => write!(f, "#<fn {:}>", fun.display_name()),
            Value::NativeFn(n) => write!(f, "#<native-fn {:}>", n.name),
            Value::Exception(e) => write!(f, "#<exception {:}>", e),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Keyword(a), Value::Keyword(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Var(a), Value::Var(b)) => a.ptr_eq(b),
            (Value::Fn(a), Value::Fn(b)) => Rc::ptr_eq(a, b),
            (Value::NativeFn(a), Value::NativeFn(b)) => Rc::ptr_eq(a, b),
            (Value::Exception(a), Value::Exception(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl Value {
    /// Truthiness is fixed: only `Nil` and `False` are falsey.
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, Value::Exception(_))
    }

    pub fn ensure_number(&self) -> Result<i64> {
        if let Value::Number(n) = self {
            Ok(*n)
        } else {
            Err(format_err!("Type error, expected Number, got {:?}", self))
        }
    }

    pub fn ensure_array(&self) -> Result<Vector<Value>> {
        if let Value::Array(v) = self {
            Ok(v.clone())
        } else {
            Err(format_err!("Type error, expected Array, got {:?}", self))
        }
    }
}
