//! Environment chain.
//!
//! A singly-linked, immutable chain of `(name, value)` frames. Extension
//! always conses a new frame onto the existing head; multiple closures may
//! share the same tail. Lookup walks head-to-tail comparing `NameId`s by
//! identity (plain integer equality; interning already did the work of
//! making that meaningful).

use std::fmt;
use std::rc::Rc;

use crate::intern::NameId;
use crate::value::Value;

struct Frame {
    name: NameId,
    value: Value,
    next: Env,
}

/// An environment: either empty, or a frame consed onto a (possibly shared)
/// tail.
#[derive(Clone)]
pub struct Env(Option<Rc<Frame>>);

impl Env {
    pub fn empty() -> Env {
        Env(None)
    }

    /// Cons a new frame onto this environment. `self` is left untouched;
    /// environments are immutable once linked.
    pub fn extend(&self, name: NameId, value: Value) -> Env {
        Env(Some(Rc::new(Frame {
            name,
            value,
            next: self.clone(),
        })))
    }

    /// Walk frames head-to-tail; the first identity match wins. Returns
    /// `Nil` if no frame matches; there is no "unbound variable" error at
    /// this layer.
    pub fn lookup(&self, name: NameId) -> Value {
        let mut cur = self;
        loop {
            match &cur.0 {
                None => return Value::Nil,
                Some(frame) => {
                    if frame.name == name {
                        return frame.value.clone();
                    }
                    cur = &frame.next;
                }
            }
        }
    }
}

impl Default for Env {
    fn default() -> Env {
        Env::empty()
    }
}

impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Env {{..}}")
    }
}
