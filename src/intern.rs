//! Name interning.
//!
//! Environment lookup needs to compare names by identity, not by
//! string equality. An `Interner` hands out a `NameId`, a small integer,
//! for each distinct string the (out-of-scope) compiler or reader feeds it;
//! two `NameId`s compare equal exactly when they came from the same
//! `intern` call on equal strings, and the comparison itself is a plain
//! integer compare rather than a string compare.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// An interned name token. Cheap to copy, cheap to compare.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct NameId(u32);

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:}", self.0)
    }
}

/// Owns the mapping from source-level names to `NameId`s, and back again
/// for diagnostics.
#[derive(Default)]
pub struct Interner {
    ids: HashMap<Rc<str>, NameId>,
    names: Vec<Rc<str>>,
}

impl Interner {
    pub fn new() -> Interner {
        Interner {
            ids: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Intern `s`, returning the same `NameId` for every prior call with an
    /// equal string.
    pub fn intern(&mut self, s: &str) -> NameId {
        if let Some(id) = self.ids.get(s) {
            return *id;
        }

        let rc: Rc<str> = Rc::from(s);
        let id = NameId(self.names.len() as u32);
        self.names.push(Rc::clone(&rc));
        self.ids.insert(rc, id);
        id
    }

    /// Recover the source text of a previously interned name, for
    /// diagnostics only.
    pub fn resolve(&self, id: NameId) -> &str {
        &self.names[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_same_id() {
        let mut i = Interner::new();
        let a = i.intern("foo");
        let b = i.intern("foo");
        assert_eq!(a, b);
    }

    #[test]
    fn different_strings_different_ids() {
        let mut i = Interner::new();
        let a = i.intern("foo");
        let b = i.intern("bar");
        assert_ne!(a, b);
    }

    #[test]
    fn resolve_roundtrip() {
        let mut i = Interner::new();
        let a = i.intern("hello");
        assert_eq!(i.resolve(a), "hello");
    }
}
