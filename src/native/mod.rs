//! Native function registry.
//!
//! A `NativeFn` is a plain Rust closure over `&[Value]`, installed into the
//! global `Env` under an interned name and invoked directly by
//! [`crate::closure::apply`]. There is no bytecode chunk or address to
//! index into here, just a name-to-callable table a host can populate.

pub mod list;
pub mod math;
pub mod util;

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::env::Env;
use crate::errors::*;
use crate::intern::Interner;
use crate::value::Value;

pub type NativeImpl = Rc<dyn Fn(&[Value]) -> Result<Value>>;

/// A host-provided callable. Executes synchronously in one step;
/// native functions that need to re-enter the interpreter do so by pushing
/// continuations rather than recursing through Rust.
pub struct NativeFn {
    pub name: Rc<str>,
    pub arity: usize,
    func: NativeImpl,
}

impl NativeFn {
    pub fn new(name: &str, arity: usize, func: impl Fn(&[Value]) -> Result<Value> + 'static) -> NativeFn {
        NativeFn {
            name: Rc::from(name),
            arity,
            func: Rc::new(func),
        }
    }

    /// Build a fixed-arity-1 native function.
    pub fn a1(name: &str, f: impl Fn(&Value) -> Result<Value> + 'static) -> NativeFn {
        NativeFn::new(name, 1, move |args| f(&args[0]))
    }

    /// Build a fixed-arity-2 native function.
    pub fn a2(name: &str, f: impl Fn(&Value, &Value) -> Result<Value> + 'static) -> NativeFn {
        NativeFn::new(name, 2, move |args| f(&args[0], &args[1]))
    }

    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NativeFn({:}/{:})", self.name, self.arity)
    }
}

/// Something that can hand back a batch of named `NativeFn`s.
pub trait NativeFactory {
    fn natives(&self) -> Vec<NativeFn>;
}

/// Owns the set of installed native functions and binds them into an
/// `Env`.
#[derive(Default)]
pub struct NativeRegistry {
    fns: HashMap<String, Rc<NativeFn>>,
}

impl NativeRegistry {
    pub fn new() -> NativeRegistry {
        NativeRegistry::default()
    }

    pub fn ingest(&mut self, factory: &dyn NativeFactory) {
        for f in factory.natives() {
            self.fns.insert(f.name.to_string(), Rc::new(f));
        }
    }

    pub fn get(&self, name: &str) -> Option<Rc<NativeFn>> {
        self.fns.get(name).cloned()
    }

    /// Bind every registered native function into `env` under its interned
    /// name, for the (out-of-scope) compiler to resolve `Lookup`s against.
    pub fn install(&self, env: &Env, interner: &mut Interner) -> Env {
        let mut env = env.clone();
        for (name, f) in &self.fns {
            let id = interner.intern(name);
            env = env.extend(id, Value::NativeFn(Rc::clone(f)));
        }
        env
    }
}
