//! A continuation-passing-style tree-walking interpreter core for a small
//! Lisp-family dynamic language.
//!
//! The crate is deliberately narrow: it owns the value universe, the
//! environment chain, the lowered AST node set, the continuation stack,
//! the closure/application protocol, and the outer driver loop
//! (`evaluate`). Reading source text into an `Ast`, compiling surface
//! forms into the lowered node set, a standard library, and a REPL or CLI
//! front end are all somebody else's problem; this crate hands back a
//! `Value` given an already-built `Ast`, and nothing more.
//!
//! ```ignore
//! let program = Ast::invoke(vec![plus_fn, Ast::const_(Value::Number(1)), Ast::const_(Value::Number(2))]);
//! assert_eq!(driver::evaluate(program), Value::Number(3));
//! ```

#[macro_use]
extern crate failure;

pub mod ast;
pub mod closure;
pub mod continuation;
pub mod driver;
pub mod env;
pub mod errors;
pub mod errtype;
pub mod intern;
pub mod meta;
pub mod native;
pub mod stack;
pub mod value;

pub use ast::Ast;
pub use driver::evaluate;
pub use env::Env;
pub use errtype::{Exception, ExceptionKind};
pub use intern::{Interner, NameId};
pub use value::Value;
