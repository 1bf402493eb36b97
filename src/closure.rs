//! Closure / application protocol.

use std::rc::Rc;

use crate::ast::Ast;
use crate::env::Env;
use crate::errtype::Exception;
use crate::intern::NameId;
use crate::meta::Meta;
use crate::stack::Stack;
use crate::value::Value;

/// A user-defined function: bound argument names over a captured closure
/// environment and a body to interpret. Does *not* store a self-binding;
/// see `call_env` for where the self-frame gets spliced in instead.
#[derive(Debug)]
pub struct InterpretedFn {
    pub name: Option<NameId>,
    pub arg_names: Vec<NameId>,
    pub captured_env: Env,
    pub body: Rc<Ast>,
}

impl InterpretedFn {
    pub fn new(name: Option<NameId>, arg_names: Vec<NameId>, captured_env: Env, body: Rc<Ast>) -> InterpretedFn {
        InterpretedFn {
            name,
            arg_names,
            captured_env,
            body,
        }
    }

    pub fn arity(&self) -> usize {
        self.arg_names.len()
    }

    pub fn display_name(&self) -> &'static str {
        if self.name.is_some() {
            "named"
        } else {
            "anonymous"
        }
    }

    /// Build the environment a call to this closure runs its body in:
    /// `captured_env`, then (if named) a self-reference frame, then one
    /// frame per argument in order, so later parameters shadow earlier
    /// ones sharing a name, matching usual scoping.
    pub fn call_env(self: &Rc<InterpretedFn>, args: &[crate::value::Value]) -> Env {
        let mut env = self.captured_env.clone();

        if let Some(name) = self.name {
            env = env.extend(name, crate::value::Value::Fn(Rc::clone(self)));
        }

        for (arg_name, arg_val) in self.arg_names.iter().zip(args.iter()) {
            env = env.extend(*arg_name, arg_val.clone());
        }

        env
    }
}

/// Dispatch a call to `f` with already-resolved `args`: pushes the
/// callee's body onto `stack` for an `InterpretedFn`, or runs a
/// `NativeFn` synchronously and returns its value immediately. Anything
/// else produces a `NotCallable` exception instead of panicking.
pub fn apply(f: &Value, args: &[Value], loc: Option<Meta>, stack: Stack) -> (Value, Stack) {
    match f {
        Value::Fn(fun) => {
            if args.len() != fun.arity() {
                let exc = Exception::arity_mismatch(fun.arity(), args.len(), loc);
                return (Value::Exception(Rc::new(exc)), stack);
            }

            let env = fun.call_env(args);
            let stack = stack.push(crate::continuation::Continuation::InterpretK {
                ast: Rc::clone(&fun.body),
                env,
            });
            (Value::Nil, stack)
        }

        Value::NativeFn(nf) => {
            if args.len() != nf.arity {
                let exc = Exception::arity_mismatch(nf.arity, args.len(), loc);
                return (Value::Exception(Rc::new(exc)), stack);
            }

            match nf.invoke(args) {
                Ok(v) => (v, stack),
                Err(e) => (Value::Exception(Rc::new(Exception::native_error(e.to_string(), loc))), stack),
            }
        }

        other => (Value::Exception(Rc::new(Exception::not_callable(other, loc))), stack),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errtype::ExceptionKind;
    use crate::native::NativeFn;

    #[test]
    fn apply_non_callable_is_not_callable_exception() {
        let (v, _) = apply(&Value::Number(1), &[], None, Stack::empty());
        match v {
            Value::Exception(e) => assert_eq!(e.kind, ExceptionKind::NotCallable),
            _ => panic!("expected exception"),
        }
    }

    #[test]
    fn apply_native_fn_wrong_arity_is_arity_mismatch() {
        let nf = Rc::new(NativeFn::a1("id", |a| Ok(a.clone())));
        let (v, _) = apply(&Value::NativeFn(nf), &[], None, Stack::empty());
        match v {
            Value::Exception(e) => assert_eq!(e.kind, ExceptionKind::ArityMismatch),
            _ => panic!("expected exception"),
        }
    }

    #[test]
    fn apply_native_fn_runs_synchronously() {
        let nf = Rc::new(NativeFn::a1("id", |a| Ok(a.clone())));
        let (v, stack) = apply(&Value::NativeFn(nf), &[Value::Number(9)], None, Stack::empty());
        assert_eq!(v, Value::Number(9));
        assert!(stack.is_empty());
    }

    #[test]
    fn apply_interpreted_fn_pushes_body_frame() {
        let fun = Rc::new(InterpretedFn::new(None, vec![], Env::empty(), Ast::const_(Value::Number(1))));
        let (v, stack) = apply(&Value::Fn(fun), &[], None, Stack::empty());
        assert_eq!(v, Value::Nil);
        assert!(!stack.is_empty());
    }
}
