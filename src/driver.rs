//! The outer driver loop: the only place in the crate that actually
//! loops. Everything else is one `step` or one `resume` away from
//! returning control here.

use std::rc::Rc;

use crate::ast::Ast;
use crate::env::Env;
use crate::stack::Stack;
use crate::value::Value;

/// Runs `root` to completion and returns its value. Logical recursion
/// depth shows up as growth of `stack`, not the Rust call stack; once the
/// current value becomes an `Exception`, remaining continuations are
/// popped and discarded rather than resumed, and the exception stays the
/// final value once the stack drains.
pub fn evaluate(root: Rc<Ast>) -> Value {
    let env = Env::empty();
    let (mut value, mut stack) = root.step(Value::Nil, &env, Stack::empty());

    loop {
        if value.is_exception() {
            loop {
                match stack.pop() {
                    Some((_, rest)) => stack = rest,
                    None => return value,
                }
            }
        }

        match stack.pop() {
            None => return value,
            Some((frame, rest)) => {
                let (next_value, next_stack) = frame.resume(value, rest);
                value = next_value;
                stack = next_stack;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::Interner;
    use crate::native::NativeFn;

    #[test]
    fn constant_program_evaluates_to_itself() {
        assert_eq!(evaluate(Ast::const_(Value::Number(42))), Value::Number(42));
    }

    #[test]
    fn self_recursive_factorial() {
        let mut i = Interner::new();
        let fact = i.intern("fact");
        let n = i.intern("n");

        let minus = Ast::const_(Value::NativeFn(Rc::new(NativeFn::a2("-", |a, b| {
            Ok(Value::Number(a.ensure_number()? - b.ensure_number()?))
        }))));
        let times = Ast::const_(Value::NativeFn(Rc::new(NativeFn::a2("*", |a, b| {
            Ok(Value::Number(a.ensure_number()? * b.ensure_number()?))
        }))));
        let zero_pred = Ast::const_(Value::NativeFn(Rc::new(NativeFn::a1("zero?", |a| {
            Ok(Value::Bool(a.ensure_number()? == 0))
        }))));

        // (fn fact (n) (if (zero? n) 1 (* n (fact (- n 1)))))
        let body = Ast::if_(
            Ast::invoke(vec![zero_pred, Ast::lookup(n)]),
            Ast::const_(Value::Number(1)),
            Ast::invoke(vec![
                times,
                Ast::lookup(n),
                Ast::invoke(vec![
                    Ast::lookup(fact),
                    Ast::invoke(vec![minus, Ast::lookup(n), Ast::const_(Value::Number(1))]),
                ]),
            ]),
        );

        let fn_ast = Ast::fn_(Some(fact), vec![n], body, vec![]);
        let program = Ast::invoke(vec![fn_ast, Ast::const_(Value::Number(5))]);

        assert_eq!(evaluate(program), Value::Number(120));
    }

    #[test]
    fn deep_tail_recursion_does_not_overflow_the_host_stack() {
        let mut i = Interner::new();
        let loop_name = i.intern("loop");
        let n = i.intern("n");

        let minus = Ast::const_(Value::NativeFn(Rc::new(NativeFn::a2("-", |a, b| {
            Ok(Value::Number(a.ensure_number()? - b.ensure_number()?))
        }))));
        let zero_pred = Ast::const_(Value::NativeFn(Rc::new(NativeFn::a1("zero?", |a| {
            Ok(Value::Bool(a.ensure_number()? == 0))
        }))));

        // (fn loop (n) (if (zero? n) n (loop (- n 1))))
        let body = Ast::if_(
            Ast::invoke(vec![zero_pred, Ast::lookup(n)]),
            Ast::lookup(n),
            Ast::tail_call(vec![
                Ast::lookup(loop_name),
                Ast::invoke(vec![minus, Ast::lookup(n), Ast::const_(Value::Number(1))]),
            ]),
        );

        let fn_ast = Ast::fn_(Some(loop_name), vec![n], body, vec![]);
        let program = Ast::invoke(vec![fn_ast, Ast::const_(Value::Number(1_000_000))]);

        assert_eq!(evaluate(program), Value::Number(0));
    }

    #[test]
    fn applying_a_non_callable_raises_not_callable() {
        let program = Ast::invoke(vec![Ast::const_(Value::Nil), Ast::const_(Value::Number(1))]);
        assert!(evaluate(program).is_exception());
    }

    #[test]
    fn wrong_arity_native_call_raises_arity_mismatch() {
        let plus = Ast::const_(Value::NativeFn(Rc::new(NativeFn::a2("+", |a, b| {
            Ok(Value::Number(a.ensure_number()? + b.ensure_number()?))
        }))));
        let program = Ast::invoke(vec![plus, Ast::const_(Value::Number(1))]);
        assert!(evaluate(program).is_exception());
    }

    #[test]
    fn a_raised_value_propagates_as_an_exception() {
        let raise = Ast::const_(Value::NativeFn(Rc::new(NativeFn::a1("raise", |payload| {
            Ok(Value::Exception(Rc::new(crate::errtype::Exception::user(payload.clone(), None))))
        }))));
        let program = Ast::invoke(vec![raise, Ast::const_(Value::Number(13))]);

        match evaluate(program) {
            Value::Exception(e) => assert_eq!(e.payload, Some(Value::Number(13))),
            other => panic!("expected exception, got {:?}", other),
        }
    }
}
