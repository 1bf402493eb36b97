//! Continuation frames: each variant is "what to do with the value that
//! was just produced". `InterpretK` is the odd one out, it carries no
//! pending computation of its own and just means "interpret this AST
//! next", so `resume` dispatches straight to [`Ast::step`] and ignores
//! the value it was handed.

use std::rc::Rc;

use crate::ast::Ast;
use crate::closure::apply;
use crate::env::Env;
use crate::errtype::Exception;
use crate::intern::NameId;
use crate::meta::Meta;
use crate::stack::Stack;
use crate::value::Value;

#[derive(Debug, Clone)]
pub enum Continuation {
    /// Not a "resume" in the usual sense: evaluate `ast` in `env` next.
    InterpretK {
        ast: Rc<Ast>,
        env: Env,
    },
    /// Resolving the callee and arguments of an application, one at a
    /// time, left to right, accumulating results as `Value::Array` so the
    /// final vector can travel as a single value to the call frame below.
    ResolveAllK {
        args: Vec<Rc<Ast>>,
        env: Env,
        acc: Vec<Value>,
    },
    InvokeK {
        ast: Rc<Ast>,
    },
    TailCallK {
        ast: Rc<Ast>,
    },
    IfK {
        then: Rc<Ast>,
        els: Rc<Ast>,
        env: Env,
    },
    LetK {
        names: Vec<NameId>,
        bindings: Vec<Rc<Ast>>,
        body: Rc<Ast>,
        idx: usize,
        env: Env,
    },
    DoK {
        bodies: Vec<Rc<Ast>>,
        idx: usize,
        env: Env,
    },
}

impl Continuation {
    pub fn resume(self, val: Value, stack: Stack) -> (Value, Stack) {
        match self {
            Continuation::InterpretK { ast, env } => ast.step(Value::Nil, &env, stack),

            Continuation::ResolveAllK { args, env, mut acc } => {
                acc.push(val);
                if acc.len() == args.len() {
                    (Value::Array(acc.into_iter().collect()), stack)
                } else {
                    let next = acc.len();
                    let stack = stack.push(Continuation::ResolveAllK { args: args.clone(), env: env.clone(), acc });
                    let stack = stack.push(Continuation::InterpretK {
                        ast: Rc::clone(&args[next]),
                        env,
                    });
                    (Value::Nil, stack)
                }
            }

            Continuation::InvokeK { ast } | Continuation::TailCallK { ast } => dispatch_call(val, ast.meta().clone(), stack),

            Continuation::IfK { then, els, env } => {
                let branch = if val.truthy() { then } else { els };
                branch.step(Value::Nil, &env, stack)
            }

            Continuation::LetK {
                names,
                bindings,
                body,
                idx,
                env,
            } => {
                let env = env.extend(names[idx], val);
                let next = idx + 1;
                if next < names.len() {
                    let stack = stack.push(Continuation::LetK {
                        names,
                        bindings: bindings.clone(),
                        body,
                        idx: next,
                        env: env.clone(),
                    });
                    let stack = stack.push(Continuation::InterpretK {
                        ast: Rc::clone(&bindings[next]),
                        env,
                    });
                    (Value::Nil, stack)
                } else {
                    body.step(Value::Nil, &env, stack)
                }
            }

            Continuation::DoK { bodies, idx, env } => {
                let next = idx + 1;
                let stack = if next < bodies.len() {
                    stack.push(Continuation::DoK {
                        bodies: bodies.clone(),
                        idx: next,
                        env: env.clone(),
                    })
                } else {
                    stack
                };
                let stack = stack.push(Continuation::InterpretK {
                    ast: Rc::clone(&bodies[idx]),
                    env,
                });
                (Value::Nil, stack)
            }
        }
    }
}

/// Unpacks the `Value::Array` of resolved `[callee, arg0, arg1, ...]` that
/// `ResolveAllK` hands up and dispatches the call.
fn dispatch_call(resolved: Value, loc: Option<Meta>, stack: Stack) -> (Value, Stack) {
    let resolved = match resolved.ensure_array() {
        Ok(v) => v,
        Err(_) => return (Value::Exception(Rc::new(Exception::native_error("malformed call frame", loc))), stack),
    };

    let f = resolved[0].clone();
    let args: Vec<Value> = resolved.iter().skip(1).cloned().collect();
    apply(&f, &args, loc, stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Ast;

    #[test]
    fn if_k_picks_then_branch_on_truthy() {
        let k = Continuation::IfK {
            then: Ast::const_(Value::Number(1)),
            els: Ast::const_(Value::Number(2)),
            env: Env::empty(),
        };
        let (v, stack) = k.resume(Value::Bool(true), Stack::empty());
        assert_eq!(v, Value::Nil);
        let (next, _) = stack.pop().unwrap().0.resume(Value::Nil, Stack::empty());
        assert_eq!(next, Value::Number(1));
    }

    #[test]
    fn do_k_last_body_pushes_no_further_do_k() {
        let bodies = vec![Ast::const_(Value::Number(1)), Ast::const_(Value::Number(2))];
        let k = Continuation::DoK {
            bodies,
            idx: 1,
            env: Env::empty(),
        };
        let (_, stack) = k.resume(Value::Nil, Stack::empty());
        let (frame, rest) = stack.pop().unwrap();
        assert!(matches!(frame, Continuation::InterpretK { .. }));
        assert!(rest.is_empty());
    }
}
