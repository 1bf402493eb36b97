//! AST node set.
//!
//! Each node is immutable once built and exposes one operation, `step`,
//! which performs one reduction and returns a next value together with an
//! updated continuation stack. Nodes never recurse into child nodes
//! themselves; recursion through the program being interpreted happens
//! entirely via the stack the driver loop (`driver::evaluate`) consumes.

use std::rc::Rc;

use crate::closure::InterpretedFn;
use crate::continuation::Continuation;
use crate::env::Env;
use crate::intern::NameId;
use crate::meta::Meta;
use crate::stack::Stack;
use crate::value::{Value, Var};

#[derive(Debug)]
pub enum Ast {
    Const {
        val: Value,
        meta: Option<Meta>,
    },
    Lookup {
        name: NameId,
        meta: Option<Meta>,
    },
    VarDeref {
        var: Var,
        meta: Option<Meta>,
    },
    If {
        test: Rc<Ast>,
        then: Rc<Ast>,
        els: Rc<Ast>,
        meta: Option<Meta>,
    },
    Do {
        bodies: Vec<Rc<Ast>>,
        meta: Option<Meta>,
    },
    Let {
        names: Vec<NameId>,
        bindings: Vec<Rc<Ast>>,
        body: Rc<Ast>,
        meta: Option<Meta>,
    },
    Fn {
        name: Option<NameId>,
        arg_names: Vec<NameId>,
        body: Rc<Ast>,
        closed_over_names: Vec<NameId>,
        meta: Option<Meta>,
    },
    Invoke {
        args: Vec<Rc<Ast>>,
        meta: Option<Meta>,
    },
    TailCall {
        args: Vec<Rc<Ast>>,
        meta: Option<Meta>,
    },
}

impl Ast {
    pub fn const_(val: Value) -> Rc<Ast> {
        Rc::new(Ast::Const { val, meta: None })
    }

    pub fn lookup(name: NameId) -> Rc<Ast> {
        Rc::new(Ast::Lookup { name, meta: None })
    }

    pub fn var_deref(var: Var) -> Rc<Ast> {
        Rc::new(Ast::VarDeref { var, meta: None })
    }

    pub fn if_(test: Rc<Ast>, then: Rc<Ast>, els: Rc<Ast>) -> Rc<Ast> {
        Rc::new(Ast::If { test, then, els, meta: None })
    }

    /// `bodies` must be non-empty; the compiler is expected to have
    /// enforced this.
    pub fn do_(bodies: Vec<Rc<Ast>>) -> Rc<Ast> {
        debug_assert!(!bodies.is_empty(), "Do requires at least one body");
        Rc::new(Ast::Do { bodies, meta: None })
    }

    /// `names.len() == bindings.len() >= 1`.
    pub fn let_(names: Vec<NameId>, bindings: Vec<Rc<Ast>>, body: Rc<Ast>) -> Rc<Ast> {
        debug_assert_eq!(names.len(), bindings.len(), "Let requires matching names/bindings");
        debug_assert!(!names.is_empty(), "Let requires at least one binding");
        Rc::new(Ast::Let {
            names,
            bindings,
            body,
            meta: None,
        })
    }

    pub fn fn_(
        name: Option<NameId>,
        arg_names: Vec<NameId>,
        body: Rc<Ast>,
        closed_over_names: Vec<NameId>,
    ) -> Rc<Ast> {
        Rc::new(Ast::Fn {
            name,
            arg_names,
            body,
            closed_over_names,
            meta: None,
        })
    }

    /// `args[0]` is the callee expression, `args[1..]` the arguments.
    /// `args` must be non-empty.
    pub fn invoke(args: Vec<Rc<Ast>>) -> Rc<Ast> {
        debug_assert!(!args.is_empty(), "Invoke requires a callee");
        Rc::new(Ast::Invoke { args, meta: None })
    }

    pub fn tail_call(args: Vec<Rc<Ast>>) -> Rc<Ast> {
        debug_assert!(!args.is_empty(), "TailCall requires a callee");
        Rc::new(Ast::TailCall { args, meta: None })
    }

    pub fn meta(&self) -> &Option<Meta> {
        match self {
            Ast::Const { meta, .. }
            | Ast::Lookup { meta, .. }
            | Ast::VarDeref { meta, .. }
            | Ast::If { meta, .. }
            | Ast::Do { meta, .. }
            | Ast::Let { meta, .. }
            | Ast::Fn { meta, .. }
            | Ast::Invoke { meta, .. }
            | Ast::TailCall { meta, .. } => meta,
        }
    }

    pub fn short_location(&self) -> String {
        crate::meta::short_location(self.meta())
    }

    /// Perform one step of reduction. `value_in` is the value produced by
    /// whatever ran before; every node here ignores it, it only matters
    /// to the continuations pushed below.
    pub fn step(self: &Rc<Ast>, _value_in: Value, env: &Env, stack: Stack) -> (Value, Stack) {
        match &**self {
            Ast::Const { val, .. } => (val.clone(), stack),

            Ast::Lookup { name, .. } => (env.lookup(*name), stack),

            Ast::VarDeref { var, .. } => (var.root_get(), stack),

            Ast::If { test, then, els, .. } => {
                let stack = stack.push(Continuation::IfK {
                    then: Rc::clone(then),
                    els: Rc::clone(els),
                    env: env.clone(),
                });
                let stack = stack.push(Continuation::InterpretK {
                    ast: Rc::clone(test),
                    env: env.clone(),
                });
                (Value::Nil, stack)
            }

            Ast::Do { bodies, .. } => {
                let stack = stack.push(Continuation::DoK {
                    bodies: bodies.clone(),
                    idx: 0,
                    env: env.clone(),
                });
                (Value::Nil, stack)
            }

            Ast::Let { names, bindings, body, .. } => {
                let stack = stack.push(Continuation::LetK {
                    names: names.clone(),
                    bindings: bindings.clone(),
                    body: Rc::clone(body),
                    idx: 0,
                    env: env.clone(),
                });
                let stack = stack.push(Continuation::InterpretK {
                    ast: Rc::clone(&bindings[0]),
                    env: env.clone(),
                });
                (Value::Nil, stack)
            }

            Ast::Fn {
                name,
                arg_names,
                body,
                closed_over_names,
                ..
            } => {
                let mut captured = Env::empty();
                for n in closed_over_names {
                    captured = captured.extend(*n, env.lookup(*n));
                }

                let fun = InterpretedFn::new(*name, arg_names.clone(), captured, Rc::clone(body));
                (Value::Fn(Rc::new(fun)), stack)
            }

            Ast::Invoke { args, .. } => step_application(args, env, stack, self, false),

            Ast::TailCall { args, .. } => step_application(args, env, stack, self, true),
        }
    }
}

fn step_application(args: &[Rc<Ast>], env: &Env, stack: Stack, ast: &Rc<Ast>, tail: bool) -> (Value, Stack) {
    let call_frame = if tail {
        Continuation::TailCallK { ast: Rc::clone(ast) }
    } else {
        Continuation::InvokeK { ast: Rc::clone(ast) }
    };

    let stack = stack.push(call_frame);
    let stack = stack.push(Continuation::ResolveAllK {
        args: args.to_vec(),
        env: env.clone(),
        acc: Vec::new(),
    });
    let stack = stack.push(Continuation::InterpretK {
        ast: Rc::clone(&args[0]),
        env: env.clone(),
    });

    (Value::Nil, stack)
}
