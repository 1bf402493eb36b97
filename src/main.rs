extern crate clap;
extern crate ironic_space_lisp;

use clap::{App, Arg};

use ironic_space_lisp::ast::Ast;
use ironic_space_lisp::driver::evaluate;
use ironic_space_lisp::intern::Interner;
use ironic_space_lisp::native::NativeFn;
use ironic_space_lisp::value::Value;

/// Demo entry point. There is no reader here, this crate takes an
/// already-built `Ast`, not source text, so the "program" run is a
/// small hardcoded factorial, with `--n` controlling its input.
fn main() {
    let matches = App::new("ironic-space-lisp")
        .about("runs a hardcoded factorial program through the interpreter core")
        .arg(Arg::with_name("n").long("n").takes_value(true).default_value("10"))
        .get_matches();

    let n: i64 = matches.value_of("n").unwrap().parse().expect("n must be an integer");

    let mut interner = Interner::new();
    let fact = interner.intern("fact");
    let arg = interner.intern("n");

    let minus = Ast::const_(Value::NativeFn(std::rc::Rc::new(NativeFn::a2("-", |a, b| {
        Ok(Value::Number(a.ensure_number()? - b.ensure_number()?))
    }))));
    let times = Ast::const_(Value::NativeFn(std::rc::Rc::new(NativeFn::a2("*", |a, b| {
        Ok(Value::Number(a.ensure_number()? * b.ensure_number()?))
    }))));
    let zero_pred = Ast::const_(Value::NativeFn(std::rc::Rc::new(NativeFn::a1("zero?", |a| {
        Ok(Value::Bool(a.ensure_number()? == 0))
    }))));

    // (fn fact (n) (if (zero? n) 1 (* n (fact (- n 1)))))
    let body = Ast::if_(
        Ast::invoke(vec![zero_pred, Ast::lookup(arg)]),
        Ast::const_(Value::Number(1)),
        Ast::invoke(vec![
            times,
            Ast::lookup(arg),
            Ast::invoke(vec![Ast::lookup(fact), Ast::invoke(vec![minus, Ast::lookup(arg), Ast::const_(Value::Number(1))])]),
        ]),
    );

    let fact_fn = Ast::fn_(Some(fact), vec![arg], body, vec![]);
    let program = Ast::invoke(vec![fact_fn, Ast::const_(Value::Number(n))]);

    println!("{:?}", evaluate(program));
}
