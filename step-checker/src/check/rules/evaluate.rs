//! Evaluating sums and products of numbers.
//!
//! Numeric operands are number literals and negated number literals. Operands that are not
//! numeric must be the same on both sides. Numbers that appear on both sides are left alone;
//! what remains (the numbers that were actually combined) must have the same exact sum or
//! product.

use crate::{arith::{get_factors, get_terms}, number};
use rug::Rational;
use step_ast::{Expr, ExprKind};
use super::super::{compare::match_args, step::{Check, Reason, Step}, Checker};

/// `2+3 = 5`
/// `x+2+3 = x+5`
pub fn evaluate_add(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    evaluate(checker, prev, next, ExprKind::Add, Step::EvaluateAdd)
}

/// `2*3 = 6`
/// `2*3*x = 6x`
pub fn evaluate_mul(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    evaluate(checker, prev, next, ExprKind::Mul, Step::EvaluateMul)
}

/// The operands of a sum or product, split into numbers and everything else.
struct Operands<'a> {
    numbers: Vec<Rational>,
    others: Vec<&'a Expr>,
}

impl<'a> Operands<'a> {
    fn new(expr: &'a Expr, kind: ExprKind) -> Self {
        let args = match kind {
            ExprKind::Add => get_terms(expr),
            _ => get_factors(expr),
        };
        let mut operands = Self { numbers: Vec::new(), others: Vec::new() };
        for arg in args {
            match number::value(arg) {
                Some(value) => operands.numbers.push(value),
                None => operands.others.push(arg),
            }
        }
        operands
    }
}

fn evaluate(checker: &mut Checker, prev: &Expr, next: &Expr, kind: ExprKind, step: Step) -> Check {
    if prev.kind() != kind && next.kind() != kind {
        return Check::fail();
    }

    let lhs = Operands::new(prev, kind);
    let rhs = Operands::new(next, kind);
    if lhs.numbers.is_empty() || rhs.numbers.is_empty() {
        return Check::fail();
    }

    // numbers present on both sides were not touched
    let mut untouched = rhs.numbers;
    let mut combined = Vec::new();
    for value in lhs.numbers {
        match untouched.iter().position(|other| *other == value) {
            Some(i) => {
                untouched.remove(i);
            },
            None => combined.push(value),
        }
    }
    let results = untouched;
    if combined.is_empty() || results.is_empty() {
        return Check::fail();
    }
    if combined.len() > 1 && results.len() > 1 {
        return Check::fail();
    }

    let equal = match kind {
        ExprKind::Add => number::sum(&combined) == number::sum(&results),
        _ => number::product(&combined) == number::product(&results),
    };
    if !equal {
        return Check::fail();
    }

    let others = match_args(checker, lhs.others, rhs.others);
    if !others.is_bijection() {
        return Check::fail();
    }

    let mut reasons = vec![Reason::new(step, prev, next)];
    reasons.extend(others.reasons);
    Check::pass(reasons)
}
