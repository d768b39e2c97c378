//! Doing the same thing to both sides of an equation.
//!
//! These rules only look at equations with exactly two sides. The change made to the left side
//! must be the same as the change made to the right side, and it must be recognizably the same
//! without any further rewriting: `x = y -> x + 2 = y + 1 + 1` is not accepted.

use crate::arith::{add, get_factors, get_terms, is_negative, is_subtraction, mul};
use step_ast::{Expr, ExprKind};
use super::super::{compare::match_args, step::{Check, Reason, Step}, Checker};

/// Returns the two sides of an equation.
fn sides(expr: &Expr) -> Option<(&Expr, &Expr)> {
    match expr {
        Expr::Eq(args) if args.len() == 2 => Some((&args[0], &args[1])),
        _ => None,
    }
}

fn operands(expr: &Expr, kind: ExprKind) -> &[Expr] {
    match kind {
        ExprKind::Add => get_terms(expr),
        _ => get_factors(expr),
    }
}

/// If `after` has every operand of `before` plus some more, returns the extra operands.
fn extension<'a>(
    checker: &mut Checker,
    before: &Expr,
    after: &'a Expr,
    kind: ExprKind,
) -> Option<(Vec<&'a Expr>, Vec<Reason>)> {
    if after.kind() != kind {
        return None;
    }
    let matching = match_args(checker, operands(before, kind), operands(after, kind));
    if !matching.unmatched_lhs.is_empty() || matching.unmatched_rhs.is_empty() {
        return None;
    }
    Some((matching.unmatched_rhs, matching.reasons))
}

/// If both sides of `after` extend the sides of `before` with the same operands, returns the
/// operands added to the left side.
fn extend_both<'a>(
    checker: &mut Checker,
    before: (&Expr, &Expr),
    after: (&'a Expr, &'a Expr),
    kind: ExprKind,
) -> Option<(Vec<&'a Expr>, Vec<Reason>)> {
    let (lhs, mut reasons) = extension(checker, before.0, after.0, kind)?;
    let (rhs, rhs_reasons) = extension(checker, before.1, after.1, kind)?;

    let combine = |delta: &[&Expr]| {
        let delta = delta.iter().map(|&expr| expr.clone()).collect();
        match kind {
            ExprKind::Add => add(delta),
            _ => mul(delta),
        }
    };
    let same = checker.check(&combine(&lhs[..]), &combine(&rhs[..]));
    if !same.equivalent || !same.reasons.is_empty() {
        return None;
    }

    reasons.extend(rhs_reasons);
    Some((lhs, reasons))
}

/// Returns true if every term is subtracted or negated.
fn all_negative(terms: &[&Expr]) -> bool {
    terms.iter().all(|term| is_subtraction(term) || is_negative(term))
}

fn pass(step: Step, prev: &Expr, next: &Expr, sub_reasons: Vec<Reason>) -> Check {
    let mut reasons = vec![Reason::new(step, prev, next)];
    reasons.extend(sub_reasons);
    Check::pass(reasons)
}

/// `a = b -> a+c = b+c`
/// `a = b -> a-c = b-c`
///
/// Also recognizes the terms being taken away again: removing `+c` from both sides is
/// subtracting, and removing `-c` is adding.
pub fn add_to_both_sides(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let (Some(before), Some(after)) = (sides(prev), sides(next)) else {
        return Check::fail();
    };

    if let Some((delta, reasons)) = extend_both(checker, before, after, ExprKind::Add) {
        let step = if all_negative(&delta) { Step::SubBothSides } else { Step::AddBothSides };
        return pass(step, prev, next, reasons);
    }
    if let Some((delta, reasons)) = extend_both(checker, after, before, ExprKind::Add) {
        let step = if all_negative(&delta) { Step::AddBothSides } else { Step::SubBothSides };
        return pass(step, prev, next, reasons);
    }
    Check::fail()
}

/// `a = b -> a*c = b*c`
///
/// Taking the factors away again is dividing both sides.
pub fn mul_both_sides(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let (Some(before), Some(after)) = (sides(prev), sides(next)) else {
        return Check::fail();
    };

    if let Some((_, reasons)) = extend_both(checker, before, after, ExprKind::Mul) {
        return pass(Step::MulBothSides, prev, next, reasons);
    }
    if let Some((_, reasons)) = extend_both(checker, after, before, ExprKind::Mul) {
        return pass(Step::DivBothSides, prev, next, reasons);
    }
    Check::fail()
}

/// `a = b -> a/c = b/c`
///
/// The numerators must be exactly the old sides. Going back from `a/c = b/c` to `a = b` is
/// multiplying both sides.
pub fn div_both_sides(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let (Some(before), Some(after)) = (sides(prev), sides(next)) else {
        return Check::fail();
    };

    if divided(checker, before, after) {
        return pass(Step::DivBothSides, prev, next, Vec::new());
    }
    if divided(checker, after, before) {
        return pass(Step::MulBothSides, prev, next, Vec::new());
    }
    Check::fail()
}

/// Returns true if each side of `after` is the same side of `before` divided by the same value.
fn divided(checker: &mut Checker, before: (&Expr, &Expr), after: (&Expr, &Expr)) -> bool {
    let (Some((lhs_num, lhs_den)), Some((rhs_num, rhs_den))) = (after.0.as_div(), after.1.as_div()) else {
        return false;
    };
    if lhs_num != before.0 || rhs_num != before.1 {
        return false;
    }
    let same = checker.check(lhs_den, rhs_den);
    same.equivalent && same.reasons.is_empty()
}
