//! Identity elements, and the absorbing zero of multiplication.

use crate::{arith::{add, mul}, consts::{ONE, ZERO}};
use step_ast::{Expr, ExprKind};
use super::super::{step::{Check, Reason, Step}, Checker};

/// `a+0 = a`
/// `0+a = a`
pub fn add_zero(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    remove_identity(checker, prev, next, ExprKind::Add, &ZERO, Step::AddZero)
}

/// `a*1 = a`
/// `1*a = a`
pub fn mul_one(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    remove_identity(checker, prev, next, ExprKind::Mul, &ONE, Step::MulOne)
}

/// Drops every operand of `prev` that is equivalent to `identity`, and checks the remainder
/// against `next`.
fn remove_identity(
    checker: &mut Checker,
    prev: &Expr,
    next: &Expr,
    kind: ExprKind,
    identity: &Expr,
    step: Step,
) -> Check {
    if prev.kind() != kind {
        return Check::fail();
    }

    let mut reasons = Vec::new();
    let mut kept = Vec::new();
    for arg in prev.args() {
        let result = checker.check(arg, identity);
        if result.equivalent {
            reasons.extend(result.reasons);
        } else {
            kept.push(arg.clone());
        }
    }
    if kept.len() == prev.args().len() {
        return Check::fail();
    }

    let rest = match kind {
        ExprKind::Add => add(kept),
        _ => mul(kept),
    };
    let result = checker.check(&rest, next);
    if !result.equivalent {
        return Check::fail();
    }

    reasons.push(Reason::new(step, prev, next));
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

/// `a*0 = 0`
pub fn mul_by_zero(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Expr::Mul { args, .. } = prev else {
        return Check::fail();
    };

    let Some(zero) = args.iter()
        .map(|arg| checker.check(arg, &ZERO))
        .find(|result| result.equivalent)
    else {
        return Check::fail();
    };
    let result = checker.check(&ZERO, next);
    if !result.equivalent {
        return Check::fail();
    }

    let mut reasons = zero.reasons;
    reasons.push(Reason::new(Step::MulZero, prev, next));
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

#[cfg(test)]
mod tests {
    use crate::check::Options;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::ident("x")
    }

    #[test]
    fn drops_zero_terms() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Add(vec![x(), Expr::number("0"), Expr::ident("y")]);
        let next = Expr::Add(vec![x(), Expr::ident("y")]);

        let result = add_zero(&mut checker, &prev, &next);
        assert_eq!(result.messages(), vec!["addition with identity"]);
        assert_eq!(result.reasons[0].nodes, [prev, next]);
    }

    #[test]
    fn zero_written_as_decimal() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Mul { args: vec![Expr::number("1.0"), x()], implicit: false };

        let result = mul_one(&mut checker, &prev, &x());
        assert_eq!(result.messages(), vec!["multiplication with identity"]);
    }

    #[test]
    fn nothing_to_drop() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Add(vec![x(), Expr::ident("y")]);
        assert_eq!(add_zero(&mut checker, &prev, &x()), Check::fail());
        assert_eq!(mul_one(&mut checker, &prev, &x()), Check::fail());
    }

    #[test]
    fn anything_times_zero() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Mul {
            args: vec![x(), Expr::Add(vec![Expr::ident("y"), Expr::number("2")]), Expr::number("0")],
            implicit: true,
        };

        let result = mul_by_zero(&mut checker, &prev, &Expr::number("0"));
        assert_eq!(result.messages(), vec!["multiplication by zero"]);
        assert_eq!(mul_by_zero(&mut checker, &prev, &x()), Check::fail());
    }
}
