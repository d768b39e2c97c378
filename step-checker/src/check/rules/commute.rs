//! Reordering operands.

use step_ast::{Expr, ExprKind};
use super::super::{compare::match_args, step::{Check, Reason, Step}, Checker};

/// `a = b` is `b = a`
pub fn symmetric_property(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    reorder(checker, prev, next, ExprKind::Eq, Step::Symmetric)
}

/// `a+b = b+a`
pub fn commute_addition(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    reorder(checker, prev, next, ExprKind::Add, Step::Commutative)
}

/// `a*b = b*a`
pub fn commute_multiplication(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    reorder(checker, prev, next, ExprKind::Mul, Step::Commutative)
}

/// Succeeds if the operands of `next` are those of `prev` in a different order. If they already
/// line up position by position, nothing was reordered and the rule does not apply.
fn reorder(checker: &mut Checker, prev: &Expr, next: &Expr, kind: ExprKind, step: Step) -> Check {
    if prev.kind() != kind || next.kind() != kind {
        return Check::fail();
    }
    let (lhs, rhs) = (prev.args(), next.args());
    if lhs.len() != rhs.len() {
        return Check::fail();
    }

    let in_place = lhs.iter()
        .zip(rhs)
        .all(|(a, b)| checker.check(a, b).equivalent);
    if in_place {
        return Check::fail();
    }

    let matching = match_args(checker, lhs, rhs);
    if !matching.is_bijection() {
        return Check::fail();
    }

    let mut reasons = vec![Reason::new(step, prev, next)];
    reasons.extend(matching.reasons);
    Check::pass(reasons)
}

#[cfg(test)]
mod tests {
    use crate::check::Options;
    use pretty_assertions::assert_eq;
    use super::*;

    fn idents(names: &[&str]) -> Vec<Expr> {
        names.iter().map(|name| Expr::ident(*name)).collect()
    }

    #[test]
    fn reordered_sum() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Add(idents(&["a", "b", "c"]));
        let next = Expr::Add(idents(&["c", "a", "b"]));

        let result = commute_addition(&mut checker, &prev, &next);
        assert_eq!(result.messages(), vec!["commutative property"]);
    }

    #[test]
    fn swapped_equation() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Eq(idents(&["x", "y"]));
        let next = Expr::Eq(idents(&["y", "x"]));

        let result = symmetric_property(&mut checker, &prev, &next);
        assert_eq!(result.messages(), vec!["symmetric property"]);
    }

    #[test]
    fn same_order_is_not_a_reordering() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Mul { args: idents(&["a", "b"]), implicit: true };
        assert_eq!(commute_multiplication(&mut checker, &prev, &prev), Check::fail());
    }

    #[test]
    fn different_operands() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::Add(idents(&["a", "b"]));
        let next = Expr::Add(idents(&["b", "c"]));
        assert_eq!(commute_addition(&mut checker, &prev, &next), Check::fail());
    }
}
