//! Negation, subtraction and additive inverses.

use crate::{arith::{add, mul}, number};
use step_ast::Expr;
use super::super::{step::{Check, Reason, Step}, Checker};

/// `a + -a = 0`
/// `a - a + b = b`
///
/// Only the first pair of opposite terms is removed; the remaining sum is checked against `next`.
pub fn add_inverse(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Expr::Add(terms) = prev else {
        return Check::fail();
    };

    for i in 0..terms.len() {
        for j in i + 1..terms.len() {
            let Some(mut reasons) = opposites(checker, &terms[i], &terms[j]) else {
                continue;
            };

            let rest = terms.iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, term)| term.clone())
                .collect();
            let result = checker.check(&add(rest), next);
            if !result.equivalent {
                return Check::fail();
            }

            reasons.push(Reason::new(Step::AddInverse, prev, next));
            reasons.extend(result.reasons);
            return Check::pass(reasons);
        }
    }
    Check::fail()
}

/// If one of the terms is the negation of the other, returns the reasons they are opposites.
fn opposites(checker: &mut Checker, a: &Expr, b: &Expr) -> Option<Vec<Reason>> {
    [(a, b), (b, a)].into_iter().find_map(|(neg, other)| {
        let result = checker.check(neg.as_neg()?, other);
        result.equivalent.then_some(result.reasons)
    })
}

/// `-(-a) = a`
///
/// Tried in both directions at once. If both work, the explanation with fewer reasons wins.
pub fn double_negative(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let forward = remove_double_negative(checker, prev, next);
    let backward = remove_double_negative(checker, next, prev);
    match (forward.equivalent, backward.equivalent) {
        (true, true) if backward.reasons.len() < forward.reasons.len() => backward,
        (true, _) => forward,
        (false, true) => backward,
        (false, false) => Check::fail(),
    }
}

fn remove_double_negative(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Some(inner) = prev.as_neg().and_then(Expr::as_neg) else {
        return Check::fail();
    };
    let result = checker.check(inner, next);
    if !result.equivalent {
        return Check::fail();
    }

    let mut reasons = vec![Reason::new(Step::DoubleNegative, prev, next)];
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

/// `a - b = a + -b`
///
/// Applies to a subtracted term on one side and a negated term on the other.
pub fn sub_is_neg(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let (
        Expr::Neg { arg: lhs, subtraction: lhs_sub },
        Expr::Neg { arg: rhs, subtraction: rhs_sub },
    ) = (prev, next) else {
        return Check::fail();
    };
    if lhs_sub == rhs_sub {
        return Check::fail();
    }

    let result = checker.check(lhs, rhs);
    if !result.equivalent {
        return Check::fail();
    }
    let mut reasons = vec![Reason::new(Step::SubIsNeg, prev, next)];
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

/// `-a = -1*a`
pub fn neg_is_mul_neg_one(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Some(arg) = prev.as_neg() else {
        return Check::fail();
    };
    let Expr::Mul { args, .. } = next else {
        return Check::fail();
    };
    let Some(i) = args.iter().position(|factor| number::is_value(factor, -1)) else {
        return Check::fail();
    };

    let mut rest = args.clone();
    rest.remove(i);
    let result = checker.check(arg, &mul(rest));
    if !result.equivalent {
        return Check::fail();
    }
    let mut reasons = vec![Reason::new(Step::NegIsMulNegOne, prev, next)];
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

/// `-a * -b = a*b`
///
/// Removes the negation from the first two negated factors.
pub fn mul_two_negatives(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Expr::Mul { args, implicit } = prev else {
        return Check::fail();
    };
    let negated = args.iter()
        .enumerate()
        .filter(|(_, factor)| factor.as_neg().is_some())
        .map(|(i, _)| i)
        .take(2)
        .collect::<Vec<_>>();
    if negated.len() < 2 {
        return Check::fail();
    }

    let factors = args.iter()
        .enumerate()
        .map(|(i, factor)| match factor {
            Expr::Neg { arg, .. } if negated.contains(&i) => (**arg).clone(),
            _ => factor.clone(),
        })
        .collect();
    let result = checker.check(&Expr::Mul { args: factors, implicit: *implicit }, next);
    if !result.equivalent {
        return Check::fail();
    }
    let mut reasons = vec![Reason::new(Step::MulTwoNegatives, prev, next)];
    reasons.extend(result.reasons);
    Check::pass(reasons)
}
