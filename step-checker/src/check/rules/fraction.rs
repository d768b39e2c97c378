//! Rules for fractions, including canceling common factors.

use crate::{
    arith::{decompose_fraction, get_factors, mul},
    consts::ONE,
    number,
};
use step_ast::Expr;
use super::super::{
    compare::{difference, equality, intersection, match_args},
    step::{Check, Reason, Step},
    Checker,
};

/// Prepends a reason for `step` to the reasons of `result`, if it succeeded.
fn justify(step: Step, prev: &Expr, next: &Expr, result: Check) -> Check {
    if !result.equivalent {
        return Check::fail();
    }
    let mut reasons = vec![Reason::new(step, prev, next)];
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

/// `a/(b/c) = a*(c/b)`
pub fn div_by_frac(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Some((num, den)) = prev.as_div() else {
        return Check::fail();
    };
    let Some((den_num, den_den)) = den.as_div() else {
        return Check::fail();
    };

    let mut factors = get_factors(num).to_vec();
    factors.push(Expr::div(den_den.clone(), den_num.clone()));
    let result = checker.check(&mul(factors), next);
    justify(Step::DivByFrac, prev, next, result)
}

/// `a/1 = a`
pub fn div_by_one(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Some((num, den)) = prev.as_div() else {
        return Check::fail();
    };
    let one = checker.check(den, &ONE);
    if !one.equivalent {
        return Check::fail();
    }
    let result = checker.check(num, next);
    if !result.equivalent {
        return Check::fail();
    }

    let mut reasons = one.reasons;
    reasons.push(Reason::new(Step::DivByOne, prev, next));
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

/// `a/a = 1`
pub fn div_by_same(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Some((num, den)) = prev.as_div() else {
        return Check::fail();
    };
    let same = checker.check(num, den);
    if !same.equivalent {
        return Check::fail();
    }
    let result = checker.check(&ONE, next);
    if !result.equivalent {
        return Check::fail();
    }

    let mut reasons = same.reasons;
    reasons.push(Reason::new(Step::DivBySame, prev, next));
    reasons.extend(result.reasons);
    Check::pass(reasons)
}

/// `a/b * c/d = (a*c)/(b*d)`
/// `a * b/c = (a*b)/c`
///
/// A numerator of exactly `1` contributes nothing to the product, so `x * 1/y = x/y`.
pub fn mul_by_frac(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Expr::Mul { args, .. } = prev else {
        return Check::fail();
    };
    if !args.iter().any(|arg| arg.as_div().is_some()) {
        return Check::fail();
    }
    let Some((next_num, next_den)) = next.as_div() else {
        return Check::fail();
    };

    let mut nums = Vec::new();
    let mut dens = Vec::new();
    for arg in args {
        match arg.as_div() {
            Some((num, den)) => {
                if !number::is_value(num, 1) {
                    nums.extend(get_factors(num).iter().cloned());
                }
                dens.extend(get_factors(den).iter().cloned());
            },
            None => nums.push(arg.clone()),
        }
    }

    let num_result = checker.check(&mul(nums), next_num);
    if !num_result.equivalent {
        return Check::fail();
    }
    let den_result = checker.check(&mul(dens), next_den);
    if !den_result.equivalent {
        return Check::fail();
    }

    let mut reasons = vec![Reason::new(Step::MulFractions, prev, next)];
    reasons.extend(num_result.reasons);
    reasons.extend(den_result.reasons);
    Check::pass(reasons)
}

/// `(a*b)/(a*c) = b/c`
/// `30/6 = 5`
///
/// The factors removed from the numerator must be the same as the factors removed from the
/// denominator. The step is explained by splitting the fraction into the canceled part and the
/// rest, `(a/a) * (b/c)`, and checking that against `next`. A `next` that is not a fraction is
/// treated as `next/1`. Nothing can be canceled from a fraction whose numerator and denominator
/// have no factor in common.
///
/// If `next` has factors that `prev` does not, the integers on both sides are split into their
/// prime factors first, so that `6/3` can cancel down to `2`.
pub fn cancel_factors(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let Some((prev_num, prev_den)) = prev.as_div() else {
        return Check::fail();
    };
    let (next_num, next_den) = next.as_div().unwrap_or((next, &*ONE));

    let (prev_num, prev_den) = (get_factors(prev_num), get_factors(prev_den));
    let (next_num, next_den) = (get_factors(next_num), get_factors(next_den));

    let mut added = difference(checker, next_num, prev_num);
    added.extend(difference(checker, next_den, prev_den));
    added.retain(|factor| !checker.check(factor, &ONE).equivalent);
    if !added.is_empty() {
        return cancel_prime_factors(checker, prev, next);
    }

    if intersection(checker, prev_num, prev_den).is_empty() {
        return Check::fail();
    }

    let num = match_args(checker, prev_num, next_num);
    let den = match_args(checker, prev_den, next_den);
    if num.unmatched_lhs.is_empty() && den.unmatched_lhs.is_empty() {
        return Check::fail();
    }
    if !equality(checker, num.unmatched_lhs.iter().copied(), den.unmatched_lhs.iter().copied()) {
        return Check::fail();
    }

    let canceled = Expr::div(
        mul(num.unmatched_lhs.iter().map(|&expr| expr.clone()).collect()),
        mul(den.unmatched_lhs.iter().map(|&expr| expr.clone()).collect()),
    );
    let rest = Expr::div(
        mul(num.matched.iter().map(|&(expr, _)| expr.clone()).collect()),
        mul(den.matched.iter().map(|&(expr, _)| expr.clone()).collect()),
    );
    let split = Expr::Mul { args: vec![canceled, rest], implicit: false };

    let result = checker.check(&split, next);
    justify(Step::CancelFactors, prev, next, result)
}

/// Splits the integers of both fractions into prime factors, and tries again. Fails if there is
/// nothing to split, so that this cannot recurse forever.
fn cancel_prime_factors(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    let (new_prev, new_next) = match (decompose_fraction(prev), decompose_fraction(next)) {
        (None, None) => return Check::fail(),
        (new_prev, new_next) => (
            new_prev.unwrap_or_else(|| prev.clone()),
            new_next.unwrap_or_else(|| next.clone()),
        ),
    };

    let result = checker.check(&new_prev, &new_next);
    justify(Step::PrimeFactorization, prev, next, result)
}

#[cfg(test)]
mod tests {
    use crate::check::Options;
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::ident("x")
    }

    fn y() -> Expr {
        Expr::ident("y")
    }

    fn explicit(args: Vec<Expr>) -> Expr {
        Expr::Mul { args, implicit: false }
    }

    #[test]
    fn over_one() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::div(x(), Expr::number("1"));
        assert_eq!(div_by_one(&mut checker, &prev, &x()).messages(), vec!["division by one"]);
    }

    #[test]
    fn over_itself() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::div(x(), x());
        assert_eq!(
            div_by_same(&mut checker, &prev, &Expr::number("1")).messages(),
            vec!["division by the same value"],
        );
        assert_eq!(div_by_same(&mut checker, &prev, &x()), Check::fail());
    }

    #[test]
    fn reciprocal() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        // x / (2 / y) -> x * (y / 2)
        let prev = Expr::div(x(), Expr::div(Expr::number("2"), y()));
        let next = explicit(vec![x(), Expr::div(y(), Expr::number("2"))]);
        assert_eq!(
            div_by_frac(&mut checker, &prev, &next).messages(),
            vec!["dividing by a fraction is the same as multiplying by the reciprocal"],
        );
    }

    #[test]
    fn product_of_fractions() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        // x * (1 / y) -> x / y
        let prev = explicit(vec![x(), Expr::div(Expr::number("1"), y())]);
        let next = Expr::div(x(), y());
        assert_eq!(mul_by_frac(&mut checker, &prev, &next).messages(), vec!["multiplying fractions"]);
    }

    #[test]
    fn cancel_common_variable() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        // (x * y) / (x * 2) -> y / 2
        let prev = Expr::div(explicit(vec![x(), y()]), explicit(vec![x(), Expr::number("2")]));
        let next = Expr::div(y(), Expr::number("2"));

        let result = cancel_factors(&mut checker, &prev, &next);
        assert_eq!(result.messages(), vec![
            "canceling factors in division",
            "division by the same value",
            "multiplication with identity",
        ]);
    }

    #[test]
    fn cancel_through_primes() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::div(Expr::number("30"), Expr::number("6"));

        let result = cancel_factors(&mut checker, &prev, &Expr::number("5"));
        assert_eq!(result.messages(), vec![
            "prime factorization",
            "canceling factors in division",
            "division by the same value",
            "multiplication with identity",
            "division by one",
        ]);
    }

    #[test]
    fn uneven_cancel() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        // (x * y) / 2 -> y
        let prev = Expr::div(explicit(vec![x(), y()]), Expr::number("2"));
        assert_eq!(cancel_factors(&mut checker, &prev, &y()), Check::fail());
    }

    #[test]
    fn nothing_to_factor() {
        let options = Options::default();
        let mut checker = Checker::new(&options);
        let prev = Expr::div(Expr::number("7"), Expr::number("3"));
        assert_eq!(cancel_factors(&mut checker, &prev, &Expr::number("2")), Check::fail());
    }
}
