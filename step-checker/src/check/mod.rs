//! The step checker.
//!
//! [`Checker::check`] decides whether one expression can be rewritten into another by applying
//! algebraic laws. It does so by trying a fixed, ordered list of [rules](rules::RULES). A rule
//! recognizes the shape of one law, applies it, and recursively checks what is left. The first
//! rule that succeeds decides the result, and its reasons (the laws applied, outermost first) are
//! returned. If no rule applies, the two expressions are compared operand by operand.
//!
//! Rules never modify the expressions they are given; they build new trees where needed.

pub mod compare;
pub mod rules;
pub mod step;

use crate::{error::{validate, Side}, number::{self, NumberEquality}};
use log::{debug, trace};
use step_ast::{Expr, ExprKind};
use step_error::Error;
use self::{compare::match_args, rules::RULES, step::Check};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default maximum recursion depth of a [`Checker`]. Checks that need to go deeper than this
/// are considered to have failed.
///
/// The depth bounds how deeply rules nest, not how many sub-checks a single rule makes. Matching
/// the operands of a sum or product compares every pair of operands, and nothing is cached, so
/// the work of one check grows with the product of the operand counts at each level.
pub const MAX_RECURSION_DEPTH: usize = 32;

/// Options that change how steps are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// The maximum recursion depth.
    pub max_depth: usize,

    /// How number literals are compared.
    pub numbers: NumberEquality,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: MAX_RECURSION_DEPTH,
            numbers: NumberEquality::default(),
        }
    }
}

/// Checks whether `next` follows from `prev` in one step, with the default [`Options`].
///
/// Returns an error if either tree has an `add`, `mul` or `eq` node with fewer than two operands.
pub fn check_step(prev: &Expr, next: &Expr) -> Result<Check, Error> {
    check_step_with(prev, next, &Options::default())
}

/// Checks whether `next` follows from `prev` in one step.
///
/// Returns an error if either tree has an `add`, `mul` or `eq` node with fewer than two operands.
pub fn check_step_with(prev: &Expr, next: &Expr, options: &Options) -> Result<Check, Error> {
    validate(prev, Side::Before)?;
    validate(next, Side::After)?;

    let result = Checker::new(options).check(prev, next);
    debug!(
        "checked `{}` -> `{}`: equivalent = {}, {} reason(s)",
        prev,
        next,
        result.equivalent,
        result.reasons.len(),
    );
    Ok(result)
}

/// Holds the state of one top-level check.
///
/// Rules receive the checker so that they can check sub-expressions with [`Checker::check`].
#[derive(Debug)]
pub struct Checker<'a> {
    options: &'a Options,

    /// The current recursion depth.
    depth: usize,
}

impl<'a> Checker<'a> {
    /// Creates a new checker.
    pub fn new(options: &'a Options) -> Self {
        Self { options, depth: 0 }
    }

    /// Checks whether `next` follows from `prev`.
    pub fn check(&mut self, prev: &Expr, next: &Expr) -> Check {
        if prev == next {
            return Check::pass(Vec::new());
        }
        if self.depth >= self.options.max_depth {
            debug!("recursion limit of {} reached at `{}` -> `{}`", self.options.max_depth, prev, next);
            return Check::fail();
        }

        self.depth += 1;
        let result = self.apply_rules(prev, next);
        self.depth -= 1;
        result
    }

    /// Tries every rule in order, and falls back to comparing operands.
    fn apply_rules(&mut self, prev: &Expr, next: &Expr) -> Check {
        for rule in RULES {
            let result = rule.apply(self, prev, next);
            if result.equivalent {
                trace!("{} matched `{}` -> `{}`", rule, prev, next);
                return result;
            }
        }
        self.compare_structure(prev, next)
    }

    /// Compares two expressions that no rule could relate: leaves by their data, everything else
    /// by the kind of node and its operands. Operands of commutative nodes may be in any order.
    fn compare_structure(&mut self, prev: &Expr, next: &Expr) -> Check {
        match (prev, next) {
            (Expr::Number(lhs), Expr::Number(rhs)) => {
                Check::when(number::equal(&lhs.value, &rhs.value, self.options.numbers))
            },
            (Expr::Identifier(lhs), Expr::Identifier(rhs)) => Check::when(lhs == rhs),
            (Expr::Neg { subtraction: lhs, .. }, Expr::Neg { subtraction: rhs, .. }) if lhs != rhs => {
                Check::fail()
            },
            _ if prev.kind() == next.kind() && !prev.args().is_empty() => {
                // reorderings of `add`, `mul` and `eq` were already tried by the commutative rules
                let kind = prev.kind();
                let any_order = kind.is_commutative()
                    && !matches!(kind, ExprKind::Add | ExprKind::Mul | ExprKind::Eq);
                self.compare_args(prev.args(), next.args(), any_order)
            },
            _ => Check::fail(),
        }
    }

    fn compare_args(&mut self, prev: &[Expr], next: &[Expr], any_order: bool) -> Check {
        if prev.len() == next.len() {
            let mut reasons = Vec::new();
            let in_place = prev.iter().zip(next).all(|(a, b)| {
                let result = self.check(a, b);
                reasons.extend(result.reasons);
                result.equivalent
            });
            if in_place {
                return Check::pass(reasons);
            }
        }

        if any_order {
            let matching = match_args(self, prev, next);
            if matching.is_bijection() {
                return Check::pass(matching.reasons);
            }
        }
        Check::fail()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Expr {
        Expr::ident("x")
    }

    fn y() -> Expr {
        Expr::ident("y")
    }

    fn num(value: &str) -> Expr {
        Expr::number(value)
    }

    fn add(args: Vec<Expr>) -> Expr {
        Expr::Add(args)
    }

    fn mul(args: Vec<Expr>) -> Expr {
        Expr::Mul { args, implicit: false }
    }

    fn eq(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Eq(vec![lhs, rhs])
    }

    /// Checks the step, and that the reverse step is also equivalent.
    fn both_ways(prev: &Expr, next: &Expr) -> Check {
        let result = check_step(prev, next).unwrap();
        let reverse = check_step(next, prev).unwrap();
        assert_eq!(result.equivalent, reverse.equivalent, "`{}` -> `{}`", prev, next);
        result
    }

    #[test]
    fn reflexive() {
        let exprs = [
            x(),
            num("1.50"),
            add(vec![x(), Expr::sub(num("2"))]),
            eq(mul(vec![num("2"), x()]), Expr::div(y(), num("3"))),
            Expr::Set(vec![x(), y()]),
            Expr::Pi,
        ];
        for expr in &exprs {
            assert_eq!(check_step(expr, expr).unwrap(), Check::pass(vec![]));
        }
    }

    #[test]
    fn add_zero_round_trip() {
        let sum = add(vec![x(), num("0")]);
        let result = both_ways(&sum, &x());
        assert_eq!(result.messages(), vec!["addition with identity"]);
        assert_eq!(result.reasons[0].nodes, [sum.clone(), x()]);
        assert_eq!(check_step(&x(), &sum).unwrap().messages(), vec!["addition with identity"]);
    }

    #[test]
    fn mul_one_round_trip() {
        let product = mul(vec![x(), num("1")]);
        let result = both_ways(&product, &x());
        assert_eq!(result.messages(), vec!["multiplication with identity"]);
        assert_eq!(check_step(&x(), &product).unwrap().messages(), vec!["multiplication with identity"]);
    }

    #[test]
    fn every_permutation_commutes() {
        let args = vec![x(), y(), Expr::ident("z"), num("2")];
        let permutations = [[1, 0, 2, 3], [3, 2, 1, 0], [2, 3, 0, 1], [0, 1, 3, 2]];
        for permutation in permutations {
            let permuted = permutation.iter().map(|&i| args[i].clone()).collect();
            let result = both_ways(&add(args.clone()), &add(permuted));
            assert_eq!(result.messages(), vec!["commutative property"]);
        }
    }

    #[test]
    fn evaluation() {
        let result = both_ways(&add(vec![num("2"), num("3")]), &num("5"));
        assert_eq!(result.messages(), vec!["evaluation of addition"]);

        let result = both_ways(&mul(vec![num("2"), num("3"), x()]), &mul(vec![num("6"), x()]));
        assert_eq!(result.messages(), vec!["evaluation of multiplication"]);

        assert!(!check_step(&add(vec![num("2"), num("3")]), &num("6")).unwrap().equivalent);
    }

    #[test]
    fn divide_to_integer() {
        let prev = Expr::div(num("30"), num("6"));
        let result = both_ways(&prev, &num("5"));
        assert_eq!(result.messages(), vec![
            "prime factorization",
            "canceling factors in division",
            "division by the same value",
            "multiplication with identity",
            "division by one",
        ]);
    }

    #[test]
    fn same_value_on_both_sides() {
        let prev = eq(x(), y());
        let next = eq(add(vec![x(), num("5")]), add(vec![y(), num("5")]));
        let result = both_ways(&prev, &next);
        assert_eq!(result.messages(), vec!["adding the same value to both sides"]);

        let uneven = eq(add(vec![x(), num("5")]), add(vec![y(), num("10")]));
        assert_eq!(check_step(&prev, &uneven).unwrap(), Check::fail());
    }

    #[test]
    fn different_terms_have_no_reasons() {
        let prev = add(vec![x(), Expr::ident("a"), num("2")]);
        let next = add(vec![x(), num("2"), Expr::ident("b")]);
        let result = check_step(&prev, &next).unwrap();
        assert!(!result.equivalent);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn double_negative_chain() {
        let a = Expr::ident("a");
        let prev = Expr::neg(Expr::neg(Expr::neg(Expr::neg(a.clone()))));
        let result = both_ways(&prev, &a);
        assert_eq!(result.messages(), vec![
            "negative of a negative is positive",
            "negative of a negative is positive",
        ]);
    }

    #[test]
    fn distribution_and_factoring() {
        let product = Expr::Mul { args: vec![num("2"), add(vec![x(), y()])], implicit: true };
        let sum = add(vec![
            Expr::Mul { args: vec![num("2"), x()], implicit: true },
            Expr::Mul { args: vec![num("2"), y()], implicit: true },
        ]);
        assert_eq!(both_ways(&product, &sum).messages(), vec!["distribution"]);
        assert_eq!(check_step(&sum, &product).unwrap().messages(), vec!["factoring"]);
    }

    #[test]
    fn subtraction_inside_a_sum() {
        let prev = add(vec![x(), Expr::sub(y())]);
        let next = add(vec![x(), Expr::neg(y())]);
        assert_eq!(
            both_ways(&prev, &next).messages(),
            vec!["subtracting is the same as adding the inverse"],
        );
    }

    #[test]
    fn inverse_terms_vanish() {
        let prev = add(vec![x(), y(), Expr::sub(y())]);
        assert_eq!(both_ways(&prev, &x()).messages(), vec!["adding inverse"]);
    }

    #[test]
    fn times_zero() {
        let prev = mul(vec![x(), num("0")]);
        assert_eq!(both_ways(&prev, &num("0")).messages(), vec!["multiplication by zero"]);
    }

    #[test]
    fn structure_without_a_rule() {
        // operands of a set can be in any order, and nothing needs explaining
        let prev = Expr::Set(vec![x(), y()]);
        let next = Expr::Set(vec![y(), x()]);
        assert_eq!(check_step(&prev, &next).unwrap(), Check::pass(vec![]));

        // `x - y < 3` and `y - x < 3` are different inequalities
        let prev = Expr::Lt(vec![add(vec![x(), Expr::sub(y())]), num("3")]);
        let next = Expr::Lt(vec![add(vec![y(), Expr::sub(x())]), num("3")]);
        assert_eq!(check_step(&prev, &next).unwrap(), Check::fail());

        // a rule may still apply to an operand
        let prev = Expr::Abs(Box::new(add(vec![x(), num("0")])));
        let next = Expr::Abs(Box::new(x()));
        assert_eq!(check_step(&prev, &next).unwrap().messages(), vec!["addition with identity"]);
    }

    #[test]
    fn unrelated_kinds() {
        assert_eq!(check_step(&x(), &num("1")).unwrap(), Check::fail());
        assert_eq!(check_step(&Expr::Pi, &Expr::Infinity).unwrap(), Check::fail());
    }

    #[test]
    fn number_equality_policy() {
        let value = Options::default();
        let text = Options { numbers: NumberEquality::Text, ..Options::default() };

        assert!(check_step_with(&num("1"), &num("1.0"), &value).unwrap().equivalent);
        assert!(!check_step_with(&num("1"), &num("1.0"), &text).unwrap().equivalent);
    }

    #[test]
    fn depth_limit() {
        let options = Options { max_depth: 0, ..Options::default() };
        let sum = add(vec![x(), num("0")]);
        assert_eq!(check_step_with(&sum, &x(), &options).unwrap(), Check::fail());
        assert_eq!(check_step_with(&sum, &sum, &options).unwrap(), Check::pass(vec![]));
    }

    #[test]
    fn division_by_one_both_ways() {
        let frac = Expr::div(x(), num("1"));
        assert_eq!(both_ways(&x(), &frac).messages(), vec!["division by one"]);
        assert_eq!(check_step(&frac, &x()).unwrap().messages(), vec!["division by one"]);
    }

    #[test]
    fn division_by_same_value_both_ways() {
        let frac = Expr::div(x(), x());
        assert_eq!(both_ways(&num("1"), &frac).messages(), vec!["division by the same value"]);
        assert_eq!(check_step(&frac, &num("1")).unwrap().messages(), vec!["division by the same value"]);
    }

    #[test]
    fn reciprocal_both_ways() {
        // x * (y / 2) -> x / (2 / y)
        let product = mul(vec![x(), Expr::div(y(), num("2"))]);
        let quotient = Expr::div(x(), Expr::div(num("2"), y()));
        let reciprocal = "dividing by a fraction is the same as multiplying by the reciprocal";

        assert_eq!(both_ways(&product, &quotient).messages(), vec![reciprocal]);
        assert_eq!(check_step(&quotient, &product).unwrap().messages(), vec![reciprocal]);
    }

    #[test]
    fn fractions_split_and_combine() {
        let (a, b, c, d) = (Expr::ident("a"), Expr::ident("b"), Expr::ident("c"), Expr::ident("d"));

        // (a * c) / (b * d) -> (a / b) * (c / d)
        let combined = Expr::div(mul(vec![a.clone(), c.clone()]), mul(vec![b.clone(), d.clone()]));
        let split = mul(vec![Expr::div(a, b), Expr::div(c, d)]);
        assert_eq!(both_ways(&combined, &split).messages(), vec!["multiplying fractions"]);
        assert_eq!(check_step(&split, &combined).unwrap().messages(), vec!["multiplying fractions"]);

        // x / y -> x * (1 / y)
        let quotient = Expr::div(x(), y());
        let product = mul(vec![x(), Expr::div(num("1"), y())]);
        assert_eq!(both_ways(&quotient, &product).messages(), vec!["multiplying fractions"]);
    }

    #[test]
    fn negations_both_ways() {
        // -1 * x -> -x
        let product = mul(vec![Expr::neg(num("1")), x()]);
        assert_eq!(
            both_ways(&product, &Expr::neg(x())).messages(),
            vec!["negation is the same as multiplying by negative one"],
        );

        // x * y -> -x * -y
        let negated = mul(vec![Expr::neg(x()), Expr::neg(y())]);
        assert_eq!(
            both_ways(&mul(vec![x(), y()]), &negated).messages(),
            vec!["multiplying two negatives is a positive"],
        );
    }

    #[test]
    fn large_prime_in_a_fraction() {
        let prev = Expr::div(num("100000000000000000039"), num("2"));
        assert_eq!(check_step(&prev, &num("3")).unwrap(), Check::fail());
    }

    #[test]
    fn rewritten_operand_in_a_sum() {
        let padded = add(vec![add(vec![x(), num("0")]), y()]);

        // in place, only the operand changes
        let result = check_step(&padded, &add(vec![x(), y()])).unwrap();
        assert_eq!(result.messages(), vec!["addition with identity"]);

        // reordered as well
        let result = check_step(&padded, &add(vec![y(), x()])).unwrap();
        assert_eq!(result.messages(), vec!["commutative property", "addition with identity"]);

        // a sum with a missing operand matches in neither order
        assert_eq!(check_step(&padded, &add(vec![y(), x(), x()])).unwrap(), Check::fail());
    }

    #[test]
    fn malformed_trees_are_errors() {
        let lonely = add(vec![x()]);
        let err = check_step(&lonely, &x()).unwrap_err();
        assert_eq!(err.spans, vec![0..1]);

        // `x = ` with nothing after the equals sign
        let err = check_step(&x(), &eq(x(), mul(vec![]))).unwrap_err();
        assert_eq!(err.spans, vec![4..4]);
    }
}
