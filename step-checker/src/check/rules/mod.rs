//! Rewriting rules.
//!
//! Each rule is a function `fn(&mut Checker, prev, next) -> Check` that recognizes one algebraic
//! law. A rule returns a negative [`Check`] as soon as the expressions do not have the shape it
//! expects, so it is cheap to try every rule in turn.
//!
//! Many laws can be used in either direction (`x + 0 -> x`, as well as `x -> x + 0`). Those rules
//! are written for one direction, and listed in [`RULES`] twice. Rules whose reason depends on the
//! direction (adding to both sides of an equation, as opposed to subtracting) work out the
//! direction themselves, and are listed once.

pub mod commute;
pub mod distribute;
pub mod equation;
pub mod evaluate;
pub mod fraction;
pub mod identity;
pub mod integer;

use std::fmt;
use step_ast::Expr;
use super::{step::Check, Checker};

/// The signature of a rewriting rule.
pub type RuleFn = fn(&mut Checker, &Expr, &Expr) -> Check;

/// Which way a rule is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the expression before the step to the expression after it.
    Forward,

    /// From the expression after the step to the expression before it.
    Backward,
}

/// A named rule, applied in one direction.
#[derive(Clone, Copy)]
pub struct Rule {
    /// The name of the rule, used in logs.
    pub name: &'static str,

    /// The rule itself.
    pub func: RuleFn,

    /// The direction the rule is applied in.
    pub direction: Direction,
}

impl Rule {
    const fn forward(name: &'static str, func: RuleFn) -> Self {
        Self { name, func, direction: Direction::Forward }
    }

    const fn backward(name: &'static str, func: RuleFn) -> Self {
        Self { name, func, direction: Direction::Backward }
    }

    /// Applies the rule to the given step.
    pub fn apply(&self, checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
        match self.direction {
            Direction::Forward => (self.func)(checker, prev, next),
            Direction::Backward => (self.func)(checker, next, prev),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .finish()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Forward => write!(f, "{}", self.name),
            Direction::Backward => write!(f, "{} (backward)", self.name),
        }
    }
}

/// All rules, in the order they are tried.
///
/// The order matters. Evaluation comes first so that `2 + 3 -> 5` is reported as such, and not
/// as something more roundabout. Division by one and by the same value come before canceling, so
/// that canceling only ever sees fractions it can make progress on.
pub const RULES: &[Rule] = &[
    Rule::forward("evaluate_mul", evaluate::evaluate_mul),
    Rule::forward("evaluate_add", evaluate::evaluate_add),
    Rule::forward("symmetric_property", commute::symmetric_property),
    Rule::forward("commute_addition", commute::commute_addition),
    Rule::forward("commute_multiplication", commute::commute_multiplication),
    Rule::forward("add_zero", identity::add_zero),
    Rule::backward("add_zero", identity::add_zero),
    Rule::forward("mul_one", identity::mul_one),
    Rule::backward("mul_one", identity::mul_one),
    Rule::forward("div_by_frac", fraction::div_by_frac),
    Rule::backward("div_by_frac", fraction::div_by_frac),
    Rule::forward("div_by_one", fraction::div_by_one),
    Rule::backward("div_by_one", fraction::div_by_one),
    Rule::forward("div_by_same", fraction::div_by_same),
    Rule::backward("div_by_same", fraction::div_by_same),
    Rule::forward("cancel_factors", fraction::cancel_factors),
    Rule::backward("cancel_factors", fraction::cancel_factors),
    Rule::forward("distribute", distribute::distribute),
    Rule::forward("factor", distribute::factor),
    Rule::forward("mul_by_frac", fraction::mul_by_frac),
    Rule::backward("mul_by_frac", fraction::mul_by_frac),
    Rule::forward("mul_by_zero", identity::mul_by_zero),
    Rule::backward("mul_by_zero", identity::mul_by_zero),
    Rule::forward("add_inverse", integer::add_inverse),
    Rule::backward("add_inverse", integer::add_inverse),
    Rule::forward("double_negative", integer::double_negative),
    Rule::forward("sub_is_neg", integer::sub_is_neg),
    Rule::forward("neg_is_mul_neg_one", integer::neg_is_mul_neg_one),
    Rule::backward("neg_is_mul_neg_one", integer::neg_is_mul_neg_one),
    Rule::forward("mul_two_negatives", integer::mul_two_negatives),
    Rule::backward("mul_two_negatives", integer::mul_two_negatives),
    Rule::forward("add_to_both_sides", equation::add_to_both_sides),
    Rule::forward("mul_both_sides", equation::mul_both_sides),
    Rule::forward("div_both_sides", equation::div_both_sides),
];
