//! Helpers to take sums and products apart and put them back together.

use crate::{consts::{ONE, ZERO}, number};
use rug::{integer::IsPrime, Integer};
use std::slice;
use step_ast::Expr;

/// Returns the terms of a sum. Anything that is not an [`Expr::Add`] is a sum of one term.
pub fn get_terms(expr: &Expr) -> &[Expr] {
    match expr {
        Expr::Add(terms) => terms,
        _ => slice::from_ref(expr),
    }
}

/// Returns the factors of a product. Anything that is not an [`Expr::Mul`] is a product of one
/// factor.
pub fn get_factors(expr: &Expr) -> &[Expr] {
    match expr {
        Expr::Mul { args, .. } => args,
        _ => slice::from_ref(expr),
    }
}

/// Builds a sum of the given terms. The empty sum is `0`, and a sum of one term is that term.
pub fn add(mut terms: Vec<Expr>) -> Expr {
    match terms.len() {
        0 => ZERO.clone(),
        1 => terms.remove(0),
        _ => Expr::Add(terms),
    }
}

/// Builds an explicit product of the given factors. The empty product is `1`, and a product of
/// one factor is that factor.
pub fn mul(mut factors: Vec<Expr>) -> Expr {
    match factors.len() {
        0 => ONE.clone(),
        1 => factors.remove(0),
        _ => Expr::Mul { args: factors, implicit: false },
    }
}

/// Returns true if the expression is a negation written with a leading minus sign, like `-a`.
pub fn is_negative(expr: &Expr) -> bool {
    matches!(expr, Expr::Neg { subtraction: false, .. })
}

/// Returns true if the expression is a subtracted term, like the `- b` in `a - b`.
pub fn is_subtraction(expr: &Expr) -> bool {
    matches!(expr, Expr::Neg { subtraction: true, .. })
}

/// The largest divisor tried by [`prime_decomp`].
pub const TRIAL_DIVISION_LIMIT: u32 = 100_000;

/// Returns the prime factors of `n` in ascending order, with multiplicity. Integers below 2 have
/// none.
///
/// `60 = 2 * 2 * 3 * 5`
///
/// Trial division stops at [`TRIAL_DIVISION_LIMIT`]. Whatever is left after that is kept as a
/// single factor if it is prime. A composite with no prime factor below the limit cannot be split
/// here, and the result is empty, as if `n` had nothing to decompose.
pub fn prime_decomp(n: &Integer) -> Vec<Integer> {
    let mut factors = Vec::new();
    if *n < 2 {
        return factors;
    }

    let mut n = n.clone();
    let mut divisor = 2u32;
    while divisor <= TRIAL_DIVISION_LIMIT && n >= u64::from(divisor) * u64::from(divisor) {
        while n.is_divisible_u(divisor) {
            n /= divisor;
            factors.push(Integer::from(divisor));
        }
        divisor += 1;
    }
    if n > 1 {
        let limit = u64::from(TRIAL_DIVISION_LIMIT);
        if n >= limit * limit && matches!(n.is_probably_prime(30), IsPrime::No) {
            return Vec::new();
        }
        factors.push(n);
    }
    factors
}

/// Replaces every composite integer factor of the product with its prime factors. Returns [`None`]
/// if there was nothing to replace.
///
/// `12x` -> `2 * 2 * 3 * x`
pub fn decompose_factors(expr: &Expr) -> Option<Expr> {
    let mut changed = false;
    let mut factors = Vec::new();
    for factor in get_factors(expr) {
        let primes = factor.as_number()
            .and_then(number::parse_integer)
            .map(|n| prime_decomp(&n))
            .unwrap_or_default();
        if primes.len() > 1 {
            changed = true;
            factors.extend(primes.into_iter().map(|p| Expr::number(p.to_string())));
        } else {
            factors.push(factor.clone());
        }
    }

    if changed {
        Some(mul(factors))
    } else {
        None
    }
}

/// Applies [`decompose_factors`] to the numerator and denominator of a fraction, or to the whole
/// expression if it is not a fraction.
pub fn decompose_fraction(expr: &Expr) -> Option<Expr> {
    match expr.as_div() {
        Some((num, den)) => match (decompose_factors(num), decompose_factors(den)) {
            (None, None) => None,
            (new_num, new_den) => Some(Expr::div(
                new_num.unwrap_or_else(|| num.clone()),
                new_den.unwrap_or_else(|| den.clone()),
            )),
        },
        None => decompose_factors(expr),
    }
}
