//! Matching two lists of operands against each other as multisets.
//!
//! Every element on either side is used at most once, so `2 * 2` and `2` are not the same list of
//! factors. Strictly equal elements are paired up first; only the leftovers are compared with the
//! (much more expensive) full step check.

use step_ast::Expr;
use super::{step::Reason, Checker};

/// The result of [`match_args`].
#[derive(Debug, Default)]
pub struct Matching<'a, 'b> {
    /// Pairs of equivalent elements, in the order of the left-hand list.
    pub matched: Vec<(&'a Expr, &'b Expr)>,

    /// Elements of the left-hand list without a partner, in their original order.
    pub unmatched_lhs: Vec<&'a Expr>,

    /// Elements of the right-hand list without a partner, in their original order.
    pub unmatched_rhs: Vec<&'b Expr>,

    /// Reasons collected while pairing up elements that were equivalent but not strictly equal.
    pub reasons: Vec<Reason>,
}

impl Matching<'_, '_> {
    /// Returns true if every element found a partner.
    pub fn is_bijection(&self) -> bool {
        self.unmatched_lhs.is_empty() && self.unmatched_rhs.is_empty()
    }
}

/// Pairs up elements of `lhs` with equivalent elements of `rhs`.
pub fn match_args<'a, 'b>(
    checker: &mut Checker,
    lhs: impl IntoIterator<Item = &'a Expr>,
    rhs: impl IntoIterator<Item = &'b Expr>,
) -> Matching<'a, 'b> {
    let lhs = lhs.into_iter().collect::<Vec<_>>();
    let rhs = rhs.into_iter().collect::<Vec<_>>();
    let mut partner = vec![None; lhs.len()];
    let mut used = vec![false; rhs.len()];
    let mut reasons = Vec::new();

    for (i, a) in lhs.iter().enumerate() {
        if let Some(j) = (0..rhs.len()).find(|&j| !used[j] && *a == rhs[j]) {
            partner[i] = Some(j);
            used[j] = true;
        }
    }

    for (i, a) in lhs.iter().enumerate() {
        if partner[i].is_some() {
            continue;
        }
        for j in 0..rhs.len() {
            if used[j] {
                continue;
            }
            let result = checker.check(a, rhs[j]);
            if result.equivalent {
                reasons.extend(result.reasons);
                partner[i] = Some(j);
                used[j] = true;
                break;
            }
        }
    }

    let mut matching = Matching { reasons, ..Default::default() };
    for (a, j) in lhs.into_iter().zip(partner) {
        match j {
            Some(j) => matching.matched.push((a, rhs[j])),
            None => matching.unmatched_lhs.push(a),
        }
    }
    matching.unmatched_rhs = rhs.iter()
        .zip(used)
        .filter(|(_, used)| !used)
        .map(|(b, _)| *b)
        .collect();
    matching
}

/// Returns the elements of `lhs` that have an equivalent partner in `rhs`.
pub fn intersection<'a, 'b>(
    checker: &mut Checker,
    lhs: impl IntoIterator<Item = &'a Expr>,
    rhs: impl IntoIterator<Item = &'b Expr>,
) -> Vec<&'a Expr> {
    match_args(checker, lhs, rhs).matched
        .into_iter()
        .map(|(a, _)| a)
        .collect()
}

/// Returns the elements of `lhs` that have no equivalent partner in `rhs`.
pub fn difference<'a, 'b>(
    checker: &mut Checker,
    lhs: impl IntoIterator<Item = &'a Expr>,
    rhs: impl IntoIterator<Item = &'b Expr>,
) -> Vec<&'a Expr> {
    match_args(checker, lhs, rhs).unmatched_lhs
}

/// Returns true if the two lists hold pairwise equivalent elements, in any order.
pub fn equality<'a, 'b>(
    checker: &mut Checker,
    lhs: impl IntoIterator<Item = &'a Expr>,
    rhs: impl IntoIterator<Item = &'b Expr>,
) -> bool {
    match_args(checker, lhs, rhs).is_bijection()
}
