use crate::arith::{get_factors, mul};
use step_ast::Expr;
use super::super::{step::{Check, Reason, Step}, Checker};

/// `a*(b+c) = a*b + a*c`
/// `(a+b)*c = a*c + b*c`
pub fn distribute(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    match expand(checker, prev, next) {
        Some(sub_reasons) => {
            let mut reasons = vec![Reason::new(Step::Distribution, prev, next)];
            reasons.extend(sub_reasons);
            Check::pass(reasons)
        },
        None => Check::fail(),
    }
}

/// `a*b + a*c = a*(b+c)`
pub fn factor(checker: &mut Checker, prev: &Expr, next: &Expr) -> Check {
    match expand(checker, next, prev) {
        Some(sub_reasons) => {
            let mut reasons = vec![Reason::new(Step::Factoring, prev, next)];
            reasons.extend(sub_reasons);
            Check::pass(reasons)
        },
        None => Check::fail(),
    }
}

/// Checks that `sum` is `product`, a product of two factors one of which is a sum, multiplied
/// out term by term. Returns the reasons collected while comparing the terms.
fn expand(checker: &mut Checker, product: &Expr, sum: &Expr) -> Option<Vec<Reason>> {
    let Expr::Mul { args, .. } = product else {
        return None;
    };
    let Expr::Add(terms) = sum else {
        return None;
    };
    if args.len() != 2 {
        return None;
    }

    // keep the factors in the order they were written: `a(b+c)` gives `ab`, `(a+b)c` gives `ac`
    let (inner, outer, outer_first) = match (&args[0], &args[1]) {
        (outer, Expr::Add(inner)) => (inner, outer, true),
        (Expr::Add(inner), outer) => (inner, outer, false),
        _ => return None,
    };
    if inner.len() != terms.len() {
        return None;
    }

    let mut reasons = Vec::new();
    for (addend, term) in inner.iter().zip(terms) {
        let factors = if outer_first {
            [get_factors(outer), get_factors(addend)].concat()
        } else {
            [get_factors(addend), get_factors(outer)].concat()
        };
        let result = checker.check(&mul(factors), term);
        if !result.equivalent {
            return None;
        }
        reasons.extend(result.reasons);
    }
    Some(reasons)
}
