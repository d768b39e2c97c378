//! Checks a single step of algebra.
//!
//! Given the expression a student started from and the one they wrote next, [`check_step`]
//! decides whether the second follows from the first by applying algebraic laws, and lists the
//! laws it took.
//!
//! ```
//! use step_ast::Expr;
//! use step_checker::check_step;
//!
//! // 30 / 6 -> 5
//! let prev = Expr::div(Expr::number("30"), Expr::number("6"));
//! let next = Expr::number("5");
//!
//! let result = check_step(&prev, &next).unwrap();
//! assert!(result.equivalent);
//! assert_eq!(result.messages(), [
//!     "prime factorization",
//!     "canceling factors in division",
//!     "division by the same value",
//!     "multiplication with identity",
//!     "division by one",
//! ]);
//! ```
//!
//! A step that does not follow is not an error; it is a [`Check`] with `equivalent` set to
//! `false` and no reasons. Errors are only returned for trees that no parser should produce.
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for the result types, the options, and
//! the expression tree.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod arith;
pub mod check;
pub mod consts;
pub mod error;
pub mod number;

pub use check::{
    check_step,
    check_step_with,
    step::{Check, Reason, Step},
    Checker,
    Options,
    MAX_RECURSION_DEPTH,
};
pub use number::NumberEquality;

#[cfg(test)]
mod tests {
    use step_ast::Expr;
    use std::thread;
    use super::*;

    #[test]
    fn shared_between_threads() {
        let prev = Expr::Add(vec![Expr::number("2"), Expr::number("3")]);
        let next = Expr::number("5");

        thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| check_step(&prev, &next).map(|result| result.equivalent)))
                .collect::<Vec<_>>();
            for handle in handles {
                assert!(handle.join().unwrap().unwrap());
            }
        });
    }
}
