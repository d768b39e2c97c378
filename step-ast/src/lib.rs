//! The expression tree shared by the parsers that produce it and the step checker that consumes
//! it.
//!
//! Trees are plain owned values. Nothing in this crate mutates a tree after it is built, and no
//! node knows its parent, so two trees are equal exactly when they are structurally equal.

pub mod expr;

pub use expr::{Expr, ExprKind, Identifier, Number, Printer};
