//! Expressions that the rewriting rules compare against or build with.

use once_cell::sync::Lazy;
use step_ast::Expr;

/// The identity of addition.
pub static ZERO: Lazy<Expr> = Lazy::new(|| Expr::number("0"));

/// The identity of multiplication.
pub static ONE: Lazy<Expr> = Lazy::new(|| Expr::number("1"));
