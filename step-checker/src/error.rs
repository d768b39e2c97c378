//! Malformed input trees.
//!
//! A tree built by a parser never holds an `add`, `mul` or `eq` node with fewer than two operands.
//! If one turns up anyway, checking is refused with an [`InvalidArity`] error that points at the
//! offending node in the rendered expression.
//!
//! The spans of the error are character ranges into the [`Display`](std::fmt::Display) rendering
//! of the expression, so that is the source to report against:
//!
//! ```
//! use step_ast::Expr;
//! use step_checker::check_step;
//!
//! let prev = Expr::Add(vec![Expr::ident("x")]);
//! let next = Expr::ident("x");
//!
//! let err = check_step(&prev, &next).unwrap_err();
//! err.report_to_stderr("before", &prev.to_string()).unwrap();
//! ```

use ariadne::{Fmt, Label, Report, ReportKind};
use std::ops::Range;
use step_ast::{Expr, ExprKind, Printer};
use step_error::{Error, ErrorKind, EXPR};

/// Which of the two expressions of a step an error was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The expression before the step.
    Before,

    /// The expression after the step.
    After,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Before => write!(f, "before"),
            Side::After => write!(f, "after"),
        }
    }
}

/// An `add`, `mul` or `eq` node has fewer than two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArity {
    /// The expression containing the node.
    pub side: Side,

    /// The kind of the node.
    pub kind: ExprKind,

    /// The number of operands the node has.
    pub given: usize,
}

impl ErrorKind for InvalidArity {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let span = spans.first().cloned().unwrap_or(0..0);
        let plural = if self.given == 1 { "" } else { "s" };
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(format!(
                "the {} expression contains an `{}` node with {} operand{}",
                self.side,
                self.kind,
                self.given,
                plural,
            ))
            .with_label(Label::new((src_id, span))
                .with_message(format!("this `{}` node", self.kind.fg(EXPR)))
                .with_color(EXPR))
            .with_help("`add`, `mul` and `eq` nodes need at least two operands")
            .finish()
    }
}

/// Makes sure that every n-ary node in the tree has at least two operands.
pub fn validate(expr: &Expr, side: Side) -> Result<(), Error> {
    let Some(node) = expr.post_order_iter()
        .find(|node| node.kind().is_n_ary() && node.args().len() < 2)
    else {
        return Ok(());
    };

    let (_, span) = Printer::locate(expr, node);
    Err(Error::new(
        vec![span.unwrap_or(0..0)],
        InvalidArity { side, kind: node.kind(), given: node.args().len() },
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn accepts_binary_nodes() {
        let expr = Expr::Add(vec![Expr::ident("x"), Expr::number("1")]);
        assert!(validate(&expr, Side::Before).is_ok());
    }

    #[test]
    fn rejects_lonely_operand() {
        // 2 * (x)
        let expr = Expr::Mul {
            args: vec![Expr::number("2"), Expr::Add(vec![Expr::ident("x")])],
            implicit: false,
        };
        let err = validate(&expr, Side::After).unwrap_err();
        assert_eq!(err.spans, vec![5..6]);

        let report = err.report_to_string("after", &expr.to_string()).unwrap();
        let plain = String::from_utf8(strip_ansi_escapes::strip(report)).unwrap();
        assert!(plain.contains("the after expression contains an `add` node with 1 operand"));
    }

    #[test]
    fn rejects_empty_equation() {
        let err = validate(&Expr::Eq(vec![]), Side::Before).unwrap_err();
        assert_eq!(err.spans, vec![0..0]);
    }
}
