//! Infix rendering of expressions.
//!
//! The output is meant for people reading logs and error reports. It is not a serialization
//! format, and there is no parser that reads it back.

use std::{fmt, ops::Range};
use super::Expr;

const PREC_IMPLIES: u8 = 0;
const PREC_OR: u8 = 1;
const PREC_AND: u8 = 2;
const PREC_NOT: u8 = 3;
const PREC_RELATION: u8 = 4;
const PREC_SET: u8 = 5;
const PREC_ADD: u8 = 6;
const PREC_MUL: u8 = 7;
const PREC_NEG: u8 = 8;
const PREC_EXP: u8 = 9;
const PREC_ATOM: u8 = 10;

/// Returns the binding strength of the expression's outermost operator.
fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Implies(_) | Expr::Iff(_) => PREC_IMPLIES,
        Expr::Or(_) | Expr::Xor(_) => PREC_OR,
        Expr::And(_) => PREC_AND,
        Expr::Not(_) => PREC_NOT,
        Expr::Eq(_)
        | Expr::Neq(_)
        | Expr::Lt(_)
        | Expr::Lte(_)
        | Expr::Gt(_)
        | Expr::Gte(_)
        | Expr::In(_)
        | Expr::NotIn(_)
        | Expr::Subset(_)
        | Expr::ProperSubset(_)
        | Expr::NotSubset(_)
        | Expr::NotProperSubset(_) => PREC_RELATION,
        Expr::Union(_) | Expr::Intersection(_) | Expr::SetDiff(_) | Expr::CartesianProduct(_) => PREC_SET,
        Expr::Add(_) => PREC_ADD,
        Expr::Mul { .. } | Expr::Div(_) | Expr::Mod(_) => PREC_MUL,
        Expr::Neg { .. } => PREC_NEG,
        Expr::Exp(_) => PREC_EXP,
        _ => PREC_ATOM,
    }
}

/// Renders expressions, optionally recording where one particular node ended up in the output.
///
/// Spans are measured in characters, not bytes, because some operators render as non-ASCII
/// symbols.
pub struct Printer<'a> {
    out: String,
    len: usize,
    target: Option<&'a Expr>,
    span: Option<Range<usize>>,
}

impl<'a> Printer<'a> {
    fn new(target: Option<&'a Expr>) -> Self {
        Self { out: String::new(), len: 0, target, span: None }
    }

    /// Renders the expression.
    pub fn render(expr: &'a Expr) -> String {
        let mut printer = Self::new(None);
        printer.expr(expr);
        printer.out
    }

    /// Renders `root`, and returns the span of `target` in the output. `target` must be a
    /// reference to a node inside `root` (it is matched by address); otherwise, no span is
    /// returned.
    pub fn locate(root: &'a Expr, target: &'a Expr) -> (String, Option<Range<usize>>) {
        let mut printer = Self::new(Some(target));
        printer.expr(root);
        (printer.out, printer.span)
    }

    fn push(&mut self, s: &str) {
        self.out.push_str(s);
        self.len += s.chars().count();
    }

    /// Records the span of `expr` if it is the node being located.
    fn mark(&mut self, expr: &'a Expr, start: usize) {
        if let Some(target) = self.target {
            if std::ptr::eq(target, expr) {
                self.span = Some(start..self.len);
            }
        }
    }

    /// Renders the expression, wrapping it in parentheses if it binds looser than `min`.
    fn child(&mut self, expr: &'a Expr, min: u8) {
        if precedence(expr) < min {
            self.push("(");
            self.expr(expr);
            self.push(")");
        } else {
            self.expr(expr);
        }
    }

    fn join(&mut self, args: &'a [Expr], sep: &str, min: u8) {
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.push(sep);
            }
            self.child(arg, min);
        }
    }

    fn call(&mut self, name: &str, args: &'a [Expr]) {
        self.push(name);
        self.push("(");
        self.join(args, ", ", 0);
        self.push(")");
    }

    fn expr(&mut self, expr: &'a Expr) {
        let start = self.len;
        match expr {
            Expr::Number(num) => self.push(&num.value),
            Expr::Identifier(ident) => {
                self.push(&ident.name);
                if let Some(subscript) = &ident.subscript {
                    self.push("_");
                    self.child(subscript, PREC_ATOM);
                }
            },
            Expr::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    match term {
                        // `a - b` rather than `a + -b`
                        Expr::Neg { arg, subtraction: true } if i > 0 => {
                            self.push(" - ");
                            let term_start = self.len - 2;
                            self.child(arg, PREC_MUL);
                            self.mark(term, term_start);
                        },
                        _ => {
                            if i > 0 {
                                self.push(" + ");
                            }
                            self.child(term, PREC_MUL);
                        },
                    }
                }
            },
            Expr::Mul { args, implicit } => {
                for (i, factor) in args.iter().enumerate() {
                    // `2x`, but never `23` for `2 * 3`
                    if i > 0 && (!*implicit || factor.is_number()) {
                        self.push(" * ");
                    }
                    self.child(factor, PREC_NEG);
                }
            },
            Expr::Neg { arg, .. } => {
                self.push("-");
                self.child(arg, PREC_EXP);
            },
            Expr::Div(args) => {
                self.child(&args[0], PREC_MUL);
                self.push(" / ");
                self.child(&args[1], PREC_NEG);
            },
            Expr::Exp(args) => {
                self.child(&args[0], PREC_ATOM);
                self.push("^");
                self.child(&args[1], PREC_ATOM);
            },
            Expr::Eq(args) => self.join(args, " = ", PREC_SET),
            Expr::Neq(args) => self.join(args, " ≠ ", PREC_SET),
            Expr::Lt(args) => self.join(args, " < ", PREC_SET),
            Expr::Lte(args) => self.join(args, " ≤ ", PREC_SET),
            Expr::Gt(args) => self.join(args, " > ", PREC_SET),
            Expr::Gte(args) => self.join(args, " ≥ ", PREC_SET),
            Expr::And(args) => self.join(args, " ∧ ", PREC_NOT),
            Expr::Or(args) => self.join(args, " ∨ ", PREC_AND),
            Expr::Xor(args) => self.join(args, " ⊕ ", PREC_AND),
            Expr::Not(arg) => {
                self.push("¬");
                self.child(arg, PREC_RELATION);
            },
            Expr::Implies(args) => self.join(&args[..], " ⇒ ", PREC_OR),
            Expr::Iff(args) => self.join(&args[..], " ⇔ ", PREC_OR),
            Expr::True => self.push("T"),
            Expr::False => self.push("F"),
            Expr::Set(args) => {
                self.push("{");
                self.join(args, ", ", 0);
                self.push("}");
            },
            Expr::Union(args) => self.join(args, " ∪ ", PREC_ADD),
            Expr::Intersection(args) => self.join(args, " ∩ ", PREC_ADD),
            Expr::SetDiff(args) => self.join(&args[..], " \\ ", PREC_ADD),
            Expr::CartesianProduct(args) => self.join(args, " × ", PREC_ADD),
            Expr::In(args) => self.join(&args[..], " ∈ ", PREC_SET),
            Expr::NotIn(args) => self.join(&args[..], " ∉ ", PREC_SET),
            Expr::Subset(args) => self.join(&args[..], " ⊆ ", PREC_SET),
            Expr::ProperSubset(args) => self.join(&args[..], " ⊂ ", PREC_SET),
            Expr::NotSubset(args) => self.join(&args[..], " ⊈ ", PREC_SET),
            Expr::NotProperSubset(args) => self.join(&args[..], " ⊄ ", PREC_SET),
            Expr::Naturals => self.push("ℕ"),
            Expr::Integers => self.push("ℤ"),
            Expr::Rationals => self.push("ℚ"),
            Expr::Reals => self.push("ℝ"),
            Expr::Complexes => self.push("ℂ"),
            Expr::Empty => self.push("∅"),
            Expr::Mod(args) => {
                self.child(&args[0], PREC_MUL);
                self.push(" mod ");
                self.child(&args[1], PREC_NEG);
            },
            Expr::Root(args) => self.call("root", &args[..]),
            Expr::Log(args) => self.call("log", &args[..]),
            Expr::Abs(arg) => {
                self.push("|");
                self.expr(arg);
                self.push("|");
            },
            Expr::Func(args) => match args.split_first() {
                Some((func, params)) => {
                    self.child(func, PREC_ATOM);
                    self.push("(");
                    self.join(params, ", ", 0);
                    self.push(")");
                },
                None => self.push("()"),
            },
            Expr::Sum(args) => self.call("sum", &args[..]),
            Expr::Prod(args) => self.call("prod", &args[..]),
            Expr::Limit(args) => self.call("lim", &args[..]),
            Expr::Diff(args) => self.call("diff", &args[..]),
            Expr::Int(args) => self.call("int", &args[..]),
            Expr::Ellipsis => self.push("..."),
            Expr::Infinity => self.push("∞"),
            Expr::Pi => self.push("π"),
        }
        self.mark(expr, start);
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Printer::render(self))
    }
}
