//! The semantic expression tree.
//!
//! Every node is one variant of [`Expr`]. Operators with a fixed number of operands store them in
//! a boxed array (`Box<[Expr; 2]>` for a division, for example), operators that chain store a
//! [`Vec`], and operators with a single operand store a [`Box`]. This lets [`Expr::args`] hand out
//! the operands of any node as one slice, which is all that generic, structure-only comparisons
//! need.
//!
//! # Strict equality
//!
//! The [`PartialEq`] implementation is **strict**, structural equality: both nodes have the same
//! kind, the same leaf data, and strictly equal operands in the same order. The only thing it
//! ignores is [`Expr::Mul`]'s `implicit` flag, which records how a product was written and nothing
//! else. Numbers compare by their text here; `1` and `1.0` are different trees.
//!
//! Strict equality never says two different-looking expressions are equal. Deciding whether one
//! expression is a valid rewrite of another is the step checker's job.

mod fmt;
mod iter;

pub use fmt::Printer;
pub use iter::ExprIter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number, kept as the exact decimal text it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Number {
    /// The decimal text, such as `12`, `0.5`, or `-3`.
    pub value: String,
}

/// A variable, optionally subscripted, such as `x` or `a_1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identifier {
    /// The name of the variable.
    pub name: String,

    /// The subscript, if any.
    pub subscript: Option<Box<Expr>>,
}

/// The kind of an [`Expr`], without any of its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExprKind {
    Number,
    Identifier,
    Add,
    Mul,
    Neg,
    Div,
    Exp,
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
    Xor,
    Not,
    Implies,
    Iff,
    True,
    False,
    Set,
    Union,
    Intersection,
    SetDiff,
    CartesianProduct,
    In,
    NotIn,
    Subset,
    ProperSubset,
    NotSubset,
    NotProperSubset,
    Naturals,
    Integers,
    Rationals,
    Reals,
    Complexes,
    Empty,
    Mod,
    Root,
    Log,
    Abs,
    Func,
    Sum,
    Prod,
    Limit,
    Diff,
    Int,
    Ellipsis,
    Infinity,
    Pi,
}

impl ExprKind {
    /// Returns true if the order of the operands of this kind of node carries no meaning.
    pub fn is_commutative(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Mul
                | Self::Eq
                | Self::Neq
                | Self::And
                | Self::Or
                | Self::Xor
                | Self::Iff
                | Self::Set
                | Self::Union
                | Self::Intersection
        )
    }

    /// Returns true if a well-formed node of this kind needs at least two operands.
    pub fn is_n_ary(self) -> bool {
        matches!(self, Self::Add | Self::Mul | Self::Eq)
    }
}

impl std::fmt::Display for ExprKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = format!("{:?}", self);
        write!(f, "{}", name.to_lowercase())
    }
}

/// A mathematical expression.
///
/// Only a handful of variants take part in algebraic step checking (numbers, identifiers, sums,
/// products, negations, divisions and equations). The rest exist so that parsers can hand over
/// anything a student may write; they are compared structurally.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A number, such as `2` or `0.25`.
    Number(Number),

    /// A variable, such as `x`.
    Identifier(Identifier),

    /// Two or more terms added together.
    Add(Vec<Expr>),

    /// Two or more factors multiplied together.
    Mul {
        /// The factors.
        args: Vec<Expr>,

        /// Whether the product was written without an operator, as in `2x`. Only affects
        /// printing.
        implicit: bool,
    },

    /// The negation of an expression.
    Neg {
        /// The negated expression.
        arg: Box<Expr>,

        /// Whether this negation came from a binary `-`, as the `b` in `a - b`.
        subtraction: bool,
    },

    /// `numerator / denominator`.
    Div(Box<[Expr; 2]>),

    /// `base ^ exponent`.
    Exp(Box<[Expr; 2]>),

    /// Two or more expressions that are all equal, as in `a = b = c`.
    Eq(Vec<Expr>),
    Neq(Vec<Expr>),
    Lt(Vec<Expr>),
    Lte(Vec<Expr>),
    Gt(Vec<Expr>),
    Gte(Vec<Expr>),

    And(Vec<Expr>),
    Or(Vec<Expr>),
    Xor(Vec<Expr>),
    Not(Box<Expr>),
    Implies(Box<[Expr; 2]>),
    Iff(Box<[Expr; 2]>),
    True,
    False,

    /// A set literal, such as `{1, 2, 3}`.
    Set(Vec<Expr>),
    Union(Vec<Expr>),
    Intersection(Vec<Expr>),
    SetDiff(Box<[Expr; 2]>),
    CartesianProduct(Vec<Expr>),
    In(Box<[Expr; 2]>),
    NotIn(Box<[Expr; 2]>),
    Subset(Box<[Expr; 2]>),
    ProperSubset(Box<[Expr; 2]>),
    NotSubset(Box<[Expr; 2]>),
    NotProperSubset(Box<[Expr; 2]>),

    /// ℕ
    Naturals,
    /// ℤ
    Integers,
    /// ℚ
    Rationals,
    /// ℝ
    Reals,
    /// ℂ
    Complexes,
    /// ∅
    Empty,

    Mod(Box<[Expr; 2]>),

    /// `[radicand, index]`.
    Root(Box<[Expr; 2]>),

    /// `[base, argument]`.
    Log(Box<[Expr; 2]>),
    Abs(Box<Expr>),

    /// A function application. The first element is the function, the rest are its arguments.
    Func(Vec<Expr>),

    /// `[summand, lower bound, upper bound]`, where the lower bound binds the index (`i = 1`).
    Sum(Box<[Expr; 3]>),

    /// `[factor, lower bound, upper bound]`.
    Prod(Box<[Expr; 3]>),

    /// `[body, variable, target]`.
    Limit(Box<[Expr; 3]>),

    /// `[body, variable]`.
    Diff(Box<[Expr; 2]>),

    /// `[integrand, variable]`.
    Int(Box<[Expr; 2]>),
    Ellipsis,
    Infinity,
    Pi,
}

impl Expr {
    /// Creates a number from its decimal text.
    pub fn number(value: impl Into<String>) -> Self {
        Self::Number(Number { value: value.into() })
    }

    /// Creates a variable with no subscript.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier { name: name.into(), subscript: None })
    }

    /// Creates a subscripted variable.
    pub fn ident_with_subscript(name: impl Into<String>, subscript: Expr) -> Self {
        Self::Identifier(Identifier {
            name: name.into(),
            subscript: Some(Box::new(subscript)),
        })
    }

    /// Creates the sum of the given terms.
    pub fn add(terms: Vec<Expr>) -> Self {
        Self::Add(terms)
    }

    /// Creates the product of the given factors, written with an explicit operator.
    pub fn mul(factors: Vec<Expr>) -> Self {
        Self::Mul { args: factors, implicit: false }
    }

    /// Creates the product of the given factors, written by juxtaposition, like `2x`.
    pub fn implicit_mul(factors: Vec<Expr>) -> Self {
        Self::Mul { args: factors, implicit: true }
    }

    /// Creates the equation `lhs = rhs`.
    pub fn equation(lhs: Expr, rhs: Expr) -> Self {
        Self::Eq(vec![lhs, rhs])
    }

    /// Creates the negation `-arg`, as written with a unary minus.
    pub fn neg(arg: Expr) -> Self {
        Self::Neg { arg: Box::new(arg), subtraction: false }
    }

    /// Creates the negation of `arg` produced by a binary minus, as the `b` in `a - b`.
    pub fn sub(arg: Expr) -> Self {
        Self::Neg { arg: Box::new(arg), subtraction: true }
    }

    /// Creates `numerator / denominator`.
    pub fn div(numerator: Expr, denominator: Expr) -> Self {
        Self::Div(Box::new([numerator, denominator]))
    }

    /// Creates `base ^ exponent`.
    pub fn exp(base: Expr, exponent: Expr) -> Self {
        Self::Exp(Box::new([base, exponent]))
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> ExprKind {
        match self {
            Self::Number(_) => ExprKind::Number,
            Self::Identifier(_) => ExprKind::Identifier,
            Self::Add(_) => ExprKind::Add,
            Self::Mul { .. } => ExprKind::Mul,
            Self::Neg { .. } => ExprKind::Neg,
            Self::Div(_) => ExprKind::Div,
            Self::Exp(_) => ExprKind::Exp,
            Self::Eq(_) => ExprKind::Eq,
            Self::Neq(_) => ExprKind::Neq,
            Self::Lt(_) => ExprKind::Lt,
            Self::Lte(_) => ExprKind::Lte,
            Self::Gt(_) => ExprKind::Gt,
            Self::Gte(_) => ExprKind::Gte,
            Self::And(_) => ExprKind::And,
            Self::Or(_) => ExprKind::Or,
            Self::Xor(_) => ExprKind::Xor,
            Self::Not(_) => ExprKind::Not,
            Self::Implies(_) => ExprKind::Implies,
            Self::Iff(_) => ExprKind::Iff,
            Self::True => ExprKind::True,
            Self::False => ExprKind::False,
            Self::Set(_) => ExprKind::Set,
            Self::Union(_) => ExprKind::Union,
            Self::Intersection(_) => ExprKind::Intersection,
            Self::SetDiff(_) => ExprKind::SetDiff,
            Self::CartesianProduct(_) => ExprKind::CartesianProduct,
            Self::In(_) => ExprKind::In,
            Self::NotIn(_) => ExprKind::NotIn,
            Self::Subset(_) => ExprKind::Subset,
            Self::ProperSubset(_) => ExprKind::ProperSubset,
            Self::NotSubset(_) => ExprKind::NotSubset,
            Self::NotProperSubset(_) => ExprKind::NotProperSubset,
            Self::Naturals => ExprKind::Naturals,
            Self::Integers => ExprKind::Integers,
            Self::Rationals => ExprKind::Rationals,
            Self::Reals => ExprKind::Reals,
            Self::Complexes => ExprKind::Complexes,
            Self::Empty => ExprKind::Empty,
            Self::Mod(_) => ExprKind::Mod,
            Self::Root(_) => ExprKind::Root,
            Self::Log(_) => ExprKind::Log,
            Self::Abs(_) => ExprKind::Abs,
            Self::Func(_) => ExprKind::Func,
            Self::Sum(_) => ExprKind::Sum,
            Self::Prod(_) => ExprKind::Prod,
            Self::Limit(_) => ExprKind::Limit,
            Self::Diff(_) => ExprKind::Diff,
            Self::Int(_) => ExprKind::Int,
            Self::Ellipsis => ExprKind::Ellipsis,
            Self::Infinity => ExprKind::Infinity,
            Self::Pi => ExprKind::Pi,
        }
    }

    /// Returns the operands of this node, in order. Leaves (numbers, identifiers, constants) have
    /// no operands; an identifier's subscript is not an operand.
    pub fn args(&self) -> &[Expr] {
        match self {
            Self::Add(args)
            | Self::Mul { args, .. }
            | Self::Eq(args)
            | Self::Neq(args)
            | Self::Lt(args)
            | Self::Lte(args)
            | Self::Gt(args)
            | Self::Gte(args)
            | Self::And(args)
            | Self::Or(args)
            | Self::Xor(args)
            | Self::Set(args)
            | Self::Union(args)
            | Self::Intersection(args)
            | Self::CartesianProduct(args)
            | Self::Func(args) => args,
            Self::Neg { arg, .. } | Self::Not(arg) | Self::Abs(arg) => std::slice::from_ref(&**arg),
            Self::Div(args)
            | Self::Exp(args)
            | Self::Implies(args)
            | Self::Iff(args)
            | Self::SetDiff(args)
            | Self::In(args)
            | Self::NotIn(args)
            | Self::Subset(args)
            | Self::ProperSubset(args)
            | Self::NotSubset(args)
            | Self::NotProperSubset(args)
            | Self::Mod(args)
            | Self::Root(args)
            | Self::Log(args)
            | Self::Diff(args)
            | Self::Int(args) => &args[..],
            Self::Sum(args) | Self::Prod(args) | Self::Limit(args) => &args[..],
            Self::Number(_)
            | Self::Identifier(_)
            | Self::True
            | Self::False
            | Self::Naturals
            | Self::Integers
            | Self::Rationals
            | Self::Reals
            | Self::Complexes
            | Self::Empty
            | Self::Ellipsis
            | Self::Infinity
            | Self::Pi => &[],
        }
    }

    /// Returns every direct child of this node: its operands, plus the subscript of an
    /// identifier.
    pub(crate) fn children(&self) -> &[Expr] {
        match self {
            Self::Identifier(Identifier { subscript: Some(subscript), .. }) => {
                std::slice::from_ref(&**subscript)
            },
            _ => self.args(),
        }
    }

    /// If the expression is a [`Expr::Number`], returns its decimal text.
    pub fn as_number(&self) -> Option<&str> {
        match self {
            Self::Number(num) => Some(&num.value),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// If the expression is a [`Expr::Neg`], returns the negated expression.
    pub fn as_neg(&self) -> Option<&Expr> {
        match self {
            Self::Neg { arg, .. } => Some(arg),
            _ => None,
        }
    }

    /// If the expression is a [`Expr::Div`], returns the numerator and denominator.
    pub fn as_div(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Self::Div(args) => Some((&args[0], &args[1])),
            _ => None,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Identifier(lhs), Self::Identifier(rhs)) => lhs == rhs,
            (
                Self::Neg { arg: lhs, subtraction: lhs_sub },
                Self::Neg { arg: rhs, subtraction: rhs_sub },
            ) => lhs_sub == rhs_sub && lhs == rhs,
            (lhs, rhs) => lhs.kind() == rhs.kind() && lhs.args() == rhs.args(),
        }
    }
}

impl Eq for Expr {}
