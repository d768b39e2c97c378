//! Exact values of number literals.
//!
//! [`Number`](step_ast::Number)s keep the decimal text they were written with. Whenever the checker
//! needs the value behind that text (to evaluate a sum, or to decide whether `1.0` is the identity
//! of multiplication), the text is parsed into a [`Rational`], so that `0.1 + 0.2` really is `0.3`.

use rug::{Integer, Rational};
use step_ast::Expr;

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// How two number literals are compared when neither rule nor structure decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
#[repr(u8)]
pub enum NumberEquality {
    /// Compare the exact values, so `1` equals `1.0` and `-0` equals `0`. Text that cannot be
    /// parsed as a decimal is compared as text.
    #[default]
    Value,

    /// Compare the text, so `1` and `1.0` are different numbers.
    Text,
}

impl std::fmt::Display for NumberEquality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumberEquality::Value => write!(f, "value"),
            NumberEquality::Text => write!(f, "text"),
        }
    }
}

/// Parses decimal text, such as `12`, `-0.75` or `.5`, into an exact rational number.
pub fn parse(text: &str) -> Option<Rational> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let mantissa = Integer::from_str_radix(&format!("{}{}", whole, fraction), 10).ok()?;
    let scale = Integer::from(Integer::u_pow_u(10, fraction.len() as u32));
    let value = Rational::from((mantissa, scale));
    Some(if negative { -value } else { value })
}

/// Parses decimal text into an integer, if the text denotes one (`6` and `6.0` both do).
pub fn parse_integer(text: &str) -> Option<Integer> {
    let value = parse(text)?;
    if *value.denom() == 1 {
        Some(value.into_numer_denom().0)
    } else {
        None
    }
}

/// Returns the value of a numeric operand: a number literal, or the negation of one.
pub fn value(expr: &Expr) -> Option<Rational> {
    match expr {
        Expr::Number(num) => parse(&num.value),
        Expr::Neg { arg, .. } => match &**arg {
            Expr::Number(num) => parse(&num.value).map(|value| -value),
            _ => None,
        },
        _ => None,
    }
}

/// Returns true if the expression is a numeric operand with the given value.
pub fn is_value(expr: &Expr, target: i32) -> bool {
    value(expr).map(|value| value == target).unwrap_or(false)
}

/// Compares two number literals under the given policy.
pub fn equal(lhs: &str, rhs: &str, policy: NumberEquality) -> bool {
    match policy {
        NumberEquality::Text => lhs == rhs,
        NumberEquality::Value => match (parse(lhs), parse(rhs)) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => lhs == rhs,
        },
    }
}

/// Adds up the given values. The empty sum is 0.
pub fn sum<'a>(values: impl IntoIterator<Item = &'a Rational>) -> Rational {
    values.into_iter().fold(Rational::new(), |acc, value| acc + value)
}

/// Multiplies the given values. The empty product is 1.
pub fn product<'a>(values: impl IntoIterator<Item = &'a Rational>) -> Rational {
    values.into_iter().fold(Rational::from(1), |acc, value| acc * value)
}
