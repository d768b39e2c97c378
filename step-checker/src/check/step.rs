use std::fmt;
use step_ast::Expr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The algebraic laws a step can be justified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `a+0 = a`
    /// `0+a = a`
    AddZero,

    /// `a*1 = a`
    /// `1*a = a`
    MulOne,

    /// `a*0 = 0`
    MulZero,

    /// `a+b = b+a`
    /// `a*b = b*a`
    Commutative,

    /// `a = b` is `b = a`
    Symmetric,

    /// `2+3 = 5`
    EvaluateAdd,

    /// `2*3 = 6`
    EvaluateMul,

    /// `a*(b+c) = a*b + a*c`
    Distribution,

    /// `a*b + a*c = a*(b+c)`
    Factoring,

    /// `a/(b/c) = a*(c/b)`
    DivByFrac,

    /// `a/1 = a`
    DivByOne,

    /// `a/a = 1`
    DivBySame,

    /// `a/b * c/d = (a*c)/(b*d)`
    MulFractions,

    /// `30 = 2*3*5`
    PrimeFactorization,

    /// `(a*b)/(a*c) = (a/a) * (b/c)`
    CancelFactors,

    /// `a + -a = 0`
    AddInverse,

    /// `-(-a) = a`
    DoubleNegative,

    /// `a - b = a + -b`
    SubIsNeg,

    /// `-a = -1*a`
    NegIsMulNegOne,

    /// `-a * -b = a*b`
    MulTwoNegatives,

    /// `a = b` becomes `a+c = b+c`
    AddBothSides,

    /// `a = b` becomes `a-c = b-c`
    SubBothSides,

    /// `a = b` becomes `a*c = b*c`
    MulBothSides,

    /// `a = b` becomes `a/c = b/c`
    DivBothSides,
}

impl Step {
    /// Returns the human-readable description of the law.
    pub fn message(self) -> &'static str {
        match self {
            Self::AddZero => "addition with identity",
            Self::MulOne => "multiplication with identity",
            Self::MulZero => "multiplication by zero",
            Self::Commutative => "commutative property",
            Self::Symmetric => "symmetric property",
            Self::EvaluateAdd => "evaluation of addition",
            Self::EvaluateMul => "evaluation of multiplication",
            Self::Distribution => "distribution",
            Self::Factoring => "factoring",
            Self::DivByFrac => "dividing by a fraction is the same as multiplying by the reciprocal",
            Self::DivByOne => "division by one",
            Self::DivBySame => "division by the same value",
            Self::MulFractions => "multiplying fractions",
            Self::PrimeFactorization => "prime factorization",
            Self::CancelFactors => "canceling factors in division",
            Self::AddInverse => "adding inverse",
            Self::DoubleNegative => "negative of a negative is positive",
            Self::SubIsNeg => "subtracting is the same as adding the inverse",
            Self::NegIsMulNegOne => "negation is the same as multiplying by negative one",
            Self::MulTwoNegatives => "multiplying two negatives is a positive",
            Self::AddBothSides => "adding the same value to both sides",
            Self::SubBothSides => "subtracting the same value from both sides",
            Self::MulBothSides => "multiplying both sides by the same value",
            Self::DivBothSides => "dividing both sides by the same value",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One law that was applied, and the pair of expressions it was applied to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reason {
    /// The law.
    pub step: Step,

    /// The expressions before and after the law was applied, in that order.
    pub nodes: [Expr; 2],
}

impl Reason {
    /// Creates a reason, cloning the expressions it refers to.
    pub fn new(step: Step, before: &Expr, after: &Expr) -> Self {
        Self { step, nodes: [before.clone(), after.clone()] }
    }

    /// Returns the human-readable description of the law.
    pub fn message(&self) -> &'static str {
        self.step.message()
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.step, self.nodes[0], self.nodes[1])
    }
}

/// The outcome of checking a step.
///
/// Reasons are listed in the order the laws were applied, outermost first. A negative result never
/// carries reasons, and two expressions that are strictly equal need none.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Check {
    /// Whether the second expression follows from the first.
    pub equivalent: bool,

    /// The laws that justify the step.
    pub reasons: Vec<Reason>,
}

impl Check {
    /// A step that does not follow.
    pub fn fail() -> Self {
        Self::default()
    }

    /// A step that follows, for the given reasons.
    pub fn pass(reasons: Vec<Reason>) -> Self {
        Self { equivalent: true, reasons }
    }

    /// A step that follows for no particular reason if `equivalent` is true, and does not follow
    /// otherwise.
    pub fn when(equivalent: bool) -> Self {
        Self { equivalent, reasons: Vec::new() }
    }

    /// Returns the messages of the reasons, in order.
    pub fn messages(&self) -> Vec<&'static str> {
        self.reasons.iter().map(Reason::message).collect()
    }
}
