//! Range expression tree

mod operator;
mod range;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, UnsupportedComparison};
use crate::parser::RangeParser;
use crate::version::Version;

pub use operator::{Relational, RelationalOp};
pub use range::Range;

/// Text of the `latest` marker
pub const LATEST_TEXT: &str = "latest";

/// Structural tag of an expression, for introspection only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Any,
    And,
    Or,
    Range,
    Tilde,
    XRange,
    Eq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    Url,
    Static,
    Latest,
}

/// A parsed range expression. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// `*` or the empty string: every version
    Any,
    /// `latest`: the newest available version, resolved by the caller
    Latest,
    /// A single exact version
    Version(Version),
    /// `=`, `<`, `<=`, `>` or `>=` applied to one version
    Relational(Relational),
    /// Tilde, x-range or hyphen range
    Range(Range),
    /// Both sides must hold
    And(Box<Expression>, Box<Expression>),
    /// Either side must hold
    Or(Box<Expression>, Box<Expression>),
    /// A URL pseudo-version, matched by text only
    Url(String),
}

impl Expression {
    /// Parse a range expression
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        RangeParser::new(text).parse()
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// Check whether the candidate version satisfies this expression
    pub fn matches(&self, candidate: &Version) -> bool {
        match self {
            Expression::Any => true,
            Expression::Latest => candidate.text() == LATEST_TEXT,
            Expression::Version(version) => version == candidate,
            Expression::Relational(relational) => relational.matches(candidate),
            Expression::Range(range) => range.matches(candidate),
            Expression::And(left, right) => left.matches(candidate) && right.matches(candidate),
            Expression::Or(left, right) => left.matches(candidate) || right.matches(candidate),
            Expression::Url(url) => url == candidate.text(),
        }
    }

    /// Parse `candidate` as a plain version and check it against this expression.
    ///
    /// URL and `latest` expressions match on the trimmed text directly.
    pub fn matches_str(&self, candidate: &str) -> Result<bool, ParseError> {
        match self {
            Expression::Url(url) => Ok(url == candidate.trim()),
            Expression::Latest => Ok(candidate.trim() == LATEST_TEXT),
            _ => Ok(self.matches(&Version::parse(candidate)?)),
        }
    }

    /// Three-way comparison against the candidate.
    ///
    /// `Equal` means the candidate falls inside. A version or range reports
    /// its own position: `Less` when it lies below the candidate, `Greater`
    /// when above. A relational expression reports the candidate relative to
    /// its operand, so `matches` is the operator applied to this result.
    /// For `And`, the left side acts as the lower bound and the right side as
    /// the inclusive upper bound. A candidate that passes only the lower bound
    /// yields `Less`. Any other failure yields `Greater`. `Or` yields `Equal`
    /// when either side does, and the left side's ordering otherwise.
    pub fn compare_to(&self, candidate: &Version) -> Result<Ordering, UnsupportedComparison> {
        match self {
            Expression::Any => Ok(Ordering::Equal),
            Expression::Latest => Ok(if self.matches(candidate) {
                Ordering::Equal
            } else {
                Ordering::Greater
            }),
            Expression::Version(version) => Ok(version.cmp(candidate)),
            Expression::Relational(relational) => Ok(relational.compare_to(candidate)),
            Expression::Range(range) => Ok(range.compare_to(candidate)),
            Expression::And(left, right) => {
                let lower = left.bound_position(candidate)? != Ordering::Greater;
                let upper = right.bound_position(candidate)? != Ordering::Less;
                Ok(match (lower, upper) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Less,
                    _ => Ordering::Greater,
                })
            }
            Expression::Or(left, right) => {
                let left = left.compare_to(candidate)?;
                if left == Ordering::Equal || right.compare_to(candidate)? == Ordering::Equal {
                    Ok(Ordering::Equal)
                } else {
                    Ok(left)
                }
            }
            Expression::Url(_) => Err(UnsupportedComparison::new(self.text())),
        }
    }

    /// Position of this expression relative to the candidate, as one bound of an `And`
    fn bound_position(&self, candidate: &Version) -> Result<Ordering, UnsupportedComparison> {
        match self {
            Expression::Relational(relational) => Ok(relational.compare_to(candidate).reverse()),
            _ => self.compare_to(candidate),
        }
    }

    /// Canonical text, built from the parsed substrings
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// True for a single exact version and for `*`
    pub fn is_static(&self) -> bool {
        matches!(self, Expression::Any | Expression::Version(_))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Expression::Any => Kind::Any,
            Expression::Latest => Kind::Latest,
            Expression::Version(_) => Kind::Static,
            Expression::Relational(relational) => match relational.operator() {
                RelationalOp::Equal => Kind::Eq,
                RelationalOp::LessThan => Kind::Lt,
                RelationalOp::LessThanOrEqual => Kind::LtEq,
                RelationalOp::GreaterThan => Kind::Gt,
                RelationalOp::GreaterThanOrEqual => Kind::GtEq,
            },
            Expression::Range(Range::Tilde(_)) => Kind::Tilde,
            Expression::Range(Range::XRange(_)) => Kind::XRange,
            Expression::Range(Range::Hyphen { .. }) => Kind::Range,
            Expression::And(..) => Kind::And,
            Expression::Or(..) => Kind::Or,
            Expression::Url(_) => Kind::Url,
        }
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Any => write!(f, "*"),
            Expression::Latest => write!(f, "{}", LATEST_TEXT),
            Expression::Version(version) => write!(f, "{}", version),
            Expression::Relational(relational) => write!(f, "{}", relational),
            Expression::Range(range) => write!(f, "{}", range),
            Expression::And(left, right) => write!(f, "{} {}", left, right),
            Expression::Or(left, right) => write!(f, "{} || {}", left, right),
            Expression::Url(url) => write!(f, "{}", url),
        }
    }
}
