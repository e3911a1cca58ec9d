//! Relational operators and the expressions they build

use std::cmp::Ordering;
use std::fmt;

use crate::version::Version;

/// Comparison operators accepted in front of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOp {
    /// Equal (=)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl RelationalOp {
    /// Look up an operator by its symbol. `==` is accepted as an alias of `=`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "=" | "==" => Some(RelationalOp::Equal),
            "<" => Some(RelationalOp::LessThan),
            "<=" => Some(RelationalOp::LessThanOrEqual),
            ">" => Some(RelationalOp::GreaterThan),
            ">=" => Some(RelationalOp::GreaterThanOrEqual),
            _ => None,
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationalOp::Equal => "=",
            RelationalOp::LessThan => "<",
            RelationalOp::LessThanOrEqual => "<=",
            RelationalOp::GreaterThan => ">",
            RelationalOp::GreaterThanOrEqual => ">=",
        }
    }

    /// Whether `left <op> right` holds, given `left.cmp(right)`
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            RelationalOp::Equal => ordering == Ordering::Equal,
            RelationalOp::LessThan => ordering == Ordering::Less,
            RelationalOp::LessThanOrEqual => ordering != Ordering::Greater,
            RelationalOp::GreaterThan => ordering == Ordering::Greater,
            RelationalOp::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for RelationalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operator applied to a single version, e.g. `>=1.0.2`
#[derive(Debug, Clone, PartialEq)]
pub struct Relational {
    operator: RelationalOp,
    operand: Version,
}

impl Relational {
    pub fn new(operator: RelationalOp, operand: Version) -> Self {
        Relational { operator, operand }
    }

    pub fn operator(&self) -> RelationalOp {
        self.operator
    }

    pub fn operand(&self) -> &Version {
        &self.operand
    }

    /// Check the candidate against the operand.
    ///
    /// A wildcard operand stands for its whole x-range: `=1.2.x` is the range
    /// itself, `<1.2.x` lies below it and `>1.2.x` above it.
    pub fn matches(&self, candidate: &Version) -> bool {
        if !self.operand.is_wildcard() {
            return self.operator.holds(self.compare_to(candidate));
        }

        let floor = &self.operand;
        let below_ceiling = floor
            .ceiling()
            .map_or(true, |ceiling| *candidate < ceiling);
        match self.operator {
            RelationalOp::Equal => candidate >= floor && below_ceiling,
            RelationalOp::LessThan => candidate < floor,
            RelationalOp::LessThanOrEqual => below_ceiling,
            RelationalOp::GreaterThan => !below_ceiling,
            RelationalOp::GreaterThanOrEqual => candidate >= floor,
        }
    }

    /// Position of the candidate relative to the operand
    pub fn compare_to(&self, candidate: &Version) -> Ordering {
        candidate.cmp(&self.operand)
    }
}

impl fmt::Display for Relational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.operand)
    }
}
