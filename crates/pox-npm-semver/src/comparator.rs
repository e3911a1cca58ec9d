//! Version comparison utilities

use std::cmp::Ordering;

use crate::error::ParseError;
use crate::expression::{RelationalOp, LATEST_TEXT};
use crate::version::Version;

/// A version string as seen by the comparators: `latest` ranks above every version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Candidate {
    Version(Version),
    Latest,
}

impl Candidate {
    pub(crate) fn parse(text: &str) -> Result<Self, ParseError> {
        if text.trim() == LATEST_TEXT {
            return Ok(Candidate::Latest);
        }
        Version::parse(text).map(Candidate::Version)
    }
}

/// Compare two version strings in ascending order
pub(crate) fn ascending(version1: &str, version2: &str) -> Result<Ordering, ParseError> {
    Ok(Candidate::parse(version1)?.cmp(&Candidate::parse(version2)?))
}

/// Boolean comparisons over raw version strings. `latest` outranks every version.
pub struct Comparator;

impl Comparator {
    /// `version1` ranks strictly above `version2`
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// `version1` ranks above or level with `version2`
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// `version1` ranks strictly below `version2`
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Same precedence, so `v1.2` equals `1.2.0`
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator.
    ///
    /// Unparsable versions and unknown operators never compare.
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let ordering = match ascending(version1, version2) {
            Ok(ordering) => ordering,
            Err(err) => {
                log::debug!("Cannot compare \"{}\" with \"{}\": {}", version1, version2, err);
                return false;
            }
        };

        if operator == "!=" || operator == "<>" {
            return ordering != Ordering::Equal;
        }

        match RelationalOp::from_symbol(operator) {
            Some(op) => op.holds(ordering),
            None => {
                log::debug!("Unknown comparison operator \"{}\"", operator);
                false
            }
        }
    }

    /// Descending order for `sort_by`: `latest` first, unparsable versions last
    pub fn desc(version1: &str, version2: &str) -> Ordering {
        match (Candidate::parse(version1), Candidate::parse(version2)) {
            (Ok(a), Ok(b)) => b.cmp(&a),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => Ordering::Equal,
        }
    }
}
