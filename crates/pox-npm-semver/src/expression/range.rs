//! Tilde, x-range and hyphen ranges

use std::cmp::Ordering;
use std::fmt;

use crate::version::Version;

/// A bounded range of versions
#[derive(Debug, Clone, PartialEq)]
pub enum Range {
    /// `~1.2.3`: at least the version, below its next minor (or major) release
    Tilde(Version),
    /// `1.2.x`: the wildcard version with `x` read as 0, below the next bump
    /// of the field before the wildcard
    XRange(Version),
    /// `1.0.0 - 2.0.0`: both ends inclusive
    Hyphen { lower: Version, upper: Version },
}

impl Range {
    pub fn tilde(version: Version) -> Self {
        Range::Tilde(version)
    }

    pub fn x_range(version: Version) -> Self {
        Range::XRange(version)
    }

    pub fn hyphen(lower: Version, upper: Version) -> Self {
        Range::Hyphen { lower, upper }
    }

    /// The inclusive lower bound
    pub fn lower(&self) -> &Version {
        match self {
            Range::Tilde(version) | Range::XRange(version) => version,
            Range::Hyphen { lower, .. } => lower,
        }
    }

    fn below_upper(&self, candidate: &Version) -> bool {
        match self {
            Range::Tilde(version) | Range::XRange(version) => version
                .ceiling()
                .map_or(true, |ceiling| *candidate < ceiling),
            Range::Hyphen { upper, .. } => candidate <= upper,
        }
    }

    pub fn matches(&self, candidate: &Version) -> bool {
        self.compare_to(candidate) == Ordering::Equal
    }

    /// `Equal` inside the range, `Less` when the range lies below the
    /// candidate, `Greater` when it lies above.
    pub fn compare_to(&self, candidate: &Version) -> Ordering {
        let above_lower = candidate >= self.lower();
        match (above_lower, self.below_upper(candidate)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Range::Tilde(version) => write!(f, "~{}", version),
            Range::XRange(version) => write!(f, "{}", version),
            Range::Hyphen { lower, upper } => write!(f, "{} - {}", lower, upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::RangeParser;

    fn v(text: &str) -> Version {
        Version::parse(text).unwrap()
    }

    fn operand(text: &str) -> Version {
        RangeParser::new(text).version_operand().unwrap()
    }

    #[test]
    fn test_tilde() {
        let range = Range::tilde(operand("1.2.3"));
        assert!(range.matches(&v("1.2.3")));
        assert!(range.matches(&v("1.2.9")));
        assert!(!range.matches(&v("1.2.2")));
        assert!(!range.matches(&v("1.3.0")));

        let range = Range::tilde(operand("1.2"));
        assert!(range.matches(&v("1.2.0")));
        assert!(range.matches(&v("1.9")));
        assert!(!range.matches(&v("2.0")));

        let range = Range::tilde(operand("1.0.3"));
        assert!(range.matches(&v("1.5.0")));
        assert!(!range.matches(&v("2.0.0")));
    }

    #[test]
    fn test_x_range() {
        let range = Range::x_range(operand("1.2.x"));
        assert!(range.matches(&v("1.2.0")));
        assert!(range.matches(&v("1.2.3")));
        assert!(!range.matches(&v("1.3")));

        let range = Range::x_range(operand("1.x.x"));
        assert!(range.matches(&v("1")));
        assert!(range.matches(&v("1.5.9")));
        assert!(!range.matches(&v("2.0.0")));
        assert!(!range.matches(&v("0.9.9")));
    }

    #[test]
    fn test_tilde_on_zero_patch_bumps_major() {
        let range = Range::tilde(operand("1.2.0"));
        assert!(range.matches(&v("1.2.0")));
        assert!(range.matches(&v("1.9.0")));
        assert!(!range.matches(&v("2.0.0")));
    }

    #[test]
    fn test_unbumpable_field_leaves_range_open() {
        let max = u64::MAX;
        let range = Range::tilde(operand(&format!("{}.1", max)));
        assert!(range.matches(&v(&format!("{}.1.0", max))));
        assert!(range.matches(&v(&format!("{}.{}.{}", max, max, max))));
        assert!(!range.matches(&v(&format!("{}.0.9", max))));

        let range = Range::x_range(operand(&format!("1.{}.x", max)));
        assert!(range.matches(&v(&format!("1.{}.7", max))));
        assert!(!range.matches(&v("1.0.0")));
    }

    #[test]
    fn test_hyphen_is_inclusive() {
        let range = Range::hyphen(v("1.0.0"), v("2.9999.9999"));
        assert!(range.matches(&v("1.0.0")));
        assert!(range.matches(&v("1.5")));
        assert!(range.matches(&v("2.9999.9999")));
        assert!(!range.matches(&v("3")));
    }

    #[test]
    fn test_compare_to() {
        let range = Range::hyphen(v("1.0.0"), v("2.0.0"));
        assert_eq!(range.compare_to(&v("0.9.0")), Ordering::Greater);
        assert_eq!(range.compare_to(&v("1.5.0")), Ordering::Equal);
        assert_eq!(range.compare_to(&v("2.0.1")), Ordering::Less);
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::tilde(operand("1.2")).to_string(), "~1.2");
        assert_eq!(Range::x_range(operand("1.2.X")).to_string(), "1.2.X");
        assert_eq!(Range::hyphen(v("1.0.0"), v("v2.0.0")).to_string(), "1.0.0 - v2.0.0");
    }
}
