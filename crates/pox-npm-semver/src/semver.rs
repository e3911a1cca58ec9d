//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::comparator::{ascending, Candidate};
use crate::error::{ParseError, SemverError};
use crate::expression::Expression;
use crate::version::Version;

/// Main facade for range operations
pub struct Semver;

impl Semver {
    /// Matches every version
    pub const ANY: Expression = Expression::Any;

    /// Marks "use the newest available version"
    pub const LATEST: Expression = Expression::Latest;

    /// Parse a range expression
    pub fn parse(range: &str) -> Result<Expression, ParseError> {
        Expression::parse(range)
    }

    /// Check if a version satisfies a range. Parse failures never satisfy.
    pub fn satisfies(version: &str, range: &str) -> bool {
        let expression = match Expression::parse(range) {
            Ok(expression) => expression,
            Err(err) => {
                log::debug!("Invalid range \"{}\": {}", range, err);
                return false;
            }
        };

        match expression.matches_str(version) {
            Ok(matched) => matched,
            Err(err) => {
                log::debug!("Invalid version \"{}\": {}", version, err);
                false
            }
        }
    }

    /// Return all versions that satisfy the range, in their original order
    pub fn satisfied_by(versions: &[&str], range: &str) -> Vec<String> {
        let expression = match Expression::parse(range) {
            Ok(expression) => expression,
            Err(err) => {
                log::debug!("Invalid range \"{}\": {}", range, err);
                return Vec::new();
            }
        };

        versions
            .iter()
            .filter(|version| expression.matches_str(version).unwrap_or(false))
            .map(|version| version.to_string())
            .collect()
    }

    /// Order a range relative to a version, see [`Expression::compare_to`]
    pub fn compare(range: &str, version: &str) -> Result<Ordering, SemverError> {
        let expression = Expression::parse(range)?;
        let version = Version::parse(version)?;
        Ok(expression.compare_to(&version)?)
    }

    /// Descending comparison of two version strings; `latest` sorts first
    pub fn compare_desc(version1: &str, version2: &str) -> Result<Ordering, ParseError> {
        ascending(version1, version2).map(Ordering::reverse)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    fn usort(versions: &[&str], descending: bool) -> Vec<String> {
        let mut parsed: Vec<(Candidate, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match Candidate::parse(v) {
                Ok(candidate) => Some((candidate, i)),
                Err(err) => {
                    log::debug!("Skipping invalid version \"{}\": {}", v, err);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            if descending {
                b.cmp(a)
            } else {
                a.cmp(b)
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
