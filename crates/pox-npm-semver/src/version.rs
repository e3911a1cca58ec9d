//! Concrete versions and their precedence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::RangeParser;

/// Position of the `x` marker in a wildcard version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `1.x`, `1.x.x`
    Minor,
    /// `1.2.x`
    Patch,
}

/// A numeric version field as written in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Number(u64),
    Wildcard,
}

impl Field {
    fn value(self) -> u64 {
        match self {
            Field::Number(n) => n,
            Field::Wildcard => 0,
        }
    }

    fn is_wildcard(self) -> bool {
        self == Field::Wildcard
    }
}

/// An immutable version: `major.minor.patch`, pre-release and build identifiers.
///
/// Equality and ordering follow precedence, not text: `1.2.3` and `v1.2.3`
/// are equal. Wildcard fields count as zero.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<String>,
    build: Vec<String>,
    wildcard: Option<Wildcard>,
    text: String,
}

impl Version {
    /// Create a release version with no pre-release or build identifiers
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build: Vec::new(),
            wildcard: None,
            text: format!("{}.{}.{}", major, minor, patch),
        }
    }

    /// Build a version from the fields the parser consumed.
    pub(crate) fn from_fields(
        text: &str,
        major: u64,
        minor: Option<Field>,
        patch: Option<Field>,
        pre_release: Vec<String>,
        build: Vec<String>,
    ) -> Self {
        let wildcard = if minor.is_some_and(Field::is_wildcard) {
            Some(Wildcard::Minor)
        } else if patch.is_some_and(Field::is_wildcard) {
            Some(Wildcard::Patch)
        } else {
            None
        };

        Version {
            major,
            minor: minor.map_or(0, Field::value),
            patch: patch.map_or(0, Field::value),
            pre_release,
            build,
            wildcard,
            text: text.to_string(),
        }
    }

    /// Parse a plain version such as `1.2.3-beta.1+build.5`.
    ///
    /// Operators, wildcards and trailing input are rejected.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        RangeParser::new(text).parse_version()
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers, split on `.`
    pub fn pre_release(&self) -> &[String] {
        &self.pre_release
    }

    /// Build metadata identifiers, split on `.`
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// The wildcard position, if this version was written with an `x` field
    pub fn wildcard(&self) -> Option<Wildcard> {
        self.wildcard
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard.is_some()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// The text exactly as it was parsed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// First version above the range this version opens as a tilde or x-range.
    ///
    /// `1.2.x` -> `1.3.0`, `1.x` -> `2.0.0`, `~1.2` and `~1.2.0` -> `2.0.0`,
    /// `~1.2.3` -> `1.3.0`, `~1.0.3` -> `2.0.0`. `None` when the bumped field
    /// is already `u64::MAX`, which leaves the range open above.
    pub(crate) fn ceiling(&self) -> Option<Version> {
        let bump_major = match self.wildcard {
            Some(Wildcard::Minor) => true,
            Some(Wildcard::Patch) => false,
            None => self.patch == 0 || self.minor == 0,
        };

        if bump_major {
            self.major.checked_add(1).map(|major| Version::new(major, 0, 0))
        } else {
            self.minor
                .checked_add(1)
                .map(|minor| Version::new(self.major, minor, 0))
        }
    }
}

/// Compare identifier lists element by element, then by length.
///
/// Numeric identifiers compare numerically and sort below alphanumeric ones.
/// With `longer_is_greater` unset the shorter list wins a tie, which is how
/// `1.0.0` outranks `1.0.0-alpha`.
fn compare_identifiers(left: &[String], right: &[String], longer_is_greater: bool) -> Ordering {
    for (l, r) in left.iter().zip(right.iter()) {
        let ordering = match (numeric(l), numeric(r)) {
            (Some(l), Some(r)) => l.cmp(&r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => l.cmp(r),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    let by_length = left.len().cmp(&right.len());
    if longer_is_greater {
        by_length
    } else {
        by_length.reverse()
    }
}

fn numeric(identifier: &str) -> Option<u64> {
    if identifier.is_empty() || !identifier.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    identifier.parse().ok()
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_identifiers(&self.pre_release, &other.pre_release, false))
            // Longer build metadata ranks higher. This departs from semver.org on purpose.
            .then_with(|| compare_identifiers(&self.build, &other.build, true))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
