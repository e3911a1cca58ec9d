//! Error types for range parsing and comparison

use std::fmt;
use thiserror::Error;

/// Expected at the start of a version token and in the major field.
pub const EXPECTED_VERSION: &str = "0-9+, =, <, <=, >, >= or ~";

/// Expected in the minor and patch fields of a range expression.
pub const EXPECTED_NUMBER_OR_X: &str = "0-9+ or x";

/// Expected in any field of a plain version, where wildcards are not allowed.
pub const EXPECTED_NUMBER: &str = "0-9+";

/// Expected after a complete range when more input follows.
pub const EXPECTED_OR: &str = "||";

/// Expected after a complete plain version.
pub const EXPECTED_EOF: &str = "eof";

/// What the parser found where its expectation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// An unexpected character
    Char(char),
    /// The input ended early
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(ch) => write!(f, "{}", ch),
            Found::EndOfInput => write!(f, "eof"),
        }
    }
}

/// A failed parse. The first unmet expectation aborts the whole parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("found: '{found}', expected: '{expected}'")]
pub struct ParseError {
    found: Found,
    expected: &'static str,
    position: usize,
}

impl ParseError {
    pub(crate) fn new(found: Found, expected: &'static str, position: usize) -> Self {
        ParseError {
            found,
            expected,
            position,
        }
    }

    /// The offending character, or end of input
    pub fn found(&self) -> Found {
        self.found
    }

    /// Description of the characters accepted at the failing position
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Byte offset of the failure in the trimmed input
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Raised when ordering is requested from an expression that has none (URLs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported comparison for {expression}")]
pub struct UnsupportedComparison {
    expression: String,
}

impl UnsupportedComparison {
    pub(crate) fn new(expression: impl Into<String>) -> Self {
        UnsupportedComparison {
            expression: expression.into(),
        }
    }

    /// Text of the expression that refused the comparison
    pub fn expression(&self) -> &str {
        &self.expression
    }
}

/// Any error produced by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    UnsupportedComparison(#[from] UnsupportedComparison),
}
