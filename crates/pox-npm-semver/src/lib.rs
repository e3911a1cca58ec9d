//! npm-style version ranges
//!
//! This crate parses range expressions such as `>=1.0.2 <2.1.2 || 3.x`,
//! `~1.2` or `1.0.0 - 2.9999.9999` into an expression tree and checks
//! versions against them using semantic-version precedence.

mod comparator;
mod error;
pub mod expression;
mod parser;
mod semver;
mod version;

pub use comparator::Comparator;
pub use error::{Found, ParseError, SemverError, UnsupportedComparison};
pub use expression::{Expression, Kind, Range, Relational, RelationalOp};
pub use parser::RangeParser;
pub use semver::Semver;
pub use version::{Version, Wildcard};
