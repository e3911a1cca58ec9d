//! Recursive-descent parser for range expressions
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expression       := "" | "*" | "latest" | url | range-or-version ( "||" range-or-version )*
//! range-or-version := version-token ( ( ws | "-" ) version-token )*
//! version-token    := operator? ws? "v"? major ( "." field ( "." field pre-release? build? )? )?
//! operator         := "=" | "<=" | ">=" | "<" | ">" | "~"
//! field            := digits | "x" | "X"
//! ```
//!
//! The parser never backtracks across alternatives and stops at the first error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{
    Found, ParseError, EXPECTED_EOF, EXPECTED_NUMBER, EXPECTED_NUMBER_OR_X, EXPECTED_OR,
    EXPECTED_VERSION,
};
use crate::expression::{Expression, Range, Relational, RelationalOp, LATEST_TEXT};
use crate::version::{Field, Version};

lazy_static! {
    // http://, https://, git://, git+ssh://, git+https://, git+http://
    static ref URL_RE: Regex = Regex::new(r"^(?:https?|git|git\+ssh|git\+https?)://").unwrap();
}

/// A prefix that turns a version into an operator expression
#[derive(Debug, Clone, Copy)]
enum Prefix {
    Relational(RelationalOp),
    Tilde,
}

// Two-character operators come before their one-character prefixes.
const PREFIXES: [(&str, Prefix); 6] = [
    ("=", Prefix::Relational(RelationalOp::Equal)),
    ("<=", Prefix::Relational(RelationalOp::LessThanOrEqual)),
    (">=", Prefix::Relational(RelationalOp::GreaterThanOrEqual)),
    ("<", Prefix::Relational(RelationalOp::LessThan)),
    (">", Prefix::Relational(RelationalOp::GreaterThan)),
    ("~", Prefix::Tilde),
];

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '.' || ch == '-'
}

/// Character cursor over one trimmed input string
pub struct RangeParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> RangeParser<'a> {
    /// Create a parser over `input`. Surrounding whitespace is ignored.
    pub fn new(input: &'a str) -> Self {
        RangeParser {
            input: input.trim(),
            position: 0,
        }
    }

    /// Parse the whole input as a range expression
    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        log::trace!("Parsing range expression \"{}\"", self.input);

        if self.input.is_empty() || self.input == "*" {
            return Ok(Expression::Any);
        }
        if self.input == LATEST_TEXT {
            return Ok(Expression::Latest);
        }
        if URL_RE.is_match(self.input) {
            return Ok(Expression::Url(self.input.to_string()));
        }

        self.expression()
    }

    /// Parse the whole input as one plain version, without operators or wildcards
    pub fn parse_version(&mut self) -> Result<Version, ParseError> {
        let version = self.version_fields(EXPECTED_NUMBER, EXPECTED_NUMBER, false)?;
        if !self.at_end() {
            return Err(self.error(EXPECTED_EOF));
        }
        Ok(version)
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        let mut result = self.range_or_version()?;
        loop {
            self.whitespace();
            if self.at_end() {
                return Ok(result);
            }
            if !self.consume_str("||") {
                return Err(self.error(EXPECTED_OR));
            }
            let right = self.range_or_version()?;
            result = Expression::or(result, right);
        }
    }

    fn range_or_version(&mut self) -> Result<Expression, ParseError> {
        self.whitespace();
        let mut result = self.version_token()?;
        let mut first = true;

        loop {
            let separated = self.whitespace() > 0;
            if self.at_end() || self.looking_at("||") {
                break;
            }
            let hyphen = first && self.consume_char('-');
            if !hyphen && !separated {
                break;
            }
            self.whitespace();

            let right = self.version_token()?;
            result = match (result, right) {
                (Expression::Version(lower), Expression::Version(upper)) => {
                    Expression::Range(Range::hyphen(lower, upper))
                }
                (left, right) => Expression::and(left, right),
            };
            first = false;
        }

        Ok(result)
    }

    fn version_token(&mut self) -> Result<Expression, ParseError> {
        let prefix = self.prefix();
        self.whitespace();
        let version = self.version_operand()?;

        Ok(match prefix {
            None if version.is_wildcard() => Expression::Range(Range::x_range(version)),
            None => Expression::Version(version),
            Some(Prefix::Tilde) => Expression::Range(Range::tilde(version)),
            Some(Prefix::Relational(operator)) => {
                Expression::Relational(Relational::new(operator, version))
            }
        })
    }

    fn prefix(&mut self) -> Option<Prefix> {
        PREFIXES
            .iter()
            .find(|(token, _)| self.consume_str(token))
            .map(|(_, prefix)| *prefix)
    }

    /// Parse the version part of a token, wildcards allowed after the major field.
    pub(crate) fn version_operand(&mut self) -> Result<Version, ParseError> {
        self.version_fields(EXPECTED_VERSION, EXPECTED_NUMBER_OR_X, true)
    }

    fn version_fields(
        &mut self,
        major_expected: &'static str,
        field_expected: &'static str,
        allow_wildcard: bool,
    ) -> Result<Version, ParseError> {
        let start = self.position;
        self.consume_char('v');

        let major = self.number(major_expected)?;

        let mut minor = None;
        let mut patch = None;
        let mut pre_release = Vec::new();
        let mut build = Vec::new();

        if self.consume_char('.') {
            minor = Some(self.field(field_expected, allow_wildcard)?);

            if self.consume_char('.') {
                patch = Some(self.field(field_expected, allow_wildcard)?);
                pre_release = self.identifiers('-');
                build = self.identifiers('+');
            }
        }

        let text = &self.input[start..self.position];
        Ok(Version::from_fields(text, major, minor, patch, pre_release, build))
    }

    fn field(&mut self, expected: &'static str, allow_wildcard: bool) -> Result<Field, ParseError> {
        if allow_wildcard && self.consume_if(|ch| ch == 'x' || ch == 'X') {
            return Ok(Field::Wildcard);
        }
        self.number(expected).map(Field::Number)
    }

    fn number(&mut self, expected: &'static str) -> Result<u64, ParseError> {
        let start = self.position;
        let digits = self.take_while(|ch| ch.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.error(expected));
        }
        digits.parse().map_err(|_| {
            let first = digits.chars().next().map_or(Found::EndOfInput, Found::Char);
            ParseError::new(first, expected, start)
        })
    }

    /// A dot-separated identifier run, optionally introduced by `separator`.
    ///
    /// The separator is only consumed when an identifier follows it.
    fn identifiers(&mut self, separator: char) -> Vec<String> {
        let rest = self.rest();
        match rest.strip_prefix(separator) {
            Some(after) if after.starts_with(is_identifier_char) => {
                self.position += separator.len_utf8();
            }
            _ if rest.starts_with(|ch: char| ch.is_ascii_alphanumeric()) => {}
            _ => return Vec::new(),
        }

        self.take_while(is_identifier_char)
            .split('.')
            .filter(|identifier| !identifier.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn whitespace(&mut self) -> usize {
        self.take_while(char::is_whitespace).len()
    }

    fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        let len = self
            .rest()
            .find(|ch: char| !predicate(ch))
            .unwrap_or(self.input.len() - start);
        self.position += len;
        &self.input[start..self.position]
    }

    fn consume_if(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(ch) if predicate(ch) => {
                self.position += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn consume_char(&mut self, expected: char) -> bool {
        self.consume_if(|ch| ch == expected)
    }

    fn consume_str(&mut self, token: &str) -> bool {
        if self.looking_at(token) {
            self.position += token.len();
            true
        } else {
            false
        }
    }

    fn looking_at(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn error(&self, expected: &'static str) -> ParseError {
        let found = self.peek().map_or(Found::EndOfInput, Found::Char);
        ParseError::new(found, expected, self.position)
    }
}
