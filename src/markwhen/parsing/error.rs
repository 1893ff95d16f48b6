//! Parse errors
//!
//! Every failure is fatal: the first error aborts the parse and no partial document is
//! returned. [`ErrorKind`] says what went wrong, [`ParseError`] adds where.

use std::fmt;

/// One date strategy that was tried on a range key, and why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAttempt {
    pub strategy: &'static str,
    pub pattern: &'static str,
    pub separator: char,
    pub reason: String,
}

impl fmt::Display for DateAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} `{}` (separator `{}`): {}",
            self.strategy, self.pattern, self.separator, self.reason
        )
    }
}

fn describe_attempts(attempts: &[DateAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("malformed line, expected `<date range>: <description>`")]
    MalformedLine,
    #[error("unknown date format: {alias}")]
    UnknownDateFormat { alias: String },
    #[error("could not parse date range `{key}`: {}", describe_attempts(.attempts))]
    DateRange {
        key: String,
        attempts: Vec<DateAttempt>,
    },
    #[error("malformed tag definition, expected `#<name>: <color>`")]
    MalformedTag,
    #[error("failed to read input: {0}")]
    Io(String),
}

/// An [`ErrorKind`] located at a 1-based line of the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line_number}: {kind}")]
pub struct ParseError {
    pub line_number: usize,
    pub line: String,
    pub kind: ErrorKind,
}

impl ParseError {
    pub fn new(line_number: usize, line: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            line_number,
            line: line.into(),
            kind,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}
