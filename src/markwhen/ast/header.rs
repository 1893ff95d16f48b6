//! Page header and the date format alias table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The calendar patterns a page can be configured with through `dateFormat:`.
///
/// Each variant is known by one alias in the source text and resolves to a chrono pattern.
/// Serde uses the alias as the external representation, so configuration files name the
/// same strings a document would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// US ordering, month first.
    #[default]
    #[serde(rename = "MM/dd/yy")]
    MonthDayYear,
    /// European ordering, day first.
    #[serde(rename = "d/M/y")]
    DayMonthYear,
}

impl DateFormat {
    /// Alias table, in lookup order.
    pub const ALIASES: [(&'static str, DateFormat); 2] = [
        ("MM/dd/yy", DateFormat::MonthDayYear),
        ("d/M/y", DateFormat::DayMonthYear),
    ];

    /// Look up a `dateFormat:` alias. The alias is matched exactly after trimming.
    pub fn from_alias(alias: &str) -> Option<Self> {
        let alias = alias.trim();
        Self::ALIASES
            .iter()
            .find(|(name, _)| *name == alias)
            .map(|(_, format)| *format)
    }

    pub fn alias(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "MM/dd/yy",
            DateFormat::DayMonthYear => "d/M/y",
        }
    }

    /// The chrono pattern dates are parsed with.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::MonthDayYear => "%m/%d/%Y",
            DateFormat::DayMonthYear => "%d/%m/%Y",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

/// Returned when a string is not a known date format alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown date format: {0}")]
pub struct UnknownDateFormat(pub String);

impl FromStr for DateFormat {
    type Err = UnknownDateFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_alias(s).ok_or_else(|| UnknownDateFormat(s.trim().to_string()))
    }
}

/// Per-page metadata set by `title:`, `description:` and `dateFormat:` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: String,
    pub description: String,
    pub date_format: DateFormat,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// A header with empty text fields and the given date format.
    pub fn with_date_format(date_format: DateFormat) -> Self {
        Self {
            date_format,
            ..Self::default()
        }
    }
}
