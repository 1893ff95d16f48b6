//! Events and their date values

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The literal that stands for "now" in a date range key.
pub const NOW_TOKEN: &str = "now";

/// ISO pattern used when a date value is written out.
const ISO_DATE: &str = "%Y-%m-%d";

static INLINE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([\w-]+)").unwrap());

/// One end of an event's range.
///
/// `Now` is a sentinel, not a calendar date: it never compares equal to any
/// `Concrete` value, whatever that date is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateValue {
    Concrete(NaiveDate),
    Now,
}

impl DateValue {
    pub fn is_now(&self) -> bool {
        matches!(self, DateValue::Now)
    }

    /// The calendar date, or `None` for the `now` sentinel.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Concrete(date) => Some(*date),
            DateValue::Now => None,
        }
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        DateValue::Concrete(date)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Concrete(date) => write!(f, "{}", date.format(ISO_DATE)),
            DateValue::Now => f.write_str(NOW_TOKEN),
        }
    }
}

impl FromStr for DateValue {
    type Err = chrono::ParseError;

    /// Reads the serialized form: `now` or an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NOW_TOKEN {
            return Ok(DateValue::Now);
        }
        NaiveDate::parse_from_str(s, ISO_DATE).map(DateValue::Concrete)
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A dated entry: `from` / `to` resolved from the range key and the verbatim body.
///
/// `to` is not required to follow `from`; inverted ranges are kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub from: DateValue,
    pub to: DateValue,
    pub body: String,
}

impl Event {
    pub fn new(from: DateValue, to: DateValue, body: impl Into<String>) -> Self {
        Self {
            from,
            to,
            body: body.into(),
        }
    }

    /// Inline `#tag` markers in the body, in order of appearance, without the `#`.
    pub fn tags(&self) -> Vec<&str> {
        INLINE_TAG
            .captures_iter(&self.body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}
