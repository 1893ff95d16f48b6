//! Date range resolution
//!
//!     The key of an event line (everything before its first colon) is turned into a
//!     `from` / `to` pair by trying an ordered list of [`DateStrategy`]s. The first strategy
//!     that resolves the whole key wins; if none does, every attempt is reported.
//!
//!     The default list has two entries:
//!
//!         1. configured: the page's date format, ranges separated by `-`
//!            (`01/01/2023 - 14/01/2023`)
//!         2. extended: a fixed year-day-month pattern, ranges separated by `/`
//!            (`2023-01-01/2023-14-01`)
//!
//!     Within a strategy a key without the separator is a single date and lasts one day. A
//!     key with the separator is split at its first occurrence and both halves are parsed on
//!     their own. Either half may be the literal `now`. No ordering between `from` and `to` is
//!     enforced.
//!
//!     Years are always written with four digits. chrono's `%Y` would read `23` as the year
//!     0023, so the year field is checked before the pattern is applied.

use super::error::{DateAttempt, ErrorKind};
use crate::markwhen::ast::{DateFormat, DateValue, NOW_TOKEN};
use chrono::{Days, NaiveDate};
use tracing::debug;

/// Pattern of the extended fallback: year, day, month.
pub const EXTENDED_PATTERN: &str = "%Y-%d-%m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateValue,
    pub to: DateValue,
}

/// A separator plus a chrono pattern, tried as one unit on a range key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStrategy {
    pub name: &'static str,
    pub separator: char,
    pub pattern: &'static str,
}

impl DateStrategy {
    pub const EXTENDED: DateStrategy = DateStrategy {
        name: "extended",
        separator: '/',
        pattern: EXTENDED_PATTERN,
    };

    /// The strategy for a page's configured date format.
    pub fn configured(format: DateFormat) -> Self {
        Self {
            name: "configured",
            separator: '-',
            pattern: format.pattern(),
        }
    }

    pub fn resolve(&self, key: &str) -> Result<DateRange, String> {
        match key.split_once(self.separator) {
            None => {
                let from = self.parse_value(key)?;
                let to = match from {
                    DateValue::Concrete(date) => date
                        .checked_add_days(Days::new(1))
                        .map(DateValue::Concrete)
                        .ok_or_else(|| format!("`{}` has no following day", key.trim()))?,
                    DateValue::Now => DateValue::Now,
                };
                Ok(DateRange { from, to })
            }
            Some((start, end)) => Ok(DateRange {
                from: self.parse_value(start)?,
                to: self.parse_value(end)?,
            }),
        }
    }

    fn parse_value(&self, text: &str) -> Result<DateValue, String> {
        let text = text.trim();
        if text == NOW_TOKEN {
            return Ok(DateValue::Now);
        }
        if !has_full_year(text, self.pattern) {
            return Err(format!("`{}`: year must have four digits", text));
        }
        NaiveDate::parse_from_str(text, self.pattern)
            .map(DateValue::Concrete)
            .map_err(|e| format!("`{}`: {}", text, e))
    }
}

/// Whether the field that `pattern` reads with `%Y` is exactly four ASCII digits.
fn has_full_year(text: &str, pattern: &str) -> bool {
    let Some(delimiter) = pattern
        .chars()
        .find(|c| *c != '%' && !c.is_ascii_alphanumeric())
    else {
        return true;
    };
    pattern
        .split(delimiter)
        .zip(text.split(delimiter))
        .filter(|(field, _)| *field == "%Y")
        .all(|(_, value)| value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()))
}

/// Tries its strategies in order, stopping at the first success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeResolver {
    strategies: Vec<DateStrategy>,
}

impl DateRangeResolver {
    /// Configured format first, extended fallback second.
    pub fn for_format(format: DateFormat) -> Self {
        Self::with_strategies(vec![DateStrategy::configured(format), DateStrategy::EXTENDED])
    }

    pub fn with_strategies(strategies: Vec<DateStrategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[DateStrategy] {
        &self.strategies
    }

    pub fn resolve(&self, key: &str) -> Result<DateRange, ErrorKind> {
        let mut attempts = Vec::with_capacity(self.strategies.len());
        for (index, strategy) in self.strategies.iter().enumerate() {
            match strategy.resolve(key) {
                Ok(range) => {
                    if index > 0 {
                        debug!(key, strategy = strategy.name, "date range resolved by fallback");
                    }
                    return Ok(range);
                }
                Err(reason) => attempts.push(DateAttempt {
                    strategy: strategy.name,
                    pattern: strategy.pattern,
                    separator: strategy.separator,
                    reason,
                }),
            }
        }
        Err(ErrorKind::DateRange {
            key: key.trim().to_string(),
            attempts,
        })
    }
}
