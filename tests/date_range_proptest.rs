//! Property-based tests for date ranges, page breaks and tags
//!
//! These check the resolution rules over generated inputs:
//! - a single date lasts exactly one day
//! - a range keeps both ends as written, in either order
//! - `now` is accepted on either side and never collides with a calendar date
//! - N page breaks produce N + 1 pages

use chrono::{Datelike, Days, NaiveDate};
use markwhen::markwhen::parsing::DateRangeResolver;
use markwhen::{parse_document, DateFormat, DateValue};
use proptest::prelude::*;

/// Dates chrono can format and step forward from.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn format_strategy() -> impl Strategy<Value = DateFormat> {
    prop_oneof![Just(DateFormat::MonthDayYear), Just(DateFormat::DayMonthYear)]
}

fn write_date(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::MonthDayYear => {
            format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
        }
        DateFormat::DayMonthYear => {
            format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
        }
    }
}

fn write_extended(date: NaiveDate) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.day(), date.month())
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_single_date_lasts_one_day(date in date_strategy(), format in format_strategy()) {
            let resolver = DateRangeResolver::for_format(format);
            let range = resolver.resolve(&write_date(date, format)).unwrap();

            prop_assert_eq!(range.from, DateValue::Concrete(date));
            prop_assert_eq!(range.to, DateValue::Concrete(date + Days::new(1)));
        }

        #[test]
        fn test_range_keeps_both_ends(
            start in date_strategy(),
            end in date_strategy(),
            format in format_strategy()
        ) {
            let key = format!("{} - {}", write_date(start, format), write_date(end, format));
            let range = DateRangeResolver::for_format(format).resolve(&key).unwrap();

            prop_assert_eq!(range.from, DateValue::Concrete(start));
            prop_assert_eq!(range.to, DateValue::Concrete(end));
        }

        #[test]
        fn test_extended_fallback_range(start in date_strategy(), end in date_strategy()) {
            let key = format!("{}/{}", write_extended(start), write_extended(end));
            let range = DateRangeResolver::for_format(DateFormat::MonthDayYear)
                .resolve(&key)
                .unwrap();

            prop_assert_eq!(range.from, DateValue::Concrete(start));
            prop_assert_eq!(range.to, DateValue::Concrete(end));
        }

        #[test]
        fn test_now_on_either_side(date in date_strategy(), now_first in any::<bool>()) {
            let written = write_date(date, DateFormat::MonthDayYear);
            let key = if now_first {
                format!("now - {}", written)
            } else {
                format!("{} - now", written)
            };
            let range = DateRangeResolver::for_format(DateFormat::MonthDayYear)
                .resolve(&key)
                .unwrap();

            let (now_end, date_end) = if now_first {
                (range.from, range.to)
            } else {
                (range.to, range.from)
            };
            prop_assert!(now_end.is_now());
            prop_assert_eq!(date_end, DateValue::Concrete(date));
            prop_assert_ne!(now_end, date_end);
        }

        #[test]
        fn test_page_breaks_make_pages(breaks in 0usize..8) {
            let mut source = String::from("title: first\n");
            for i in 0..breaks {
                source.push_str(&format!("_-_-_break_-_-_\ntitle: page {}\n", i + 1));
            }
            let doc = parse_document(&source).unwrap();

            prop_assert_eq!(doc.pages.len(), breaks + 1);
            prop_assert!(doc.pages.iter().all(|page| page.collections.is_empty()));
        }

        #[test]
        fn test_date_format_carries_over_breaks(breaks in 1usize..6, format in format_strategy()) {
            let mut source = format!("dateFormat: {}\n", format.alias());
            for _ in 0..breaks {
                source.push_str("_-_-_break_-_-_\n");
            }
            let doc = parse_document(&source).unwrap();

            prop_assert!(doc.pages.iter().all(|page| page.header.date_format == format));
        }

        #[test]
        fn test_last_tag_definition_wins(colors in prop::collection::vec("[a-z]{3,8}", 1..6)) {
            let source = colors
                .iter()
                .map(|color| format!("#tag: {}\n_-_-_break_-_-_\n", color))
                .collect::<String>();
            let doc = parse_document(&source).unwrap();

            prop_assert_eq!(doc.tags.len(), 1);
            prop_assert_eq!(doc.tag_color("tag"), colors.last().map(String::as_str));
        }
    }
}
