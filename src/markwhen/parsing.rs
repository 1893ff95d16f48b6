//! Parsing module for the markwhen format
//!
//!     Parsing is a single forward pass over the source lines:
//!         1. Classification: each line is classified on its own. See
//!            [lexing](crate::markwhen::lexing).
//!         2. Dispatch: the [`DocumentBuilder`] applies the line to its state: header fields
//!            through [header], event keys through [dates], collection markers through
//!            [collections], tags into the document-wide registry.
//!         3. Assembly: at the end of input the open collection and page are flushed and the
//!            [`Document`] is returned.
//!
//!     The first error stops the pass. There is no partial result and no recovery.
//!
//! Entry Points
//!
//!     - [`parse_document`]: a whole source string.
//!     - [`parse_lines`]: anything that yields lines, for callers that already split them.
//!     - [`parse_reader`]: a buffered reader, read line by line.
//!
//!     Each has a `_with_options` variant taking [`ParseOptions`].

pub mod builder;
pub mod collections;
pub mod dates;
pub mod error;
pub mod header;

pub use builder::DocumentBuilder;
pub use collections::{CollectionStack, CollectionState};
pub use dates::{DateRange, DateRangeResolver, DateStrategy};
pub use error::{DateAttempt, ErrorKind, ParseError};
pub use header::{parse_header_field, HeaderField};

use crate::markwhen::ast::Document;
use crate::markwhen::lexing::KEY_VALUE_SEPARATOR;
use crate::markwhen::options::ParseOptions;
use std::io::BufRead;
use tracing::debug;

/// Parse a source string with default options.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    parse_document_with_options(source, ParseOptions::default())
}

pub fn parse_document_with_options(
    source: &str,
    options: ParseOptions,
) -> Result<Document, ParseError> {
    parse_lines_with_options(source.lines(), options)
}

/// Parse an ordered sequence of lines with default options.
pub fn parse_lines<I, S>(lines: I) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_lines_with_options(lines, ParseOptions::default())
}

pub fn parse_lines_with_options<I, S>(
    lines: I,
    options: ParseOptions,
) -> Result<Document, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let builder = lines.into_iter().enumerate().try_fold(
        DocumentBuilder::new(options),
        |builder, (index, line)| {
            let line = line.as_ref();
            builder
                .push_line(line)
                .map_err(|kind| ParseError::new(index + 1, line, kind))
        },
    )?;
    let document = builder.finish();
    debug!(
        pages = document.pages.len(),
        tags = document.tags.len(),
        "parsed document"
    );
    Ok(document)
}

/// Parse from a buffered reader with default options.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Document, ParseError> {
    parse_reader_with_options(reader, ParseOptions::default())
}

/// Read failures surface as [`ErrorKind::Io`] on the line that could not be read.
pub fn parse_reader_with_options<R: BufRead>(
    reader: R,
    options: ParseOptions,
) -> Result<Document, ParseError> {
    let builder = reader.lines().enumerate().try_fold(
        DocumentBuilder::new(options),
        |builder, (index, line)| {
            let line = line
                .map_err(|e| ParseError::new(index + 1, "", ErrorKind::Io(e.to_string())))?;
            builder
                .push_line(&line)
                .map_err(|kind| ParseError::new(index + 1, line.as_str(), kind))
        },
    )?;
    Ok(builder.finish())
}

/// Split on the first colon; both sides trimmed.
pub(crate) fn split_key_value(line: &str) -> Option<(&str, &str)> {
    line.split_once(KEY_VALUE_SEPARATOR)
        .map(|(key, value)| (key.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_key_value_first_colon() {
        assert_eq!(
            split_key_value(" 01/01/2023 : Phase 1: prep "),
            Some(("01/01/2023", "Phase 1: prep"))
        );
        assert_eq!(split_key_value("no separator"), None);
    }

    #[test]
    fn test_error_carries_line_number() {
        let err = parse_document("title: T\n\n01/01/2023: ok\nbroken\n").unwrap_err();
        assert_eq!(err.line_number, 4);
        assert_eq!(err.line, "broken");
        assert_eq!(err.kind(), &ErrorKind::MalformedLine);
    }

    #[test]
    fn test_reader_matches_string_parse() {
        let source = "title: T\n01/01/2023 - 01/05/2023: Phase 1\n";
        let from_reader = parse_reader(Cursor::new(source)).unwrap();
        assert_eq!(from_reader, parse_document(source).unwrap());
    }

    #[test]
    fn test_lines_accept_owned_strings() {
        let lines = vec!["group G".to_string(), "endGroup".to_string()];
        let doc = parse_lines(lines).unwrap();
        assert_eq!(doc.pages[0].collections.len(), 1);
    }

    #[test]
    fn test_empty_source_has_one_empty_page() {
        let doc = parse_document("").unwrap();
        assert_eq!(doc.pages.len(), 1);
        assert!(doc.pages[0].collections.is_empty());
        assert!(doc.tags.is_empty());
    }
}
