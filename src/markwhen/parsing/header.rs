//! Header field parsing
//!
//! `title:` and `description:` values are stored verbatim after trimming. They are not run
//! through comment stripping, so a title may contain `//`. `dateFormat:` values go through
//! the alias table and an unknown alias is an error, never a silent default.

use super::error::ErrorKind;
use super::split_key_value;
use crate::markwhen::ast::{DateFormat, Header};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderField {
    Title(String),
    Description(String),
    DateFormat(DateFormat),
}

impl HeaderField {
    pub fn apply(self, header: &mut Header) {
        match self {
            HeaderField::Title(title) => header.title = title,
            HeaderField::Description(description) => header.description = description,
            HeaderField::DateFormat(format) => header.date_format = format,
        }
    }
}

/// Parse a line already classified as a header field.
pub fn parse_header_field(line: &str) -> Result<HeaderField, ErrorKind> {
    let (key, value) = split_key_value(line).ok_or(ErrorKind::MalformedLine)?;
    match key {
        "title" => Ok(HeaderField::Title(value.to_string())),
        "description" => Ok(HeaderField::Description(value.to_string())),
        "dateFormat" => DateFormat::from_alias(value)
            .map(HeaderField::DateFormat)
            .ok_or_else(|| ErrorKind::UnknownDateFormat {
                alias: value.to_string(),
            }),
        _ => Err(ErrorKind::MalformedLine),
    }
}
