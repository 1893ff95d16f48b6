//! Line Classification
//!
//! Determines what a single source line is. Rules are tried in a fixed order and the first
//! match wins:
//!
//!     1. Comment: trimmed line starts with `//`
//!     2. Blank: trimmed line is empty
//!     3. PageBreak: the line is exactly `_-_-_break_-_-_`
//!     4. HeaderField: only while the page accepts header fields, the line starts with
//!        `title:`, `description:` or `dateFormat:`
//!     5. TagDefinition: trimmed line starts with `#`
//!     6. GroupStart: trimmed line starts with `group ` (keyword and a space)
//!     7. SectionStart: trimmed line starts with `section`
//!     8. CollectionEnd: trimmed line starts with `endSection` or `endGroup`
//!     9. Event: the line contains a colon
//!     10. Malformed: anything else
//!
//! Order matters: a comment that contains a colon is still a comment, and `endGroup` never
//! reaches the event rule.

use super::{
    COMMENT_PREFIX, DATE_FORMAT_PREFIX, DESCRIPTION_PREFIX, GROUP_END, GROUP_START,
    KEY_VALUE_SEPARATOR, PAGE_BREAK, SECTION_END, SECTION_START, TAG_PREFIX, TITLE_PREFIX,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Comment,
    Blank,
    PageBreak,
    HeaderField,
    TagDefinition,
    GroupStart,
    SectionStart,
    /// Closes the open collection, whichever keyword opened it.
    CollectionEnd,
    Event,
    Malformed,
}

impl LineKind {
    /// Lines that carry no content and never affect parser state.
    pub fn is_ignorable(self) -> bool {
        matches!(self, LineKind::Comment | LineKind::Blank)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Comment => "comment",
            LineKind::Blank => "blank",
            LineKind::PageBreak => "page-break",
            LineKind::HeaderField => "header-field",
            LineKind::TagDefinition => "tag-definition",
            LineKind::GroupStart => "group-start",
            LineKind::SectionStart => "section-start",
            LineKind::CollectionEnd => "collection-end",
            LineKind::Event => "event",
            LineKind::Malformed => "malformed",
        };
        f.write_str(name)
    }
}

/// Classify a raw line.
///
/// `header_open` tells whether the enclosing page still accepts header fields; when it does
/// not, header-looking lines fall through to the later rules.
pub fn classify_line(line: &str, header_open: bool) -> LineKind {
    let trimmed = line.trim();

    if trimmed.starts_with(COMMENT_PREFIX) {
        return LineKind::Comment;
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if line == PAGE_BREAK {
        return LineKind::PageBreak;
    }
    if header_open && is_header_field(line) {
        return LineKind::HeaderField;
    }
    if trimmed.starts_with(TAG_PREFIX) {
        return LineKind::TagDefinition;
    }
    if trimmed.starts_with(GROUP_START) {
        return LineKind::GroupStart;
    }
    if trimmed.starts_with(SECTION_START) {
        return LineKind::SectionStart;
    }
    if trimmed.starts_with(SECTION_END) || trimmed.starts_with(GROUP_END) {
        return LineKind::CollectionEnd;
    }
    if line.contains(KEY_VALUE_SEPARATOR) {
        return LineKind::Event;
    }
    LineKind::Malformed
}

fn is_header_field(line: &str) -> bool {
    [TITLE_PREFIX, DESCRIPTION_PREFIX, DATE_FORMAT_PREFIX]
        .iter()
        .any(|prefix| line.starts_with(prefix))
}
