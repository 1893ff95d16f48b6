//! Lexing for the markwhen format
//!
//!     Markwhen is strictly line oriented: every construct is recognized from the start of a
//!     single line and no construct spans lines. Lexing therefore reduces to classifying each
//!     line on its own. The only context the classifier needs is whether the current page is
//!     still accepting header fields.
//!
//!     The literals recognized here are shared with the parsing stage, which uses them to split
//!     the classified lines apart.
//!
//!     See [classify_line](line_classification::classify_line) for the rules and their order.

pub mod line_classification;

pub use line_classification::{classify_line, LineKind};

pub const COMMENT_PREFIX: &str = "//";
pub const PAGE_BREAK: &str = "_-_-_break_-_-_";
pub const KEY_VALUE_SEPARATOR: char = ':';

pub const TITLE_PREFIX: &str = "title:";
pub const DESCRIPTION_PREFIX: &str = "description:";
pub const DATE_FORMAT_PREFIX: &str = "dateFormat:";

pub const TAG_PREFIX: char = '#';
pub const GROUP_START: &str = "group ";
pub const GROUP_END: &str = "endGroup";
pub const SECTION_START: &str = "section";
pub const SECTION_END: &str = "endSection";
