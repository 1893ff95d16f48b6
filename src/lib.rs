//! # markwhen
//!
//! A parser for the markwhen timeline format.
//!
//! File Layout
//!
//! The library follows the same split as the processing stages:
//! src/markwhen
//!   ├── ast        The document model (pages, headers, collections, events, tags)
//!   ├── lexing     Line classification
//!   ├── parsing    Header fields, date ranges, collection lifecycle and the document builder
//!   ├── formats    Serializers (json, yaml, treeviz)
//!   └── testing    Fluent assertions over parsed documents
//!
//! For most use cases [`parse_document`] is the entry point:
//!
//! ```rust,ignore
//! let doc = markwhen::parse_document("01/02/2024: Kickoff\n")?;
//! assert_eq!(doc.pages.len(), 1);
//! ```

pub mod markwhen;

pub use markwhen::ast::{
    Collection, CollectionKind, DateFormat, DateValue, Document, Event, Header, Page, Tags,
};
pub use markwhen::formats::OutputFormat;
pub use markwhen::options::{HeaderPolicy, ParseOptions};
pub use markwhen::parsing::{
    parse_document, parse_document_with_options, parse_lines, parse_lines_with_options,
    parse_reader, parse_reader_with_options, ErrorKind, ParseError,
};
