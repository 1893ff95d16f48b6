//! Document builder
//!
//! The builder is the accumulator of the parse: [`DocumentBuilder::push_line`] consumes it and
//! either hands it back with the line applied or fails with the line's error, so the driving
//! loop is a plain `try_fold` over the source lines.

use super::collections::CollectionStack;
use super::dates::DateRangeResolver;
use super::error::ErrorKind;
use super::header::parse_header_field;
use super::split_key_value;
use crate::markwhen::ast::{Document, Event, Header, Page, Tags};
use crate::markwhen::lexing::{classify_line, LineKind, COMMENT_PREFIX, TAG_PREFIX};
use crate::markwhen::options::{HeaderPolicy, ParseOptions};
use tracing::{debug, trace};

/// State of the page being read.
#[derive(Debug, Clone)]
struct PageState {
    header: Header,
    header_open: bool,
    collections: CollectionStack,
}

impl PageState {
    fn new(header: Header) -> Self {
        Self {
            header,
            header_open: true,
            collections: CollectionStack::new(),
        }
    }

    fn finish(self) -> Page {
        Page {
            header: self.header,
            collections: self.collections.finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    options: ParseOptions,
    pages: Vec<Page>,
    page: PageState,
    tags: Tags,
}

impl DocumentBuilder {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            pages: Vec::new(),
            page: PageState::new(Header::with_date_format(options.default_date_format)),
            tags: Tags::new(),
        }
    }

    /// Apply one source line.
    pub fn push_line(mut self, line: &str) -> Result<Self, ErrorKind> {
        let kind = classify_line(line, self.page.header_open);
        trace!(%kind, line, "classified line");

        match kind {
            LineKind::Comment | LineKind::Blank => {}
            LineKind::PageBreak => self.break_page(),
            LineKind::HeaderField => parse_header_field(line)?.apply(&mut self.page.header),
            LineKind::TagDefinition => {
                let (name, color) = parse_tag_definition(line)?;
                self.tags.insert(name, color);
            }
            LineKind::GroupStart => self.page.collections.open_group(line),
            LineKind::SectionStart => self.page.collections.open_section(line),
            LineKind::CollectionEnd => self.page.collections.close(),
            LineKind::Event => {
                let event = self.parse_event(line)?;
                self.page.collections.push_event(event);
            }
            LineKind::Malformed => return Err(ErrorKind::MalformedLine),
        }

        if self.options.header_policy == HeaderPolicy::Leading && closes_header(kind) {
            self.page.header_open = false;
        }
        Ok(self)
    }

    /// Flush the open collection and page and return the finished document.
    pub fn finish(mut self) -> Document {
        self.pages.push(self.page.finish());
        Document::new(self.pages, self.tags)
    }

    fn break_page(&mut self) {
        let date_format = self.page.header.date_format;
        let next = PageState::new(Header::with_date_format(date_format));
        let finished = std::mem::replace(&mut self.page, next);
        self.pages.push(finished.finish());
        debug!(page = self.pages.len() + 1, %date_format, "page break");
    }

    fn parse_event(&self, line: &str) -> Result<Event, ErrorKind> {
        let (key, body) = split_key_value(line).ok_or(ErrorKind::MalformedLine)?;
        let range = DateRangeResolver::for_format(self.page.header.date_format).resolve(key)?;
        Ok(Event::new(range.from, range.to, body))
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Lines of content end the header phase under [`HeaderPolicy::Leading`].
fn closes_header(kind: LineKind) -> bool {
    matches!(
        kind,
        LineKind::TagDefinition
            | LineKind::GroupStart
            | LineKind::SectionStart
            | LineKind::CollectionEnd
            | LineKind::Event
    )
}

/// Split `#name: color // comment` into its name and color.
fn parse_tag_definition(line: &str) -> Result<(String, String), ErrorKind> {
    let (key, value) = split_key_value(line.trim()).ok_or(ErrorKind::MalformedTag)?;
    let name = key.strip_prefix(TAG_PREFIX).unwrap_or(key).trim();
    if name.is_empty() {
        return Err(ErrorKind::MalformedTag);
    }
    Ok((name.to_string(), strip_comment(value).to_string()))
}

fn strip_comment(value: &str) -> &str {
    match value.find(COMMENT_PREFIX) {
        Some(index) => value[..index].trim(),
        None => value,
    }
}
