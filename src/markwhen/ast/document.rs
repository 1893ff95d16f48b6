//! Document and page nodes
//!
//! The document is the root of a parse: pages in source order plus the tag registry that
//! every page writes into. Tags are document-wide: a `#name: color` line on the
//! third page colors events on the first one as well.

use super::collection::Collection;
use super::event::Event;
use super::header::Header;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag name (without `#`) to color string.
pub type Tags = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub header: Header,
    pub collections: Vec<Collection>,
}

impl Page {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            collections: Vec::new(),
        }
    }

    /// All events on this page, collection by collection.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.collections.iter().flat_map(|c| c.events.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
    pub tags: Tags,
}

impl Document {
    pub fn new(pages: Vec<Page>, tags: Tags) -> Self {
        Self { pages, tags }
    }

    /// All events in the document, page by page.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.pages.iter().flat_map(Page::events)
    }

    pub fn tag_color(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(String::as_str)
    }
}
