//! Collections: free runs of events, groups and sections

use super::event::Event;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Events not wrapped by any marker.
    Free,
    Group,
    Section,
}

/// An ordered run of events that belong together on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub kind: CollectionKind,
    /// Display hint for groups whose marker line was indented.
    pub collapsed: bool,
    pub title: String,
    pub events: Vec<Event>,
}

impl Collection {
    pub fn free() -> Self {
        Self::new(CollectionKind::Free, String::new(), false)
    }

    pub fn group(title: impl Into<String>, collapsed: bool) -> Self {
        Self::new(CollectionKind::Group, title.into(), collapsed)
    }

    pub fn section(title: impl Into<String>) -> Self {
        Self::new(CollectionKind::Section, title.into(), false)
    }

    fn new(kind: CollectionKind, title: String, collapsed: bool) -> Self {
        Self {
            kind,
            collapsed,
            title,
            events: Vec::new(),
        }
    }

    pub fn is_free(&self) -> bool {
        self.kind == CollectionKind::Free
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether this collection belongs on its page once it is closed.
    ///
    /// Groups and sections closed by an end marker or a flush are kept even when empty; a free
    /// run is only kept if it collected at least one event.
    pub fn is_worth_keeping(&self) -> bool {
        !self.is_free() || !self.is_empty()
    }
}
