//! Collection lifecycle
//!
//!     Exactly one collection is open at any time. It starts as an empty free run and is
//!     replaced on these transitions:
//!
//!         - group / section start: the open collection is replaced by a new group or
//!           section. It is kept only if it holds at least one event, so an empty group left
//!           open by a missing end marker is dropped.
//!         - group / section end: the open collection is closed (a group or section is always
//!           kept, even when empty), then a fresh free run is opened. `endGroup` and
//!           `endSection` are interchangeable. A stray end marker with no group or section open
//!           closes the free run under the same rule as a flush, so an empty free run is never
//!           kept.
//!         - flush (page break or end of input): the open collection is kept if worth keeping.
//!
//!     "Worth keeping" means it is a group or section, or a free run with at least one event.
//!     See [`Collection::is_worth_keeping`].

use crate::markwhen::ast::{Collection, CollectionKind, Event};
use crate::markwhen::lexing::{GROUP_START, SECTION_START};
use tracing::debug;

/// What the parser is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    FreeRun,
    InGroup,
    InSection,
}

/// The open collection plus the collections already closed on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionStack {
    current: Collection,
    closed: Vec<Collection>,
}

impl CollectionStack {
    pub fn new() -> Self {
        Self {
            current: Collection::free(),
            closed: Vec::new(),
        }
    }

    pub fn current(&self) -> &Collection {
        &self.current
    }

    pub fn closed(&self) -> &[Collection] {
        &self.closed
    }

    pub fn state(&self) -> CollectionState {
        match self.current.kind {
            CollectionKind::Free => CollectionState::FreeRun,
            CollectionKind::Group => CollectionState::InGroup,
            CollectionKind::Section => CollectionState::InSection,
        }
    }

    /// Open a group from its marker line. An indented marker opens it collapsed.
    pub fn open_group(&mut self, line: &str) {
        let collapsed = line.starts_with(char::is_whitespace);
        let title = marker_title(line, GROUP_START);
        self.open(Collection::group(title, collapsed));
    }

    /// Open a section from its marker line.
    pub fn open_section(&mut self, line: &str) {
        let title = marker_title(line, SECTION_START);
        self.open(Collection::section(title));
    }

    /// Close the open collection and start a new free run.
    pub fn close(&mut self) {
        let closed = std::mem::replace(&mut self.current, Collection::free());
        debug!(kind = ?closed.kind, events = closed.events.len(), "closing collection");
        if closed.is_worth_keeping() {
            self.closed.push(closed);
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.current.events.push(event);
    }

    /// Flush the open collection and hand back everything closed on this page.
    pub fn finish(mut self) -> Vec<Collection> {
        if self.current.is_worth_keeping() {
            self.closed.push(self.current);
        }
        self.closed
    }

    fn open(&mut self, next: Collection) {
        debug!(kind = ?next.kind, title = %next.title, "opening collection");
        let previous = std::mem::replace(&mut self.current, next);
        if !previous.is_empty() {
            self.closed.push(previous);
        }
    }
}

impl Default for CollectionStack {
    fn default() -> Self {
        Self::new()
    }
}

fn marker_title(line: &str, keyword: &str) -> String {
    let trimmed = line.trim();
    trimmed
        .strip_prefix(keyword)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
