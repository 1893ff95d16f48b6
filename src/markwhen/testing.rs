//! Fluent assertion API for parsed documents
//!
//!     Tests that walk `doc.pages[0].collections[1].events[0]` by hand are verbose and break
//!     whenever the model changes shape. These builders check the parts a test cares about and
//!     report the path of the failing node:
//!
//!     ```rust,ignore
//!     use markwhen::markwhen::testing::assert_doc;
//!
//!     assert_doc(&doc)
//!         .page_count(1)
//!         .tag("Launch", "blue")
//!         .page(0, |page| {
//!             page.title("Roadmap")
//!                 .collection_count(2)
//!                 .collection(1, |group| {
//!                     group.is_group().title("Team").event_count(1).event(0, |event| {
//!                         event.from_date(2023, 1, 1).to_now().body("Kickoff");
//!                     });
//!                 });
//!         });
//!     ```

use crate::markwhen::ast::{
    Collection, CollectionKind, DateFormat, DateValue, Document, Event, Page,
};
use chrono::NaiveDate;

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn expect_date(y: i32, m: u32, d: u32, context: &str) -> DateValue {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => DateValue::Concrete(date),
        None => panic!("{}: {}-{}-{} is not a valid date", context, y, m, d),
    }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn page_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.pages.len(),
            expected,
            "Expected {} pages, found {}",
            expected,
            self.doc.pages.len()
        );
        self
    }

    pub fn page<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(PageAssertion<'a>),
    {
        assert!(
            index < self.doc.pages.len(),
            "Page index {} out of bounds (document has {} pages)",
            index,
            self.doc.pages.len()
        );
        assertion(PageAssertion {
            page: &self.doc.pages[index],
            context: format!("pages[{}]", index),
        });
        self
    }

    pub fn tag(self, name: &str, color: &str) -> Self {
        assert_eq!(
            self.doc.tag_color(name),
            Some(color),
            "Expected tag '{}' to be '{}' (tags: {:?})",
            name,
            color,
            self.doc.tags
        );
        self
    }

    pub fn tag_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.tags.len(),
            expected,
            "Expected {} tags, found {:?}",
            expected,
            self.doc.tags
        );
        self
    }

    pub fn event_count(self, expected: usize) -> Self {
        let actual = self.doc.events().count();
        assert_eq!(actual, expected, "Expected {} events in document, found {}", expected, actual);
        self
    }
}

pub struct PageAssertion<'a> {
    page: &'a Page,
    context: String,
}

impl<'a> PageAssertion<'a> {
    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.page.header.title, expected,
            "{}: unexpected title",
            self.context
        );
        self
    }

    pub fn description(self, expected: &str) -> Self {
        assert_eq!(
            self.page.header.description, expected,
            "{}: unexpected description",
            self.context
        );
        self
    }

    pub fn date_format(self, expected: DateFormat) -> Self {
        assert_eq!(
            self.page.header.date_format, expected,
            "{}: unexpected date format",
            self.context
        );
        self
    }

    pub fn collection_count(self, expected: usize) -> Self {
        let kinds: Vec<_> = self.page.collections.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds.len(),
            expected,
            "{}: expected {} collections, found {:?}",
            self.context,
            expected,
            kinds
        );
        self
    }

    pub fn collection<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(CollectionAssertion<'a>),
    {
        assert!(
            index < self.page.collections.len(),
            "{}: collection index {} out of bounds ({} collections)",
            self.context,
            index,
            self.page.collections.len()
        );
        assertion(CollectionAssertion {
            collection: &self.page.collections[index],
            context: format!("{}.collections[{}]", self.context, index),
        });
        self
    }
}

pub struct CollectionAssertion<'a> {
    collection: &'a Collection,
    context: String,
}

impl<'a> CollectionAssertion<'a> {
    fn kind(self, expected: CollectionKind) -> Self {
        assert_eq!(
            self.collection.kind, expected,
            "{}: unexpected collection kind",
            self.context
        );
        self
    }

    pub fn is_free(self) -> Self {
        self.kind(CollectionKind::Free)
    }

    pub fn is_group(self) -> Self {
        self.kind(CollectionKind::Group)
    }

    pub fn is_section(self) -> Self {
        self.kind(CollectionKind::Section)
    }

    pub fn collapsed(self, expected: bool) -> Self {
        assert_eq!(
            self.collection.collapsed, expected,
            "{}: unexpected collapsed flag",
            self.context
        );
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(
            self.collection.title, expected,
            "{}: unexpected title",
            self.context
        );
        self
    }

    pub fn event_count(self, expected: usize) -> Self {
        let bodies: Vec<_> = self.collection.events.iter().map(|e| e.body.as_str()).collect();
        assert_eq!(
            bodies.len(),
            expected,
            "{}: expected {} events, found {:?}",
            self.context,
            expected,
            bodies
        );
        self
    }

    pub fn event<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(EventAssertion<'a>),
    {
        assert!(
            index < self.collection.events.len(),
            "{}: event index {} out of bounds ({} events)",
            self.context,
            index,
            self.collection.events.len()
        );
        assertion(EventAssertion {
            event: &self.collection.events[index],
            context: format!("{}.events[{}]", self.context, index),
        });
        self
    }
}

pub struct EventAssertion<'a> {
    event: &'a Event,
    context: String,
}

impl<'a> EventAssertion<'a> {
    pub fn from_date(self, y: i32, m: u32, d: u32) -> Self {
        let expected = expect_date(y, m, d, &self.context);
        assert_eq!(self.event.from, expected, "{}: unexpected from", self.context);
        self
    }

    pub fn to_date(self, y: i32, m: u32, d: u32) -> Self {
        let expected = expect_date(y, m, d, &self.context);
        assert_eq!(self.event.to, expected, "{}: unexpected to", self.context);
        self
    }

    pub fn from_now(self) -> Self {
        assert!(self.event.from.is_now(), "{}: expected from to be now", self.context);
        self
    }

    pub fn to_now(self) -> Self {
        assert!(self.event.to.is_now(), "{}: expected to to be now", self.context);
        self
    }

    pub fn body(self, expected: &str) -> Self {
        assert_eq!(self.event.body, expected, "{}: unexpected body", self.context);
        self
    }

    pub fn tags(self, expected: &[&str]) -> Self {
        assert_eq!(self.event.tags(), expected, "{}: unexpected inline tags", self.context);
        self
    }
}
