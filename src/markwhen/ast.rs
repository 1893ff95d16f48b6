//! Document model for parsed markwhen sources
//!
//!     A parse produces a [`Document`]: an ordered list of [`Page`]s plus one document-wide
//!     [`Tags`] registry. Each page owns exactly one [`Header`] and an ordered list of
//!     [`Collection`]s, and each collection holds the [`Event`]s that were read while it was
//!     the open collection.
//!
//!     The model is built in a single forward pass and is not mutated once the parse returns.
//!     All types serialize with serde, which is what the [formats](crate::markwhen::formats)
//!     module relies on.

pub mod collection;
pub mod document;
pub mod event;
pub mod header;

pub use collection::{Collection, CollectionKind};
pub use document::{Document, Page, Tags};
pub use event::{DateValue, Event, NOW_TOKEN};
pub use header::{DateFormat, Header};
