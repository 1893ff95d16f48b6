//! Parse options
//!
//! Knobs that change how a source is read without changing the format itself. The defaults
//! match what a document with no configuration expects; `markwhen-config` deserializes these
//! from its `[parser]` table.

use crate::markwhen::ast::DateFormat;
use serde::{Deserialize, Serialize};

/// When a page stops accepting `title:` / `description:` / `dateFormat:` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderPolicy {
    /// Header fields are accepted until the first line of content (tag, group, section or
    /// event). Comments and blank lines keep the header open. Every page starts open again.
    #[default]
    Leading,
    /// Header fields are accepted anywhere on the page.
    Anywhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub header_policy: HeaderPolicy,
    /// Date format of the first page. Later pages inherit from the page before them.
    pub default_date_format: DateFormat,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_policy(mut self, policy: HeaderPolicy) -> Self {
        self.header_policy = policy;
        self
    }

    pub fn with_default_date_format(mut self, format: DateFormat) -> Self {
        self.default_date_format = format;
        self
    }
}
