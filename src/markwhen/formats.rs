//! Output formats for parsed documents
//!
//! The engine itself defines no wire format. These serializers are what the CLI and tests
//! use to look at a [`Document`]:
//!
//!     - json: serde_json, compact or pretty
//!     - yaml: serde_yaml
//!     - treeviz: one line per node, see [treeviz]

pub mod treeviz;

pub use treeviz::to_treeviz_str;

use crate::markwhen::ast::Document;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Treeviz,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Treeviz];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Json => "The document model as JSON",
            OutputFormat::Yaml => "The document model as YAML",
            OutputFormat::Treeviz => "Visual tree with one line per page, collection and event",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("unknown output format '{0}' (expected one of: json, yaml, treeviz)")]
    UnknownFormat(String),
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

pub fn to_json(doc: &Document, pretty: bool) -> Result<String, FormatError> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}

pub fn to_yaml(doc: &Document) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(doc)?)
}

/// Serialize a document in the given format. `pretty` only affects json.
pub fn serialize(doc: &Document, format: OutputFormat, pretty: bool) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(doc, pretty),
        OutputFormat::Yaml => to_yaml(doc),
        OutputFormat::Treeviz => Ok(to_treeviz_str(doc)),
    }
}
