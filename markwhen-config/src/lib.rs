//! Settings for markwhen tools
//!
//! Layers, lowest first: the embedded `defaults/markwhen.default.toml`, then any files added
//! with [`Loader::with_file`] / [`Loader::with_optional_file`], then single-key overrides.
//! The merged tree deserializes into [`MarkwhenConfig`]; the `[parser]` table is
//! [`ParseOptions`] as-is.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use markwhen::{OutputFormat, ParseOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/markwhen.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct MarkwhenConfig {
    pub parser: ParseOptions,
    pub output: OutputConfig,
}

impl MarkwhenConfig {
    /// The embedded defaults with nothing layered on top.
    pub fn defaults() -> Result<Self, ConfigError> {
        Loader::new().build()
    }
}

/// `[output]`: how the CLI prints a parsed document.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Only affects json.
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Layer a TOML file that is skipped when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Set one dotted key, e.g. `parser.header_policy`, over every layer.
    pub fn set_override(
        mut self,
        key: &str,
        value: impl Into<ValueKind>,
    ) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MarkwhenConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
