//! Shared configuration loader for the xmcdtex toolchain.
//!
//! `defaults/xmcdtex.default.toml` is embedded into every binary so that
//! documented and actual defaults cannot drift. Applications layer
//! user-specific files and CLI overrides on top via [`Loader`] before
//! deserializing into [`XmcdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/xmcdtex.default.toml");

/// Top-level configuration consumed by the converter.
#[derive(Debug, Clone, Deserialize)]
pub struct XmcdConfig {
    pub convert: ConvertConfig,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Directory the generated `.tex` file is written into.
    pub output_dir: String,
    /// Collect per-region progress notes during assembly.
    pub verbose: bool,
}

/// Builds an [`XmcdConfig`] from stacked sources: embedded defaults at the
/// bottom, then any TOML files, then single-key overrides on top. Later
/// sources win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader that starts from the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a TOML file on top; a missing file is an error at build time.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Stack a TOML file that may not exist; absent files are skipped.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Force one key to a value, beating every file source. This is how
    /// CLI flags take precedence.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Resolve the stack into a typed [`XmcdConfig`].
    pub fn build(self) -> Result<XmcdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults with nothing layered on top.
pub fn load_defaults() -> Result<XmcdConfig, ConfigError> {
    Loader::new().build()
}
