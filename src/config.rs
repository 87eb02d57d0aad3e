//! Layered configuration loading.
//!
//! `defaults/kakari.default.toml` is embedded into the binary so that docs
//! and runtime behavior stay in sync. Applications layer a user-specific
//! file on top of those defaults via [`Loader`] before deserializing into
//! [`KakariConfig`].

use crate::keywords::filter::FilterThresholds;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/kakari.default.toml");

/// Top-level configuration consumed by kakari applications.
#[derive(Debug, Clone, Deserialize)]
pub struct KakariConfig {
    pub corpus: CorpusConfig,
    pub tokenizer: TokenizerConfig,
    pub occurrence: OccurrenceConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// File extension of corpus documents.
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerConfig {
    /// Token cache file, keyed by document id and modification time.
    pub cache_file: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OccurrenceConfig {
    /// Number of candidate surfaces compiled into one matcher.
    pub batch_size: usize,
}

/// Mirrors the knobs of the filtering pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    pub min_documents: usize,
    pub max_document_ratio: f64,
    pub dominance_window: f64,
    pub short_phrase_chars: usize,
}

impl FilterConfig {
    pub fn thresholds(&self) -> FilterThresholds {
        FilterThresholds {
            min_documents: self.min_documents,
            max_document_ratio: self.max_document_ratio,
            dominance_window: self.dominance_window,
            short_phrase_chars: self.short_phrase_chars,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<KakariConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<KakariConfig, ConfigError> {
    Loader::new().build()
}
