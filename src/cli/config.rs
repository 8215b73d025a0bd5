//! TOML configuration file support.
//!
//! Settings that would otherwise be CLI flags, plus the path of a replacement
//! vocabulary:
//!
//! ```toml
//! # vcv.toml
//! [conversion]
//! progress_interval = 500000
//!
//! [vocabulary]
//! path = "vocabulary.toml"
//! ```
//!
//! A relative vocabulary path is resolved against the config file's directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use vcv_digest::vcv::Vocabulary;

/// Root configuration structure for vcv.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Conversion-specific settings.
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Vocabulary source.
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
}

/// Configuration for the convert command.
#[derive(Debug, Default, Deserialize)]
pub struct ConversionConfig {
    /// Log progress every this many written items.
    pub progress_interval: Option<usize>,
}

/// Where to load the vocabulary from.
#[derive(Debug, Default, Deserialize)]
pub struct VocabularyConfig {
    /// Vocabulary TOML file; the built-in vocabulary when absent.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config = Self::from_str(&content)?;
        if let (Some(vocab_path), Some(dir)) = (&config.vocabulary.path, path.parent()) {
            if vocab_path.is_relative() {
                config.vocabulary.path = Some(dir.join(vocab_path));
            }
        }
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load an optional config file, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// The configured vocabulary, or the built-in one.
    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary.path {
            Some(path) => Vocabulary::from_file(path)
                .with_context(|| format!("Failed to load vocabulary: {}", path.display())),
            None => Ok(Vocabulary::builtin()),
        }
    }
}
