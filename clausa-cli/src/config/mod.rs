//! Configuration module

use crate::error::CliError;
use anyhow::Result;
use clausa_core::api::defaults;
use clausa_core::UNCLASSIFIED;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Classification configuration
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Merge line-wrapped paragraphs before segmenting
    pub merge_paragraphs: bool,
}

/// Classification-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Label clauses at all
    pub enabled: bool,

    /// Rule file replacing the built-in clause types
    pub rules: Option<PathBuf>,

    /// Label used when the classifier fails
    pub fallback_label: String,

    /// Characters of clause text handed to the classifier
    pub max_input_chars: usize,

    /// Classify clauses in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rules: None,
            fallback_label: UNCLASSIFIED.to_string(),
            max_input_chars: defaults::MAX_CLASSIFIER_CHARS,
            parallel: true,
            worker_threads: 0,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "json".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Parse a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
