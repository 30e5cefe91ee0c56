//! Pipeline configuration

use crate::classify::UNCLASSIFIED;
use crate::error::Error;

/// Default configuration constants
pub mod defaults {
    /// Characters of clause text handed to a classifier
    pub const MAX_CLASSIFIER_CHARS: usize = 2048;
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) merge_paragraphs: bool,
    pub(crate) parallel: bool,
    pub(crate) threads: Option<usize>, // None = rayon's default pool
    pub(crate) fallback_label: String,
    pub(crate) max_classifier_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            merge_paragraphs: false,
            parallel: true,
            threads: None,
            fallback_label: UNCLASSIFIED.to_string(),
            max_classifier_chars: defaults::MAX_CLASSIFIER_CHARS,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether wrapped lines are merged before segmentation
    pub fn merge_paragraphs(&self) -> bool {
        self.merge_paragraphs
    }

    /// Whether clauses are classified in parallel
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Worker threads for classification
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Label used when the classifier fails
    pub fn fallback_label(&self) -> &str {
        &self.fallback_label
    }

    /// Characters of clause text passed to the classifier
    pub fn max_classifier_chars(&self) -> usize {
        self.max_classifier_chars
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        if self.fallback_label.trim().is_empty() {
            return Err(Error::Configuration(
                "fallback_label must not be empty".into(),
            ));
        }

        if self.max_classifier_chars == 0 {
            return Err(Error::Configuration(
                "max_classifier_chars must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    merge_paragraphs: Option<bool>,
    parallel: Option<bool>,
    threads: Option<usize>,
    fallback_label: Option<String>,
    max_classifier_chars: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge line-wrapped paragraphs before segmenting
    pub fn merge_paragraphs(mut self, enabled: bool) -> Self {
        self.merge_paragraphs = Some(enabled);
        self
    }

    /// Classify clauses in parallel
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Label assigned when the classifier fails
    pub fn fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }

    /// Truncate classifier input to this many characters
    pub fn max_classifier_chars(mut self, chars: usize) -> Self {
        self.max_classifier_chars = Some(chars);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(merge) = self.merge_paragraphs {
            config.merge_paragraphs = merge;
        }

        if let Some(parallel) = self.parallel {
            config.parallel = parallel;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        if let Some(label) = self.fallback_label {
            config.fallback_label = label;
        }

        if let Some(chars) = self.max_classifier_chars {
            config.max_classifier_chars = chars;
        }

        config.validate()?;
        Ok(config)
    }
}
