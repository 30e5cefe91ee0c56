//! End-to-end clause processor

use std::time::Instant;

use crate::api::{Config, Input, Output, ProcessingMetadata, ProcessingStats};
use crate::classify::{classify_clauses, ClauseClassifier};
use crate::error::Result;
use crate::normalize::{content_lines, normalize};
use crate::paragraph::merge_paragraphs;
use crate::segmenter::Clauses;

/// Runs normalization, optional paragraph merging and segmentation
#[derive(Debug, Clone, Default)]
pub struct ClauseProcessor {
    config: Config,
}

impl ClauseProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Clean a raw document into the text the segmenter reads.
    pub fn prepare(&self, raw: &str) -> String {
        let text = normalize(raw);
        if self.config.merge_paragraphs {
            merge_paragraphs(&text)
        } else {
            text
        }
    }

    /// Read and segment a document.
    pub fn process(&self, input: Input) -> Result<Output> {
        let text = input.into_text()?;
        Ok(self.process_text(&text))
    }

    /// Segment a document already held in memory.
    pub fn process_text(&self, raw: &str) -> Output {
        let start = Instant::now();

        let prepared = self.prepare(raw);
        let line_count = content_lines(&prepared).count();

        let mut iter = Clauses::new(content_lines(&prepared));
        let clauses: Vec<_> = iter.by_ref().collect();
        let dropped_fragments = iter.state().dropped();

        log::debug!(
            "segmented {line_count} lines into {} clauses ({dropped_fragments} fragments dropped)",
            clauses.len()
        );

        let stats = ProcessingStats {
            input_chars: raw.chars().count(),
            normalized_chars: prepared.chars().count(),
            line_count,
            clause_count: clauses.len(),
            dropped_fragments,
        };

        Output {
            clauses,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                stats,
            },
        }
    }

    /// Segment a document and label every clause.
    pub fn process_and_classify<C>(&self, input: Input, classifier: &C) -> Result<Output>
    where
        C: ClauseClassifier + ?Sized,
    {
        let start = Instant::now();
        let mut output = self.process(input)?;
        output.clauses = classify_clauses(output.clauses, classifier, &self.config)?;
        output.metadata.duration = start.elapsed();
        Ok(output)
    }
}
