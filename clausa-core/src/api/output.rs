//! Pipeline output

use crate::clause::Clause;
use std::time::Duration;

/// Segmented clauses with run metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Clauses in id order
    pub clauses: Vec<Clause>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Counts gathered along the way
    pub stats: ProcessingStats,
}

/// Counts gathered along the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Characters in the raw document
    pub input_chars: usize,
    /// Characters after normalization (and merging, when enabled)
    pub normalized_chars: usize,
    /// Non-empty lines fed to the segmenter
    pub line_count: usize,
    /// Clauses emitted
    pub clause_count: usize,
    /// Buffers discarded as too short
    pub dropped_fragments: usize,
}

impl Output {
    /// Whether no clause was recovered.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Average clause length in characters
    pub fn avg_clause_chars(&self) -> f32 {
        if self.clauses.is_empty() {
            return 0.0;
        }
        let total: usize = self.clauses.iter().map(|c| c.text.chars().count()).sum();
        total as f32 / self.clauses.len() as f32
    }
}
