//! Clause segmentation for OCR-damaged legal and contract text
//!
//! Raw text goes through a fixed sequence of pure passes:
//!
//! - [`normalize`](normalize::normalize) strips OCR and typesetting noise
//! - [`merge_paragraphs`](paragraph::merge_paragraphs) optionally re-joins
//!   wrapped lines
//! - [`segment`](segmenter::segment) scans lines with a small state machine
//!   and emits [`Clause`] records
//!
//! Labeling clauses is left to a [`ClauseClassifier`]; the crate ships a
//! keyword-based one driven by TOML rules.
//!
//! # Example
//!
//! ```rust
//! use clausa_core::{ClauseProcessor, Input};
//!
//! let text = "14. INSURANCE AND LIABILITY\n\
//!             The tenant shall maintain coverage of not less than one million dollars.";
//!
//! let output = ClauseProcessor::new().process(Input::from_text(text)).unwrap();
//!
//! assert_eq!(output.clauses.len(), 1);
//! assert_eq!(output.clauses[0].title, "14. INSURANCE AND LIABILITY");
//! ```

pub mod api;
pub mod classify;
pub mod clause;
pub mod error;
pub mod heading;
pub mod normalize;
pub mod paragraph;
pub mod segmenter;

pub use api::{
    Config, ConfigBuilder, ClauseProcessor, Input, Output, ProcessingMetadata, ProcessingStats,
};
pub use classify::{classify_clauses, ClauseClassifier, KeywordClassifier, RuleSet, UNCLASSIFIED};
pub use clause::{Clause, MAX_TITLE_CHARS, MIN_CLAUSE_CHARS};
pub use error::{ClassifyError, Error, Result};
pub use heading::is_heading;
pub use normalize::normalize;
pub use paragraph::merge_paragraphs;
pub use segmenter::{classify_line, segment, segment_text, Clauses, LineShape, SegmenterState};
