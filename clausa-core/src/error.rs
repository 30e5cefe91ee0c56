//! Error types
//!
//! Normalization, heading detection and segmentation are total and never
//! fail. Errors only arise at the edges: decoding input, loading
//! configuration and calling a classifier.

use thiserror::Error;

/// Failure reported by a clause classifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The classifier could not be reached or has not been loaded
    #[error("classifier unavailable: {0}")]
    Unavailable(String),

    /// The classifier answered with something outside its vocabulary
    #[error("malformed classifier output: {0}")]
    MalformedOutput(String),
}

/// Error type for pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Classifier failure
    #[error("Classification error: {0}")]
    Classification(#[from] ClassifyError),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;
