//! Output formatting module

use anyhow::Result;
use clausa_core::Clause;
use std::io::Write;

/// Message reported for documents with no text
pub const NO_TEXT_MESSAGE: &str = "no text received";

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the clauses recovered from one document
    fn format_document(&mut self, source: &str, clauses: &[Clause]) -> Result<()>;

    /// Report a document that held no text
    fn format_empty(&mut self, source: &str) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{DocumentEnvelope, JsonFormatter};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One block per clause
    Text,
    /// JSON result envelope with clause records
    Json,
    /// Markdown document with a section per clause
    Markdown,
}

impl OutputFormat {
    /// All formats, for listing
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Parse a config-file name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// One-line description for listing
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one block per clause",
            OutputFormat::Json => "JSON envelope with status, total_clauses and clauses",
            OutputFormat::Markdown => "Markdown with a heading per clause",
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
