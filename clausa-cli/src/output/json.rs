//! JSON output formatter

use super::{OutputFormatter, NO_TEXT_MESSAGE};
use anyhow::Result;
use clausa_core::Clause;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Result envelope for one document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DocumentEnvelope {
    /// Segmentation ran; `clauses` may be empty
    Success {
        source: String,
        total_clauses: usize,
        clauses: Vec<Clause>,
    },
    /// Nothing to segment
    Error { source: String, message: String },
}

/// JSON formatter - one envelope for a single document, an array otherwise
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentEnvelope>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, clauses: &[Clause]) -> Result<()> {
        self.documents.push(DocumentEnvelope::Success {
            source: source.to_string(),
            total_clauses: clauses.len(),
            clauses: clauses.to_vec(),
        });
        Ok(())
    }

    fn format_empty(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentEnvelope::Error {
            source: source.to_string(),
            message: NO_TEXT_MESSAGE.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let documents = std::mem::take(&mut self.documents);
        match documents.as_slice() {
            [single] => self.write_value(single)?,
            _ => self.write_value(&documents)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
