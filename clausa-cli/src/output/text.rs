//! Plain text output formatter

use super::{OutputFormatter, NO_TEXT_MESSAGE};
use anyhow::Result;
use clausa_core::Clause;
use std::io::Write;

/// Plain text formatter - one block per clause
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }

    fn header(&mut self, source: &str) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;
        writeln!(self.writer, "== {source} ==")?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, clauses: &[Clause]) -> Result<()> {
        self.header(source)?;
        for clause in clauses {
            match &clause.clause_type {
                Some(label) => writeln!(self.writer, "[{}] {} ({label})", clause.id, clause.title)?,
                None => writeln!(self.writer, "[{}] {}", clause.id, clause.title)?,
            }
            writeln!(self.writer, "{}", clause.text)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn format_empty(&mut self, source: &str) -> Result<()> {
        self.header(source)?;
        writeln!(self.writer, "error: {NO_TEXT_MESSAGE}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
