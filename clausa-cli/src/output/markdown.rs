//! Markdown output formatter

use super::{OutputFormatter, NO_TEXT_MESSAGE};
use anyhow::Result;
use clausa_core::Clause;
use std::io::Write;

/// Markdown formatter - a section per document, a heading per clause
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    clause_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            clause_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, clauses: &[Clause]) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        for clause in clauses {
            self.clause_count += 1;
            writeln!(self.writer, "### {}. {}", clause.id, clause.title)?;
            if let Some(label) = &clause.clause_type {
                writeln!(self.writer, "*Type: {label}*")?;
            }
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", clause.text)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn format_empty(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {NO_TEXT_MESSAGE}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total clauses: {}*", self.clause_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
