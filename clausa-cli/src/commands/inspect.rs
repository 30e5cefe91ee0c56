//! Inspect command implementation

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use clausa_core::normalize::content_lines;
use clausa_core::{classify_line, is_heading, ClauseProcessor, Config};
use std::io::{self, Write};
use std::path::Path;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Input file (`-` for stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,

    /// Join line-wrapped paragraphs before inspecting
    #[arg(short, long)]
    pub merge_paragraphs: bool,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let raw = if self.input == "-" {
            FileReader::read_stdin()?
        } else {
            let path = Path::new(&self.input);
            if !path.is_file() {
                return Err(CliError::FileNotFound(self.input.clone()).into());
            }
            FileReader::read_text(path)?
        };

        let config = Config::builder()
            .merge_paragraphs(self.merge_paragraphs)
            .build()
            .map_err(CliError::from)?;
        let prepared = ClauseProcessor::with_config(config)
            .map_err(CliError::from)?
            .prepare(&raw);

        let stdout = io::stdout();
        write_report(&prepared, &mut stdout.lock()).context("Failed to write report")?;
        Ok(())
    }
}

/// One row per normalized line: number, shape, heading flag, text
fn write_report<W: Write>(text: &str, out: &mut W) -> io::Result<()> {
    for (n, line) in content_lines(text).enumerate() {
        let flag = if is_heading(line) { 'H' } else { '-' };
        writeln!(out, "{:>4}  {:<20} {}  {}", n + 1, classify_line(line).name(), flag, line)?;
    }
    out.flush()
}
