//! List command implementations

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use clausa_core::{ClauseClassifier, KeywordClassifier};
use std::path::Path;

/// Print the clause type vocabulary, one label per line
pub fn list_labels(rules: Option<&Path>) -> Result<()> {
    let classifier = match rules {
        Some(path) => KeywordClassifier::from_file(path),
        None => KeywordClassifier::builtin(),
    }
    .map_err(CliError::from)?;

    println!("Clause types:");
    for label in classifier.labels() {
        println!("  {label}");
    }
    Ok(())
}

/// Print the supported output formats
pub fn list_formats() -> Result<()> {
    println!("Output formats:");
    for format in OutputFormat::ALL {
        println!("  {:<10} {}", format.as_str(), format.description());
    }
    Ok(())
}
