//! Input pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fmt;
use std::path::PathBuf;

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input, requested with `-`
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve input patterns to document sources
///
/// `-` stands for stdin and may appear at most once.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut files = Vec::new();
    let mut stdin = false;

    for pattern in patterns {
        if pattern == "-" {
            stdin = true;
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() && !stdin {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    let mut sources: Vec<InputSource> = files.into_iter().map(InputSource::File).collect();
    if stdin {
        sources.insert(0, InputSource::Stdin);
    }

    Ok(sources)
}
