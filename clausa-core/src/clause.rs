//! Clause value object

use serde::{Deserialize, Serialize};

/// Maximum characters kept in a clause title.
pub const MAX_TITLE_CHARS: usize = 80;

/// Accumulated blocks must be longer than this, in characters, to become a clause.
pub const MIN_CLAUSE_CHARS: usize = 20;

/// One labeled span of contract text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// 1-based emission order, gap-free
    pub id: usize,
    /// First buffered line, truncated to [`MAX_TITLE_CHARS`]
    pub title: String,
    /// Buffered lines joined by single spaces
    pub text: String,
    /// Label assigned by a classifier, absent until classification runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause_type: Option<String>,
}

impl Clause {
    /// Build a clause from buffered lines, or `None` when the joined text
    /// is too short to be a provision.
    pub(crate) fn from_lines(id: usize, lines: &[String]) -> Option<Self> {
        let text = lines.join(" ").trim().to_string();
        if text.chars().count() <= MIN_CLAUSE_CHARS {
            return None;
        }

        let title = lines
            .first()
            .map(|first| truncate_chars(first, MAX_TITLE_CHARS))
            .unwrap_or_default();

        Some(Self {
            id,
            title,
            text,
            clause_type: None,
        })
    }

    /// Attach a classifier label.
    pub fn with_type(mut self, label: impl Into<String>) -> Self {
        self.clause_type = Some(label.into());
        self
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}
