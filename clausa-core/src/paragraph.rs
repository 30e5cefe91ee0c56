//! Re-joining of line-wrapped paragraphs

use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid paragraph break pattern"));

/// How a wrapped fragment attaches to the line accumulated so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// The accumulated line ends in sentence-terminal punctuation.
    AfterSentence,
    /// The accumulated line was broken mid-sentence.
    Wrapped,
}

impl Join {
    /// Decide the join kind from the accumulated line.
    pub fn after(current: &str) -> Self {
        if ends_with_sentence_terminal(current) {
            Join::AfterSentence
        } else {
            Join::Wrapped
        }
    }

    /// Text inserted between the accumulated line and the next fragment.
    ///
    /// Both kinds currently merge with a single space.
    pub fn separator(self) -> &'static str {
        match self {
            Join::AfterSentence | Join::Wrapped => " ",
        }
    }
}

/// Whether `line` ends in one of `. ! ? ; :`.
pub fn ends_with_sentence_terminal(line: &str) -> bool {
    matches!(line.chars().last(), Some('.' | '!' | '?' | ';' | ':'))
}

/// Merge every line break inside a paragraph, keeping blank-line breaks.
///
/// Paragraphs that are empty after trimming are dropped; the survivors are
/// separated by one blank line.
pub fn merge_paragraphs(text: &str) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    PARAGRAPH_BREAK
        .split(&text)
        .filter_map(merge_paragraph)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn merge_paragraph(paragraph: &str) -> Option<String> {
    let mut fragments = paragraph.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut merged = fragments.next()?.to_string();

    for fragment in fragments {
        merged.push_str(Join::after(&merged).separator());
        merged.push_str(fragment);
    }

    Some(merged)
}
