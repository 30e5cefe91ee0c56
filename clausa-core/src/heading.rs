//! Structural heading detection for single lines

use regex::Regex;
use std::sync::LazyLock;

/// Upper bound on the length of an all-caps heading, in characters.
pub const MAX_CAPS_HEADING_CHARS: usize = 120;

/// Minimum alphabetic characters an all-caps line needs to count as a heading.
pub const MIN_CAPS_HEADING_LETTERS: usize = 3;

static MARKER_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(ANNEXURE|SCHEDULE|APPENDIX|NOTE|NOTES|DECLARATION)\b")
        .expect("valid marker heading pattern")
});

static NUMBERED_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+(?:\.\d+){0,3}[).\-]?\s+[A-Za-z].+").expect("valid numbered heading pattern")
});

static ARTICLE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(ARTICLE|SECTION)\s+[IVXLCDM0-9]+").expect("valid article heading pattern")
});

/// Whether `line` looks like a structural heading.
///
/// Blank lines are never headings.
pub fn is_heading(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }

    is_marker_heading(line)
        || is_caps_heading(line)
        || is_numbered_heading(line)
        || is_article_heading(line)
}

/// `ANNEXURE`, `SCHEDULE`, `APPENDIX`, `NOTE(S)` or `DECLARATION` at the start.
pub fn is_marker_heading(line: &str) -> bool {
    MARKER_HEADING.is_match(line)
}

/// An all-caps line with enough letters that is not a paragraph.
pub fn is_caps_heading(line: &str) -> bool {
    let letters = line.chars().filter(|c| c.is_alphabetic()).count();

    line.to_uppercase() == line
        && letters >= MIN_CAPS_HEADING_LETTERS
        && line.chars().count() <= MAX_CAPS_HEADING_CHARS
}

/// `3 Title`, `3.2) Title`, `3.2.4. Title` and similar.
pub fn is_numbered_heading(line: &str) -> bool {
    NUMBERED_HEADING.is_match(line)
}

/// `ARTICLE IV`, `Section 12` and similar.
pub fn is_article_heading(line: &str) -> bool {
    ARTICLE_HEADING.is_match(line)
}
