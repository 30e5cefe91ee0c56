//! OCR and typesetting noise removal
//!
//! Text extracted from scanned or PDF contracts carries artifacts that
//! confuse line classification: page-break control characters, ligature
//! glyphs, stray dashes and runs of padding whitespace. [`normalize`]
//! strips them and leaves a text whose lines are right-trimmed and whose
//! paragraphs are separated by at most one blank line.

use regex::Regex;
use std::sync::LazyLock;

/// Page-break marker emitted by most PDF text extractors.
pub const FORM_FEED: char = '\u{0C}';

/// Line separators other than `\n`: vertical tab, the information
/// separators, NEL and the Unicode line and paragraph separators.
pub const LINE_BREAKS: [char; 7] = [
    '\u{0B}', '\u{1C}', '\u{1D}', '\u{1E}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Code points deleted outright: the `ﬁ` and `ﬂ` ligatures and the en dash.
pub const OCR_GARBAGE: [char; 3] = ['\u{FB01}', '\u{FB02}', '\u{2013}'];

static HORIZONTAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}").expect("valid horizontal whitespace pattern"));

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline pattern"));

/// Remove OCR noise and collapse excess whitespace.
///
/// Total over any input and idempotent. Lines are right-trimmed before
/// blank-line runs are collapsed so that whitespace-only lines cannot
/// reintroduce a run on a second pass.
pub fn normalize(raw: &str) -> String {
    let text: String = raw
        .chars()
        .filter(|&c| c != '\r' && !OCR_GARBAGE.contains(&c))
        .map(|c| if is_line_break(c) { '\n' } else { c })
        .collect();

    let text = HORIZONTAL_RUN.replace_all(&text, " ");

    let text = text
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    let text = NEWLINE_RUN.replace_all(&text, "\n\n");

    text.trim().to_string()
}

/// Split normalized text into the trimmed, non-empty lines the segmenter
/// consumes.
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == '\n' || is_line_break(c))
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

fn is_line_break(c: char) -> bool {
    c == FORM_FEED || LINE_BREAKS.contains(&c)
}
