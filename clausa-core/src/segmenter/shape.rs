//! Line shapes recognised by the segmenter

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static MAJOR_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d{1,2}\.\s+[A-Z][A-Za-z ]{3,99}$").expect("valid major heading pattern")
});

static INLINE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z' ]{2,100}:$").expect("valid inline heading pattern")
});

static INLINE_HEADING_WITH_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Za-z' ]{2,100}):\s+(.+)$").expect("valid inline heading body pattern")
});

static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}\.\s+.+").expect("valid numbered item pattern"));

/// Structural shape of one trimmed line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// `14. INSURANCE AND LIABILITY`
    MajorHeading,
    /// `Tenant's Insurance: The tenant shall ...`
    InlineHeadingWithBody {
        /// Text before the colon
        label: &'a str,
        /// Text after the colon
        body: &'a str,
    },
    /// `Tenant's Insurance:`
    InlineHeading,
    /// `1. The tenant shall ...`
    NumberedItem,
    /// Anything else
    Text,
}

impl LineShape<'_> {
    /// Short stable name, used by diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            LineShape::MajorHeading => "major-heading",
            LineShape::InlineHeadingWithBody { .. } => "inline-heading-body",
            LineShape::InlineHeading => "inline-heading",
            LineShape::NumberedItem => "numbered-item",
            LineShape::Text => "text",
        }
    }
}

impl fmt::Display for LineShape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a line, testing shapes in priority order.
pub fn classify_line(line: &str) -> LineShape<'_> {
    if MAJOR_HEADING.is_match(line) {
        return LineShape::MajorHeading;
    }

    if let Some(caps) = INLINE_HEADING_WITH_BODY.captures(line) {
        if let (Some(label), Some(body)) = (caps.get(1), caps.get(2)) {
            return LineShape::InlineHeadingWithBody {
                label: label.as_str(),
                body: body.as_str(),
            };
        }
    }

    if INLINE_HEADING.is_match(line) {
        return LineShape::InlineHeading;
    }

    if NUMBERED_ITEM.is_match(line) {
        return LineShape::NumberedItem;
    }

    LineShape::Text
}
