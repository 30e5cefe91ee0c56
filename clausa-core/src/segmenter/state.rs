//! Segmentation state machine

use super::shape::{classify_line, LineShape};
use crate::clause::Clause;

/// Accumulation buffer plus the single flag carried between lines.
///
/// Lines must be fed in document order exactly once. Each call to
/// [`step`](Self::step) emits at most one clause, the one closed by the
/// current line.
#[derive(Debug, Clone)]
pub struct SegmenterState {
    buffer: Vec<String>,
    last_was_major: bool,
    next_id: usize,
    dropped: usize,
}

impl Default for SegmenterState {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmenterState {
    /// Empty buffer, no preceding heading, ids starting at 1.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            last_was_major: false,
            next_id: 1,
            dropped: 0,
        }
    }

    /// Whether the last line consumed was a major heading.
    pub fn last_was_major(&self) -> bool {
        self.last_was_major
    }

    /// Lines buffered for the clause under construction.
    pub fn buffered(&self) -> &[String] {
        &self.buffer
    }

    /// Number of non-empty buffers discarded for being too short.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Consume one line. Blank lines are ignored.
    pub fn step(&mut self, line: &str) -> Option<Clause> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let shape = classify_line(line);
        log::trace!("{shape}: {line}");

        match shape {
            LineShape::MajorHeading => {
                let emitted = self.flush();
                self.buffer.push(line.to_string());
                self.last_was_major = true;
                emitted
            }
            LineShape::InlineHeadingWithBody { label, body } => {
                let emitted = self.flush();
                self.buffer.push(label.to_string());
                self.buffer.push(body.to_string());
                self.last_was_major = false;
                emitted
            }
            LineShape::InlineHeading => {
                let emitted = self.flush();
                self.buffer.push(line.to_string());
                self.last_was_major = false;
                emitted
            }
            LineShape::NumberedItem => {
                // only a numbered line directly under a major heading opens a clause
                let emitted = if self.last_was_major {
                    self.flush()
                } else {
                    None
                };
                self.buffer.push(line.to_string());
                self.last_was_major = false;
                emitted
            }
            LineShape::Text => {
                self.buffer.push(line.to_string());
                self.last_was_major = false;
                None
            }
        }
    }

    /// Flush whatever is still buffered after the last line.
    pub fn finish(&mut self) -> Option<Clause> {
        self.last_was_major = false;
        self.flush()
    }

    fn flush(&mut self) -> Option<Clause> {
        if self.buffer.is_empty() {
            return None;
        }

        let lines = std::mem::take(&mut self.buffer);
        match Clause::from_lines(self.next_id, &lines) {
            Some(clause) => {
                self.next_id += 1;
                Some(clause)
            }
            None => {
                log::debug!("dropping short fragment: {:?}", lines.join(" "));
                self.dropped += 1;
                None
            }
        }
    }
}
