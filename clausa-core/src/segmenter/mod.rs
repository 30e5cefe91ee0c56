//! Clause segmentation
//!
//! The segmenter is a single-pass scanner over normalized lines. Every line
//! is classified into a [`LineShape`]; headings close the clause under
//! construction and open a new one, everything else is appended to it. The
//! only context carried from one line to the next is whether the previous
//! line was a major heading, which decides whether a numbered line starts a
//! provision of its own or is an enumerated point inside running text.

mod shape;
mod state;

pub use shape::{classify_line, LineShape};
pub use state::SegmenterState;

use crate::clause::Clause;
use crate::normalize::content_lines;

/// Lazy clause iterator over a line iterator
#[derive(Debug)]
pub struct Clauses<I> {
    lines: I,
    state: SegmenterState,
    done: bool,
}

impl<I> Clauses<I> {
    /// Wrap a line iterator.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            state: SegmenterState::new(),
            done: false,
        }
    }

    /// Segmentation state, for inspecting drop counts after iteration.
    pub fn state(&self) -> &SegmenterState {
        &self.state
    }
}

impl<I, S> Iterator for Clauses<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Clause;

    fn next(&mut self) -> Option<Clause> {
        while !self.done {
            match self.lines.next() {
                Some(line) => {
                    if let Some(clause) = self.state.step(line.as_ref()) {
                        return Some(clause);
                    }
                }
                None => {
                    self.done = true;
                    return self.state.finish();
                }
            }
        }
        None
    }
}

/// Segment an ordered sequence of lines into clauses.
pub fn segment<I, S>(lines: I) -> Vec<Clause>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Clauses::new(lines.into_iter()).collect()
}

/// Segment a normalized text, one line per text line.
pub fn segment_text(text: &str) -> Vec<Clause> {
    segment(content_lines(text))
}
