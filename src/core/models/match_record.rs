//! Match results
//!
//! A match run produces a [`MatchSet`]: every [`MatchRecord`] in subject
//! order, plus the [`Highlight`] spans of the non-empty ones.

use serde::{Deserialize, Serialize};

/// One successful match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The matched text (may be empty)
    pub full_text: String,
    /// Byte offset of the match in the subject
    pub start: usize,
    /// One entry per capturing group, `None` when the group did not participate
    pub groups: Vec<Option<String>>,
}

impl MatchRecord {
    /// Byte offset just past the match
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.full_text.len()
    }

    /// Length of the matched text in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.full_text.len()
    }

    /// Whether this is a zero-length match
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }

    /// Span of the match, or `None` for a zero-length match
    #[must_use]
    pub const fn highlight(&self) -> Option<Highlight> {
        if self.is_empty() {
            None
        } else {
            Some(Highlight::new(self.start, self.end()))
        }
    }
}

/// A half-open `[start, end)` byte span marking one non-empty match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Highlight {
    /// Create a new highlight
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check whether two spans share any byte
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The outcome of one match run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSet {
    /// All matches, left to right
    pub matches: Vec<MatchRecord>,
    /// Spans of the non-empty matches, sorted and disjoint
    pub highlights: Vec<Highlight>,
}

impl MatchSet {
    /// An empty result
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            matches: Vec::new(),
            highlights: Vec::new(),
        }
    }

    /// Append a match, recording its highlight when it is non-empty
    pub fn push(&mut self, record: MatchRecord) {
        if let Some(span) = record.highlight() {
            self.highlights.push(span);
        }
        self.matches.push(record);
    }

    /// Number of matches (including empty ones)
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Widest capture group count across all matches
    #[must_use]
    pub fn max_groups(&self) -> usize {
        self.matches.iter().map(|m| m.groups.len()).max().unwrap_or(0)
    }
}
