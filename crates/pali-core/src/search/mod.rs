//! Plain and regex search over the displayed text of a document.
//!
//! Searches produce a [`ResultSet`]: indexed spans with at least one match,
//! in document order. A [`Cursor`] walks the matches with wraparound.
//! Offsets are byte offsets into the span text.

mod cursor;
mod pattern;
mod plain;

use std::ops::Range;

pub use cursor::{Cursor, Direction};
pub use pattern::{search_regex, Boundaries};
pub use plain::search_plain;

use crate::document::SpanAddress;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchLocation {
    /// Literal match; `len` is measured in the span text.
    Plain { offset: usize, len: usize },
    /// Regex match; `text` excludes whole-word boundary characters.
    Regex { offset: usize, text: String },
}

impl MatchLocation {
    pub fn offset(&self) -> usize {
        match self {
            MatchLocation::Plain { offset, .. } | MatchLocation::Regex { offset, .. } => *offset,
        }
    }

    pub fn range(&self) -> Range<usize> {
        match self {
            MatchLocation::Plain { offset, len } => *offset..offset + len,
            MatchLocation::Regex { offset, text } => *offset..offset + text.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatches {
    pub span: SpanAddress,
    pub matches: Vec<MatchLocation>,
}

/// Selection the host should highlight for the current match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub span: SpanAddress,
    pub range: Range<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<SpanMatches>,
}

impl ResultSet {
    /// Builds a result set, dropping spans without matches.
    pub fn new(entries: Vec<SpanMatches>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| !e.matches.is_empty())
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of spans with matches.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of matches across all spans.
    pub fn match_count(&self) -> usize {
        self.entries.iter().map(|e| e.matches.len()).sum()
    }

    pub fn entries(&self) -> &[SpanMatches] {
        &self.entries
    }

    pub fn get(&self, i: usize) -> Option<&SpanMatches> {
        self.entries.get(i)
    }

    pub fn selection(&self, cursor: &Cursor) -> Option<Selection> {
        let entry = self.entries.get(cursor.result)?;
        let location = entry.matches.get(cursor.matched)?;
        Some(Selection {
            span: entry.span,
            range: location.range(),
        })
    }
}
