use serde::{Deserialize, Serialize};

use crate::offsets::CharIndex;

/// One detected entity occurrence.
///
/// `start`/`end` are half-open character offsets into the text the detector
/// was run on. `text` is whatever surface string the detector reported; the
/// detector owns the guarantee that it matches `source[start..end]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitySpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub text: String,
}

impl EntitySpan {
    pub fn new(start: usize, end: usize, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
            text: text.into(),
        }
    }

    /// Build a span whose `text` is sliced out of `source`.
    /// Returns `None` when the range is empty or falls outside `source`.
    pub fn from_source(source: &str, start: usize, end: usize, label: impl Into<String>) -> Option<Self> {
        if end <= start {
            return None;
        }
        let index = CharIndex::new(source);
        let text = index.slice(source, start, end)?;
        Some(Self::new(start, end, label, text))
    }

    /// Width in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Half-open intervals overlap; touching spans do not.
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Surface text with incidental leading/trailing whitespace removed.
    /// This is the key used in the correspondence table.
    pub fn normalized_text(&self) -> &str {
        self.text.trim()
    }
}
