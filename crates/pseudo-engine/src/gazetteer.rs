//! Dictionary-based entity detection.
//!
//! Matches known surface strings (the entity lists used to prepare training
//! data) so the pipeline can run without a trained model.

use pseudo_core::errors::{DetectionError, PseudoResult};
use pseudo_core::offsets::CharIndex;
use pseudo_core::traits::IEntityDetector;
use pseudo_core::EntitySpan;
use regex::Regex;
use tracing::debug;

/// Compiled alternation of all entries for one label.
#[derive(Debug, Clone)]
struct LabelPattern {
    label: String,
    regex: Regex,
    entries: usize,
}

/// Match before overlap resolution, in byte offsets.
#[derive(Debug, Clone)]
struct RawMatch {
    start: usize,
    end: usize,
    priority: usize,
}

/// Case-sensitive, whole-word gazetteer.
///
/// Within a label the longest entry wins at a given position. Across labels,
/// overlapping matches are resolved leftmost first, then longest, then by
/// registration order of the label.
#[derive(Debug, Clone, Default)]
pub struct GazetteerDetector {
    patterns: Vec<LabelPattern>,
}

impl GazetteerDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entries` under `label`. Blank entries are skipped; a label
    /// with no usable entry is an error.
    pub fn add_entries<I, S>(&mut self, label: &str, entries: I) -> Result<(), DetectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if names.is_empty() {
            return Err(DetectionError::InvalidGazetteer {
                label: label.to_string(),
                reason: "no entries".to_string(),
            });
        }
        // Longest first so the alternation prefers "Jean Dupont" over "Jean".
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let alternation = names
            .iter()
            .map(|name| bounded(name))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&alternation).map_err(|e| DetectionError::InvalidGazetteer {
            label: label.to_string(),
            reason: e.to_string(),
        })?;

        debug!(label, entries = names.len(), "gazetteer label registered");
        self.patterns.push(LabelPattern {
            label: label.to_string(),
            regex,
            entries: names.len(),
        });
        Ok(())
    }

    /// Builder form of [`add_entries`](Self::add_entries).
    pub fn with_entries<I, S>(mut self, label: &str, entries: I) -> Result<Self, DetectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_entries(label, entries)?;
        Ok(self)
    }

    /// Total number of distinct entries across labels.
    pub fn entry_count(&self) -> usize {
        self.patterns.iter().map(|p| p.entries).sum()
    }

    fn scan(&self, text: &str) -> Vec<RawMatch> {
        let mut matches = Vec::new();
        for (priority, pattern) in self.patterns.iter().enumerate() {
            for m in pattern.regex.find_iter(text) {
                matches.push(RawMatch {
                    start: m.start(),
                    end: m.end(),
                    priority,
                });
            }
        }

        matches.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
                .then_with(|| a.priority.cmp(&b.priority))
        });

        let mut kept: Vec<RawMatch> = Vec::with_capacity(matches.len());
        for m in matches {
            if kept.last().map_or(true, |last| m.start >= last.end) {
                kept.push(m);
            }
        }
        kept
    }
}

impl IEntityDetector for GazetteerDetector {
    fn detect(&self, text: &str) -> PseudoResult<Vec<EntitySpan>> {
        if text.is_empty() || self.patterns.is_empty() {
            return Ok(Vec::new());
        }
        let index = CharIndex::new(text);
        let mut spans = Vec::new();
        for m in self.scan(text) {
            // Regex matches always fall on char boundaries.
            let (Some(start), Some(end)) = (index.char_offset(m.start), index.char_offset(m.end))
            else {
                return Err(DetectionError::Failed(format!(
                    "match {}..{} is not on a char boundary",
                    m.start, m.end
                ))
                .into());
            };
            spans.push(EntitySpan::new(
                start,
                end,
                self.patterns[m.priority].label.clone(),
                &text[m.start..m.end],
            ));
        }
        Ok(spans)
    }

    fn labels(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.label.clone()).collect()
    }
}

/// Escape `name` and anchor it on word boundaries where its edges are word
/// characters (`\b` cannot match next to a leading or trailing symbol).
fn bounded(name: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut out = String::with_capacity(name.len() + 8);
    if name.chars().next().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out.push_str(&regex::escape(name));
    if name.chars().last().is_some_and(is_word) {
        out.push_str(r"\b");
    }
    out
}
