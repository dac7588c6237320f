use pseudo_core::config::{default_category_word, validate_category_word, PseudonymizeConfig};
use pseudo_core::constants;
use pseudo_core::errors::{ConfigError, PseudoResult};
use pseudo_core::offsets::CharIndex;
use pseudo_core::traits::IEntityDetector;
use pseudo_core::{CorrespondenceTable, EntitySpan, PseudonymizationResult, SpanError};
use tracing::{debug, info};

use crate::splice::{splice, Replacement};
use crate::validation::validate_spans;

/// Rewrites one entity category of a text into numbered placeholders.
///
/// Stateless between calls: every call starts a fresh correspondence table
/// and counter. The only state is the call configuration.
#[derive(Debug, Clone)]
pub struct Pseudonymizer {
    target_label: String,
    category_word: String,
    strict_surface: bool,
}

impl Pseudonymizer {
    /// Pseudonymizer for persons: `PER` spans become `[PERSONNE_N]`.
    pub fn new() -> Self {
        Self::for_label(constants::DEFAULT_TARGET_LABEL)
    }

    /// Target `label`, with its built-in placeholder word.
    pub fn for_label(label: impl Into<String>) -> Self {
        let target_label = label.into();
        let category_word = default_category_word(&target_label);
        Self {
            target_label,
            category_word,
            strict_surface: constants::DEFAULT_STRICT_SURFACE,
        }
    }

    /// Build from a config section. The section is expected to have passed
    /// `PseudoConfig::validate`.
    pub fn from_config(config: &PseudonymizeConfig) -> Self {
        Self {
            target_label: config.target_label.clone(),
            category_word: config.resolved_category_word(),
            strict_surface: config.strict_surface,
        }
    }

    /// Override the placeholder word. Words that are empty or contain
    /// brackets or whitespace are refused: `restore` could not find their
    /// placeholders again.
    pub fn with_category_word(mut self, word: impl Into<String>) -> Result<Self, ConfigError> {
        let word = word.into();
        validate_category_word("category_word", &word)?;
        self.category_word = word;
        Ok(self)
    }

    /// Reject spans whose reported text disagrees with the source text.
    pub fn with_strict_surface(mut self, strict: bool) -> Self {
        self.strict_surface = strict;
        self
    }

    pub fn target_label(&self) -> &str {
        &self.target_label
    }

    pub fn category_word(&self) -> &str {
        &self.category_word
    }

    /// Replace every span labelled with the target label.
    ///
    /// Spans of other labels are ignored entirely. All retained spans are
    /// validated before anything is rewritten; on error no text is produced.
    pub fn pseudonymize(
        &self,
        text: &str,
        spans: &[EntitySpan],
    ) -> Result<PseudonymizationResult, SpanError> {
        let retained: Vec<&EntitySpan> = spans
            .iter()
            .filter(|s| s.label == self.target_label)
            .collect();

        if text.is_empty() {
            if !retained.is_empty() {
                debug!(spans = retained.len(), "empty text, ignoring spans");
            }
            return Ok(PseudonymizationResult::unchanged(""));
        }
        if retained.is_empty() {
            debug!(label = %self.target_label, "no matching spans");
            return Ok(PseudonymizationResult::unchanged(text));
        }

        let index = CharIndex::new(text);
        let validated = validate_spans(text, &index, &retained, self.strict_surface)?;

        // Left to right, so numbering follows first appearance in the text.
        let mut table = CorrespondenceTable::new();
        let replacements: Vec<Replacement> = validated
            .iter()
            .map(|v| Replacement {
                byte_start: v.byte_start,
                byte_end: v.byte_end,
                placeholder: table
                    .get_or_assign(v.span.normalized_text(), &self.category_word)
                    .to_string(),
            })
            .collect();

        let rewritten = splice(text, &replacements);

        info!(
            label = %self.target_label,
            replaced = replacements.len(),
            distinct = table.len(),
            "text pseudonymized"
        );

        Ok(PseudonymizationResult {
            text: rewritten,
            table,
        })
    }

    /// Run `detector` on `text`, then pseudonymize its spans.
    pub fn pseudonymize_with<D>(&self, detector: &D, text: &str) -> PseudoResult<PseudonymizationResult>
    where
        D: IEntityDetector + ?Sized,
    {
        let spans = detector.detect(text)?;
        debug!(detected = spans.len(), "detector returned spans");
        Ok(self.pseudonymize(text, &spans)?)
    }
}

impl Default for Pseudonymizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pseudonymize `target_label` spans of `text` with the label's built-in
/// placeholder word (`PER` → `[PERSONNE_N]`).
pub fn pseudonymize(
    text: &str,
    spans: &[EntitySpan],
    target_label: &str,
) -> Result<PseudonymizationResult, SpanError> {
    Pseudonymizer::for_label(target_label).pseudonymize(text, spans)
}
