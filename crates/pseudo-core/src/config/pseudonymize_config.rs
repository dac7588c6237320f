use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Which entity category to rewrite and how its placeholders are spelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudonymizeConfig {
    /// Label of the spans to replace.
    pub target_label: String,
    /// Placeholder word for `target_label`. Derived from the label when unset.
    pub category_word: Option<String>,
    /// Reject spans whose reported text disagrees with the source text.
    pub strict_surface: bool,
    /// Extra or overriding label → placeholder word pairs.
    pub category_words: BTreeMap<String, String>,
}

impl Default for PseudonymizeConfig {
    fn default() -> Self {
        Self {
            target_label: constants::DEFAULT_TARGET_LABEL.to_string(),
            category_word: None,
            strict_surface: constants::DEFAULT_STRICT_SURFACE,
            category_words: BTreeMap::new(),
        }
    }
}

impl PseudonymizeConfig {
    /// Placeholder word used for `target_label`.
    pub fn resolved_category_word(&self) -> String {
        if let Some(word) = &self.category_word {
            return word.clone();
        }
        self.category_word_for(&self.target_label)
    }

    /// Placeholder word for any label: configured mapping, then the built-in
    /// table, then the label upper-cased.
    pub fn category_word_for(&self, label: &str) -> String {
        if let Some(word) = self.category_words.get(label) {
            return word.clone();
        }
        default_category_word(label)
    }
}

/// Built-in placeholder word for `label` (`PER` → `PERSONNE`, ...), falling
/// back to the label upper-cased.
pub fn default_category_word(label: &str) -> String {
    constants::BUILTIN_CATEGORY_WORDS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, w)| (*w).to_string())
        .unwrap_or_else(|| label.to_uppercase())
}

/// A category word ends up inside `[WORD_N]`; brackets or whitespace would
/// make placeholders ambiguous to restore.
pub fn validate_category_word(field: &str, word: &str) -> Result<(), ConfigError> {
    if word.is_empty() {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if word.chars().any(|c| c == '[' || c == ']' || c.is_whitespace()) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("'{word}' must not contain brackets or whitespace"),
        });
    }
    Ok(())
}
