//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{validate_category_word, OutputConfig, PseudonymizeConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PSEUDO_*`)
/// 2. Project config (`pseudo.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PseudoConfig {
    pub pseudonymize: PseudonymizeConfig,
    pub output: OutputConfig,
}

impl PseudoConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        tracing::debug!(
            target_label = %config.pseudonymize.target_label,
            category_word = %config.pseudonymize.resolved_category_word(),
            "configuration resolved"
        );
        Ok(config)
    }

    /// Parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::ReadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `PSEUDO_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(label) = lookup(constants::ENV_TARGET_LABEL) {
            self.pseudonymize.target_label = label;
        }
        if let Some(word) = lookup(constants::ENV_CATEGORY_WORD) {
            self.pseudonymize.category_word = Some(word);
        }
        if let Some(raw) = lookup(constants::ENV_STRICT_SURFACE) {
            self.pseudonymize.strict_surface = parse_bool(constants::ENV_STRICT_SURFACE, &raw)?;
        }
        if let Some(dir) = lookup(constants::ENV_OUTPUT_DIR) {
            self.output.output_dir = Some(dir.into());
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pseudonymize.target_label.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "pseudonymize.target_label".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(word) = &self.pseudonymize.category_word {
            validate_category_word("pseudonymize.category_word", word)?;
        }
        for (label, word) in &self.pseudonymize.category_words {
            validate_category_word(&format!("pseudonymize.category_words.{label}"), word)?;
        }
        if self.output.text_suffix.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "output.text_suffix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.output.mapping_suffix.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "output.mapping_suffix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_bool(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}
