use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Naming and placement of persisted results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Appended to the input stem for the rewritten text (`notes_pseudonymise.txt`).
    pub text_suffix: String,
    /// Appended to the input stem for the mapping (`notes_mapping.json`).
    pub mapping_suffix: String,
    /// Directory for outputs; next to the input when unset.
    pub output_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            text_suffix: constants::DEFAULT_TEXT_SUFFIX.to_string(),
            mapping_suffix: constants::DEFAULT_MAPPING_SUFFIX.to_string(),
            output_dir: None,
        }
    }
}
