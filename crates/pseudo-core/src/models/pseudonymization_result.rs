use serde::{Deserialize, Serialize};

use super::CorrespondenceTable;

/// Output of one pseudonymization call: the rewritten text and the table that
/// maps each original surface string to its placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudonymizationResult {
    pub text: String,
    pub table: CorrespondenceTable,
}

impl PseudonymizationResult {
    /// Result for a text that needed no rewriting.
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            table: CorrespondenceTable::new(),
        }
    }

    /// Whether anything was replaced.
    pub fn is_unchanged(&self) -> bool {
        self.table.is_empty()
    }
}
