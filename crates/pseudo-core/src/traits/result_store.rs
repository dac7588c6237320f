use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::PseudoResult;
use crate::models::PseudonymizationResult;

/// Where a persisted result landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPaths {
    pub text: PathBuf,
    pub mapping: PathBuf,
}

/// Persistence for pseudonymization results.
pub trait IResultStore: Send + Sync {
    /// Persist `result` produced from the document at `source`.
    fn save_result(&self, source: &Path, result: &PseudonymizationResult) -> PseudoResult<SavedPaths>;
}
