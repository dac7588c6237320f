//! Training-data preparation errors.

use super::error_code::{self, PseudoErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    #[error("input file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("invalid training data in {path}: {message}")]
    InvalidData { path: String, message: String },

    #[error("nothing to save to {path}")]
    EmptyDataset { path: String },

    #[error("placeholder must not be empty")]
    EmptyPlaceholder,
}

impl PseudoErrorCode for PrepError {
    fn error_code(&self) -> &'static str {
        error_code::PREP_ERROR
    }
}
