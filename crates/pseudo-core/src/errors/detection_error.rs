//! Entity detection errors.

use super::error_code::{self, PseudoErrorCode};

/// Errors surfaced by an `IEntityDetector` backend.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("detector model unavailable: {name}")]
    ModelUnavailable { name: String },

    #[error("invalid gazetteer entry for {label}: {reason}")]
    InvalidGazetteer { label: String, reason: String },

    #[error("detection failed: {0}")]
    Failed(String),
}

impl PseudoErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::DETECTION_ERROR
    }
}
