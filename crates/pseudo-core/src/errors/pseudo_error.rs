//! Top-level error aggregating every subsystem error.

use super::error_code::PseudoErrorCode;
use super::{ConfigError, DetectionError, PrepError, SpanError, StoreError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PseudoError {
    #[error("Span error: {0}")]
    Span(#[from] SpanError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Preparation error: {0}")]
    Prep(#[from] PrepError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type PseudoResult<T> = Result<T, PseudoError>;

impl PseudoErrorCode for PseudoError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Span(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
            Self::Prep(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
