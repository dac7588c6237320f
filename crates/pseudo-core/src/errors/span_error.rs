//! Span validation errors raised before any text is rewritten.

use super::error_code::{self, PseudoErrorCode};

/// A detector handed the pseudonymizer spans it cannot splice safely.
///
/// Offsets are character offsets into the original text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("invalid span {start}..{end}: end must be greater than start")]
    InvalidRange { start: usize, end: usize },

    #[error("invalid span {start}..{end}: text is only {len} characters long")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("overlapping spans {first:?} and {second:?}")]
    Overlapping {
        first: (usize, usize),
        second: (usize, usize),
    },

    #[error("span {start}..{end} claims '{expected}' but the text holds '{found}'")]
    SurfaceMismatch {
        start: usize,
        end: usize,
        expected: String,
        found: String,
    },
}

impl SpanError {
    /// True for the two malformed-span variants (`InvalidSpanError` family).
    pub fn is_invalid_span(&self) -> bool {
        matches!(self, Self::InvalidRange { .. } | Self::OutOfBounds { .. })
    }
}

impl PseudoErrorCode for SpanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } | Self::OutOfBounds { .. } => error_code::INVALID_SPAN,
            Self::Overlapping { .. } => error_code::OVERLAPPING_SPAN,
            Self::SurfaceMismatch { .. } => error_code::SURFACE_MISMATCH,
        }
    }
}
