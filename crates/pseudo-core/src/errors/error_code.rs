//! Stable error codes for presentation layers.

pub const INVALID_SPAN: &str = "INVALID_SPAN";
pub const OVERLAPPING_SPAN: &str = "OVERLAPPING_SPAN";
pub const SURFACE_MISMATCH: &str = "SURFACE_MISMATCH";
pub const DETECTION_ERROR: &str = "DETECTION_ERROR";
pub const PREP_ERROR: &str = "PREP_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a code a UI can translate without matching on messages.
pub trait PseudoErrorCode {
    fn error_code(&self) -> &'static str;
}
