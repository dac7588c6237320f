//! Error handling for the pseudonymization toolkit.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod prep_error;
pub mod pseudo_error;
pub mod span_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::PseudoErrorCode;
pub use prep_error::PrepError;
pub use pseudo_error::{PseudoError, PseudoResult};
pub use span_error::SpanError;
pub use store_error::StoreError;
