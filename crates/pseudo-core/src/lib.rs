//! # pseudo-core
//!
//! Foundation crate for the pseudonymization toolkit.
//! Defines the span and correspondence types, collaborator traits, errors,
//! config, constants, offset conversion and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod json;
pub mod models;
pub mod offsets;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PseudoConfig;
pub use errors::{PseudoError, PseudoResult, SpanError};
pub use models::{CorrespondenceTable, EntitySpan, PseudonymizationResult};
