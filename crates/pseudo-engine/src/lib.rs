//! # pseudo-engine
//!
//! Replaces detected entity spans with stable placeholders (`[PERSONNE_1]`)
//! and returns the correspondence table needed to reverse the rewrite.
//! Spans are validated up front and spliced right to left against the
//! original coordinates, so no offset is ever recomputed.

pub mod batch;
pub mod engine;
pub mod gazetteer;
pub mod placeholders;
pub mod restore;
pub mod splice;
pub mod validation;

pub use engine::{pseudonymize, Pseudonymizer};
pub use gazetteer::GazetteerDetector;
pub use placeholders::assign_placeholders;
pub use restore::restore;
