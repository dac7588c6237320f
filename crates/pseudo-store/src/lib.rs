//! # pseudo-store
//!
//! Reads source documents and writes results in the on-disk formats:
//! `<stem>_pseudonymise.txt` for the rewritten text and `<stem>_mapping.json`
//! for the correspondence table.

pub mod file_store;
pub mod paths;
pub mod pipeline;

pub use file_store::FileStore;
pub use pipeline::pseudonymize_file;
