pub mod detector;
pub mod result_store;

pub use detector::IEntityDetector;
pub use result_store::{IResultStore, SavedPaths};
