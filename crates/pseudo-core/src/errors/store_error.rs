//! Persistence errors for text and mapping files.

use super::error_code::{self, PseudoErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("invalid mapping file {path}: {message}")]
    InvalidMapping { path: String, message: String },

    #[error("cannot derive output name from {path}")]
    InvalidSourcePath { path: String },
}

impl StoreError {
    /// Classify an I/O failure, keeping not-found distinct.
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Self::Io {
                path: path.display().to_string(),
                message: err.to_string(),
            }
        }
    }
}

impl PseudoErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
