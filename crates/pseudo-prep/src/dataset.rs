//! JSON persistence of training examples.

use std::path::Path;

use pseudo_core::errors::PrepError;
use pseudo_core::json::to_pretty_string;
use pseudo_core::models::TrainingExample;
use tracing::info;

/// Write `examples` as a JSON array. An empty set is refused rather than
/// producing an empty training file. Returns the number written.
pub fn save_training_data(examples: &[TrainingExample], path: &Path) -> Result<usize, PrepError> {
    if examples.is_empty() {
        return Err(PrepError::EmptyDataset {
            path: path.display().to_string(),
        });
    }
    let write_failed = |message: String| PrepError::WriteFailed {
        path: path.display().to_string(),
        message,
    };
    let json = to_pretty_string(examples).map_err(|e| write_failed(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| write_failed(e.to_string()))?;

    info!(path = %path.display(), examples = examples.len(), "training data saved");
    Ok(examples.len())
}

/// Read a training file written by [`save_training_data`].
pub fn load_training_data(path: &Path) -> Result<Vec<TrainingExample>, PrepError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PrepError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            PrepError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        }
    })?;
    serde_json::from_str(&content).map_err(|e| PrepError::InvalidData {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
