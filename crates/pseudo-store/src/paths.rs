use std::path::{Path, PathBuf};

use pseudo_core::config::OutputConfig;
use pseudo_core::constants::{JSON_EXTENSION, TEXT_EXTENSION};
use pseudo_core::errors::StoreError;
use pseudo_core::traits::SavedPaths;

/// Output locations for `source`: `<dir>/<stem><suffix>.<ext>`, where `dir`
/// is the configured output directory or the source's own directory.
pub fn output_paths(source: &Path, config: &OutputConfig) -> Result<SavedPaths, StoreError> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StoreError::InvalidSourcePath {
            path: source.display().to_string(),
        })?;

    let dir: PathBuf = match &config.output_dir {
        Some(dir) => dir.clone(),
        None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    Ok(SavedPaths {
        text: dir.join(format!("{stem}{}.{TEXT_EXTENSION}", config.text_suffix)),
        mapping: dir.join(format!("{stem}{}.{JSON_EXTENSION}", config.mapping_suffix)),
    })
}
