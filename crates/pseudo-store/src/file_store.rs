use std::ffi::OsString;
use std::path::{Path, PathBuf};

use pseudo_core::config::OutputConfig;
use pseudo_core::errors::{PseudoResult, StoreError};
use pseudo_core::json::to_pretty_string;
use pseudo_core::traits::{IResultStore, SavedPaths};
use pseudo_core::{CorrespondenceTable, PseudonymizationResult};
use tracing::{debug, info, warn};

use crate::paths::output_paths;

const TMP_SUFFIX: &str = ".tmp";
const BACKUP_SUFFIX: &str = ".bak";

/// Filesystem persistence for source documents and results.
///
/// Outputs are staged in a `.tmp` sibling and renamed into place. A save
/// that fails part way restores whatever outputs were there before.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    config: OutputConfig,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write outputs into `dir` instead of next to the source.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    /// Where `save_result` would write outputs for `source`.
    pub fn output_paths(&self, source: &Path) -> Result<SavedPaths, StoreError> {
        output_paths(source, &self.config)
    }

    /// Read a UTF-8 document.
    pub fn read_text(&self, path: &Path) -> Result<String, StoreError> {
        std::fs::read_to_string(path).map_err(|e| StoreError::io(path, &e))
    }

    pub fn write_text(&self, path: &Path, text: &str) -> Result<(), StoreError> {
        let tmp = stage(path, text)?;
        publish(&[(tmp.as_path(), path)])
    }

    /// Write `table` as a 4-space indented JSON object.
    pub fn write_mapping(&self, path: &Path, table: &CorrespondenceTable) -> Result<(), StoreError> {
        let json = mapping_json(path, table)?;
        let tmp = stage(path, &json)?;
        publish(&[(tmp.as_path(), path)])
    }

    /// Read a mapping written by [`write_mapping`](Self::write_mapping).
    pub fn read_mapping(&self, path: &Path) -> Result<CorrespondenceTable, StoreError> {
        let content = self.read_text(path)?;
        serde_json::from_str(&content).map_err(|e| StoreError::InvalidMapping {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl IResultStore for FileStore {
    fn save_result(&self, source: &Path, result: &PseudonymizationResult) -> PseudoResult<SavedPaths> {
        let paths = self.output_paths(source)?;
        if let Some(dir) = paths.text.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, &e))?;
        }

        // Stage both files before publishing either.
        let json = mapping_json(&paths.mapping, &result.table)?;
        let text_tmp = stage(&paths.text, &result.text)?;
        let mapping_tmp = match stage(&paths.mapping, &json) {
            Ok(tmp) => tmp,
            Err(e) => {
                let _ = std::fs::remove_file(&text_tmp);
                return Err(e.into());
            }
        };
        publish(&[
            (text_tmp.as_path(), paths.text.as_path()),
            (mapping_tmp.as_path(), paths.mapping.as_path()),
        ])?;

        info!(
            source = %source.display(),
            text = %paths.text.display(),
            mapping = %paths.mapping.display(),
            entries = result.table.len(),
            "result saved"
        );
        Ok(paths)
    }
}

fn mapping_json(path: &Path, table: &CorrespondenceTable) -> Result<String, StoreError> {
    to_pretty_string(table).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn stage(path: &Path, content: &str) -> Result<PathBuf, StoreError> {
    let tmp = sibling(path, TMP_SUFFIX);
    std::fs::write(&tmp, content).map_err(|e| StoreError::io(&tmp, &e))?;
    debug!(path = %tmp.display(), bytes = content.len(), "staged");
    Ok(tmp)
}

/// Move every staged file onto its destination, all or nothing.
///
/// Existing destinations are first renamed to a `.bak` sibling. On any
/// failure the destinations published so far are removed, the backups are
/// moved back and the staged files are deleted.
fn publish(files: &[(&Path, &Path)]) -> Result<(), StoreError> {
    let mut backups = Vec::new();
    let mut published = Vec::new();

    match try_publish(files, &mut backups, &mut published) {
        Ok(()) => {
            for (backup, _) in &backups {
                let _ = std::fs::remove_file(backup);
            }
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, published = published.len(), "publish failed, rolling back");
            for dest in &published {
                let _ = std::fs::remove_file(dest);
            }
            for (backup, dest) in &backups {
                let _ = std::fs::rename(backup, dest);
            }
            for (tmp, _) in files {
                let _ = std::fs::remove_file(tmp);
            }
            Err(e)
        }
    }
}

fn try_publish<'a>(
    files: &[(&'a Path, &'a Path)],
    backups: &mut Vec<(PathBuf, &'a Path)>,
    published: &mut Vec<&'a Path>,
) -> Result<(), StoreError> {
    for &(_, dest) in files {
        if dest.is_file() {
            let backup = sibling(dest, BACKUP_SUFFIX);
            std::fs::rename(dest, &backup).map_err(|e| StoreError::io(dest, &e))?;
            backups.push((backup, dest));
        }
    }
    for &(tmp, dest) in files {
        std::fs::rename(tmp, dest).map_err(|e| StoreError::io(dest, &e))?;
        published.push(dest);
    }
    Ok(())
}
