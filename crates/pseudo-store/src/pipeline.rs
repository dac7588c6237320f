use std::path::Path;

use pseudo_core::errors::PseudoResult;
use pseudo_core::traits::{IEntityDetector, IResultStore, SavedPaths};
use pseudo_core::PseudonymizationResult;
use pseudo_engine::Pseudonymizer;
use tracing::info;

use crate::file_store::FileStore;

/// Read `source`, detect and pseudonymize it, and save both outputs.
///
/// Nothing is written unless every step before saving succeeded, so earlier
/// outputs for the same source survive a failed run.
pub fn pseudonymize_file<D>(
    store: &FileStore,
    engine: &Pseudonymizer,
    detector: &D,
    source: &Path,
) -> PseudoResult<(PseudonymizationResult, SavedPaths)>
where
    D: IEntityDetector + ?Sized,
{
    let text = store.read_text(source)?;
    info!(source = %source.display(), chars = text.chars().count(), "pseudonymizing file");

    let result = engine.pseudonymize_with(detector, &text)?;
    let paths = store.save_result(source, &result)?;
    Ok((result, paths))
}
