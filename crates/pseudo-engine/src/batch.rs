//! Parallel pseudonymization of independent documents.

use pseudo_core::errors::PseudoResult;
use pseudo_core::traits::IEntityDetector;
use pseudo_core::PseudonymizationResult;
use rayon::prelude::*;
use tracing::info;

use crate::engine::Pseudonymizer;

impl Pseudonymizer {
    /// Detect and pseudonymize every text in parallel.
    ///
    /// Each document gets its own table and counter; one failing document
    /// does not affect the others. Results keep the input order.
    pub fn pseudonymize_batch<D, S>(
        &self,
        detector: &D,
        texts: &[S],
    ) -> Vec<PseudoResult<PseudonymizationResult>>
    where
        D: IEntityDetector + ?Sized,
        S: AsRef<str> + Sync,
    {
        let results: Vec<_> = texts
            .par_iter()
            .map(|text| self.pseudonymize_with(detector, text.as_ref()))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(documents = texts.len(), failed, "batch pseudonymized");
        results
    }
}
