use crate::errors::PseudoResult;
use crate::models::EntitySpan;

/// Entity detection backend (NER model, gazetteer, ...).
///
/// Implementations adapt whatever their library returns into plain
/// `EntitySpan`s with character offsets into `text`.
pub trait IEntityDetector: Send + Sync {
    /// Detect entity spans in `text`. Order is unspecified.
    fn detect(&self, text: &str) -> PseudoResult<Vec<EntitySpan>>;

    /// Labels this detector can emit, for diagnostics.
    fn labels(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<D: IEntityDetector + ?Sized> IEntityDetector for Box<D> {
    fn detect(&self, text: &str) -> PseudoResult<Vec<EntitySpan>> {
        (**self).detect(text)
    }

    fn labels(&self) -> Vec<String> {
        (**self).labels()
    }
}
