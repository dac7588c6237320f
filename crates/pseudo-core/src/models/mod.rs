pub mod correspondence_table;
pub mod entity_span;
pub mod pseudonymization_result;
pub mod training_example;

pub use correspondence_table::{format_placeholder, CorrespondenceTable};
pub use entity_span::EntitySpan;
pub use pseudonymization_result::PseudonymizationResult;
pub use training_example::{Annotations, TrainingExample};
