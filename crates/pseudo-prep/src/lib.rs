//! # pseudo-prep
//!
//! Builds NER training data by substituting entity names into template
//! sentences (`"{NOM} est arrivé."`) and annotating where they landed.
//! Bad inputs are skipped and recorded in a `PrepReport` instead of
//! aborting the run.

pub mod dataset;
pub mod generator;
pub mod readers;
pub mod report;
pub mod task;

pub use dataset::{load_training_data, save_training_data};
pub use generator::generate_examples;
pub use readers::{clean_template_line, read_entity_list, read_templates};
pub use report::{PrepReport, SkippedInput};
pub use task::{run_tasks, PrepOutcome, PrepTask, TaskSummary};
