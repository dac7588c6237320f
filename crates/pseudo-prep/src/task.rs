//! Multi-label preparation runs.

use std::path::{Path, PathBuf};

use pseudo_core::errors::PrepError;
use pseudo_core::models::TrainingExample;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dataset::save_training_data;
use crate::generator::generate_examples;
use crate::readers::{read_entity_list, read_templates};
use crate::report::PrepReport;

/// Inputs and output for one entity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepTask {
    pub label: String,
    /// Marker in templates, e.g. `{LOC}`.
    pub placeholder: String,
    pub entities_file: PathBuf,
    pub templates_file: PathBuf,
    /// Per-label output; skipped when unset.
    #[serde(default)]
    pub output_file: Option<PathBuf>,
}

/// What one task produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub label: String,
    pub examples: usize,
    pub saved_to: Option<PathBuf>,
}

/// Result of [`run_tasks`].
#[derive(Debug, Default)]
pub struct PrepOutcome {
    /// Every generated example, in task order.
    pub examples: Vec<TrainingExample>,
    pub summaries: Vec<TaskSummary>,
    pub report: PrepReport,
}

/// Run every task, then optionally write all examples to `combined_output`.
///
/// A task whose files are missing or empty is skipped and recorded; the
/// remaining tasks still run. Only write failures abort the run.
pub fn run_tasks(tasks: &[PrepTask], combined_output: Option<&Path>) -> Result<PrepOutcome, PrepError> {
    let mut outcome = PrepOutcome::default();

    for task in tasks {
        info!(label = %task.label, "preparing label");
        let examples = match collect_task(task, &mut outcome.report) {
            Some(examples) => examples,
            None => continue,
        };

        let saved_to = match &task.output_file {
            Some(path) => {
                save_training_data(&examples, path)?;
                Some(path.clone())
            }
            None => None,
        };
        outcome.summaries.push(TaskSummary {
            label: task.label.clone(),
            examples: examples.len(),
            saved_to,
        });
        outcome.examples.extend(examples);
    }

    match combined_output {
        Some(path) if !outcome.examples.is_empty() => {
            save_training_data(&outcome.examples, path)?;
        }
        Some(path) => {
            warn!(path = %path.display(), "no examples generated, combined file not written");
        }
        None => {}
    }

    info!(
        tasks = tasks.len(),
        examples = outcome.examples.len(),
        skipped = outcome.report.skip_count(),
        "preparation finished"
    );
    Ok(outcome)
}

/// Read and generate one task. `None` when the task had to be skipped.
fn collect_task(task: &PrepTask, report: &mut PrepReport) -> Option<Vec<TrainingExample>> {
    let entities = match read_entity_list(&task.entities_file) {
        Ok(entities) => entities,
        Err(e) => {
            warn!(label = %task.label, error = %e, "entity list unreadable, skipping label");
            report.record_skip(&task.label, None, &e.to_string());
            return None;
        }
    };
    let templates = match read_templates(&task.templates_file, &task.placeholder, report) {
        Ok(templates) => templates,
        Err(e) => {
            warn!(label = %task.label, error = %e, "templates unreadable, skipping label");
            report.record_skip(&task.label, None, &e.to_string());
            return None;
        }
    };
    if entities.is_empty() || templates.is_empty() {
        report.record_skip(&task.label, None, "no entities or no usable templates");
        return None;
    }

    let examples = generate_examples(&entities, &templates, &task.label, &task.placeholder, report);
    if examples.is_empty() {
        report.record_skip(&task.label, None, "no examples generated");
        return None;
    }
    Some(examples)
}
