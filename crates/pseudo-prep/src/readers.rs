//! Entity-list and template-sentence readers.

use std::path::Path;

use pseudo_core::errors::PrepError;
use tracing::{debug, warn};

use crate::report::PrepReport;

fn read_to_string(path: &Path) -> Result<String, PrepError> {
    std::fs::read_to_string(path).map_err(|e| {
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
    })
}

/// Read one entity per line, trimmed, skipping blank lines.
/// An empty result is not an error but is logged.
pub fn read_entity_list(path: &Path) -> Result<Vec<String>, PrepError> {
    let content = read_to_string(path)?;
    let entities: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if entities.is_empty() {
        warn!(path = %path.display(), "entity list is empty");
    } else {
        debug!(path = %path.display(), count = entities.len(), "entity list read");
    }
    Ok(entities)
}

/// Strip a template line copied out of a source list: surrounding
/// whitespace, then one pair of wrapping quotes with an optional trailing
/// comma (`"…",`, `'…',`, `"…"`, `'…'`).
pub fn clean_template_line(line: &str) -> &str {
    let line = line.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = line
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(',').unwrap_or(rest).strip_suffix(quote))
        {
            return inner;
        }
    }
    line
}

/// Read template sentences that contain `placeholder`.
///
/// Non-blank lines missing the placeholder are skipped and recorded in
/// `report` with their line number.
pub fn read_templates(
    path: &Path,
    placeholder: &str,
    report: &mut PrepReport,
) -> Result<Vec<String>, PrepError> {
    if placeholder.is_empty() {
        return Err(PrepError::EmptyPlaceholder);
    }
    let content = read_to_string(path)?;
    let source = path.display().to_string();

    let mut templates = Vec::new();
    for (i, raw) in content.lines().enumerate() {
        let line = clean_template_line(raw);
        if line.is_empty() {
            continue;
        }
        if line.contains(placeholder) {
            templates.push(line.to_string());
        } else {
            warn!(path = %source, line = i + 1, placeholder, "template without placeholder skipped");
            report.record_skip(&source, Some(i + 1), &format!("missing placeholder '{placeholder}'"));
        }
    }

    if templates.is_empty() {
        warn!(path = %source, placeholder, "no usable template");
    }
    Ok(templates)
}
