use pseudo_core::models::TrainingExample;
use tracing::{info, warn};

use crate::report::PrepReport;

/// Cross every entity with every template.
///
/// Each occurrence of `placeholder` in a template is replaced by the entity
/// and annotated as `(start, end, label)` in character offsets. A template
/// without the placeholder yields no example and is recorded in `report`.
pub fn generate_examples<E, T>(
    entities: &[E],
    templates: &[T],
    label: &str,
    placeholder: &str,
    report: &mut PrepReport,
) -> Vec<TrainingExample>
where
    E: AsRef<str>,
    T: AsRef<str>,
{
    if entities.is_empty() || templates.is_empty() || placeholder.is_empty() {
        warn!(
            label,
            entities = entities.len(),
            templates = templates.len(),
            "nothing to generate"
        );
        return Vec::new();
    }

    let mut usable: Vec<&str> = Vec::with_capacity(templates.len());
    for template in templates {
        let template = template.as_ref();
        if template.contains(placeholder) {
            usable.push(template);
        } else {
            report.record_skip(label, None, &format!("template without '{placeholder}': {template}"));
        }
    }

    let mut examples = Vec::with_capacity(entities.len() * usable.len());
    for entity in entities {
        for template in &usable {
            examples.push(fill_template(template, placeholder, entity.as_ref(), label));
        }
    }

    info!(label, examples = examples.len(), "training examples generated");
    examples
}

fn fill_template(template: &str, placeholder: &str, entity: &str, label: &str) -> TrainingExample {
    let entity_chars = entity.chars().count();
    let mut text = String::with_capacity(template.len() + entity.len());
    let mut annotations = Vec::new();
    let mut cursor = 0;

    for (i, part) in template.split(placeholder).enumerate() {
        if i > 0 {
            annotations.push((cursor, cursor + entity_chars, label.to_string()));
            text.push_str(entity);
            cursor += entity_chars;
        }
        text.push_str(part);
        cursor += part.chars().count();
    }

    TrainingExample::new(text, annotations)
}
