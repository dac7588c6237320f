use pseudo_core::errors::{PseudoError, PseudoErrorCode, SpanError};
use pseudo_core::models::{format_placeholder, TrainingExample};
use pseudo_core::{CorrespondenceTable, EntitySpan, PseudonymizationResult};

#[test]
fn table_counter_advances_only_on_new_keys() {
    let mut table = CorrespondenceTable::new();
    assert_eq!(table.get_or_assign("Jean Dupont", "PERSONNE"), "[PERSONNE_1]");
    assert_eq!(table.get_or_assign("Marie Curie", "PERSONNE"), "[PERSONNE_2]");
    assert_eq!(table.get_or_assign("Jean Dupont", "PERSONNE"), "[PERSONNE_1]");
    assert_eq!(table.len(), 2);
    assert_eq!(table.original_for("[PERSONNE_2]"), Some("Marie Curie"));
    assert_eq!(table.keys().collect::<Vec<_>>(), ["Jean Dupont", "Marie Curie"]);
}

#[test]
fn table_serializes_flat_in_insertion_order() {
    let mut table = CorrespondenceTable::new();
    table.get_or_assign("Zoé", "PERSONNE");
    table.get_or_assign("Adam", "PERSONNE");
    let json = serde_json::to_string(&table).unwrap();
    assert_eq!(json, r#"{"Zoé":"[PERSONNE_1]","Adam":"[PERSONNE_2]"}"#);

    let back: CorrespondenceTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn table_rejects_duplicate_placeholders() {
    let err = serde_json::from_str::<CorrespondenceTable>(
        r#"{"Jean": "[PERSONNE_1]", "Marie": "[PERSONNE_1]"}"#,
    );
    assert!(err.is_err());
}

#[test]
fn table_rejects_non_string_values() {
    assert!(serde_json::from_str::<CorrespondenceTable>(r#"{"Jean": 1}"#).is_err());
    assert!(serde_json::from_str::<CorrespondenceTable>(r#"["Jean"]"#).is_err());
}

#[test]
fn placeholder_format() {
    assert_eq!(format_placeholder("LIEU", 12), "[LIEU_12]");
}

#[test]
fn span_helpers() {
    let text = "Élise et Paul";
    let span = EntitySpan::from_source(text, 0, 5, "PER").unwrap();
    assert_eq!(span.text, "Élise");
    assert_eq!(span.len(), 5);
    assert!(EntitySpan::from_source(text, 5, 5, "PER").is_none());
    assert!(EntitySpan::from_source(text, 9, 14, "PER").is_none());

    let a = EntitySpan::new(0, 4, "PER", "Jean");
    let b = EntitySpan::new(4, 8, "PER", "Paul");
    let c = EntitySpan::new(3, 6, "PER", "n P");
    assert!(!a.overlaps(&b));
    assert!(a.overlaps(&c) && c.overlaps(&b));
    assert_eq!(EntitySpan::new(0, 6, "PER", " Jean ").normalized_text(), "Jean");
}

#[test]
fn training_example_json_shape() {
    let example = TrainingExample::new("Jean habite ici.", vec![(0, 4, "PER".to_string())]);
    let json = serde_json::to_value(&example).unwrap();
    assert_eq!(
        json,
        serde_json::json!(["Jean habite ici.", {"entities": [[0, 4, "PER"]]}])
    );
    let back: TrainingExample = serde_json::from_value(json).unwrap();
    assert_eq!(back.labels().collect::<Vec<_>>(), ["PER"]);
}

#[test]
fn unchanged_result_has_empty_table() {
    let result = PseudonymizationResult::unchanged("rien");
    assert!(result.is_unchanged());
    assert_eq!(result.text, "rien");
}

#[test]
fn error_codes_are_stable() {
    let err: PseudoError = SpanError::Overlapping {
        first: (0, 10),
        second: (5, 15),
    }
    .into();
    assert_eq!(err.error_code(), "OVERLAPPING_SPAN");
    assert_eq!(
        SpanError::InvalidRange { start: 5, end: 3 }.error_code(),
        "INVALID_SPAN"
    );
    assert!(SpanError::OutOfBounds { start: 0, end: 9, len: 3 }.is_invalid_span());
}
