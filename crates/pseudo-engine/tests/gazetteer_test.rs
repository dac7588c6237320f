use pseudo_core::errors::{DetectionError, PseudoError, PseudoResult};
use pseudo_core::traits::IEntityDetector;
use pseudo_core::EntitySpan;
use pseudo_engine::{GazetteerDetector, Pseudonymizer};

fn detector() -> GazetteerDetector {
    GazetteerDetector::new()
        .with_entries("PER", ["Jean", "Jean Dupont", "Marie Curie", "Élise"])
        .unwrap()
        .with_entries("LOC", ["Paris", "Saint-Étienne"])
        .unwrap()
}

#[test]
fn detects_with_char_offsets() {
    let text = "Élise a rencontré Jean Dupont à Paris.";
    let spans = detector().detect(text).unwrap();
    assert_eq!(
        spans,
        vec![
            EntitySpan::new(0, 5, "PER", "Élise"),
            EntitySpan::new(18, 29, "PER", "Jean Dupont"),
            EntitySpan::new(32, 37, "LOC", "Paris"),
        ]
    );
}

#[test]
fn matches_whole_words_only() {
    let spans = detector().detect("Jeanne habite Parisot.").unwrap();
    assert!(spans.is_empty(), "unexpected spans: {spans:?}");
}

#[test]
fn hyphenated_entries_match() {
    let spans = detector().detect("Direction Saint-Étienne.").unwrap();
    assert_eq!(spans, vec![EntitySpan::new(10, 23, "LOC", "Saint-Étienne")]);
}

#[test]
fn longest_match_wins_across_labels() {
    let detector = GazetteerDetector::new()
        .with_entries("PER", ["Marie"])
        .unwrap()
        .with_entries("ORG", ["Marie Curie"])
        .unwrap();
    let spans = detector.detect("Institut Marie Curie").unwrap();
    assert_eq!(spans, vec![EntitySpan::new(9, 20, "ORG", "Marie Curie")]);
}

#[test]
fn empty_label_list_is_rejected() {
    let err = GazetteerDetector::new()
        .with_entries("PER", ["  ", ""])
        .unwrap_err();
    assert!(matches!(err, DetectionError::InvalidGazetteer { .. }));
}

#[test]
fn entries_are_deduplicated() {
    let detector = GazetteerDetector::new()
        .with_entries("PER", ["Jean", " Jean ", "Paul"])
        .unwrap();
    assert_eq!(detector.entry_count(), 2);
    assert_eq!(detector.labels(), ["PER"]);
}

#[test]
fn end_to_end_with_pseudonymizer() {
    let text = "Jean Dupont écrit à Marie Curie. Jean Dupont attend.";
    let result = Pseudonymizer::new()
        .with_strict_surface(true)
        .pseudonymize_with(&detector(), text)
        .unwrap();
    assert_eq!(
        result.text,
        "[PERSONNE_1] écrit à [PERSONNE_2]. [PERSONNE_1] attend."
    );
}

struct FailingDetector;

impl IEntityDetector for FailingDetector {
    fn detect(&self, _text: &str) -> PseudoResult<Vec<EntitySpan>> {
        Err(DetectionError::ModelUnavailable {
            name: "fr_core_news_md".to_string(),
        }
        .into())
    }
}

struct OverlappingDetector;

impl IEntityDetector for OverlappingDetector {
    fn detect(&self, _text: &str) -> PseudoResult<Vec<EntitySpan>> {
        Ok(vec![
            EntitySpan::new(0, 4, "PER", "Jean"),
            EntitySpan::new(2, 6, "PER", "an D"),
        ])
    }
}

#[test]
fn detector_errors_propagate() {
    let err = Pseudonymizer::new()
        .pseudonymize_with(&FailingDetector, "Jean")
        .unwrap_err();
    assert!(matches!(err, PseudoError::Detection(_)));

    let err = Pseudonymizer::new()
        .pseudonymize_with(&OverlappingDetector, "Jean Dupont")
        .unwrap_err();
    assert!(matches!(err, PseudoError::Span(_)));
}

#[test]
fn batch_keeps_order_and_isolates_failures() {
    let texts = vec![
        "Marie Curie et Jean.".to_string(),
        String::new(),
        "Rien à signaler.".to_string(),
        "Jean, puis Marie Curie.".to_string(),
    ];
    let boxed: Box<dyn IEntityDetector> = Box::new(detector());
    let results = Pseudonymizer::new().pseudonymize_batch(&boxed, &texts);

    assert_eq!(results.len(), 4);
    let texts_out: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().text)
        .collect();
    // Each document numbers its own entities from 1.
    assert_eq!(texts_out[0], "[PERSONNE_1] et [PERSONNE_2].");
    assert_eq!(texts_out[1], "");
    assert_eq!(texts_out[2], "Rien à signaler.");
    assert_eq!(texts_out[3], "[PERSONNE_1], puis [PERSONNE_2].");

    let failures = Pseudonymizer::new().pseudonymize_batch(&FailingDetector, &["a", "b"]);
    assert!(failures.iter().all(|r| r.is_err()));
}
