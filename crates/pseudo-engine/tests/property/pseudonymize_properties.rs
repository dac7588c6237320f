use std::collections::HashSet;

use proptest::prelude::*;
use pseudo_core::{EntitySpan, SpanError};
use pseudo_engine::{pseudonymize, restore};

const NAMES: &[&str] = &["Jean", "Marie", "Élise", "Zoé Martin", "Paul"];

/// A document: filler text interleaved with names, plus the spans locating
/// those names (char offsets) in the order they appear.
#[derive(Debug, Clone)]
struct Doc {
    text: String,
    spans: Vec<EntitySpan>,
    /// Names in order of appearance.
    names: Vec<&'static str>,
}

fn build(segments: &[(String, Option<usize>)], tail: &str) -> Doc {
    let mut text = String::new();
    let mut spans = Vec::new();
    let mut names = Vec::new();
    let mut chars = 0;
    for (filler, name) in segments {
        text.push_str(filler);
        chars += filler.chars().count();
        if let Some(i) = name {
            let name = NAMES[*i];
            let len = name.chars().count();
            spans.push(EntitySpan::new(chars, chars + len, "PER", name));
            names.push(name);
            text.push_str(name);
            chars += len;
        }
    }
    text.push_str(tail);
    Doc { text, spans, names }
}

fn doc_strategy() -> impl Strategy<Value = Doc> {
    (
        prop::collection::vec(("[a-zé ,.]{0,6}", prop::option::of(0..NAMES.len())), 0..12),
        "[a-z .]{0,6}",
    )
        .prop_map(|(segments, tail)| build(&segments, &tail))
}

/// The expected output: every name replaced by its placeholder.
fn expected_text(doc: &Doc, placeholder_of: impl Fn(&str) -> String) -> String {
    let mut out = doc.text.clone();
    // Rebuild from the spans, right to left, on a char vector.
    let mut chars: Vec<char> = out.chars().collect();
    for span in doc.spans.iter().rev() {
        let replacement: Vec<char> = placeholder_of(&span.text).chars().collect();
        chars.splice(span.start..span.end, replacement);
    }
    out.clear();
    out.extend(chars);
    out
}

proptest! {
    #[test]
    fn output_matches_reference_rewrite(doc in doc_strategy()) {
        let result = pseudonymize(&doc.text, &doc.spans, "PER").unwrap();
        let expected = expected_text(&doc, |name| result.table.get(name).unwrap().to_string());
        prop_assert_eq!(&result.text, &expected);
    }

    #[test]
    fn table_follows_first_appearance(doc in doc_strategy()) {
        let result = pseudonymize(&doc.text, &doc.spans, "PER").unwrap();

        let mut seen = Vec::new();
        for name in &doc.names {
            if !seen.contains(name) {
                seen.push(*name);
            }
        }
        let keys: Vec<&str> = result.table.keys().collect();
        prop_assert_eq!(&keys, &seen);

        for (i, placeholder) in result.table.placeholders().enumerate() {
            prop_assert_eq!(placeholder, format!("[PERSONNE_{}]", i + 1));
        }
    }

    #[test]
    fn placeholders_are_unique(doc in doc_strategy()) {
        let result = pseudonymize(&doc.text, &doc.spans, "PER").unwrap();
        let distinct: HashSet<&str> = result.table.placeholders().collect();
        prop_assert_eq!(distinct.len(), result.table.len());
    }

    #[test]
    fn input_order_does_not_matter(
        (doc, shuffled) in doc_strategy().prop_flat_map(|doc| {
            let spans = doc.spans.clone();
            (Just(doc), Just(spans).prop_shuffle())
        })
    ) {
        let ordered = pseudonymize(&doc.text, &doc.spans, "PER").unwrap();
        let permuted = pseudonymize(&doc.text, &shuffled, "PER").unwrap();
        prop_assert_eq!(ordered, permuted);
    }

    #[test]
    fn non_target_spans_leave_text_verbatim(doc in doc_strategy()) {
        let relabelled: Vec<EntitySpan> = doc
            .spans
            .iter()
            .map(|s| EntitySpan::new(s.start, s.end, "LOC", s.text.clone()))
            .collect();
        let result = pseudonymize(&doc.text, &relabelled, "PER").unwrap();
        prop_assert_eq!(&result.text, &doc.text);
        prop_assert!(result.table.is_empty());
    }

    #[test]
    fn non_target_noise_does_not_change_output(doc in doc_strategy()) {
        let clean = pseudonymize(&doc.text, &doc.spans, "PER").unwrap();

        // Overlapping ORG spans wrapping every person.
        let mut noisy = doc.spans.clone();
        for s in &doc.spans {
            noisy.push(EntitySpan::new(s.start, s.end, "ORG", "bruit"));
        }
        let noisy = pseudonymize(&doc.text, &noisy, "PER").unwrap();
        prop_assert_eq!(clean, noisy);
    }

    #[test]
    fn restore_round_trips(doc in doc_strategy()) {
        let result = pseudonymize(&doc.text, &doc.spans, "PER").unwrap();
        prop_assert_eq!(restore(&result.text, &result.table), doc.text);
    }

    #[test]
    fn overlapping_target_spans_always_fail(
        start in 0usize..20,
        len_a in 1usize..10,
        shift_frac in 0.0f64..1.0,
        len_b in 1usize..10,
    ) {
        let text = "x".repeat(40);
        let shift = ((len_a as f64) * shift_frac) as usize; // < len_a
        let a = EntitySpan::new(start, start + len_a, "PER", "a");
        let b = EntitySpan::new(start + shift, start + shift + len_b, "PER", "b");
        let err = pseudonymize(&text, &[b, a], "PER").unwrap_err();
        let is_overlap = matches!(err, SpanError::Overlapping { .. });
        prop_assert!(is_overlap);
    }
}
