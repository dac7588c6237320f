//! Span checks run before any rewriting.

use pseudo_core::offsets::CharIndex;
use pseudo_core::{EntitySpan, SpanError};

/// A span that passed validation, with its byte range in the source text.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedSpan<'a> {
    pub span: &'a EntitySpan,
    pub byte_start: usize,
    pub byte_end: usize,
}

/// Validate `spans` against `text` and return them sorted by start.
///
/// Fails on the first span with `end <= start` or `end` past the text, then
/// on the first overlapping pair. With `strict_surface`, a span whose trimmed
/// `text` differs from the trimmed source slice is rejected too.
pub fn validate_spans<'a>(
    text: &str,
    index: &CharIndex,
    spans: &[&'a EntitySpan],
    strict_surface: bool,
) -> Result<Vec<ValidatedSpan<'a>>, SpanError> {
    let len = index.char_len();
    let mut validated = Vec::with_capacity(spans.len());

    for &span in spans {
        if span.end <= span.start {
            return Err(SpanError::InvalidRange {
                start: span.start,
                end: span.end,
            });
        }
        let (Some(byte_start), Some(byte_end)) =
            (index.byte_offset(span.start), index.byte_offset(span.end))
        else {
            return Err(SpanError::OutOfBounds {
                start: span.start,
                end: span.end,
                len,
            });
        };
        validated.push(ValidatedSpan {
            span,
            byte_start,
            byte_end,
        });
    }

    validated.sort_by_key(|v| (v.span.start, v.span.end));

    for pair in validated.windows(2) {
        let (a, b) = (pair[0].span, pair[1].span);
        if a.overlaps(b) {
            return Err(SpanError::Overlapping {
                first: (a.start, a.end),
                second: (b.start, b.end),
            });
        }
    }

    if strict_surface {
        for v in &validated {
            let found = text[v.byte_start..v.byte_end].trim();
            let expected = v.span.normalized_text();
            if found != expected {
                return Err(SpanError::SurfaceMismatch {
                    start: v.span.start,
                    end: v.span.end,
                    expected: expected.to_string(),
                    found: found.to_string(),
                });
            }
        }
    }

    Ok(validated)
}
