/// One replacement in byte coordinates of the original text.
#[derive(Debug, Clone)]
pub struct Replacement {
    pub byte_start: usize,
    pub byte_end: usize,
    pub placeholder: String,
}

/// Rebuild `text` with every replacement applied.
///
/// Replacements must be sorted ascending, non-overlapping, and on char
/// boundaries. They are walked right to left with a cursor over the original
/// text, so each one is cut against original offsets, never against the
/// partially rewritten string.
pub fn splice(text: &str, replacements: &[Replacement]) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(replacements.len() * 2 + 1);
    let mut cursor = text.len();

    for r in replacements.iter().rev() {
        // Adjacent spans leave no gap to copy.
        if r.byte_end < cursor {
            parts.push(&text[r.byte_end..cursor]);
        }
        parts.push(&r.placeholder);
        cursor = r.byte_start;
    }
    parts.push(&text[..cursor]);

    parts.reverse();
    parts.concat()
}
