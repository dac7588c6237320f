//! Character/byte offset conversion.
//!
//! Spans are expressed in character offsets (Unicode scalar values) while
//! Rust slices by byte. `CharIndex` builds the char→byte table once per text
//! so every span of a call converts in O(1). ASCII text skips the table.

/// Char→byte lookup for one text.
#[derive(Debug, Clone)]
pub struct CharIndex {
    /// `char_to_byte[i]` is the byte offset of char `i`; the final entry is
    /// `text.len()`. Empty for ASCII text, where offsets coincide.
    char_to_byte: Vec<usize>,
    char_len: usize,
    byte_len: usize,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self {
                char_to_byte: Vec::new(),
                char_len: text.len(),
                byte_len: text.len(),
            };
        }
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        let char_len = char_to_byte.len();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            char_len,
            byte_len: text.len(),
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Byte offset of char offset `char_idx`; `None` past the end.
    /// `char_idx == char_len()` maps to the text's byte length.
    pub fn byte_offset(&self, char_idx: usize) -> Option<usize> {
        if char_idx > self.char_len {
            return None;
        }
        if self.char_to_byte.is_empty() {
            return Some(char_idx.min(self.byte_len));
        }
        self.char_to_byte.get(char_idx).copied()
    }

    /// Char offset of a byte offset lying on a char boundary.
    pub fn char_offset(&self, byte_idx: usize) -> Option<usize> {
        if byte_idx > self.byte_len {
            return None;
        }
        if self.char_to_byte.is_empty() {
            return Some(byte_idx);
        }
        self.char_to_byte.binary_search(&byte_idx).ok()
    }

    /// Slice `text` by char offsets. `text` must be the text this index was
    /// built from.
    pub fn slice<'a>(&self, text: &'a str, char_start: usize, char_end: usize) -> Option<&'a str> {
        let start = self.byte_offset(char_start)?;
        let end = self.byte_offset(char_end)?;
        text.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets_are_identity() {
        let idx = CharIndex::new("hello");
        assert_eq!(idx.char_len(), 5);
        assert_eq!(idx.byte_offset(5), Some(5));
        assert_eq!(idx.byte_offset(6), None);
        assert_eq!(idx.slice("hello", 1, 3), Some("el"));
    }

    #[test]
    fn multibyte_offsets_map_to_char_boundaries() {
        let text = "Aucune entité ici.";
        let idx = CharIndex::new(text);
        assert_eq!(idx.char_len(), 18);
        assert_eq!(idx.slice(text, 7, 13), Some("entité"));
        assert_eq!(idx.byte_offset(18), Some(text.len()));
        assert_eq!(idx.char_offset(text.find("ici").unwrap()), Some(14));
    }

    #[test]
    fn char_offset_rejects_mid_char_byte() {
        let text = "é";
        let idx = CharIndex::new(text);
        assert_eq!(idx.char_offset(1), None);
        assert_eq!(idx.char_offset(2), Some(1));
    }
}
