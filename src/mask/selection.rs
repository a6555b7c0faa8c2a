//! Selection ranges over the raw text.
//!
//! Offsets are character offsets, not byte offsets.

/// A selected range `[start, end)` in characters. `start == end` is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, ordering the endpoints.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// A collapsed selection at `offset`.
    #[must_use]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Order the endpoints and constrain both into `[0, len]`.
    #[must_use]
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }

    /// Whether this selection covers all of a text of `len` characters.
    #[must_use]
    pub fn covers(&self, len: usize) -> bool {
        self.len() == len
    }
}

/// Number of characters in `text`.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `offset`, or `text.len()` past the end.
pub(crate) fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(index, _)| index)
}

/// Character at `offset`, if any.
pub(crate) fn char_at(text: &str, offset: usize) -> Option<char> {
    text.chars().nth(offset)
}

/// Replace the characters in `[start, end)` with `insert`.
pub(crate) fn splice(text: &str, start: usize, end: usize, insert: &str) -> String {
    let from = byte_index(text, start);
    let to = byte_index(text, end.max(start));
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..from]);
    out.push_str(insert);
    out.push_str(&text[to..]);
    out
}

/// The characters in `[start, end)`.
pub(crate) fn slice(text: &str, start: usize, end: usize) -> &str {
    let from = byte_index(text, start);
    let to = byte_index(text, end.max(start));
    &text[from..to]
}
