//! The text field a mask is bound to.
//!
//! [`FieldAdapter`] is the narrow surface the engine needs from a live
//! widget: its text, its selection, a way to write both back, and whether
//! a length limit has been reached. [`TextField`] is an in-memory
//! implementation used by terminal front ends and tests.
//!
//! # Examples
//!
//! ```
//! use currency_mask::{FieldAdapter, Selection, TextField};
//!
//! let mut field = TextField::with_text("$ 12.00").with_max_length(8);
//! assert_eq!(field.selection(), Selection::caret(7));
//! assert!(field.can_accept_more_input());
//!
//! field.select(2, 4);
//! assert_eq!(field.selected_text(), "12");
//! ```

use crate::mask::Selection;
use crate::mask::selection::{char_len, slice};

/// Host widget operations consumed by [`MaskEngine`](crate::MaskEngine).
///
/// Offsets are character offsets. Implementations must tolerate offsets
/// past the end of the text by clamping.
pub trait FieldAdapter {
    /// Current text content.
    fn text(&self) -> String;

    /// Replace the text content.
    ///
    /// Like most native text inputs, implementations may move the caret;
    /// the engine repositions it explicitly after every edit.
    fn set_text(&mut self, text: &str);

    /// Current selection, `start <= end`.
    fn selection(&self) -> Selection;

    /// Collapse the selection to a caret at `offset`.
    fn set_cursor(&mut self, offset: usize);

    /// False once a maximum length has been reached.
    fn can_accept_more_input(&self) -> bool;
}

/// Single-line in-memory text field with selection and optional length limit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
    selection: Selection,
    max_length: Option<usize>,
}

impl TextField {
    /// Create an empty field with no length limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field with initial text and the caret at the end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: Selection::caret(char_len(text)),
            max_length: None,
        }
    }

    /// Limit the field to `max` characters.
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn set_max_length(&mut self, max: Option<usize>) {
        self.max_length = max;
    }

    /// Text length in characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        char_len(&self.text)
    }

    /// Select `[start, end)`, clamped to the text.
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end).clamp(self.len_chars());
    }

    /// Select the whole text.
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.len_chars());
    }

    /// The currently selected text.
    #[must_use]
    pub fn selected_text(&self) -> &str {
        slice(&self.text, self.selection.start, self.selection.end)
    }

    /// Caret offset (selection start).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.selection.start
    }
}

impl FieldAdapter for TextField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = Selection::caret(char_len(text));
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_cursor(&mut self, offset: usize) {
        self.selection = Selection::caret(offset.min(self.len_chars()));
    }

    fn can_accept_more_input(&self) -> bool {
        self.max_length.is_none_or(|max| self.len_chars() < max)
    }
}
