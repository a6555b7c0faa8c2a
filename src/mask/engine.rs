//! Stateful mask engine bound to a text field.
//!
//! [`MaskEngine`] owns the raw value, the single source of truth for a
//! masked field: a fully decorated string such as `-$ 1,234.50`, or the
//! empty string when nothing has been entered. Every editing operation
//! splices the raw value at the field's selection, re-masks the result and
//! writes text and caret back through the [`FieldAdapter`].
//!
//! # Caret recovery
//!
//! Masking may add or drop characters anywhere (separators appear and
//! vanish, leading zeros are stripped). After an edit the caret is placed
//! at `hint - (len(edited) - len(masked))`, where `hint` is where the caret
//! would be in the unmasked edit, and is then kept inside the editable
//! region (see [`MaskEngine::editable_range`]).
//!
//! # Examples
//!
//! ```
//! use currency_mask::{DeleteDirection, MaskConfig, MaskEngine, TextField};
//!
//! let config = MaskConfig::default().with_prefix("$");
//! let mut engine = MaskEngine::new(TextField::new(), config).unwrap();
//!
//! for digit in ['1', '2', '3', '4', '5'] {
//!     engine.insert_digit(digit);
//! }
//! assert_eq!(engine.raw_text(), "$123.45");
//! assert_eq!(engine.value(), Some(123.45));
//!
//! engine.delete(DeleteDirection::Backward);
//! assert_eq!(engine.raw_text(), "$12.34");
//!
//! engine.set_negative();
//! assert_eq!(engine.raw_text(), "-$12.34");
//! ```

use super::format::{MaskSource, apply_mask, clear_mask};
use super::selection::{Selection, char_at, char_len, slice, splice};
use crate::config::MaskConfig;
use crate::display::{LineLayout, layout_line};
use crate::error::Result;
use crate::event::{LogLevel, emit_log, log_enabled};
use crate::field::FieldAdapter;
use crate::input::DeleteDirection;

/// Currency mask state for one field.
#[derive(Debug)]
pub struct MaskEngine<F> {
    field: F,
    config: MaskConfig,
    raw: String,
}

impl<F: FieldAdapter> MaskEngine<F> {
    /// Bind a new, empty mask to `field`.
    ///
    /// The field text is cleared so that it matches the empty raw value.
    pub fn new(field: F, config: MaskConfig) -> Result<Self> {
        validate(&config)?;
        let mut engine = Self {
            field,
            config,
            raw: String::new(),
        };
        engine.field.set_text("");
        Ok(engine)
    }

    /// Bind a mask to `field` and assign an initial numeric value.
    pub fn with_value(field: F, config: MaskConfig, value: Option<f64>) -> Result<Self> {
        let mut engine = Self::new(field, config)?;
        engine.set_value(value);
        Ok(engine)
    }

    #[must_use]
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Mutable access to the field, e.g. to move the selection.
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    #[must_use]
    pub fn into_field(self) -> F {
        self.field
    }

    #[must_use]
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Install a new configuration, keeping the numeric value.
    ///
    /// The value is read under the old configuration and re-masked under
    /// the new one, so changing precision from 2 to 0 turns `19.99` into
    /// `20`. An invalid configuration is rejected and nothing changes.
    pub fn set_config(&mut self, config: MaskConfig) -> Result<()> {
        validate(&config)?;
        let value = self.value();
        self.config = config;
        self.set_value(value);
        Ok(())
    }

    /// The current decorated text.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    /// Numeric value of the raw text; `None` when empty.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        clear_mask(&self.config, &self.raw)
    }

    /// Replace the raw text with the masked form of `value`.
    ///
    /// The caret is left wherever the field puts it; call
    /// [`fix_cursor`](Self::fix_cursor) if it matters.
    pub fn set_value(&mut self, value: Option<f64>) {
        let masked = value.map_or_else(String::new, |value| {
            apply_mask(&self.config, MaskSource::Number(value))
        });
        log_change("set_value", &self.raw, &masked, None);
        self.raw = masked;
        self.field.set_text(&self.raw);
    }

    /// Drop the value entirely.
    pub fn clear(&mut self) {
        self.set_value(None);
    }

    /// Whether typing another digit can be accepted.
    ///
    /// True if the field is below its length limit, if the selection covers
    /// a digit that the new one replaces, or if the number starts with a
    /// zero that the new digit shifts out.
    #[must_use]
    pub fn can_accept_more_input(&self) -> bool {
        if self.field.can_accept_more_input() {
            return true;
        }
        let selection = self.selection();
        let replaces_digit = slice(&self.raw, selection.start, selection.end)
            .chars()
            .any(|ch| ch.is_ascii_digit());
        replaces_digit || char_at(&self.raw, self.editable_range().0) == Some('0')
    }

    /// The `[start, end)` character range where the caret may rest: after
    /// the sign and prefix, before the suffix.
    #[must_use]
    pub fn editable_range(&self) -> (usize, usize) {
        let negative = self.value().is_some_and(|value| value < 0.0);
        let start = self.config.prefix_len() + usize::from(negative);
        let end = char_len(&self.raw).saturating_sub(self.config.suffix_len());
        (start, end)
    }

    /// Type one digit at the selection, replacing any selected text.
    ///
    /// The caller filters keys; a non-digit character is spliced in and then
    /// discarded by masking, leaving the value unchanged.
    pub fn insert_digit(&mut self, digit: char) {
        let selection = if self.raw.is_empty() {
            self.raw = apply_mask(&self.config, MaskSource::Text("0"));
            Selection::caret(self.editable_range().1)
        } else {
            self.selection()
        };

        let mut buf = [0u8; 4];
        let edited = splice(
            &self.raw,
            selection.start,
            selection.end,
            digit.encode_utf8(&mut buf),
        );
        self.commit("insert_digit", &edited, Some(selection.start + 1));
    }

    /// Delete the selection, or one digit next to the caret.
    ///
    /// A separator next to the caret cannot be removed on its own because
    /// masking would put it straight back, so the digit beyond it is removed
    /// instead.
    pub fn delete(&mut self, direction: DeleteDirection) {
        let (_, editable_end) = self.editable_range();
        let mut selection = self.selection();
        if selection.start > editable_end {
            selection = Selection::caret(editable_end);
        }

        let Selection { mut start, mut end } = selection;
        if start == end {
            match direction {
                DeleteDirection::Forward => match char_at(&self.raw, start) {
                    Some(ch) if ch.is_ascii_digit() => end += 1,
                    Some(ch) if self.config.is_separator(ch) => {
                        start += 1;
                        end += 2;
                    }
                    _ => {}
                },
                DeleteDirection::Backward => {
                    match start.checked_sub(1).and_then(|prev| char_at(&self.raw, prev)) {
                        Some(ch) if ch.is_ascii_digit() => start -= 1,
                        Some(ch) if self.config.is_separator(ch) => {
                            start = start.saturating_sub(2);
                            end -= 1;
                        }
                        _ => {}
                    }
                }
            }
        }

        let len = char_len(&self.raw);
        let (start, end) = (start.min(len), end.min(len));
        let edited = splice(&self.raw, start, end, "");
        self.commit("delete", &edited, Some(start));
    }

    /// Make the value negative.
    ///
    /// Does nothing when negatives are disabled, the value is empty or
    /// zero, or it is already negative.
    pub fn set_negative(&mut self) {
        if !self.config.allow_negative
            || self.raw.is_empty()
            || self.raw.starts_with('-')
            || self.value() == Some(0.0)
        {
            return;
        }
        let caret = self.selection().start;
        let edited = format!("-{}", self.raw);
        self.commit("set_negative", &edited, Some(caret + 1));
    }

    /// Remove the minus sign, if there is one.
    pub fn set_positive(&mut self) {
        let Some(index) = self.raw.find('-') else {
            return;
        };
        let caret = self.selection().start;
        let mut edited = self.raw.clone();
        edited.remove(index);
        self.commit("set_positive", &edited, Some(caret.saturating_sub(1)));
    }

    /// Keep the caret out of the sign, prefix and suffix.
    ///
    /// A caret past the editable region (or any caret, with
    /// `force_to_end`) moves to the end of the number; a caret before it
    /// moves to its start.
    pub fn fix_cursor(&mut self, force_to_end: bool) {
        let reported = self.field.selection();
        let caret = self.selection().start;
        let target = self.contain(caret, force_to_end);
        // a field reporting offsets past the text gets the clamped caret back
        if force_to_end || target != caret || reported.end > char_len(&self.raw) {
            self.field.set_cursor(target);
        }
    }

    /// Paste `text` over the selection. Only its digits and sign survive;
    /// the caret ends up after the number.
    pub fn paste(&mut self, text: &str) {
        let selection = self.selection();
        let edited = splice(&self.raw, selection.start, selection.end, text);
        self.commit("paste", &edited, None);
    }

    /// Remove the selected text and return it.
    pub fn cut(&mut self) -> String {
        let selection = self.selection();
        if selection.is_empty() {
            return String::new();
        }
        let removed = slice(&self.raw, selection.start, selection.end).to_string();
        let edited = splice(&self.raw, selection.start, selection.end, "");
        self.commit("cut", &edited, None);
        removed
    }

    /// Re-mask whatever text the field currently holds.
    ///
    /// For hosts whose widget applies some edits natively (a platform paste
    /// or cut) and then asks the mask to catch up.
    pub fn reformat(&mut self) {
        let edited = self.field.text();
        self.commit("reformat", &edited, None);
    }

    /// Lay the raw text out in a field `width` columns wide.
    #[must_use]
    pub fn layout(&self, width: usize) -> LineLayout {
        layout_line(&self.raw, self.selection().start, width, self.config.align)
    }

    fn selection(&self) -> Selection {
        self.field.selection().clamp(char_len(&self.raw))
    }

    fn contain(&self, caret: usize, force_to_end: bool) -> usize {
        let (start, end) = self.editable_range();
        if caret > end || force_to_end {
            end
        } else if caret < start {
            start.min(end)
        } else {
            caret
        }
    }

    fn commit(&mut self, op: &str, edited: &str, hint: Option<usize>) {
        let masked = apply_mask(&self.config, MaskSource::Text(edited));
        let edited_len = char_len(edited);
        let masked_len = char_len(&masked);
        let caret = (hint.unwrap_or(edited_len) + masked_len)
            .saturating_sub(edited_len)
            .min(masked_len);

        self.raw = masked;
        self.field.set_text(&self.raw);
        let caret = self.contain(caret, false);
        self.field.set_cursor(caret);
        log_change(op, edited, &self.raw, Some(caret));
    }
}

fn validate(config: &MaskConfig) -> Result<()> {
    config.validate().inspect_err(|err| {
        emit_log(LogLevel::Warn, &format!("rejected mask config: {err}"));
    })
}

fn log_change(op: &str, before: &str, after: &str, caret: Option<usize>) {
    if !log_enabled() {
        return;
    }
    let message = match caret {
        Some(caret) => format!("{op}: {before:?} -> {after:?}, caret {caret}"),
        None => format!("{op}: {before:?} -> {after:?}"),
    };
    emit_log(LogLevel::Debug, &message);
}
