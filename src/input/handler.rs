//! Key, clipboard and focus handling for a masked field.
//!
//! [`InputHandler`] translates host events into [`MaskEngine`] operations
//! and reports the new value through [`MaskEvent`] notifications and the
//! returned [`InputOutcome`].

use super::keyboard::{DeleteDirection, KeyCode, KeyEvent};
use crate::event::{MaskEvent, emit_event};
use crate::field::FieldAdapter;
use crate::mask::MaskEngine;
use crate::mask::selection::char_len;

/// What the handler did with an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputOutcome {
    /// Not handled; the host should apply its default behaviour.
    Ignored,
    /// Handled, but the value did not change.
    Consumed,
    /// Handled and the raw text changed; carries the new value.
    Changed(Option<f64>),
}

impl InputOutcome {
    /// Whether the host should suppress its default behaviour.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Event handler owning a [`MaskEngine`].
#[derive(Debug)]
pub struct InputHandler<F> {
    engine: MaskEngine<F>,
}

impl<F: FieldAdapter> InputHandler<F> {
    #[must_use]
    pub fn new(engine: MaskEngine<F>) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &MaskEngine<F> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut MaskEngine<F> {
        &mut self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> MaskEngine<F> {
        self.engine
    }

    /// Handle a key press.
    ///
    /// Shortcuts and non-editing keys are [`Ignored`](InputOutcome::Ignored);
    /// printable characters other than digits and signs are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        if key.is_shortcut() {
            return InputOutcome::Ignored;
        }
        if let Some(direction) = key.code.delete_direction() {
            return self.handle_delete(direction);
        }

        match key.code {
            KeyCode::Char('+') => self.apply(MaskEngine::set_positive),
            KeyCode::Char('-') => self.apply(MaskEngine::set_negative),
            KeyCode::Char(digit) if digit.is_ascii_digit() => {
                if !self.engine.can_accept_more_input() {
                    return InputOutcome::Consumed;
                }
                let replace_all = self.whole_value_selected();
                self.apply(|engine| {
                    if replace_all {
                        engine.clear();
                    }
                    engine.insert_digit(digit);
                })
            }
            KeyCode::Char(_) => InputOutcome::Consumed,
            _ => InputOutcome::Ignored,
        }
    }

    /// Handle a deletion reported as a numeric platform key code.
    pub fn handle_key_code(&mut self, code: u32) -> InputOutcome {
        self.handle_delete(DeleteDirection::from_key_code(code))
    }

    /// Delete in `direction`; a selection spanning the whole value clears it.
    pub fn handle_delete(&mut self, direction: DeleteDirection) -> InputOutcome {
        if self.whole_value_selected() {
            self.apply(MaskEngine::clear)
        } else {
            self.apply(|engine| engine.delete(direction))
        }
    }

    /// Paste clipboard text over the selection.
    pub fn handle_paste(&mut self, text: &str) -> InputOutcome {
        self.apply(|engine| engine.paste(text))
    }

    /// Cut the selection, returning the outcome and the removed text for
    /// the clipboard.
    pub fn handle_cut(&mut self) -> (InputOutcome, String) {
        let mut removed = String::new();
        let outcome = self.apply(|engine| removed = engine.cut());
        (outcome, removed)
    }

    /// The field gained focus: put the caret after the number.
    pub fn handle_focus(&mut self) {
        self.engine.fix_cursor(true);
    }

    /// The caret was placed with the mouse: keep it inside the number.
    pub fn handle_click(&mut self) {
        self.engine.fix_cursor(false);
    }

    /// The field lost focus.
    pub fn handle_blur(&mut self) {
        emit_event(&MaskEvent::Touched);
    }

    fn whole_value_selected(&self) -> bool {
        let len = char_len(self.engine.raw_text());
        self.engine.field().selection().clamp(len).covers(len)
    }

    fn apply(&mut self, edit: impl FnOnce(&mut MaskEngine<F>)) -> InputOutcome {
        let before = self.engine.raw_text().to_string();
        edit(&mut self.engine);
        if self.engine.raw_text() == before {
            return InputOutcome::Consumed;
        }

        let value = self.engine.value();
        emit_event(&MaskEvent::ValueChanged {
            raw: self.engine.raw_text(),
            value,
        });
        InputOutcome::Changed(value)
    }
}
