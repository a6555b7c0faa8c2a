//! Keyboard event types.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
        /// Super/Meta/Windows key.
        const SUPER = 0b0000_1000;
    }
}

/// Key code of a platform keydown event that deletes forward.
pub const FORWARD_DELETE_CODE: u32 = 46;
/// Forward delete as reported by some Apple keyboards.
pub const APPLE_FORWARD_DELETE_CODE: u32 = 63272;

/// Which side of the caret a deletion removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeleteDirection {
    /// Delete key: remove after the caret.
    Forward,
    /// Backspace: remove before the caret.
    Backward,
}

impl DeleteDirection {
    /// Classify a numeric platform key code.
    ///
    /// Only the two forward-delete codes map to [`Forward`](Self::Forward);
    /// every other code is treated as backspace.
    #[must_use]
    pub fn from_key_code(code: u32) -> Self {
        match code {
            FORWARD_DELETE_CODE | APPLE_FORWARD_DELETE_CODE => Self::Forward,
            _ => Self::Backward,
        }
    }
}

/// A key code representing a keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Enter/Return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// A character key (includes space).
    Char(char),
}

impl KeyCode {
    /// Get the character if this is a character key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// The deletion this key performs, if it is a deletion key.
    #[must_use]
    pub fn delete_direction(&self) -> Option<DeleteDirection> {
        match self {
            Self::Backspace => Some(DeleteDirection::Backward),
            Self::Delete => Some(DeleteDirection::Forward),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a character key event.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create a Ctrl+key event.
    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    /// Whether a command modifier (Ctrl, Alt or Super) is held.
    ///
    /// Such chords are shortcuts and never type into the field.
    #[must_use]
    pub fn is_shortcut(&self) -> bool {
        self.modifiers
            .intersects(KeyModifiers::CTRL | KeyModifiers::ALT | KeyModifiers::SUPER)
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}
