//! Input handling for masked fields.
//!
//! Keyboard event types plus the handler that turns key, clipboard and
//! focus events into mask edits.

mod handler;
mod keyboard;

pub use handler::{InputHandler, InputOutcome};
pub use keyboard::{
    APPLE_FORWARD_DELETE_CODE, DeleteDirection, FORWARD_DELETE_CODE, KeyCode, KeyEvent,
    KeyModifiers,
};
