//! `currency_mask` - Currency input masking for text fields
//!
//! Formats a number as it is typed into a text field: fixed fractional
//! digits, grouped thousands, prefix/suffix decoration and an optional
//! sign. Digits enter at the caret and shift through the fractional part,
//! separators are regenerated after every edit, and the caret is kept out
//! of the decoration.
//!
//! The editing core is [`MaskEngine`], bound to any widget implementing
//! [`FieldAdapter`]. [`InputHandler`] maps key, clipboard and focus events
//! onto it.
//!
//! ```
//! use currency_mask::{InputHandler, KeyEvent, MaskConfig, MaskEngine, TextField};
//!
//! let engine = MaskEngine::new(TextField::new(), MaskConfig::default()).unwrap();
//! let mut handler = InputHandler::new(engine);
//! for ch in "123456".chars() {
//!     handler.handle_key(KeyEvent::char(ch));
//! }
//! assert_eq!(handler.engine().raw_text(), "$ 1,234.56");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow MaskConfig in config etc
#![allow(clippy::missing_errors_doc)] // Error variants are documented on Error
#![allow(clippy::missing_panics_doc)] // Panics only in tests
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::float_cmp)] // Exact comparisons against masked values are intended
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod config;
pub mod display;
pub mod error;
pub mod event;
pub mod field;
pub mod input;
pub mod mask;

// Re-export core types at crate root
pub use config::{Align, MAX_PRECISION, MaskConfig};
pub use display::{LineLayout, layout_line};
pub use error::{Error, Result};
pub use event::{
    LogLevel, MaskEvent, clear_callbacks, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use field::{FieldAdapter, TextField};
pub use mask::{MaskEngine, MaskSource, Selection, apply_mask, clear_mask};

// Re-export input types
pub use input::{DeleteDirection, InputHandler, InputOutcome, KeyCode, KeyEvent, KeyModifiers};
