//! Currency masking.
//!
//! - [`format`]: stateless masking and unmasking
//! - [`fixed`]: fixed-point number formatting used for numeric sources
//! - [`selection`]: character-offset selections over the raw text
//! - [`engine`]: the stateful editing engine

pub mod engine;
pub mod fixed;
pub mod format;
pub mod selection;

pub use engine::MaskEngine;
pub use fixed::to_fixed;
pub use format::{MaskSource, apply_mask, clear_mask};
pub use selection::Selection;
