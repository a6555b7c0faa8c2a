//! Fuzz target for masking and unmasking.
//!
//! Builds an arbitrary configuration, skips the ones validation rejects,
//! and checks that masking never panics, is a fixpoint, and that unmasking
//! its own output always yields a number.

#![no_main]

use arbitrary::Arbitrary;
use currency_mask::{MaskConfig, MaskSource, apply_mask, clear_mask};
use libfuzzer_sys::fuzz_target;

/// Structured input for mask fuzzing.
#[derive(Arbitrary, Debug)]
struct MaskInput {
    allow_negative: bool,
    decimal_separator: Option<char>,
    thousands_separator: Option<char>,
    precision: u8,
    prefix: String,
    suffix: String,
    source: Source,
}

#[derive(Arbitrary, Debug)]
enum Source {
    Number(f64),
    Text(String),
}

impl MaskInput {
    fn config(&self) -> MaskConfig {
        MaskConfig {
            allow_negative: self.allow_negative,
            decimal_separator: self.decimal_separator,
            precision: usize::from(self.precision % 24),
            prefix: self.prefix.chars().take(8).collect(),
            suffix: self.suffix.chars().take(8).collect(),
            thousands_separator: self.thousands_separator,
            ..MaskConfig::default()
        }
    }
}

fuzz_target!(|input: MaskInput| {
    let config = input.config();
    if config.validate().is_err() {
        return;
    }

    let masked = match &input.source {
        Source::Number(value) => apply_mask(&config, MaskSource::Number(*value)),
        Source::Text(text) => apply_mask(&config, MaskSource::Text(text)),
    };
    let again = apply_mask(&config, MaskSource::Text(&masked));
    assert_eq!(masked, again, "masking is not a fixpoint");

    match clear_mask(&config, &masked) {
        None => assert!(masked.is_empty()),
        Some(value) => assert!(!masked.is_empty() && !value.is_nan(), "{masked:?} -> NaN"),
    }
});
