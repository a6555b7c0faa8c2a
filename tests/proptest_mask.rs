//! Property-based tests for masking and editing.
//!
//! Uses proptest to check that masking is a fixpoint, that values survive a
//! mask/unmask round trip at the configured precision, and that no sequence
//! of edits can push the caret out of the text or into the decoration.

#![allow(clippy::float_cmp)] // Exact float comparison is intentional in tests

use currency_mask::{
    DeleteDirection, FieldAdapter, MaskConfig, MaskEngine, MaskSource, TextField, apply_mask,
    clear_mask,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A handful of realistic, valid configurations.
fn config_strategy() -> impl Strategy<Value = MaskConfig> {
    prop::sample::select(vec![
        MaskConfig::default(),
        MaskConfig::default().with_prefix("$"),
        MaskConfig::default()
            .with_prefix("")
            .with_suffix(" €")
            .with_decimal_separator(Some(','))
            .with_thousands_separator(Some('.')),
        MaskConfig::plain_integer().with_thousands_separator(Some(' ')),
        MaskConfig::default()
            .with_prefix("")
            .with_suffix(" kr")
            .with_precision(3)
            .with_allow_negative(false),
    ])
}

/// Arbitrary text mixing digits, separators, signs and noise.
fn messy_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            '0', '1', '2', '5', '9', '-', '+', '.', ',', ' ', '$', '€', 'k', 'x',
        ]),
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

#[derive(Clone, Debug)]
enum Op {
    Select(usize, usize),
    Digit(char),
    Delete(DeleteDirection),
    Negative,
    Positive,
    Paste(String),
    Cut,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (0usize..16, 0usize..16).prop_map(|(a, b)| Op::Select(a, b)),
        4 => prop::char::range('0', '9').prop_map(Op::Digit),
        1 => Just(Op::Delete(DeleteDirection::Forward)),
        1 => Just(Op::Delete(DeleteDirection::Backward)),
        1 => Just(Op::Negative),
        1 => Just(Op::Positive),
        1 => messy_text_strategy().prop_map(Op::Paste),
        1 => Just(Op::Cut),
    ]
}

fn assert_contained(engine: &MaskEngine<TextField>) {
    let caret = engine.field().cursor();
    if engine.raw_text().is_empty() {
        assert_eq!(caret, 0);
        return;
    }
    let (start, end) = engine.editable_range();
    assert!(
        (start..=end).contains(&caret),
        "caret {caret} outside {start}..={end} in {:?}",
        engine.raw_text()
    );
}

// ============================================================================
// Masking Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Masking an already masked string changes nothing.
    #[test]
    fn mask_is_fixpoint(config in config_strategy(), text in messy_text_strategy()) {
        let once = apply_mask(&config, MaskSource::Text(&text));
        let twice = apply_mask(&config, MaskSource::Text(&once));
        prop_assert_eq!(once, twice);
    }

    /// A cent amount survives masking and unmasking exactly.
    #[test]
    fn cents_round_trip(cents in -10_000_000_000i64..10_000_000_000, prefix in prop::bool::ANY) {
        let config = if prefix { MaskConfig::default() } else { MaskConfig::default().with_prefix("") };
        let value = cents as f64 / 100.0;
        let masked = apply_mask(&config, MaskSource::Number(value));
        prop_assert_eq!(clear_mask(&config, &masked), Some(value));
    }

    /// Whole numbers survive every configuration.
    #[test]
    fn integers_round_trip(config in config_strategy(), n in 0u32..1_000_000_000) {
        let value = f64::from(n);
        let masked = apply_mask(&config, MaskSource::Number(value));
        prop_assert_eq!(clear_mask(&config, &masked), Some(value));
    }

    /// A minus sign appears only on negative values and only when allowed.
    #[test]
    fn sign_matches_value(config in config_strategy(), text in messy_text_strategy()) {
        let masked = apply_mask(&config, MaskSource::Text(&text));
        if masked.contains('-') {
            prop_assert!(config.allow_negative);
            prop_assert!(masked.starts_with('-'));
            prop_assert!(clear_mask(&config, &masked).is_some_and(|v| v < 0.0));
        } else if let Some(value) = clear_mask(&config, &masked) {
            prop_assert!(value >= 0.0);
        }
    }

    /// The masked text always carries exactly `precision` fractional digits.
    #[test]
    fn fraction_has_precision_digits(config in config_strategy(), text in messy_text_strategy()) {
        let masked = apply_mask(&config, MaskSource::Text(&text));
        prop_assume!(!masked.is_empty());
        let body = masked.strip_suffix(config.suffix.as_str()).unwrap_or(&masked);
        match config.decimal_separator.filter(|_| config.precision > 0) {
            Some(separator) => {
                let (_, fraction) = body.rsplit_once(separator).unwrap();
                prop_assert_eq!(fraction.len(), config.precision);
                prop_assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
            }
            None => prop_assert!(body.ends_with(|c: char| c.is_ascii_digit())),
        }
    }
}

// ============================================================================
// Editing Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Typing digits at the end is the same as masking the digit string.
    #[test]
    fn typing_matches_masking(config in config_strategy(), digits in "[0-9]{1,15}") {
        let mut engine = MaskEngine::new(TextField::new(), config.clone()).unwrap();
        for digit in digits.chars() {
            engine.insert_digit(digit);
        }
        prop_assert_eq!(engine.raw_text(), apply_mask(&config, MaskSource::Text(&digits)));
        prop_assert_eq!(engine.field().cursor(), engine.editable_range().1);
    }

    /// No sequence of edits leaves the caret outside the text, and edits
    /// always leave it inside the editable region.
    #[test]
    fn edits_keep_caret_in_range(
        config in config_strategy(),
        start in prop::option::of(-1_000_000i64..1_000_000),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let value = start.map(|cents| cents as f64 / 100.0);
        let mut engine = MaskEngine::with_value(TextField::new(), config.clone(), value).unwrap();
        engine.fix_cursor(true);

        for op in ops {
            let mut commits = true;
            match op {
                Op::Select(a, b) => {
                    engine.field_mut().select(a, b);
                    commits = false;
                }
                Op::Digit(digit) => engine.insert_digit(digit),
                Op::Delete(direction) => engine.delete(direction),
                Op::Negative => {
                    engine.set_negative();
                    commits = false;
                }
                Op::Positive => {
                    engine.set_positive();
                    commits = false;
                }
                Op::Paste(text) => engine.paste(&text),
                Op::Cut => {
                    engine.cut();
                    commits = false;
                }
            }

            let raw = engine.raw_text().to_string();
            prop_assert!(engine.field().cursor() <= raw.chars().count());
            prop_assert_eq!(engine.field().text(), raw.clone());
            prop_assert_eq!(apply_mask(&config, MaskSource::Text(&raw)), raw);
            if commits {
                assert_contained(&engine);
            }
        }
    }
}
