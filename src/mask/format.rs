//! Masking and unmasking.
//!
//! [`apply_mask`] turns either a number or arbitrary text into the fully
//! decorated display form. Only ASCII digits and the presence of a `-`
//! survive from text input; everything else (old separators, prefix,
//! suffix, stray characters) is regenerated. This is what makes re-masking
//! an already masked string a no-op.
//!
//! [`clear_mask`] goes the other way and recovers the numeric value.
//!
//! # Examples
//!
//! ```
//! use currency_mask::MaskConfig;
//! use currency_mask::mask::{MaskSource, apply_mask, clear_mask};
//!
//! let config = MaskConfig::default().with_prefix("$");
//! let masked = apply_mask(&config, MaskSource::Text("1234567"));
//! assert_eq!(masked, "$12,345.67");
//! assert_eq!(clear_mask(&config, &masked), Some(12345.67));
//!
//! let masked = apply_mask(&config, MaskSource::Number(-0.5));
//! assert_eq!(masked, "-$0.50");
//! ```

use std::borrow::Cow;

use super::fixed::to_fixed;
use crate::config::MaskConfig;

/// Input to [`apply_mask`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaskSource<'a> {
    /// A number, formatted to the configured precision first.
    Number(f64),
    /// Text whose digits (and `-`) are re-decorated as-is.
    Text(&'a str),
}

/// Produce the decorated representation of `source`.
///
/// Returns an empty string when the source carries no digits (or is a
/// non-finite number), meaning "no value".
#[must_use]
pub fn apply_mask(config: &MaskConfig, source: MaskSource<'_>) -> String {
    let text: Cow<'_, str> = match source {
        MaskSource::Number(value) => match to_fixed(value, config.precision) {
            Some(fixed) => Cow::Owned(fixed),
            None => return String::new(),
        },
        MaskSource::Text(text) => Cow::Borrowed(text),
    };

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    let split = digits.len().saturating_sub(config.precision);
    let (integer_digits, decimal_digits) = digits.split_at(split);
    let integer_digits = match integer_digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    let is_zero = integer_digits == "0" && decimal_digits.bytes().all(|b| b == b'0');
    let negative = config.allow_negative && text.contains('-') && !is_zero;

    let mut out = String::with_capacity(
        config.prefix.len() + config.suffix.len() + digits.len() * 2 + 2,
    );
    if negative {
        out.push('-');
    }
    out.push_str(&config.prefix);
    push_grouped(&mut out, integer_digits, config.thousands_separator);
    if config.precision > 0 {
        if let Some(separator) = config.decimal_separator {
            out.push(separator);
        }
        out.extend(std::iter::repeat_n('0', config.precision - decimal_digits.len()));
        out.push_str(decimal_digits);
    }
    out.push_str(&config.suffix);
    out
}

/// Recover the numeric value of a masked string.
///
/// `None` means "no value" (empty input). Text that does not start with a
/// number once the decoration is stripped yields `Some(f64::NAN)`; callers
/// must check with [`f64::is_nan`] before using the value.
#[must_use]
pub fn clear_mask(config: &MaskConfig, masked: &str) -> Option<f64> {
    if masked.is_empty() {
        return None;
    }

    let mut value = masked.to_string();
    if !config.prefix.is_empty() {
        value = value.replacen(config.prefix.as_str(), "", 1);
    }
    if !config.suffix.is_empty() {
        value = value.replacen(config.suffix.as_str(), "", 1);
    }
    if let Some(separator) = config.thousands_separator {
        value = value.replace(separator, "");
    }
    if let Some(separator) = config.decimal_separator {
        value = value.replacen(separator, ".", 1);
    }

    Some(parse_leading_float(&value))
}

/// Append `digits`, inserting `separator` between groups of three counted
/// from the right.
fn push_grouped(out: &mut String, digits: &str, separator: Option<char>) {
    let Some(separator) = separator else {
        out.push_str(digits);
        return;
    };

    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}

/// Parse the longest numeric prefix of `text`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or `Infinity`. Anything else yields NaN.
fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut at: usize| {
        while at < len && bytes[at].is_ascii_digit() {
            at += 1;
        }
        at
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    end = digits_from(end);
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < len && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}
