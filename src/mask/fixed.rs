//! Fixed-point decimal formatting.
//!
//! Numbers are formatted from their shortest round-trip decimal form (what
//! `Display` prints for an `f64`) and rounded half away from zero at the
//! requested precision. Rounding therefore follows the digits a person
//! would write down: `19.995` becomes `20.00` even though the nearest
//! binary double lies slightly below it.

/// Format `value` with exactly `precision` fractional digits.
///
/// Returns `None` for NaN and infinities. Negative values keep their `-`
/// unless the rounded result is zero.
#[must_use]
pub fn to_fixed(value: f64, precision: usize) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    // Display for f64 never switches to exponent notation.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(
        frac_part
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(precision),
    );

    let round_up = frac_part
        .as_bytes()
        .get(precision)
        .is_some_and(|&digit| digit >= b'5');
    if round_up {
        increment(&mut digits);
    }

    let int_len = digits.len() - precision;
    let is_zero = digits.iter().all(|&digit| digit == b'0');

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&digit| char::from(digit)));
    if precision > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&digit| char::from(digit)));
    }
    Some(out)
}

/// Add one unit in the last place to a string of ASCII digits.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_fraction() {
        assert_eq!(to_fixed(1234.5, 2).as_deref(), Some("1234.50"));
        assert_eq!(to_fixed(5.0, 0).as_deref(), Some("5"));
        assert_eq!(to_fixed(0.0, 3).as_deref(), Some("0.000"));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(to_fixed(19.995, 2).as_deref(), Some("20.00"));
        assert_eq!(to_fixed(1.005, 2).as_deref(), Some("1.01"));
        assert_eq!(to_fixed(2.5, 0).as_deref(), Some("3"));
        assert_eq!(to_fixed(-2.5, 0).as_deref(), Some("-3"));
        assert_eq!(to_fixed(0.125, 2).as_deref(), Some("0.13"));
        assert_eq!(to_fixed(0.124, 2).as_deref(), Some("0.12"));
    }

    #[test]
    fn test_carry_into_new_digit() {
        assert_eq!(to_fixed(999.996, 2).as_deref(), Some("1000.00"));
        assert_eq!(to_fixed(19.99, 0).as_deref(), Some("20"));
        assert_eq!(to_fixed(0.96, 1).as_deref(), Some("1.0"));
    }

    #[test]
    fn test_float_noise_is_discarded() {
        assert_eq!(to_fixed(0.1 + 0.2, 2).as_deref(), Some("0.30"));
    }

    #[test]
    fn test_negative_zero_loses_sign() {
        assert_eq!(to_fixed(-0.001, 2).as_deref(), Some("0.00"));
        assert_eq!(to_fixed(-0.0, 0).as_deref(), Some("0"));
        assert_eq!(to_fixed(-0.005, 2).as_deref(), Some("-0.01"));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), None);
        assert_eq!(to_fixed(f64::INFINITY, 2), None);
        assert_eq!(to_fixed(f64::NEG_INFINITY, 0), None);
    }

    #[test]
    fn test_large_and_small_magnitudes() {
        assert_eq!(to_fixed(1e21, 0).as_deref(), Some("1000000000000000000000"));
        assert_eq!(to_fixed(1e-7, 2).as_deref(), Some("0.00"));
    }
}
