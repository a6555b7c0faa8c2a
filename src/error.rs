//! Error types for currency masks.

use std::fmt;

/// Result type alias for mask configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which separator a configuration error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeparatorRole {
    Decimal,
    Thousands,
}

impl fmt::Display for SeparatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal => f.write_str("decimal"),
            Self::Thousands => f.write_str("thousands"),
        }
    }
}

/// Which decoration a configuration error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationRole {
    Prefix,
    Suffix,
}

impl fmt::Display for DecorationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix => f.write_str("prefix"),
            Self::Suffix => f.write_str("suffix"),
        }
    }
}

/// Error type for mask configuration.
///
/// Editing never fails; only installing a [`MaskConfig`](crate::MaskConfig)
/// whose characters would make unmasking ambiguous is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A separator is a digit or the minus sign.
    InvalidSeparator { role: SeparatorRole, ch: char },
    /// Decimal and thousands separators are the same character.
    SeparatorConflict(char),
    /// Fractional digits requested without a decimal separator.
    MissingDecimalSeparator { precision: usize },
    /// More fractional digits than fixed-point formatting supports.
    PrecisionOutOfRange { precision: usize, max: usize },
    /// Prefix or suffix contains a digit, the minus sign or a separator.
    InvalidDecoration { role: DecorationRole, text: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeparator { role, ch } => {
                write!(f, "invalid {role} separator: {ch:?}")
            }
            Self::SeparatorConflict(ch) => {
                write!(f, "decimal and thousands separators are both {ch:?}")
            }
            Self::MissingDecimalSeparator { precision } => {
                write!(f, "precision {precision} requires a decimal separator")
            }
            Self::PrecisionOutOfRange { precision, max } => {
                write!(f, "precision {precision} exceeds maximum of {max}")
            }
            Self::InvalidDecoration { role, text } => {
                write!(
                    f,
                    "{role} {text:?} must not contain digits, '-' or separators"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSeparator {
            role: SeparatorRole::Thousands,
            ch: '7',
        };
        assert!(err.to_string().contains("invalid thousands separator"));

        let err = Error::SeparatorConflict('.');
        assert!(err.to_string().contains("'.'"));

        let err = Error::PrecisionOutOfRange {
            precision: 30,
            max: 20,
        };
        assert!(err.to_string().contains("30"));
        assert!(err.to_string().contains("20"));

        let err = Error::InvalidDecoration {
            role: DecorationRole::Suffix,
            text: " -".to_string(),
        };
        assert!(err.to_string().starts_with("suffix"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::MissingDecimalSeparator { precision: 2 });
    }
}
