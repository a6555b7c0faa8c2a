//! Mask configuration.
//!
//! [`MaskConfig`] describes how a number is decorated: sign policy,
//! separators, fractional precision, prefix/suffix text and alignment.
//! A configuration is immutable for the duration of one formatting pass;
//! swapping it at runtime goes through
//! [`MaskEngine::set_config`](crate::MaskEngine::set_config), which
//! validates first.
//!
//! # Examples
//!
//! ```
//! use currency_mask::MaskConfig;
//!
//! let euro = MaskConfig::default()
//!     .with_prefix("")
//!     .with_suffix(" €")
//!     .with_decimal_separator(Some(','))
//!     .with_thousands_separator(Some('.'));
//! assert!(euro.validate().is_ok());
//!
//! let broken = MaskConfig::default().with_thousands_separator(Some('.'));
//! assert!(broken.validate().is_err());
//! ```

use crate::error::{DecorationRole, Error, Result, SeparatorRole};

/// Largest supported number of fractional digits.
pub const MAX_PRECISION: usize = 20;

/// Horizontal placement of the masked text inside a fixed-width field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    Left,
    /// Numbers read best right-aligned, so this is the default.
    #[default]
    Right,
}

/// Formatting options for a currency mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskConfig {
    /// Whether a leading `-` is kept.
    pub allow_negative: bool,
    /// Character between integer and fractional digits.
    pub decimal_separator: Option<char>,
    /// Number of fractional digits.
    pub precision: usize,
    /// Literal text placed before the number (after the sign).
    pub prefix: String,
    /// Literal text placed after the number.
    pub suffix: String,
    /// Character inserted between groups of three integer digits.
    pub thousands_separator: Option<char>,
    /// Placement inside a fixed-width field.
    pub align: Align,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            allow_negative: true,
            decimal_separator: Some('.'),
            precision: 2,
            prefix: "$ ".to_string(),
            suffix: String::new(),
            thousands_separator: Some(','),
            align: Align::Right,
        }
    }
}

impl MaskConfig {
    /// Create the default configuration (`$ 1,234.56` style).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with no decoration, grouping or fraction: plain integers.
    #[must_use]
    pub fn plain_integer() -> Self {
        Self {
            allow_negative: true,
            decimal_separator: None,
            precision: 0,
            prefix: String::new(),
            suffix: String::new(),
            thousands_separator: None,
            align: Align::Right,
        }
    }

    #[must_use]
    pub fn with_allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    #[must_use]
    pub fn with_decimal_separator(mut self, separator: Option<char>) -> Self {
        self.decimal_separator = separator;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_thousands_separator(mut self, separator: Option<char>) -> Self {
        self.thousands_separator = separator;
        self
    }

    #[must_use]
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Prefix length in characters.
    #[must_use]
    pub fn prefix_len(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Suffix length in characters.
    #[must_use]
    pub fn suffix_len(&self) -> usize {
        self.suffix.chars().count()
    }

    /// Whether `ch` is one of the configured separators.
    #[must_use]
    pub fn is_separator(&self, ch: char) -> bool {
        self.decimal_separator == Some(ch) || self.thousands_separator == Some(ch)
    }

    /// Check that separators, digits, sign and decorations cannot be
    /// confused with one another while unmasking.
    pub fn validate(&self) -> Result<()> {
        for (role, separator) in [
            (SeparatorRole::Decimal, self.decimal_separator),
            (SeparatorRole::Thousands, self.thousands_separator),
        ] {
            if let Some(ch) = separator {
                if ch.is_ascii_digit() || ch == '-' {
                    return Err(Error::InvalidSeparator { role, ch });
                }
            }
        }

        if let (Some(decimal), Some(thousands)) =
            (self.decimal_separator, self.thousands_separator)
        {
            if decimal == thousands {
                return Err(Error::SeparatorConflict(decimal));
            }
        }

        if self.precision > MAX_PRECISION {
            return Err(Error::PrecisionOutOfRange {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        if self.precision > 0 && self.decimal_separator.is_none() {
            return Err(Error::MissingDecimalSeparator {
                precision: self.precision,
            });
        }

        for (role, text) in [
            (DecorationRole::Prefix, &self.prefix),
            (DecorationRole::Suffix, &self.suffix),
        ] {
            if text
                .chars()
                .any(|ch| ch.is_ascii_digit() || ch == '-' || self.is_separator(ch))
            {
                return Err(Error::InvalidDecoration {
                    role,
                    text: text.clone(),
                });
            }
        }

        Ok(())
    }
}
