//! Fixed-width layout of the masked text.
//!
//! Terminal front ends draw the field into a fixed number of columns.
//! [`layout_line`] pads the raw text according to [`Align`] and maps the
//! caret's character offset to a display column, so wide characters in a
//! prefix (`¥`, `₩`, CJK currency names) keep the caret in the right cell.

use unicode_width::UnicodeWidthChar;

use crate::config::Align;

/// Padded field text and caret column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineLayout {
    /// Text padded with spaces to the field width.
    pub text: String,
    /// Display column of the caret.
    pub cursor_column: usize,
}

/// Display width of a character in terminal columns.
#[inline]
fn char_width(c: char) -> usize {
    if c.is_ascii() && (' '..='~').contains(&c) {
        return 1;
    }
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Display width of a string in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Pad `text` to `width` columns and locate the caret at character offset
/// `caret` (clamped to the text).
///
/// Text wider than the field is returned unpadded.
#[must_use]
pub fn layout_line(text: &str, caret: usize, width: usize, align: Align) -> LineLayout {
    let text_width = display_width(text);
    let padding = width.saturating_sub(text_width);
    let caret_width: usize = text.chars().take(caret).map(char_width).sum();

    let mut out = String::with_capacity(text.len() + padding);
    let cursor_column = match align {
        Align::Left => {
            out.push_str(text);
            out.extend(std::iter::repeat_n(' ', padding));
            caret_width
        }
        Align::Right => {
            out.extend(std::iter::repeat_n(' ', padding));
            out.push_str(text);
            padding + caret_width
        }
    };

    LineLayout {
        text: out,
        cursor_column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_align() {
        let layout = layout_line("$1.00", 5, 10, Align::Right);
        assert_eq!(layout.text, "     $1.00");
        assert_eq!(layout.cursor_column, 10);
    }

    #[test]
    fn test_left_align() {
        let layout = layout_line("$1.00", 2, 8, Align::Left);
        assert_eq!(layout.text, "$1.00   ");
        assert_eq!(layout.cursor_column, 2);
    }

    #[test]
    fn test_wide_prefix() {
        // U+FFE5 FULLWIDTH YEN SIGN is two columns
        let layout = layout_line("\u{ffe5}12", 1, 6, Align::Right);
        assert_eq!(display_width("\u{ffe5}12"), 4);
        assert_eq!(layout.text, "  \u{ffe5}12");
        assert_eq!(layout.cursor_column, 4);
    }

    #[test]
    fn test_overflow_and_caret_clamp() {
        let layout = layout_line("$12,345.67", 99, 4, Align::Right);
        assert_eq!(layout.text, "$12,345.67");
        assert_eq!(layout.cursor_column, 10);
        assert_eq!(layout_line("", 0, 3, Align::Right).text, "   ");
    }
}
