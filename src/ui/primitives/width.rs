//! Display-width helpers that ignore ANSI escapes.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Pad with spaces on the right up to `width` columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// Pad with spaces on the left up to `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = visible_width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Cut plain text to at most `width` columns, marking the cut with `…` (or `~`).
pub fn truncate(s: &str, width: usize, supports_unicode: bool) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let marker = if supports_unicode { '…' } else { '~' };
    let budget = width - 1;

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        out.push(c);
    }
    out.push(marker);
    out
}

pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // ESC [ ... <final>
            if matches!(chars.peek(), Some('[') | Some(']')) {
                let _ = chars.next();
            }
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi_sequences() {
        assert_eq!(visible_width("\u{1b}[32mok\u{1b}[0m"), 2);
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Fertilize north field", 10, true), "Fertilize…");
        assert_eq!(truncate("Fertilize north field", 10, false), "Fertilize~");
        assert_eq!(truncate("Sow", 10, true), "Sow");
    }

    #[test]
    fn pad_counts_wide_characters() {
        assert_eq!(pad_right("🌾", 4), "🌾  ");
        assert_eq!(pad_left("7", 3), "  7");
    }
}
