//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` terminal columns.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        width += ch_width;
    }
    truncated.push('…');
    truncated
}

/// Word-wraps `text` to `width` columns.
///
/// Words wider than the line are hard-split. Control characters are dropped
/// and tabs become spaces, since post bodies are untrusted.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split([' ', '\t']).filter(|w| !w.is_empty()) {
            let word: String = word.chars().filter(|c| !c.is_control()).collect();
            let word_width = word.width();

            if line_width > 0 && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width > width {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if line_width > 0 && line_width + ch_width > width {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
                continue;
            }

            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(&word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}

/// Maps an avatar key to a single-column glyph.
pub fn avatar_glyph(key: &str) -> &'static str {
    if key.contains("fill") { "◉" } else { "○" }
}

/// Formats a count compactly ("999", "1.2k", "3.4M").
pub fn compact_count(n: u32) -> String {
    match n {
        0..=999 => n.to_string(),
        // Anything that would round up to "1000.0k" is shown in millions.
        1_000..=999_949 => format!("{:.1}k", f64::from(n) / 1_000.0),
        _ => format!("{:.1}M", f64::from(n) / 1_000_000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_with_ellipsis_very_short() {
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_cjk() {
        assert_eq!(truncate_with_ellipsis("中文test", 6), "中文t…");
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_wide_char_in_narrow_column() {
        assert_eq!(wrap_text("中", 1), vec!["中"]);
        assert_eq!(wrap_text("中文", 1), vec!["中", "文"]);
        assert_eq!(wrap_text("a 中文", 1), vec!["a", "中", "文"]);
    }

    #[test]
    fn test_wrap_text_keeps_paragraphs_and_strips_escapes() {
        let lines = wrap_text("one\n\x1b[31mtwo", 20);
        assert_eq!(lines, vec!["one", "[31mtwo"]);
    }

    #[test]
    fn test_avatar_glyph() {
        assert_eq!(avatar_glyph("person.circle.fill"), "◉");
        assert_eq!(avatar_glyph("person.crop.circle"), "○");
    }

    #[test]
    fn test_compact_count() {
        assert_eq!(compact_count(42), "42");
        assert_eq!(compact_count(1_024), "1.0k");
        assert_eq!(compact_count(2_500_000), "2.5M");
    }

    #[test]
    fn test_compact_count_rounds_up_to_millions() {
        assert_eq!(compact_count(999_949), "999.9k");
        assert_eq!(compact_count(999_950), "1.0M");
        assert_eq!(compact_count(999_999), "1.0M");
        assert_eq!(compact_count(1_000_000), "1.0M");
    }
}
