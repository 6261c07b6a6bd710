//! Text fitting: greedy word wrap and width clipping.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Greedy word wrap.
///
/// Words are separated by any whitespace (line breaks included) and are
/// never split: a word wider than `width` gets a line of its own.
/// Whitespace-only input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if line.is_empty() {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        } else {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Clip `text` to at most `width` columns without splitting a grapheme.
pub fn clip_to_width(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut end = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let w = grapheme.width();
        if used + w > width {
            break;
        }
        used += w;
        end = offset + grapheme.len();
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_message() {
        assert_eq!(wrap_text("Hi", 77), vec!["Hi"]);
    }

    #[test]
    fn test_wrap_greedy() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_wrap_exact_fit() {
        assert_eq!(wrap_text("aaaa bbbbb", 10), vec!["aaaa bbbbb"]);
        assert_eq!(wrap_text("aaaa bbbbbb", 10), vec!["aaaa", "bbbbbb"]);
    }

    #[test]
    fn test_wrap_long_word_is_not_split() {
        let lines = wrap_text("hi supercalifragilistic yo", 8);
        assert_eq!(lines, vec!["hi", "supercalifragilistic", "yo"]);
    }

    #[test]
    fn test_wrap_leading_long_word_has_no_empty_line() {
        assert_eq!(wrap_text("abcdefghij k", 4), vec!["abcdefghij", "k"]);
    }

    #[test]
    fn test_wrap_empty_and_blank() {
        assert!(wrap_text("", 20).is_empty());
        assert!(wrap_text("   \n\t ", 20).is_empty());
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let text = "Hello, I'm lil guy! I sit here and wave while your build scrolls past.";
        for width in [5, 12, 20, 33, 80] {
            let once = wrap_text(text, width);
            let twice = wrap_text(&once.join("\n"), width);
            assert_eq!(once, twice, "width {width}");
        }
    }

    #[test]
    fn test_wrap_counts_display_width() {
        // Each CJK character is two columns wide.
        let lines = wrap_text("日本 語語", 4);
        assert_eq!(lines, vec!["日本", "語語"]);
    }

    #[test]
    fn test_clip_ascii() {
        assert_eq!(clip_to_width("hello world", 5), "hello");
        assert_eq!(clip_to_width("hi", 5), "hi");
        assert_eq!(clip_to_width("hi", 0), "");
    }

    #[test]
    fn test_clip_wide_graphemes() {
        assert_eq!(clip_to_width("日本語", 5), "日本");
        assert_eq!(clip_to_width("e\u{301}xyz", 2), "e\u{301}x");
    }
}
