//! Preview derivation for dropdown list items.

use serde::Deserialize;

/// Shown in place of a preview when a message has no visible text.
pub const EMPTY_MESSAGE_SENTINEL: &str = "[Empty message]";

/// Truncation bound for a preview. Word-count truncation is the canonical
/// form; the character-count form matches the project-page variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewLimit {
    Words(usize),
    Chars(usize),
}

/// Derives a short display string from raw message text.
///
/// Whitespace runs collapse to single spaces and the result is trimmed.
/// Empty or whitespace-only input yields [`EMPTY_MESSAGE_SENTINEL`]. A
/// word limit joins the first `n` words and appends `"..."` only when the
/// text exceeds the limit; a character limit takes the first `n` chars
/// with no suffix.
pub fn preview(text: &str, limit: PreviewLimit) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        return EMPTY_MESSAGE_SENTINEL.to_string();
    }
    match limit {
        PreviewLimit::Words(max) => {
            let words: Vec<&str> = cleaned.split(' ').collect();
            if words.len() > max {
                format!("{}...", words[..max].join(" "))
            } else {
                cleaned
            }
        }
        PreviewLimit::Chars(max) => cleaned.chars().take(max).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_yield_sentinel() {
        assert_eq!(preview("", PreviewLimit::Words(5)), EMPTY_MESSAGE_SENTINEL);
        assert_eq!(
            preview("   ", PreviewLimit::Words(5)),
            EMPTY_MESSAGE_SENTINEL
        );
        assert_eq!(
            preview("\n\t  \r\n", PreviewLimit::Chars(100)),
            EMPTY_MESSAGE_SENTINEL
        );
    }

    #[test]
    fn test_word_limit_truncates_with_ellipsis() {
        assert_eq!(preview("a b c d e f", PreviewLimit::Words(5)), "a b c d e...");
    }

    #[test]
    fn test_under_word_limit_unchanged() {
        assert_eq!(preview("a b c", PreviewLimit::Words(5)), "a b c");
    }

    #[test]
    fn test_exactly_at_word_limit_no_ellipsis() {
        assert_eq!(preview("a b c d e", PreviewLimit::Words(5)), "a b c d e");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(
            preview("  hello\n\n  world\t!  ", PreviewLimit::Words(10)),
            "hello world !"
        );
    }

    #[test]
    fn test_char_limit_takes_prefix_without_suffix() {
        assert_eq!(preview("hello world", PreviewLimit::Chars(5)), "hello");
        assert_eq!(preview("hi", PreviewLimit::Chars(100)), "hi");
    }

    #[test]
    fn test_char_limit_respects_char_boundaries() {
        assert_eq!(preview("héllo wörld", PreviewLimit::Chars(4)), "héll");
    }

    #[test]
    fn test_output_length_bounded_by_limit() {
        let long = "word ".repeat(500);
        let out = preview(&long, PreviewLimit::Words(5));
        // 5 words of 4 chars, 4 separators, 3-char ellipsis
        assert!(out.len() <= 5 * 4 + 4 + 3);
        let out = preview(&long, PreviewLimit::Chars(10));
        assert_eq!(out.chars().count(), 10);
    }
}
