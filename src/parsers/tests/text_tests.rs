use crate::parsers::text;

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(text::collapse_whitespace(""), "");
        assert_eq!(text::collapse_whitespace("   \n\t  "), "");
        assert_eq!(text::collapse_whitespace("Hello,   world!"), "Hello, world!");
        assert_eq!(
            text::collapse_whitespace("  Line 1 \n\n  Line 2\t\r\n Line 3  "),
            "Line 1 Line 2 Line 3"
        );
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(text::truncate_chars("abcdef", 3), "abc");
        assert_eq!(text::truncate_chars("abc", 3), "abc");
        assert_eq!(text::truncate_chars("ab", 10), "ab");
        assert_eq!(text::truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let input = "héllo wörld ✓✓✓";
        let out = text::truncate_chars(input, 7);
        assert_eq!(out, "héllo w");
        assert_eq!(out.chars().count(), 7);

        let emoji = "🙂".repeat(10);
        assert_eq!(text::truncate_chars(&emoji, 4).chars().count(), 4);
    }

    #[test]
    fn test_non_empty_trimmed() {
        assert_eq!(text::non_empty_trimmed("  Buy now "), Some("Buy now".to_string()));
        assert_eq!(text::non_empty_trimmed(" \n "), None);
        assert_eq!(text::non_empty_trimmed(""), None);
    }
}
