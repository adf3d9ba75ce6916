// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! All cursor math in this crate counts grapheme clusters, not bytes or `char`s. So
//! `"e\u{301}"` is one column and a flag emoji is one column. Styled text is measured
//! after stripping its ANSI escape sequences.

use unicode_segmentation::UnicodeSegmentation;

/// Number of grapheme clusters in `text`.
#[must_use]
pub fn grapheme_len(text: &str) -> usize { text.graphemes(true).count() }

/// Byte offset where the grapheme at `seg_index` starts. If `seg_index` is at or past the
/// end, returns the byte length of `text`.
#[must_use]
pub fn byte_offset_at(text: &str, seg_index: usize) -> usize {
    text.grapheme_indices(true)
        .nth(seg_index)
        .map_or(text.len(), |(byte_index, _)| byte_index)
}

/// Split `text` into the first `seg_index` graphemes and the rest.
#[must_use]
pub fn split_at_grapheme(text: &str, seg_index: usize) -> (&str, &str) {
    text.split_at(byte_offset_at(text, seg_index))
}

/// The first `count` graphemes of `text` (all of it if shorter).
#[must_use]
pub fn take_graphemes(text: &str, count: usize) -> &str { split_at_grapheme(text, count).0 }

/// Everything after the first `count` graphemes of `text` (empty if shorter).
#[must_use]
pub fn skip_graphemes(text: &str, count: usize) -> &str { split_at_grapheme(text, count).1 }

/// Drop the last grapheme of `text` in place. Returns `false` if `text` was empty.
pub fn pop_grapheme(text: &mut String) -> bool {
    match text.grapheme_indices(true).next_back() {
        Some((byte_index, _)) => {
            text.truncate(byte_index);
            true
        }
        None => false,
    }
}

/// Number of terminal columns the caret moves over when `text` is printed, ignoring ANSI
/// escape sequences.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    grapheme_len(&strip_ansi_escapes::strip_str(text))
}

/// Convert a grapheme count into a cursor delta.
#[must_use]
pub fn as_delta(count: usize) -> isize { isize::try_from(count).unwrap_or(isize::MAX) }

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0)]
    #[test_case("hello", 5)]
    #[test_case("😁😁", 2)]
    #[test_case("e\u{301}", 1)]
    #[test_case("🇺🇸x", 2)]
    fn test_grapheme_len(input: &str, expected: usize) {
        assert_eq!(grapheme_len(input), expected);
    }

    #[test]
    fn test_visual_len_strips_ansi() {
        assert_eq!(visual_len("\x1b[34mhello\x1b[39m"), 5);
        assert_eq!(visual_len("\x1b[90m world\x1b[39m"), 6);
        assert_eq!(visual_len("plain"), 5);
    }

    #[test]
    fn test_split_at_grapheme() {
        assert_eq!(split_at_grapheme("a😁b", 0), ("", "a😁b"));
        assert_eq!(split_at_grapheme("a😁b", 2), ("a😁", "b"));
        assert_eq!(split_at_grapheme("a😁b", 3), ("a😁b", ""));
        assert_eq!(split_at_grapheme("a😁b", 10), ("a😁b", ""));
    }

    #[test]
    fn test_take_and_skip() {
        assert_eq!(take_graphemes("hello world", 5), "hello");
        assert_eq!(skip_graphemes("hello world", 5), " world");
        assert_eq!(take_graphemes("hi", 5), "hi");
        assert_eq!(skip_graphemes("hi", 5), "");
    }

    #[test]
    fn test_pop_grapheme() {
        let mut text = String::from("ae\u{301}");
        assert!(pop_grapheme(&mut text));
        assert_eq!(text, "a");
        assert!(pop_grapheme(&mut text));
        assert_eq!(text, "");
        assert!(!pop_grapheme(&mut text));
    }
}
