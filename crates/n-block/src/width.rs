// SPDX-License-Identifier: MIT
//
// Display width — how many terminal columns a piece of text occupies.
//
// Byte length and char count both lie about this. A CJK glyph takes two
// columns, a combining accent takes none, and an emoji sequence (variation
// selector, zero-width joiners) is drawn as one glyph however many chars it
// spans. Lines are measured as whole strings so those sequences count once.
// Every padding and cropping decision in the layout algebra goes through
// this module, so a block's cached width always agrees with what the
// terminal actually draws.
//
// Cropping walks extended grapheme clusters rather than chars: cutting
// between a base letter and its combining mark would leave the mark
// dangling on whatever gets appended next (usually the crop marker).

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a character in terminal columns.
///
/// Returns 0 for control characters and combining marks, 1 for most
/// characters, and 2 for wide characters (CJK, some emoji), per Unicode
/// Standard Annex #11.
///
/// # Examples
///
/// ```
/// use n_block::width::char_width;
///
/// assert_eq!(char_width('a'), 1);
/// assert_eq!(char_width('中'), 2);
/// assert_eq!(char_width('\u{301}'), 0);
/// ```
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Display width of a single line in terminal columns.
///
/// Not the sum of [`char_width`]: `"❤\u{fe0f}"` is one 2-column glyph.
///
/// # Examples
///
/// ```
/// use n_block::width::line_width;
///
/// assert_eq!(line_width("hello"), 5);
/// assert_eq!(line_width("中文"), 4);
/// assert_eq!(line_width("e\u{301}"), 1);
/// assert_eq!(line_width("❤\u{fe0f}"), 2);
/// ```
#[must_use]
pub fn line_width(line: &str) -> usize {
    line.width()
}

/// The widest line of a sequence, in terminal columns.
///
/// Returns 0 for an empty sequence.
///
/// # Examples
///
/// ```
/// use n_block::width::max_width;
///
/// assert_eq!(max_width(["a", "abc", "ab"]), 3);
/// assert_eq!(max_width(Vec::<String>::new()), 0);
/// ```
#[must_use]
pub fn max_width<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| line_width(line.as_ref()))
        .max()
        .unwrap_or(0)
}

/// The longest prefix of `line` that fits in `max_cols` columns.
///
/// Returns the prefix and its display width. The width may be less than
/// `max_cols` when the next grapheme is wide and would straddle the limit.
///
/// # Examples
///
/// ```
/// use n_block::width::truncate;
///
/// assert_eq!(truncate("hello", 2), ("he", 2));
/// assert_eq!(truncate("a中b", 2), ("a", 1));
/// assert_eq!(truncate("hi", 10), ("hi", 2));
/// ```
#[must_use]
pub fn truncate(line: &str, max_cols: usize) -> (&str, usize) {
    let mut used = 0;
    let mut end = 0;

    for (idx, grapheme) in line.grapheme_indices(true) {
        let w = line_width(grapheme);
        if used + w > max_cols {
            break;
        }
        used += w;
        end = idx + grapheme.len();
    }

    (&line[..end], used)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── char_width / line_width ─────────────────────────────────────────

    #[test]
    fn ascii_is_one_column_each() {
        assert_eq!(line_width("abc"), 3);
    }

    #[test]
    fn empty_line_is_zero() {
        assert_eq!(line_width(""), 0);
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(line_width("日本"), 4);
        assert_eq!(line_width("a日b"), 4);
    }

    #[test]
    fn combining_marks_are_zero_width() {
        // "é" as e + COMBINING ACUTE ACCENT
        assert_eq!(line_width("e\u{301}"), 1);
    }

    #[test]
    fn emoji_presentation_selector_is_wide() {
        assert_eq!(char_width('❤'), 1);
        assert_eq!(line_width("❤\u{fe0f}"), 2);
        assert_eq!(line_width("a❤\u{fe0f}b"), 4);
    }

    #[test]
    fn zwj_family_is_one_wide_glyph() {
        assert_eq!(line_width("👨\u{200d}👩\u{200d}👧"), 2);
    }

    #[test]
    fn control_chars_are_zero_width() {
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\u{7}'), 0);
    }

    #[test]
    fn box_glyphs_are_single_width() {
        assert_eq!(line_width("╭─╮"), 3);
        assert_eq!(line_width("░░"), 2);
    }

    // ── max_width ───────────────────────────────────────────────────────

    #[test]
    fn max_width_picks_widest_by_display_width() {
        // "中中" is 2 chars but 4 columns; "abc" is 3 chars and 3 columns.
        assert_eq!(max_width(["abc", "中中"]), 4);
    }

    #[test]
    fn max_width_accepts_owned_strings() {
        let lines = vec![String::from("x"), String::from("xyz")];
        assert_eq!(max_width(&lines), 3);
    }

    #[test]
    fn max_width_of_nothing_is_zero() {
        assert_eq!(max_width::<_, &str>([]), 0);
    }

    // ── truncate ────────────────────────────────────────────────────────

    #[test]
    fn truncate_shorter_line_is_untouched() {
        assert_eq!(truncate("abc", 5), ("abc", 3));
    }

    #[test]
    fn truncate_exact_fit() {
        assert_eq!(truncate("abc", 3), ("abc", 3));
    }

    #[test]
    fn truncate_to_zero() {
        assert_eq!(truncate("abc", 0), ("", 0));
    }

    #[test]
    fn truncate_stops_before_straddling_wide_glyph() {
        assert_eq!(truncate("中文", 3), ("中", 2));
        assert_eq!(truncate("中文", 1), ("", 0));
    }

    #[test]
    fn truncate_does_not_split_emoji_sequence() {
        assert_eq!(truncate("❤\u{fe0f}x", 1), ("", 0));
        assert_eq!(truncate("❤\u{fe0f}x", 2), ("❤\u{fe0f}", 2));
    }

    #[test]
    fn truncate_keeps_combining_mark_with_base() {
        let (prefix, w) = truncate("e\u{301}x", 1);
        assert_eq!(prefix, "e\u{301}");
        assert_eq!(w, 1);
    }
}
