//! Display-width aware string helpers.
//!
//! Widths are terminal columns, not bytes or chars: wide characters count
//! as two and combining marks as zero. Clipping never splits a grapheme.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Returns the number of terminal columns `s` occupies.
#[must_use]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Clips `s` to at most `width` columns.
#[must_use]
pub fn clip(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out
}

/// Clips `s` to `width` columns and pads it with spaces to exactly `width`.
#[must_use]
pub fn fit(s: &str, width: usize) -> String {
    let mut out = clip(s, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Shortens `s` to at most `max` columns, marking the cut with `...`.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max <= 3 {
        return clip("...", max);
    }
    let mut out = clip(s, max - 3);
    out.push_str("...");
    out
}

/// Splits `s` at display column `at`.
///
/// A wide grapheme straddling the cut is replaced by spaces on both sides so
/// the two halves still measure `at` and `width - at` columns.
#[must_use]
pub fn split_at_width(s: &str, at: usize) -> (String, String) {
    let mut left = String::new();
    let mut used = 0;
    let mut rest_start = s.len();
    for (idx, g) in s.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > at {
            rest_start = idx;
            break;
        }
        left.push_str(g);
        used += w;
    }
    let rest = &s[rest_start..];
    if used < at {
        if let Some(g) = rest.graphemes(true).next() {
            let w = UnicodeWidthStr::width(g);
            left.extend(std::iter::repeat_n(' ', at - used));
            let mut right: String = std::iter::repeat_n(' ', used + w - at).collect();
            right.push_str(&rest[g.len()..]);
            return (left, right);
        }
    }
    (left, rest.to_string())
}

/// Replaces line breaks and tabs with spaces and drops other control
/// characters so the text stays on a single line.
#[must_use]
pub fn single_line(s: &str) -> String {
    s.replace("\r\n", " ")
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
