//! Styled lines built from plain-text spans.
//!
//! The table lays out plain text first and only applies ANSI styles when a
//! line is finished, so lines can still be measured, clipped, and overlaid
//! (the dropdown popup is drawn over the rows under its cell).

use crate::style::Style;
use crate::text::{display_width, split_at_width};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    text: String,
    style: Style,
}

/// One terminal line as a sequence of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    /// Creates an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` in `style`, merging with the previous span when the
    /// styles agree.
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.style == style {
                last.text.push_str(&text);
                return;
            }
        }
        self.spans.push(Span { text, style });
    }

    /// Width in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| display_width(&s.text)).sum()
    }

    /// Text without styles.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Splits the line at display column `at`.
    #[must_use]
    pub fn split(self, at: usize) -> (Self, Self) {
        let mut left = Self::new();
        let mut right = Self::new();
        let mut used = 0;
        for span in self.spans {
            let w = display_width(&span.text);
            if used >= at {
                right.push(span.text, span.style);
            } else if used + w <= at {
                left.push(span.text, span.style);
            } else {
                let (l, r) = split_at_width(&span.text, at - used);
                left.push(l, span.style);
                right.push(r, span.style);
            }
            used += w;
        }
        (left, right)
    }

    /// Clips the line to at most `width` columns.
    pub fn truncate(&mut self, width: usize) {
        if self.width() > width {
            let (left, _) = std::mem::take(self).split(width);
            *self = left;
        }
    }

    /// Draws `other` over this line starting at column `x`, padding with
    /// blanks first if the line is shorter than `x`.
    pub fn overlay(&mut self, x: usize, other: Self) {
        let current = self.width();
        if current < x {
            self.push(" ".repeat(x - current), Style::new());
        }
        let (mut left, rest) = std::mem::take(self).split(x);
        let (_, right) = rest.split(other.width());
        for span in other.spans.into_iter().chain(right.spans) {
            left.push(span.text, span.style);
        }
        *self = left;
    }

    /// Renders the spans with ANSI styles.
    #[must_use]
    pub fn render(&self) -> String {
        self.spans.iter().map(|s| s.style.render(&s.text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn line(parts: &[&str]) -> Line {
        let mut line = Line::new();
        for (i, part) in parts.iter().enumerate() {
            // Alternate styles so the spans stay separate.
            let style = if i % 2 == 0 {
                Style::new()
            } else {
                Style::new().fg(Color::Red)
            };
            line.push(*part, style);
        }
        line
    }

    #[test]
    fn test_push_merges_equal_styles() {
        let mut l = Line::new();
        l.push("ab", Style::new());
        l.push("cd", Style::new());
        l.push("", Style::new().bold());
        assert_eq!(l.spans.len(), 1);
        assert_eq!(l.plain(), "abcd");
    }

    #[test]
    fn test_split_inside_span() {
        let (left, right) = line(&["Alice  ", "25  "]).split(9);
        assert_eq!(left.plain(), "Alice  25");
        assert_eq!(right.plain(), "  ");
        assert_eq!(left.spans.len(), 2);
    }

    #[test]
    fn test_truncate() {
        let mut l = line(&["Name  ", "Age  "]);
        l.truncate(8);
        assert_eq!(l.plain(), "Name  Ag");
        l.truncate(20);
        assert_eq!(l.width(), 8);
    }

    #[test]
    fn test_overlay_replaces_columns() {
        let mut l = line(&["Bob    ", "30  ", "Chicago  "]);
        l.overlay(3, line(&[" Pending "]));
        assert_eq!(l.plain(), "Bob Pending hicago  ");
        assert_eq!(l.width(), 20);
    }

    #[test]
    fn test_overlay_past_end_pads() {
        let mut l = line(&["ab"]);
        l.overlay(4, line(&["xy"]));
        assert_eq!(l.plain(), "ab  xy");
    }

    #[test]
    fn test_render_plain_is_text() {
        let l = line(&["only"]);
        assert_eq!(l.render(), "only");
    }
}
