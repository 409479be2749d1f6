//! Scroll bookkeeping for the table.
//!
//! The table scrolls by whole columns horizontally and whole rows vertically.
//! Each rendered column takes its content width plus [`CELL_PADDING`]
//! columns, and one line of the height is always reserved for the header.

use serde::Serialize;

/// Spaces appended after every cell value.
pub const CELL_PADDING: usize = 2;

/// Width used when no width has been set.
pub const DEFAULT_WIDTH: usize = 80;

/// Height used when no height has been set.
pub const DEFAULT_HEIGHT: usize = 20;

/// Lines reserved for the header row.
pub const HEADER_HEIGHT: usize = 1;

/// Treats a zero width as the default width.
#[must_use]
pub fn effective_width(width: usize) -> usize {
    if width == 0 { DEFAULT_WIDTH } else { width }
}

/// Treats a zero height as the default height.
#[must_use]
pub fn effective_height(height: usize) -> usize {
    if height == 0 { DEFAULT_HEIGHT } else { height }
}

/// Number of data rows that fit under the header. Always at least one.
#[must_use]
pub fn data_height(max_height: usize) -> usize {
    effective_height(max_height)
        .saturating_sub(HEADER_HEIGHT)
        .max(1)
}

/// Rows moved by a half-page scroll. Always at least one.
#[must_use]
pub fn half_page(max_height: usize) -> usize {
    (effective_height(max_height) / 2).max(1)
}

/// Columns that fit in `available_width` when scrolled to `offset`.
///
/// Columns are taken left to right while their padded widths still fit. When
/// not even the first column fits it is returned alone, to be clipped by the
/// renderer.
///
/// ```rust
/// use scroll_table::viewport::visible_columns;
///
/// // Padded widths are 7, 5 and 13.
/// let widths = [5, 3, 11];
/// assert_eq!(visible_columns(&widths, 0, 12), vec![0, 1]);
/// assert_eq!(visible_columns(&widths, 1, 12), vec![1]);
/// assert_eq!(visible_columns(&widths, 2, 12), vec![2]);
/// ```
#[must_use]
pub fn visible_columns(widths: &[usize], offset: usize, available_width: usize) -> Vec<usize> {
    let mut visible = Vec::new();
    let mut used = 0;
    for (col, width) in widths.iter().enumerate().skip(offset) {
        let padded = width + CELL_PADDING;
        if used + padded > available_width {
            break;
        }
        visible.push(col);
        used += padded;
    }
    if visible.is_empty() && offset < widths.len() {
        visible.push(offset);
    }
    visible
}

/// Horizontal (first visible column) and vertical (first visible row)
/// scroll offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollState {
    /// Index of the leftmost visible column.
    pub horizontal_offset: usize,
    /// Index of the topmost visible data row.
    pub vertical_offset: usize,
}

impl ScrollState {
    /// Creates a scroll state at the top-left corner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adjusts the offsets so the cell at `(row, col)` is visible.
    ///
    /// Scrolls up to a row above the window, or down just far enough to put a
    /// row below the window on its last line. A column left of the window
    /// becomes the first visible column; a column right of it becomes the
    /// last, with as many columns to its left as still fit.
    pub fn ensure_visible(
        &mut self,
        row: usize,
        col: usize,
        widths: &[usize],
        available_width: usize,
        max_height: usize,
    ) {
        let height = data_height(max_height);
        if row < self.vertical_offset {
            self.vertical_offset = row;
        } else if row >= self.vertical_offset + height {
            self.vertical_offset = row + 1 - height;
        }

        if col >= widths.len() {
            return;
        }
        let available_width = effective_width(available_width);
        if visible_columns(widths, self.horizontal_offset, available_width).contains(&col) {
            return;
        }
        if col < self.horizontal_offset {
            self.horizontal_offset = col;
        } else {
            let mut used = 0;
            let mut leftmost = col;
            for c in (0..=col).rev() {
                let padded = widths[c] + CELL_PADDING;
                if used + padded > available_width {
                    break;
                }
                used += padded;
                leftmost = c;
            }
            self.horizontal_offset = leftmost;
        }
    }

    /// Returns true if `row` lies inside the vertical window.
    #[must_use]
    pub fn row_visible(&self, row: usize, max_height: usize) -> bool {
        row >= self.vertical_offset && row < self.vertical_offset + data_height(max_height)
    }

    /// Largest vertical offset that still fills the window with rows.
    #[must_use]
    pub fn max_vertical_offset(row_count: usize, max_height: usize) -> usize {
        row_count.saturating_sub(data_height(max_height))
    }
}
