//! The table's data: headers, rows of string cells, and column widths.

use crate::error::{Result, TableError};
use crate::text::display_width;

/// Builds a row of cell strings from values of mixed types.
///
/// ```rust
/// use scroll_table::{Grid, grid_row};
///
/// let grid = Grid::new(["Name", "Age"], [grid_row!["Alice", 25], grid_row!["Bob", 30]]);
/// assert_eq!(grid.cell(1, 1), Some("30"));
/// ```
#[macro_export]
macro_rules! grid_row {
    ($($cell:expr),* $(,)?) => {
        ::std::vec![$(::std::string::ToString::to_string(&$cell)),*]
    };
}

/// Headers plus rows of cells.
///
/// Rows may be ragged. A row shorter than the header list simply has no value
/// for its trailing columns; cells past the last header are kept but never
/// displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Creates a grid from headers and rows of displayable values.
    ///
    /// ```rust
    /// use scroll_table::Grid;
    ///
    /// let grid = Grid::new(["Name", "Age"], [vec!["Alice".to_string(), 25.to_string()]]);
    /// assert_eq!(grid.cell(0, 1), Some("25"));
    /// ```
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: ToString,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: ToString,
    {
        Self {
            headers: headers.into_iter().map(|h| h.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    /// Returns the headers.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns all rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns a deep copy of all rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }

    /// Returns one row, if it exists.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Returns one cell, if both the row and the cell exist.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (the header count).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns true if the grid has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Overwrites a cell and returns its previous value.
    ///
    /// # Errors
    /// Returns [`TableError::CellOutOfRange`] if the row or the cell within
    /// the row does not exist.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> Result<String> {
        let cell = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(TableError::CellOutOfRange { row, col })?;
        Ok(std::mem::replace(cell, value.into()))
    }

    /// Replaces every row.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
    }

    /// Appends a row.
    pub fn push_row<I, C>(&mut self, row: I)
    where
        I: IntoIterator<Item = C>,
        C: ToString,
    {
        self.rows.push(row.into_iter().map(|c| c.to_string()).collect());
    }

    /// Removes a row and returns it.
    ///
    /// # Errors
    /// Returns [`TableError::RowOutOfRange`] if `row` does not exist.
    pub fn remove_row(&mut self, row: usize) -> Result<Vec<String>> {
        if row >= self.rows.len() {
            return Err(TableError::RowOutOfRange {
                row,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(row))
    }

    /// Width of each column: the widest of its header and its cells.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| display_width(cell))
                    .fold(display_width(header), usize::max)
            })
            .collect()
    }
}
