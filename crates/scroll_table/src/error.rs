//! Error types for table construction, editing, and configuration.

use thiserror::Error;

/// Errors produced by the table component and its configuration.
#[derive(Error, Debug)]
pub enum TableError {
    /// A cell address does not exist in the grid.
    ///
    /// Rows may be shorter than the header list, so a column that is valid
    /// for the table can still be out of range for a particular row.
    #[error("cell ({row}, {col}) is out of range")]
    CellOutOfRange {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
    },

    /// A row index does not exist in the grid.
    #[error("row {row} is out of range (table has {len} rows)")]
    RowOutOfRange {
        /// Requested row index.
        row: usize,
        /// Number of rows in the grid.
        len: usize,
    },

    /// A column kind name was not one of `text`, `editable`, or `dropdown`.
    #[error("unknown column kind {0:?} (expected text, editable, or dropdown)")]
    UnknownColumnKind(String),

    /// A color string could not be parsed.
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    /// A configuration value is out of its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A configuration could not be written as TOML.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// A JSON configuration could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file extension is not supported.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// A specialized [`Result`] type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TableError::CellOutOfRange { row: 3, col: 7 };
        assert_eq!(err.to_string(), "cell (3, 7) is out of range");

        let err = TableError::RowOutOfRange { row: 9, len: 2 };
        assert_eq!(err.to_string(), "row 9 is out of range (table has 2 rows)");

        let err = TableError::UnknownColumnKind("combo".into());
        assert!(err.to_string().contains("\"combo\""));
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(read(), Err(TableError::Io(_))));
    }
}
