#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Scroll Table
//!
//! A scrollable, editable table component for terminal applications.
//!
//! The table keeps a grid of string cells and mediates between that grid and
//! the terminal: it tracks the cursor cell, the scroll offsets, and whether a
//! cell is being edited, and renders whatever part of the grid fits the
//! available size.
//!
//! - **table** - The [`ScrollTable`] component itself
//! - **grid** - Headers, rows, and content-derived column widths
//! - **column** - Column kinds (text, editable, dropdown) and dropdown options
//! - **viewport** - Horizontal/vertical scroll bookkeeping
//! - **editor** - Inline single-line text editor
//! - **dropdown** - Enumerated-choice cell with a popup list
//! - **key** / **binding** / **keymap** - Key messages and configurable bindings
//! - **style** - Colors, palettes, and rendered styles
//! - **text** / **render** - Width-aware string helpers and styled lines
//! - **config** - TOML/JSON table configuration
//! - **program** - A small crossterm host loop for running components
//!
//! ## Example
//!
//! ```rust
//! use scroll_table::{ColumnKind, KeyMsg, KeyType, ScrollTable};
//!
//! let mut table = ScrollTable::new(
//!     vec!["Name", "Age"],
//!     vec![vec!["Alice", "25"], vec!["Bob", "30"]],
//! )
//! .column_kinds([ColumnKind::Editable, ColumnKind::Text]);
//!
//! table.update(&KeyMsg::from_type(KeyType::Down));
//! assert_eq!(table.cursor(), (1, 0));
//!
//! let view = table.view();
//! assert!(view.contains("Name"));
//! ```

pub mod binding;
pub mod column;
pub mod config;
pub mod dropdown;
pub mod editor;
pub mod error;
pub mod grid;
pub mod key;
pub mod keymap;
pub mod program;
pub mod render;
pub mod style;
pub mod table;
pub mod text;
pub mod viewport;

pub use column::{ColumnKind, ColumnKinds, DropdownOptions};
pub use config::TableConfig;
pub use error::{Result, TableError};
pub use grid::Grid;
pub use key::{KeyMsg, KeyType};
pub use table::{CellChange, Outcome, ScrollTable, TableInfo};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::binding::{Binding, Help as KeyHelp, matches, matches_one};
    pub use crate::column::{ColumnKind, ColumnKinds, ColumnKindsSpec, DropdownOptions};
    pub use crate::config::TableConfig;
    pub use crate::dropdown::DropdownCell;
    pub use crate::editor::EditableCell;
    pub use crate::error::{Result, TableError};
    pub use crate::grid::Grid;
    pub use crate::key::{KeyMsg, KeyType};
    pub use crate::keymap::KeyMap;
    pub use crate::program::{Control, Model, Msg, Program, ProgramError};
    pub use crate::style::{ColorMode, ColorPair, Palette, Style, Styles};
    pub use crate::table::{CellChange, EditState, Outcome, ScrollTable, TableInfo};
    pub use crate::viewport::ScrollState;
}
