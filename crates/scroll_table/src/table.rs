//! The scrollable, editable table component.
//!
//! [`ScrollTable`] owns a [`Grid`] and everything needed to show part of it:
//! the cursor cell, the scroll offsets, and the edit state. Hosts feed it
//! keys with [`ScrollTable::update`] and draw [`ScrollTable::view`].
//!
//! # Example
//!
//! ```rust
//! use scroll_table::column::DropdownOptions;
//! use scroll_table::{ColumnKind, KeyMsg, KeyType, Outcome, ScrollTable};
//!
//! let mut table = ScrollTable::new(
//!     vec!["Name", "Status"],
//!     vec![vec!["Alice", "Active"], vec!["Bob", "Inactive"]],
//! )
//! .column_kinds([ColumnKind::Editable, ColumnKind::Dropdown])
//! .dropdown_options(DropdownOptions::new().with(1, ["Active", "Inactive", "Pending"]));
//!
//! let key = |kt| KeyMsg::from_type(kt);
//! table.update(&key(KeyType::Right));
//! table.update(&key(KeyType::Enter));
//! table.update(&key(KeyType::Down));
//! match table.update(&key(KeyType::Enter)) {
//!     Outcome::Committed(change) => assert_eq!(change.new, "Inactive"),
//!     other => panic!("unexpected outcome {other:?}"),
//! }
//! assert_eq!(table.cell_value(0, 1).as_deref(), Some("Inactive"));
//! ```

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use crate::binding::{Binding, matches_one};
use crate::column::{ColumnKind, ColumnKinds, DropdownOptions};
use crate::config::TableConfig;
use crate::dropdown::DropdownCell;
use crate::editor::EditableCell;
use crate::error::Result;
use crate::grid::Grid;
use crate::key::KeyMsg;
use crate::keymap::KeyMap;
use crate::render::Line;
use crate::style::{Palette, Styles};
use crate::text::{clip, display_width, fit, single_line};
use crate::viewport::{self, CELL_PADDING, HEADER_HEIGHT, ScrollState};

/// Most options shown at once in the dropdown popup.
pub const POPUP_MAX_HEIGHT: usize = 8;

/// A saved cell edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellChange {
    /// Row of the edited cell.
    pub row: usize,
    /// Column of the edited cell.
    pub col: usize,
    /// Value before the edit.
    pub old: String,
    /// Value after the edit.
    pub new: String,
}

impl CellChange {
    /// Returns true if the value actually changed.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.old != self.new
    }
}

/// What the table did with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The key was used.
    Consumed,
    /// The key was not used; the host may handle it.
    Ignored,
    /// The key saved an edit.
    Committed(CellChange),
    /// The user asked to quit.
    Quit,
}

impl Outcome {
    /// Returns true if the table did not use the key.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Whether a cell is being edited, and how.
#[derive(Debug, Clone, Default)]
pub enum EditState {
    /// Navigating.
    #[default]
    Idle,
    /// Typing into an editable cell.
    Editing(EditableCell),
    /// Choosing from an open dropdown.
    Choosing(DropdownCell),
}

impl EditState {
    /// Returns true when no cell is being edited.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A snapshot of the table for hosts and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    /// Column headers.
    pub headers: Vec<String>,
    /// All rows.
    pub data: Vec<Vec<String>>,
    /// `(rows, columns)`.
    pub dimensions: (usize, usize),
    /// Cursor `(row, column)`.
    pub current_position: (usize, usize),
    /// Kind of every column.
    pub column_types: ColumnKinds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Up,
    Down,
    Left,
    Right,
    HalfPageUp,
    HalfPageDown,
    RowStart,
    RowEnd,
    Top,
    Bottom,
    Activate,
    Quit,
}

/// A scrollable table whose cells can be text, editable, or dropdowns.
#[derive(Debug, Clone)]
pub struct ScrollTable {
    /// Navigation key bindings.
    pub key_map: KeyMap,
    /// Rendering styles.
    pub styles: Styles,
    grid: Grid,
    kinds: ColumnKinds,
    options: DropdownOptions,
    widths: Vec<usize>,
    max_width: usize,
    max_height: usize,
    row: usize,
    col: usize,
    scroll: ScrollState,
    edit: EditState,
    focus: bool,
}

impl ScrollTable {
    /// Creates a focused table of text columns.
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: ToString,
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: ToString,
    {
        Self::from_grid(Grid::new(headers, rows))
    }

    /// Creates a focused table of text columns over an existing grid.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        let widths = grid.column_widths();
        Self {
            key_map: KeyMap::default(),
            styles: Styles::default(),
            grid,
            kinds: ColumnKinds::new(),
            options: DropdownOptions::new(),
            widths,
            max_width: viewport::DEFAULT_WIDTH,
            max_height: viewport::DEFAULT_HEIGHT,
            row: 0,
            col: 0,
            scroll: ScrollState::new(),
            edit: EditState::Idle,
            focus: true,
        }
    }

    /// Creates a table over `grid` configured by `config`.
    ///
    /// # Errors
    /// Returns an error if the configuration does not validate.
    pub fn from_config(grid: Grid, config: &TableConfig) -> Result<Self> {
        config.validate()?;
        let table = Self::from_grid(grid)
            .max_width(config.max_width)
            .max_height(config.max_height)
            .column_kinds(config.column_kinds()?)
            .dropdown_options(config.dropdown_options()?)
            .styles(config.styles()?);

        let columns = table.grid.column_count();
        for (col, kind) in table.kinds.iter() {
            if col >= columns {
                warn!(col, columns, "column type set for a column that does not exist");
            } else if kind == ColumnKind::Dropdown && table.options.get(col).is_empty() {
                warn!(col, "dropdown column has no options and cannot be opened");
            }
        }
        Ok(table)
    }

    /// Sets the available width (builder pattern). Zero means the default.
    #[must_use]
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self.ensure_visible();
        self
    }

    /// Sets the available height including the header (builder pattern).
    /// Zero means the default.
    #[must_use]
    pub fn max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self.ensure_visible();
        self
    }

    /// Sets the column kinds (builder pattern).
    #[must_use]
    pub fn column_kinds(mut self, kinds: impl Into<ColumnKinds>) -> Self {
        self.kinds = kinds.into();
        self
    }

    /// Sets the dropdown options (builder pattern).
    #[must_use]
    pub fn dropdown_options(mut self, options: DropdownOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the styles (builder pattern).
    #[must_use]
    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the styles from a palette (builder pattern).
    ///
    /// # Errors
    /// Returns [`TableError::InvalidColor`](crate::TableError::InvalidColor)
    /// if a palette color does not parse.
    pub fn palette(mut self, palette: &Palette) -> Result<Self> {
        self.styles = Styles::from_palette(palette)?;
        Ok(self)
    }

    /// Sets the key bindings (builder pattern).
    #[must_use]
    pub fn key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Sets the focus state (builder pattern).
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focus = focused;
        self
    }

    // ---- state ----

    /// Focuses the table.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Blurs the table. A blurred table ignores every key.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Returns true if the table is focused.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focus
    }

    /// Cursor `(row, column)`.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Scroll offsets.
    #[must_use]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Available `(width, height)` as last set.
    #[must_use]
    pub fn size(&self) -> (usize, usize) {
        (self.max_width, self.max_height)
    }

    /// Content width of every column.
    #[must_use]
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    /// Columns that currently fit, left to right.
    #[must_use]
    pub fn visible_columns(&self) -> Vec<usize> {
        viewport::visible_columns(
            &self.widths,
            self.scroll.horizontal_offset,
            viewport::effective_width(self.max_width),
        )
    }

    /// Returns true while a cell is being edited or a dropdown is open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        !self.edit.is_idle()
    }

    /// Current edit state.
    #[must_use]
    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// Kind of column `col`.
    #[must_use]
    pub fn column_kind(&self, col: usize) -> ColumnKind {
        self.kinds.get(col)
    }

    /// Dropdown options of column `col`.
    #[must_use]
    pub fn dropdown_options_for(&self, col: usize) -> &[String] {
        self.options.get(col)
    }

    // ---- data access ----

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Column headers.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        self.grid.headers()
    }

    /// Copy of every row.
    #[must_use]
    pub fn all_data(&self) -> Vec<Vec<String>> {
        self.grid.to_rows()
    }

    /// Copy of one row.
    #[must_use]
    pub fn row_data(&self, row: usize) -> Option<Vec<String>> {
        self.grid.row(row).map(<[String]>::to_vec)
    }

    /// Copy of one cell.
    #[must_use]
    pub fn cell_value(&self, row: usize, col: usize) -> Option<String> {
        self.grid.cell(row, col).map(str::to_string)
    }

    /// Snapshot of headers, data, size, cursor, and column kinds.
    #[must_use]
    pub fn table_info(&self) -> TableInfo {
        let columns = self.grid.column_count();
        TableInfo {
            headers: self.grid.headers().to_vec(),
            data: self.all_data(),
            dimensions: (self.grid.row_count(), columns),
            current_position: self.cursor(),
            column_types: self.kinds.filled(columns),
        }
    }

    /// Overwrites a cell as if it had been edited.
    ///
    /// An edit in progress on that cell is abandoned.
    ///
    /// # Errors
    /// Returns [`TableError::CellOutOfRange`](crate::TableError::CellOutOfRange)
    /// if the cell does not exist.
    pub fn set_cell_value(
        &mut self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<CellChange> {
        let change = self.write_cell(row, col, value.into())?;
        if (row, col) == self.cursor() {
            self.edit = EditState::Idle;
        }
        Ok(change)
    }

    /// Moves the cursor, clamped to the grid, and scrolls it into view.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.edit = EditState::Idle;
        self.row = row.min(self.last_row());
        self.col = col.min(self.last_col());
        self.ensure_visible();
    }

    /// Replaces every row. The cursor is clamped and any edit abandoned.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.grid.set_rows(rows);
        self.widths = self.grid.column_widths();
        self.edit = EditState::Idle;
        self.row = self.row.min(self.last_row());
        self.ensure_visible();
        debug!(rows = self.grid.row_count(), "rows replaced");
    }

    /// Adopts the space the host has available.
    pub fn set_size(&mut self, width: usize, height: usize) {
        if width == self.max_width && height == self.max_height {
            return;
        }
        self.max_width = width;
        self.max_height = height;
        self.ensure_visible();
        debug!(width, height, "table resized");
    }

    // ---- update ----

    /// Handles a key.
    pub fn update(&mut self, key: &KeyMsg) -> Outcome {
        if !self.focus {
            return Outcome::Ignored;
        }
        match &mut self.edit {
            EditState::Idle => {}
            EditState::Editing(editor) => {
                if matches_one(key, &self.key_map.cancel) {
                    return self.cancel_edit();
                }
                if matches_one(key, &self.key_map.activate) {
                    let value = editor.committed_value();
                    return self.commit(value);
                }
                return if editor.update(key) {
                    Outcome::Consumed
                } else {
                    Outcome::Ignored
                };
            }
            EditState::Choosing(dropdown) => {
                if matches_one(key, &self.key_map.cancel) {
                    return self.cancel_edit();
                }
                if matches_one(key, &self.key_map.activate) {
                    let value = dropdown.value().to_string();
                    return self.commit(value);
                }
                return if dropdown.update(key) {
                    Outcome::Consumed
                } else {
                    Outcome::Ignored
                };
            }
        }

        match self.action_for(key) {
            None => Outcome::Ignored,
            Some(Action::Activate) => self.activate(),
            Some(Action::Quit) => {
                debug!("quit requested");
                Outcome::Quit
            }
            Some(action) => {
                self.move_cursor(action);
                Outcome::Consumed
            }
        }
    }

    fn action_for(&self, key: &KeyMsg) -> Option<Action> {
        let km = &self.key_map;
        let bindings: [(&Binding, Action); 12] = [
            (&km.up, Action::Up),
            (&km.down, Action::Down),
            (&km.left, Action::Left),
            (&km.right, Action::Right),
            (&km.half_page_up, Action::HalfPageUp),
            (&km.half_page_down, Action::HalfPageDown),
            (&km.row_start, Action::RowStart),
            (&km.row_end, Action::RowEnd),
            (&km.goto_top, Action::Top),
            (&km.goto_bottom, Action::Bottom),
            (&km.activate, Action::Activate),
            (&km.quit, Action::Quit),
        ];
        bindings
            .into_iter()
            .find(|(binding, _)| matches_one(key, binding))
            .map(|(_, action)| action)
    }

    fn last_row(&self) -> usize {
        self.grid.row_count().saturating_sub(1)
    }

    fn last_col(&self) -> usize {
        self.grid.column_count().saturating_sub(1)
    }

    fn move_cursor(&mut self, action: Action) {
        let (row, col) = (self.row, self.col);
        let half = viewport::half_page(self.max_height);
        let (row, col) = match action {
            Action::Up => (row.saturating_sub(1), col),
            Action::Down => ((row + 1).min(self.last_row()), col),
            Action::Left => (row, col.saturating_sub(1)),
            Action::Right => (row, (col + 1).min(self.last_col())),
            Action::RowStart => (row, 0),
            Action::RowEnd => (row, self.last_col()),
            Action::Top => (0, col),
            Action::Bottom => (self.last_row(), col),
            Action::HalfPageUp => {
                self.scroll.vertical_offset = self.scroll.vertical_offset.saturating_sub(half);
                (row.saturating_sub(half), col)
            }
            Action::HalfPageDown => {
                let max_offset =
                    ScrollState::max_vertical_offset(self.grid.row_count(), self.max_height);
                self.scroll.vertical_offset = (self.scroll.vertical_offset + half).min(max_offset);
                ((row + half).min(self.last_row()), col)
            }
            Action::Activate | Action::Quit => return,
        };
        self.row = row;
        self.col = col;
        self.ensure_visible();
        debug!(
            row,
            col,
            vertical_offset = self.scroll.vertical_offset,
            horizontal_offset = self.scroll.horizontal_offset,
            "cursor moved"
        );
    }

    fn ensure_visible(&mut self) {
        self.scroll.ensure_visible(
            self.row,
            self.col,
            &self.widths,
            viewport::effective_width(self.max_width),
            self.max_height,
        );
    }

    fn activate(&mut self) -> Outcome {
        let (row, col) = (self.row, self.col);
        let Some(value) = self.grid.cell(row, col) else {
            debug!(row, col, "no cell under cursor");
            return Outcome::Consumed;
        };
        match self.kinds.get(col) {
            ColumnKind::Text => debug!(row, col, "cell is read-only"),
            ColumnKind::Editable => {
                self.edit = EditState::Editing(EditableCell::new(value));
                debug!(row, col, "editing started");
            }
            ColumnKind::Dropdown => {
                let options = self.options.get(col);
                if options.is_empty() {
                    warn!(col, "dropdown column has no options");
                } else {
                    let dropdown = DropdownCell::new(value, options.to_vec()).expanded();
                    self.edit = EditState::Choosing(dropdown);
                    debug!(row, col, "dropdown opened");
                }
            }
        }
        Outcome::Consumed
    }

    fn cancel_edit(&mut self) -> Outcome {
        self.edit = EditState::Idle;
        debug!(row = self.row, col = self.col, "edit cancelled");
        Outcome::Consumed
    }

    fn commit(&mut self, value: String) -> Outcome {
        self.edit = EditState::Idle;
        match self.write_cell(self.row, self.col, value) {
            Ok(change) => Outcome::Committed(change),
            Err(err) => {
                warn!(%err, "edit could not be saved");
                Outcome::Consumed
            }
        }
    }

    fn write_cell(&mut self, row: usize, col: usize, value: String) -> Result<CellChange> {
        let old = self.grid.set_cell(row, col, value.clone())?;
        self.widths = self.grid.column_widths();
        self.ensure_visible();
        info!(row, col, old = %old, new = %value, "cell updated");
        Ok(CellChange {
            row,
            col,
            old,
            new: value,
        })
    }

    // ---- view ----

    /// Renders the header and the visible rows.
    ///
    /// Every cell is its value clipped to the column width plus two spaces.
    /// Lines never exceed the available width.
    #[must_use]
    pub fn view(&self) -> String {
        let width = viewport::effective_width(self.max_width);
        let visible = self.visible_columns();
        if visible.is_empty() {
            return String::new();
        }

        let mut lines = Vec::new();
        let mut header = Line::new();
        for &col in &visible {
            header.push(cell_text(&self.grid.headers()[col], self.widths[col]), self.styles.header);
        }
        lines.push(header);

        let first = self.scroll.vertical_offset;
        let last = (first + viewport::data_height(self.max_height)).min(self.grid.row_count());
        let mut cursor_x = None;
        for row in first..last {
            let mut line = Line::new();
            for &col in &visible {
                if (row, col) == (self.row, self.col) {
                    cursor_x = Some(line.width());
                    self.push_cursor_cell(&mut line, width);
                } else {
                    let value = self.grid.cell(row, col).unwrap_or("");
                    line.push(cell_text(value, self.widths[col]), self.styles.cell);
                }
            }
            lines.push(line);
        }

        if let (EditState::Choosing(dropdown), Some(x)) = (&self.edit, cursor_x) {
            self.overlay_popup(&mut lines, dropdown, x);
        }
        for line in &mut lines {
            line.truncate(width);
        }
        trace!(rows = last - first, columns = visible.len(), "table rendered");
        lines.iter().map(Line::render).collect::<Vec<_>>().join("\n")
    }

    fn push_cursor_cell(&self, line: &mut Line, width: usize) {
        let content_width = self.widths[self.col];
        let slot = (content_width + CELL_PADDING).min(width.saturating_sub(line.width()));
        match &self.edit {
            EditState::Editing(editor) => {
                let (before, cursor, after) = editor.layout(slot);
                line.push(before, self.styles.editing);
                line.push(cursor, self.styles.cursor);
                line.push(after, self.styles.editing);
            }
            EditState::Choosing(dropdown) => {
                line.push(fit(&dropdown.compact_view(), slot), self.styles.editing);
            }
            EditState::Idle => {
                let value = self.grid.cell(self.row, self.col).unwrap_or("");
                line.push(cell_text(value, content_width), self.styles.selected);
            }
        }
    }

    /// Draws the open dropdown's options under the cursor cell, or above it
    /// when there is more room there.
    fn overlay_popup(&self, lines: &mut Vec<Line>, dropdown: &DropdownCell, x: usize) {
        let data_height = viewport::data_height(self.max_height);
        let cursor_line = self.row.saturating_sub(self.scroll.vertical_offset);
        let below = data_height.saturating_sub(cursor_line + 1);
        let above = cursor_line;
        let wanted = dropdown.options().len().min(POPUP_MAX_HEIGHT);
        let (top, height) = if below >= wanted || below >= above {
            (cursor_line + 1, wanted.min(below))
        } else {
            let height = wanted.min(above);
            (cursor_line - height, height)
        };
        if height == 0 {
            return;
        }

        let room = viewport::effective_width(self.max_width)
            .saturating_sub(x)
            .saturating_sub(2);
        let inner = dropdown
            .options()
            .iter()
            .map(|o| display_width(o))
            .max()
            .unwrap_or(0)
            .min(room);
        for (i, (option, selected)) in dropdown.popup_lines(height).into_iter().enumerate() {
            let index = HEADER_HEIGHT + top + i;
            while lines.len() <= index {
                lines.push(Line::new());
            }
            let style = if selected {
                self.styles.popup_selected
            } else {
                self.styles.popup
            };
            let mut entry = Line::new();
            entry.push(format!(" {} ", fit(option, inner)), style);
            lines[index].overlay(x, entry);
        }
    }

    /// One line of key help for the current mode.
    #[must_use]
    pub fn help_view(&self) -> String {
        match &self.edit {
            EditState::Idle => KeyMap::help_line(&self.key_map.short_help()),
            EditState::Editing(_) => format!(
                "{} save • {} cancel",
                self.key_map.activate.get_help().key,
                self.key_map.cancel.get_help().key
            ),
            EditState::Choosing(dropdown) => {
                let km = &dropdown.key_map;
                KeyMap::help_line(&[&km.prev, &km.next, &km.toggle, &km.cancel])
            }
        }
    }
}

/// A cell value clipped to `width` and padded to `width + CELL_PADDING`.
fn cell_text(value: &str, width: usize) -> String {
    fit(&clip(&single_line(value), width), width + CELL_PADDING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyType;
    use crate::TableError;

    fn key(kt: KeyType) -> KeyMsg {
        KeyMsg::from_type(kt)
    }

    fn press(table: &mut ScrollTable, kt: KeyType, times: usize) {
        for _ in 0..times {
            table.update(&key(kt));
        }
    }

    fn people() -> ScrollTable {
        ScrollTable::new(
            ["Name", "Age", "City", "Status"],
            [
                ["Alice", "25", "New York", "Active"],
                ["Bob", "30", "Los Angeles", "Inactive"],
                ["Charlie", "35", "Chicago", "Pending"],
            ],
        )
        .column_kinds([
            ColumnKind::Editable,
            ColumnKind::Editable,
            ColumnKind::Text,
            ColumnKind::Dropdown,
        ])
        .dropdown_options(DropdownOptions::new().with(3, ["Active", "Inactive", "Pending"]))
        .styles(Styles::plain())
    }

    fn numbered(rows: usize) -> ScrollTable {
        ScrollTable::new(
            ["ID", "Value"],
            (0..rows).map(|i| vec![i.to_string(), format!("Item {i}")]),
        )
        .styles(Styles::plain())
    }

    fn lines(table: &ScrollTable) -> Vec<String> {
        table.view().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_new_defaults() {
        let table = people();
        assert_eq!(table.cursor(), (0, 0));
        assert!(table.is_focused());
        assert!(!table.is_editing());
        assert_eq!(table.size(), (80, 20));
        assert_eq!(table.column_widths(), [7, 3, 11, 8]);
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut table = people();
        assert_eq!(table.update(&key(KeyType::Up)), Outcome::Consumed);
        assert_eq!(table.cursor(), (0, 0));
        press(&mut table, KeyType::Right, 5);
        assert_eq!(table.cursor(), (0, 3));
        press(&mut table, KeyType::Down, 5);
        assert_eq!(table.cursor(), (2, 3));
        table.update(&key(KeyType::Home));
        assert_eq!(table.cursor(), (2, 0));
        table.update(&key(KeyType::End));
        assert_eq!(table.cursor(), (2, 3));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut table = people();
        assert!(table.update(&KeyMsg::from_char('x')).is_ignored());
    }

    #[test]
    fn test_quit_only_when_idle() {
        let mut table = people();
        assert_eq!(table.update(&KeyMsg::from_char('q')), Outcome::Quit);

        table.update(&key(KeyType::Enter));
        assert_eq!(table.update(&KeyMsg::from_char('q')), Outcome::Consumed);
        match table.edit_state() {
            EditState::Editing(editor) => assert_eq!(editor.value(), "Aliceq"),
            other => panic!("expected editing, got {other:?}"),
        }
    }

    #[test]
    fn test_blurred_table_ignores_keys() {
        let mut table = people().focused(false);
        assert!(table.update(&key(KeyType::Down)).is_ignored());
        assert_eq!(table.cursor(), (0, 0));
        table.focus();
        table.update(&key(KeyType::Down));
        assert_eq!(table.cursor(), (1, 0));
        table.blur();
        assert!(!table.is_focused());
    }

    #[test]
    fn test_enter_on_text_cell_does_nothing() {
        let mut table = people();
        press(&mut table, KeyType::Right, 2);
        assert_eq!(table.update(&key(KeyType::Enter)), Outcome::Consumed);
        assert!(!table.is_editing());
    }

    #[test]
    fn test_edit_and_commit() {
        let mut table = people();
        table.update(&key(KeyType::Enter));
        assert!(table.is_editing());
        for c in "andria".chars() {
            table.update(&KeyMsg::from_char(c));
        }
        let outcome = table.update(&key(KeyType::Enter));
        assert_eq!(
            outcome,
            Outcome::Committed(CellChange {
                row: 0,
                col: 0,
                old: "Alice".into(),
                new: "Aliceandria".into(),
            })
        );
        assert!(!table.is_editing());
        assert_eq!(table.cell_value(0, 0).as_deref(), Some("Aliceandria"));
        assert_eq!(table.column_widths()[0], 11);
    }

    #[test]
    fn test_commit_unchanged_value_still_reports() {
        let mut table = people();
        table.update(&key(KeyType::Enter));
        match table.update(&key(KeyType::Enter)) {
            Outcome::Committed(change) => assert!(!change.is_modified()),
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[test]
    fn test_commit_untouched_multiline_cell_keeps_value() {
        let mut table = ScrollTable::new(["Notes"], [["line one\nline two"]])
            .column_kinds([ColumnKind::Editable]);
        table.update(&key(KeyType::Enter));
        match table.update(&key(KeyType::Enter)) {
            Outcome::Committed(change) => {
                assert!(!change.is_modified());
                assert_eq!(change.new, "line one\nline two");
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert_eq!(table.cell_value(0, 0).as_deref(), Some("line one\nline two"));
    }

    #[test]
    fn test_edit_cancel_keeps_value() {
        let mut table = people();
        table.update(&key(KeyType::Enter));
        press(&mut table, KeyType::Backspace, 3);
        assert_eq!(table.update(&key(KeyType::Esc)), Outcome::Consumed);
        assert!(!table.is_editing());
        assert_eq!(table.cell_value(0, 0).as_deref(), Some("Alice"));
    }

    #[test]
    fn test_editing_passes_on_unused_keys() {
        let mut table = people();
        table.update(&key(KeyType::Enter));
        assert!(table.update(&key(KeyType::Up)).is_ignored());
        assert!(table.update(&key(KeyType::PgDown)).is_ignored());
        assert!(table.is_editing());
        assert_eq!(table.cursor(), (0, 0));
    }

    #[test]
    fn test_dropdown_select() {
        let mut table = people();
        table.update(&key(KeyType::End));
        table.update(&key(KeyType::Enter));
        assert!(matches!(table.edit_state(), EditState::Choosing(_)));
        assert_eq!(table.update(&key(KeyType::Down)), Outcome::Consumed);
        match table.update(&key(KeyType::Enter)) {
            Outcome::Committed(change) => {
                assert_eq!((change.row, change.col), (0, 3));
                assert_eq!(change.old, "Active");
                assert_eq!(change.new, "Inactive");
            }
            other => panic!("expected commit, got {other:?}"),
        }
        assert!(!table.is_editing());
    }

    #[test]
    fn test_dropdown_cancel() {
        let mut table = people();
        table.update(&key(KeyType::End));
        table.update(&key(KeyType::Enter));
        press(&mut table, KeyType::Down, 2);
        table.update(&key(KeyType::Esc));
        assert!(!table.is_editing());
        assert_eq!(table.cell_value(0, 3).as_deref(), Some("Active"));
    }

    #[test]
    fn test_dropdown_without_options_stays_closed() {
        let mut table = people().dropdown_options(DropdownOptions::new());
        table.update(&key(KeyType::End));
        assert_eq!(table.update(&key(KeyType::Enter)), Outcome::Consumed);
        assert!(!table.is_editing());
    }

    #[test]
    fn test_ragged_row_cell_cannot_be_edited() {
        let mut table = ScrollTable::new(["A", "B"], [vec!["1", "2"], vec!["3"]])
            .column_kinds([ColumnKind::Editable, ColumnKind::Editable]);
        table.set_cursor(1, 1);
        assert_eq!(table.update(&key(KeyType::Enter)), Outcome::Consumed);
        assert!(!table.is_editing());
    }

    #[test]
    fn test_ragged_rows_render_padding_and_hide_extra_cells() {
        let table = ScrollTable::new(["A", "B"], [vec!["1", "2", "HIDDEN"], vec!["3"]])
            .styles(Styles::plain());
        assert_eq!(table.view(), "A  B  \n1  2  \n3     ");
        assert_eq!(table.column_widths(), [1, 1]);
        // Extra cells stay in the data.
        assert_eq!(table.row_data(0).unwrap(), ["1", "2", "HIDDEN"]);
        assert_eq!(table.cell_value(0, 2).as_deref(), Some("HIDDEN"));
    }

    #[test]
    fn test_half_page_scrolling() {
        let mut table = numbered(35);
        table.update(&key(KeyType::PgDown));
        assert_eq!(table.cursor(), (10, 0));
        assert_eq!(table.scroll().vertical_offset, 10);

        table.update(&key(KeyType::PgDown));
        assert_eq!(table.cursor(), (20, 0));
        assert_eq!(table.scroll().vertical_offset, 16);

        press(&mut table, KeyType::PgDown, 2);
        assert_eq!(table.cursor(), (34, 0));
        assert_eq!(table.scroll().vertical_offset, 16);

        table.update(&key(KeyType::PgUp));
        assert_eq!(table.cursor(), (24, 0));
        assert_eq!(table.scroll().vertical_offset, 6);

        press(&mut table, KeyType::PgUp, 3);
        assert_eq!(table.cursor(), (0, 0));
        assert_eq!(table.scroll().vertical_offset, 0);
    }

    #[test]
    fn test_goto_bottom_and_top() {
        let mut table = numbered(35);
        table.update(&key(KeyType::CtrlEnd));
        assert_eq!(table.cursor(), (34, 0));
        assert_eq!(table.scroll().vertical_offset, 16);
        table.update(&key(KeyType::CtrlHome));
        assert_eq!(table.cursor(), (0, 0));
        assert_eq!(table.scroll().vertical_offset, 0);
    }

    #[test]
    fn test_down_scrolls_one_row_at_a_time() {
        let mut table = numbered(10).max_height(4);
        press(&mut table, KeyType::Down, 3);
        assert_eq!(table.cursor(), (3, 0));
        assert_eq!(table.scroll().vertical_offset, 1);
    }

    #[test]
    fn test_view_plain() {
        let table = people();
        let lines = lines(&table);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Name     Age  City         Status    ");
        assert_eq!(lines[1], "Alice    25   New York     Active    ");
        assert_eq!(lines[3], "Charlie  35   Chicago      Pending   ");
    }

    #[test]
    fn test_view_limits_rows_to_height() {
        let table = numbered(35).max_height(5);
        let lines = lines(&table);
        assert_eq!(lines.len(), 5);
        assert!(lines[4].starts_with("3 "));
    }

    #[test]
    fn test_view_scrolls_horizontally() {
        let mut table = people().max_width(20);
        assert_eq!(table.visible_columns(), vec![0, 1]);
        table.update(&key(KeyType::End));
        assert_eq!(table.scroll().horizontal_offset, 3);
        assert_eq!(table.visible_columns(), vec![3]);
        assert_eq!(lines(&table)[0], "Status    ");
    }

    #[test]
    fn test_view_clips_wide_column() {
        let table = ScrollTable::new(["Description"], [["A rather long description"]])
            .max_width(10)
            .styles(Styles::plain());
        let lines = lines(&table);
        assert_eq!(lines[0], "Descriptio");
        assert_eq!(lines[1], "A rather l");
    }

    #[test]
    fn test_view_shows_editor() {
        let mut table = people();
        table.update(&key(KeyType::Enter));
        assert!(lines(&table)[1].starts_with("Alice    25"));
        table.update(&KeyMsg::from_char('x'));
        assert!(lines(&table)[1].starts_with("Alicex   25"));
    }

    #[test]
    fn test_view_dropdown_popup() {
        let mut table = people();
        table.update(&key(KeyType::End));
        table.update(&key(KeyType::Enter));
        let lines = lines(&table);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("▶ Active"));
        assert_eq!(lines[2], "Bob      30   Los Angeles   Active   ");
        assert_eq!(lines[3], "Charlie  35   Chicago       Inactive ");
        assert_eq!(lines[4].trim(), "Pending");
        assert_eq!(display_width(&lines[4]), 37);
    }

    #[test]
    fn test_view_popup_opens_upwards_near_bottom() {
        let mut table = ScrollTable::new(["S"], (0..5).map(|_| ["Active"]))
            .column_kinds([ColumnKind::Dropdown])
            .dropdown_options(DropdownOptions::new().with(0, ["Active", "Inactive"]))
            .max_height(6)
            .styles(Styles::plain());
        table.update(&key(KeyType::CtrlEnd));
        table.update(&key(KeyType::Enter));
        let lines = lines(&table);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[3], " Active   ");
        assert_eq!(lines[4], " Inactive ");
    }

    #[test]
    fn test_view_empty_headers() {
        let table = ScrollTable::new(Vec::<String>::new(), Vec::<Vec<String>>::new());
        assert_eq!(table.view(), "");
    }

    #[test]
    fn test_set_size_rescrolls() {
        let mut table = people();
        table.update(&key(KeyType::End));
        assert_eq!(table.scroll().horizontal_offset, 0);
        table.set_size(20, 20);
        assert_eq!(table.scroll().horizontal_offset, 3);
        assert_eq!(table.size(), (20, 20));
    }

    #[test]
    fn test_set_cell_value() {
        let mut table = people();
        let change = table.set_cell_value(1, 2, "San Francisco").unwrap();
        assert_eq!(change.old, "Los Angeles");
        assert_eq!(table.column_widths()[2], 13);
        assert!(matches!(
            table.set_cell_value(9, 0, "x"),
            Err(TableError::CellOutOfRange { row: 9, col: 0 })
        ));
    }

    #[test]
    fn test_set_cell_value_during_edit() {
        let mut table = people();
        table.update(&key(KeyType::Enter));
        table.set_cell_value(1, 0, "Robert").unwrap();
        assert!(table.is_editing());
        assert_eq!(table.cell_value(1, 0).as_deref(), Some("Robert"));

        table.set_cell_value(0, 0, "Alicia").unwrap();
        assert!(!table.is_editing());
        assert_eq!(table.cell_value(0, 0).as_deref(), Some("Alicia"));
    }

    #[test]
    fn test_set_rows_clamps_cursor() {
        let mut table = numbered(35);
        table.update(&key(KeyType::CtrlEnd));
        table.set_rows(vec![vec!["0".into(), "Only".into()]]);
        assert_eq!(table.cursor(), (0, 0));
        assert_eq!(table.scroll().vertical_offset, 0);
        assert_eq!(table.column_widths(), [2, 5]);
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut table = people();
        table.set_cursor(10, 10);
        assert_eq!(table.cursor(), (2, 3));
    }

    #[test]
    fn test_data_access() {
        let table = people();
        assert_eq!(table.headers(), ["Name", "Age", "City", "Status"]);
        assert_eq!(table.all_data().len(), 3);
        assert_eq!(table.row_data(1).unwrap()[0], "Bob");
        assert!(table.row_data(3).is_none());
        assert_eq!(table.cell_value(2, 2).as_deref(), Some("Chicago"));
        assert!(table.cell_value(0, 9).is_none());
        assert_eq!(table.column_kind(3), ColumnKind::Dropdown);
        assert_eq!(table.column_kind(42), ColumnKind::Text);
        assert_eq!(table.dropdown_options_for(3).len(), 3);
        assert!(table.dropdown_options_for(0).is_empty());
    }

    #[test]
    fn test_table_info_serializes() {
        let mut table = people();
        table.update(&key(KeyType::Down));
        let info = table.table_info();
        assert_eq!(info.dimensions, (3, 4));
        assert_eq!(info.current_position, (1, 0));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["column_types"]["2"], "text");
        assert_eq!(json["column_types"]["3"], "dropdown");
        assert_eq!(json["data"][1][0], "Bob");
    }

    #[test]
    fn test_help_view_follows_mode() {
        let mut table = people();
        assert!(table.help_view().contains("enter edit"));
        table.update(&key(KeyType::Enter));
        assert_eq!(table.help_view(), "enter save • esc cancel");
        table.update(&key(KeyType::Esc));
        table.update(&key(KeyType::End));
        table.update(&key(KeyType::Enter));
        assert!(table.help_view().contains("enter select"));
    }
}
