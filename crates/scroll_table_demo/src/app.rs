//! The demo application: a title line, the table, and a status line.

use scroll_table::prelude::*;
use scroll_table::text::{clip, display_width, fit};
use tracing::{debug, info};

const TITLE: &str = "ScrollTable Demo - Use arrow keys to navigate, Enter to edit, q to quit";

/// Lines used by the title and the status line.
const CHROME_HEIGHT: usize = 2;

/// Wraps a [`ScrollTable`] with a title and a status line.
#[derive(Debug, Clone)]
pub struct DemoApp {
    table: ScrollTable,
    status: String,
    width: usize,
    max_width: Option<usize>,
    max_height: Option<usize>,
    changes: Vec<CellChange>,
}

impl DemoApp {
    /// Creates the app around `table`.
    ///
    /// The table keeps its configured size until the first resize.
    #[must_use]
    pub fn new(table: ScrollTable) -> Self {
        let (width, _) = table.size();
        Self {
            table,
            status: "Ready".to_string(),
            width,
            max_width: None,
            max_height: None,
            changes: Vec::new(),
        }
    }

    /// Caps the table size below the terminal size.
    #[must_use]
    pub fn size_limits(mut self, max_width: Option<usize>, max_height: Option<usize>) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    /// The wrapped table.
    #[must_use]
    pub fn table(&self) -> &ScrollTable {
        &self.table
    }

    /// Consumes the app and returns the table.
    #[must_use]
    pub fn into_table(self) -> ScrollTable {
        self.table
    }

    /// The current status message.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Every commit made during the session, oldest first.
    #[must_use]
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Control {
        match self.table.update(key) {
            Outcome::Quit => return Control::Quit,
            Outcome::Committed(change) => {
                info!(
                    row = change.row,
                    col = change.col,
                    modified = change.is_modified(),
                    "cell committed"
                );
                self.status = if change.is_modified() {
                    format!(
                        "Saved ({}, {}): {:?} -> {:?}",
                        change.row, change.col, change.old, change.new
                    )
                } else {
                    format!("Unchanged ({}, {})", change.row, change.col)
                };
                self.changes.push(change);
            }
            Outcome::Consumed => self.status = self.describe_mode(),
            Outcome::Ignored => {}
        }
        Control::Continue
    }

    fn describe_mode(&self) -> String {
        let (row, col) = self.table.cursor();
        match self.table.edit_state() {
            EditState::Idle => format!("Row {} of {}", row + 1, self.table.grid().row_count()),
            EditState::Editing(_) => format!("Editing ({row}, {col})"),
            EditState::Choosing(_) => format!("Choosing ({row}, {col})"),
        }
    }

    fn centered(&self, text: &str) -> String {
        let text = clip(text, self.width);
        let pad = self.width.saturating_sub(display_width(&text)) / 2;
        fit(&format!("{}{text}", " ".repeat(pad)), self.width)
    }
}

impl Model for DemoApp {
    fn init(&mut self) {
        debug!(rows = self.table.grid().row_count(), "demo started");
    }

    fn update(&mut self, msg: Msg) -> Control {
        match msg {
            Msg::Key(key) => self.handle_key(&key),
            Msg::Paste(text) => {
                self.handle_key(&KeyMsg::from_runes(text.chars().collect()).with_paste())
            }
            Msg::Resize { width, height } => {
                let width = self.max_width.map_or(width, |max| width.min(max)).max(1);
                let height = height.saturating_sub(CHROME_HEIGHT).max(1);
                let height = self.max_height.map_or(height, |max| height.min(max));
                self.width = width;
                self.table.set_size(width, height);
                Control::Continue
            }
            Msg::Interrupt => Control::Quit,
        }
    }

    fn view(&self) -> String {
        let styles = &self.table.styles;
        let status = format!("Status: {}  |  {}", self.status, self.table.help_view());
        format!(
            "{}\n{}\n{}",
            styles.header.render(&self.centered(TITLE)),
            self.table.view(),
            styles.status.render(&self.centered(&status)),
        )
    }
}
