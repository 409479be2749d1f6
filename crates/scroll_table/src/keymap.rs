//! Key bindings for table navigation and editing.

use crate::binding::Binding;

/// Key bindings used by [`ScrollTable`](crate::ScrollTable) when no cell is
/// being edited.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move up one row.
    pub up: Binding,
    /// Move down one row.
    pub down: Binding,
    /// Move left one column.
    pub left: Binding,
    /// Move right one column.
    pub right: Binding,
    /// Scroll and move up half a page.
    pub half_page_up: Binding,
    /// Scroll and move down half a page.
    pub half_page_down: Binding,
    /// Jump to the first column.
    pub row_start: Binding,
    /// Jump to the last column.
    pub row_end: Binding,
    /// Jump to the first row.
    pub goto_top: Binding,
    /// Jump to the last row.
    pub goto_bottom: Binding,
    /// Edit the cursor cell or open its dropdown.
    pub activate: Binding,
    /// Leave edit mode without saving.
    pub cancel: Binding,
    /// Ask the host to quit.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: Binding::new().keys(["up"]).help("↑", "up"),
            down: Binding::new().keys(["down"]).help("↓", "down"),
            left: Binding::new().keys(["left"]).help("←", "left"),
            right: Binding::new().keys(["right"]).help("→", "right"),
            half_page_up: Binding::new().keys(["pgup"]).help("pgup", "½ page up"),
            half_page_down: Binding::new()
                .keys(["pgdown"])
                .help("pgdn", "½ page down"),
            row_start: Binding::new().keys(["home"]).help("home", "first column"),
            row_end: Binding::new().keys(["end"]).help("end", "last column"),
            goto_top: Binding::new()
                .keys(["ctrl+home"])
                .help("ctrl+home", "first row"),
            goto_bottom: Binding::new()
                .keys(["ctrl+end"])
                .help("ctrl+end", "last row"),
            activate: Binding::new().keys(["enter"]).help("enter", "edit"),
            cancel: Binding::new().keys(["esc"]).help("esc", "cancel"),
            quit: Binding::new().keys(["q"]).help("q", "quit"),
        }
    }
}

impl KeyMap {
    /// Bindings for a one-line help view.
    #[must_use]
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![&self.up, &self.down, &self.activate, &self.quit]
    }

    /// Every binding, grouped by purpose.
    #[must_use]
    pub fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down, &self.left, &self.right],
            vec![
                &self.half_page_up,
                &self.half_page_down,
                &self.row_start,
                &self.row_end,
                &self.goto_top,
                &self.goto_bottom,
            ],
            vec![&self.activate, &self.cancel, &self.quit],
        ]
    }

    /// Renders bindings as `"key desc • key desc"`, skipping disabled ones.
    #[must_use]
    pub fn help_line(bindings: &[&Binding]) -> String {
        bindings
            .iter()
            .filter(|b| b.enabled())
            .map(|b| format!("{} {}", b.get_help().key, b.get_help().desc))
            .collect::<Vec<_>>()
            .join(" • ")
    }
}
