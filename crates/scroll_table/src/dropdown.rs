//! Enumerated-choice cell.
//!
//! A [`DropdownCell`] starts collapsed, showing its value. Enter expands it;
//! while expanded the arrow keys move a highlight through the options, Enter
//! adopts the highlighted option and Esc restores the last adopted value.
//!
//! ```rust
//! use scroll_table::dropdown::DropdownCell;
//! use scroll_table::{KeyMsg, KeyType};
//!
//! let options = vec!["Active".to_string(), "Inactive".into(), "Pending".into()];
//! let mut cell = DropdownCell::new("Active", options);
//! cell.update(&KeyMsg::from_type(KeyType::Enter));
//! cell.update(&KeyMsg::from_type(KeyType::Down));
//! assert_eq!(cell.value(), "Inactive");
//! cell.update(&KeyMsg::from_type(KeyType::Enter));
//! assert!(!cell.is_expanded());
//! assert_eq!(cell.value(), "Inactive");
//! ```

use crate::binding::{Binding, matches_one};
use crate::key::KeyMsg;
use crate::text::truncate_with_ellipsis;

/// Longest compact view before it is cut with `...`.
pub const COMPACT_MAX_WIDTH: usize = 35;

/// Key bindings for a dropdown.
#[derive(Debug, Clone)]
pub struct DropdownKeyMap {
    /// Expand, or adopt the highlighted option.
    pub toggle: Binding,
    /// Collapse and restore.
    pub cancel: Binding,
    /// Highlight the previous option.
    pub prev: Binding,
    /// Highlight the next option.
    pub next: Binding,
    /// Highlight the first option.
    pub first: Binding,
    /// Highlight the last option.
    pub last: Binding,
}

impl Default for DropdownKeyMap {
    fn default() -> Self {
        Self {
            toggle: Binding::new().keys(["enter"]).help("enter", "select"),
            cancel: Binding::new().keys(["esc"]).help("esc", "cancel"),
            prev: Binding::new().keys(["up"]).help("↑", "previous"),
            next: Binding::new().keys(["down"]).help("↓", "next"),
            first: Binding::new().keys(["home", "pgup"]),
            last: Binding::new().keys(["end", "pgdown"]),
        }
    }
}

/// A cell whose value is one of a fixed list of options.
#[derive(Debug, Clone)]
pub struct DropdownCell {
    /// Key bindings.
    pub key_map: DropdownKeyMap,
    options: Vec<String>,
    selected: Option<usize>,
    value: String,
    expanded: bool,
}

impl DropdownCell {
    /// Creates a collapsed dropdown for `content`.
    ///
    /// The highlight starts on `content` if it is one of the options, else on
    /// the first option.
    #[must_use]
    pub fn new(content: impl Into<String>, options: Vec<String>) -> Self {
        let value = content.into();
        let selected = index_for(&options, &value);
        Self {
            key_map: DropdownKeyMap::default(),
            options,
            selected,
            value,
            expanded: false,
        }
    }

    /// Expands the dropdown (builder pattern). Has no effect without options.
    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.expand();
        self
    }

    /// Expands the dropdown. Has no effect without options.
    pub fn expand(&mut self) {
        if !self.options.is_empty() {
            self.expanded = true;
        }
    }

    /// Returns true while the option list is open.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// The options.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the highlighted option, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The highlighted option while expanded, the adopted value otherwise.
    #[must_use]
    pub fn value(&self) -> &str {
        match (self.expanded, self.selected) {
            (true, Some(i)) => &self.options[i],
            _ => &self.value,
        }
    }

    /// Handles a key. Returns false if the key was not used.
    pub fn update(&mut self, key: &KeyMsg) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let km = &self.key_map;
        if matches_one(key, &km.toggle) {
            if self.expanded {
                if let Some(i) = self.selected {
                    self.value = self.options[i].clone();
                }
                self.expanded = false;
            } else {
                self.expanded = true;
            }
        } else if matches_one(key, &km.cancel) {
            self.expanded = false;
            self.selected = index_for(&self.options, &self.value);
        } else if !self.expanded {
            return false;
        } else if matches_one(key, &km.prev) {
            self.selected = self.selected.map(|i| i.saturating_sub(1));
        } else if matches_one(key, &km.next) {
            let last = self.options.len() - 1;
            self.selected = self.selected.map(|i| (i + 1).min(last));
        } else if matches_one(key, &km.first) {
            self.selected = Some(0);
        } else if matches_one(key, &km.last) {
            self.selected = Some(self.options.len() - 1);
        } else {
            return false;
        }
        true
    }

    /// One-line summary of the dropdown state.
    ///
    /// Collapsed: `"Active ▶"`. Expanded: `"▶ Pending (↑↓ 3/3)"`.
    #[must_use]
    pub fn compact_view(&self) -> String {
        if self.options.is_empty() {
            return "No options ▶".to_string();
        }
        if !self.expanded {
            return format!("{} ▶", self.value());
        }
        let current = match self.selected {
            Some(i) => format!("▶ {}", self.options[i]),
            None => "▶ No selection".to_string(),
        };
        let position = self.selected.map_or(0, |i| i + 1);
        let hint = format!(" (↑↓ {position}/{})", self.options.len());
        let room = COMPACT_MAX_WIDTH.saturating_sub(crate::text::display_width(&hint));
        format!("{}{hint}", truncate_with_ellipsis(&current, room))
    }

    /// The window of at most `max_visible` options around the highlight, with
    /// a flag marking the highlighted one.
    #[must_use]
    pub fn popup_lines(&self, max_visible: usize) -> Vec<(&str, bool)> {
        if self.options.is_empty() || max_visible == 0 {
            return Vec::new();
        }
        let selected = self.selected.unwrap_or(0);
        let len = self.options.len();
        let visible = max_visible.min(len);
        let start = selected
            .saturating_sub(visible / 2)
            .min(len - visible);
        self.options[start..start + visible]
            .iter()
            .enumerate()
            .map(|(i, option)| (option.as_str(), start + i == selected))
            .collect()
    }
}

fn index_for(options: &[String], content: &str) -> Option<usize> {
    if options.is_empty() {
        return None;
    }
    Some(options.iter().position(|o| o == content).unwrap_or(0))
}
