//! Inline single-line editor for editable cells.
//!
//! # Example
//!
//! ```rust
//! use scroll_table::editor::EditableCell;
//! use scroll_table::{KeyMsg, KeyType};
//!
//! let mut cell = EditableCell::new("Alice");
//! cell.update(&KeyMsg::from_type(KeyType::Backspace));
//! cell.update(&KeyMsg::from_char('a'));
//! assert_eq!(cell.value(), "Alica");
//! assert!(cell.is_modified());
//! ```

use unicode_width::UnicodeWidthChar;

use crate::binding::{Binding, matches_one};
use crate::key::{KeyMsg, KeyType};
use crate::style::Style;
use crate::text::single_line;

/// Key bindings for moving and deleting inside the editor.
#[derive(Debug, Clone)]
pub struct EditorKeyMap {
    /// Move cursor forward one character.
    pub character_forward: Binding,
    /// Move cursor backward one character.
    pub character_backward: Binding,
    /// Move to start of the text.
    pub line_start: Binding,
    /// Move to end of the text.
    pub line_end: Binding,
    /// Delete the character before the cursor.
    pub delete_character_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_character_forward: Binding,
    /// Delete from the cursor to the end.
    pub delete_after_cursor: Binding,
    /// Delete from the start to the cursor.
    pub delete_before_cursor: Binding,
    /// Delete the word before the cursor.
    pub delete_word_backward: Binding,
}

impl Default for EditorKeyMap {
    fn default() -> Self {
        Self {
            character_forward: Binding::new().keys(["right", "ctrl+f"]),
            character_backward: Binding::new().keys(["left", "ctrl+b"]),
            line_start: Binding::new().keys(["home", "ctrl+a"]),
            line_end: Binding::new().keys(["end", "ctrl+e"]),
            delete_character_backward: Binding::new().keys(["backspace", "ctrl+h"]),
            delete_character_forward: Binding::new().keys(["delete", "ctrl+d"]),
            delete_after_cursor: Binding::new().keys(["ctrl+k"]),
            delete_before_cursor: Binding::new().keys(["ctrl+u"]),
            delete_word_backward: Binding::new().keys(["ctrl+w"]),
        }
    }
}

/// Edit buffer for one cell.
#[derive(Debug, Clone)]
pub struct EditableCell {
    /// Key bindings.
    pub key_map: EditorKeyMap,
    value: Vec<char>,
    pos: usize,
    original: String,
    initial: Vec<char>,
}

impl EditableCell {
    /// Starts editing `content` with the cursor at the end.
    ///
    /// The buffer holds `content` on one line; [`original`](Self::original)
    /// keeps it as given.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        let original = content.into();
        let value: Vec<char> = single_line(&original).chars().collect();
        Self {
            key_map: EditorKeyMap::default(),
            pos: value.len(),
            initial: value.clone(),
            value,
            original,
        }
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Text the editor was opened with.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns true if the text differs from what the editor opened with.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.value != self.initial
    }

    /// The value to save: the original untouched unless the text was changed.
    #[must_use]
    pub fn committed_value(&self) -> String {
        if self.is_modified() {
            self.value()
        } else {
            self.original.clone()
        }
    }

    /// Cursor position in characters.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, s: &str) {
        self.value = single_line(s).chars().collect();
        self.pos = self.value.len();
    }

    /// Restores the original text.
    pub fn reset(&mut self) {
        let original = self.original.clone();
        self.set_value(&original);
    }

    fn insert(&mut self, chars: &[char]) {
        let tail = self.value.split_off(self.pos);
        self.value.extend_from_slice(chars);
        self.value.extend(tail);
        self.pos += chars.len();
    }

    fn delete_word_backward(&mut self) {
        let mut start = self.pos;
        while start > 0 && self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !self.value[start - 1].is_whitespace() {
            start -= 1;
        }
        self.value.drain(start..self.pos);
        self.pos = start;
    }

    /// Handles a key. Returns false if the key is not an editing key, so the
    /// caller can use it.
    pub fn update(&mut self, key: &KeyMsg) -> bool {
        let km = &self.key_map;
        if matches_one(key, &km.character_forward) {
            self.pos = (self.pos + 1).min(self.value.len());
        } else if matches_one(key, &km.character_backward) {
            self.pos = self.pos.saturating_sub(1);
        } else if matches_one(key, &km.line_start) {
            self.pos = 0;
        } else if matches_one(key, &km.line_end) {
            self.pos = self.value.len();
        } else if matches_one(key, &km.delete_character_backward) {
            if self.pos > 0 {
                self.value.remove(self.pos - 1);
                self.pos -= 1;
            }
        } else if matches_one(key, &km.delete_character_forward) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if matches_one(key, &km.delete_after_cursor) {
            self.value.truncate(self.pos);
        } else if matches_one(key, &km.delete_before_cursor) {
            self.value.drain(..self.pos);
            self.pos = 0;
        } else if matches_one(key, &km.delete_word_backward) {
            self.delete_word_backward();
        } else {
            match key.key_type {
                KeyType::Runes if key.paste => {
                    let text: String = key.runes.iter().collect();
                    let chars: Vec<char> = single_line(&text).chars().collect();
                    self.insert(&chars);
                }
                KeyType::Runes if !key.alt => {
                    let chars: Vec<char> =
                        key.runes.iter().copied().filter(|c| !c.is_control()).collect();
                    self.insert(&chars);
                }
                KeyType::Space => self.insert(&[' ']),
                _ => return false,
            }
        }
        true
    }

    /// Splits the visible text into the part before the cursor, the cursor
    /// cell, and the part after it, together exactly `width` columns wide.
    ///
    /// The window scrolls so the cursor is always inside it. A cursor at the
    /// end of the text occupies one blank column.
    #[must_use]
    pub fn layout(&self, width: usize) -> (String, String, String) {
        if width == 0 {
            return (String::new(), String::new(), String::new());
        }
        let char_width = |c: &char| c.width().unwrap_or(0);

        let cursor_width = self.value.get(self.pos).map_or(1, char_width).max(1);
        let mut start = 0;
        while start < self.pos
            && self.value[start..self.pos].iter().map(char_width).sum::<usize>() + cursor_width
                > width
        {
            start += 1;
        }

        let before: String = self.value[start..self.pos].iter().collect();
        let mut used: usize = self.value[start..self.pos].iter().map(char_width).sum();

        let mut cursor = String::new();
        if used + cursor_width <= width {
            cursor.push(self.value.get(self.pos).copied().unwrap_or(' '));
            used += cursor_width;
        }

        let mut after = String::new();
        for c in self.value.iter().skip(self.pos + 1) {
            let w = char_width(c);
            if used + w > width {
                break;
            }
            after.push(*c);
            used += w;
        }
        after.extend(std::iter::repeat_n(' ', width - used));
        (before, cursor, after)
    }

    /// Renders the text in exactly `width` columns with the cursor drawn in
    /// `cursor_style` and everything else in `text_style`.
    #[must_use]
    pub fn view(&self, width: usize, text_style: &Style, cursor_style: &Style) -> String {
        let (before, cursor, after) = self.layout(width);
        let mut out = text_style.render(&before);
        out.push_str(&cursor_style.render(&cursor));
        out.push_str(&text_style.render(&after));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(kt: KeyType) -> KeyMsg {
        KeyMsg::from_type(kt)
    }

    fn plain_view(cell: &EditableCell, width: usize) -> String {
        cell.view(width, &Style::new(), &Style::new())
    }

    #[test]
    fn test_new_puts_cursor_at_end() {
        let cell = EditableCell::new("Bob");
        assert_eq!(cell.value(), "Bob");
        assert_eq!(cell.position(), 3);
        assert!(!cell.is_modified());
    }

    #[test]
    fn test_new_flattens_newlines() {
        let cell = EditableCell::new("two\nlines");
        assert_eq!(cell.value(), "two lines");
    }

    #[test]
    fn test_typing_inserts_at_cursor() {
        let mut cell = EditableCell::new("Bb");
        assert!(cell.update(&key(KeyType::Left)));
        assert!(cell.update(&KeyMsg::from_char('o')));
        assert_eq!(cell.value(), "Bob");
        assert!(cell.update(&key(KeyType::Space)));
        assert_eq!(cell.value(), "Bo b");
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut cell = EditableCell::new("ab");
        cell.update(&key(KeyType::Right));
        assert_eq!(cell.position(), 2);
        cell.update(&key(KeyType::Home));
        assert_eq!(cell.position(), 0);
        cell.update(&key(KeyType::Left));
        assert_eq!(cell.position(), 0);
        cell.update(&key(KeyType::CtrlE));
        assert_eq!(cell.position(), 2);
    }

    #[test]
    fn test_deletions() {
        let mut cell = EditableCell::new("New York");
        cell.update(&key(KeyType::Backspace));
        assert_eq!(cell.value(), "New Yor");

        cell.update(&key(KeyType::CtrlW));
        assert_eq!(cell.value(), "New ");

        cell.update(&key(KeyType::Home));
        cell.update(&key(KeyType::Delete));
        assert_eq!(cell.value(), "ew ");

        cell.update(&key(KeyType::Right));
        cell.update(&key(KeyType::CtrlK));
        assert_eq!(cell.value(), "e");

        cell.update(&key(KeyType::CtrlU));
        assert_eq!(cell.value(), "");
        assert_eq!(cell.position(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut cell = EditableCell::new("x");
        cell.update(&key(KeyType::Home));
        assert!(cell.update(&key(KeyType::Backspace)));
        assert_eq!(cell.value(), "x");
    }

    #[test]
    fn test_paste_is_single_line() {
        let mut cell = EditableCell::new("");
        let paste = KeyMsg::from_runes("a\nb\tc".chars().collect()).with_paste();
        assert!(cell.update(&paste));
        assert_eq!(cell.value(), "a b c");
    }

    #[test]
    fn test_unhandled_keys() {
        let mut cell = EditableCell::new("x");
        assert!(!cell.update(&key(KeyType::Up)));
        assert!(!cell.update(&key(KeyType::Enter)));
        assert!(!cell.update(&key(KeyType::Esc)));
        assert!(!cell.update(&KeyMsg::from_char('x').with_alt()));
        assert_eq!(cell.value(), "x");
    }

    #[test]
    fn test_reset_restores_original() {
        let mut cell = EditableCell::new("Alice");
        cell.update(&KeyMsg::from_char('!'));
        assert!(cell.is_modified());
        cell.reset();
        assert_eq!(cell.value(), "Alice");
        assert!(!cell.is_modified());
    }

    #[test]
    fn test_multiline_original_is_kept() {
        let mut cell = EditableCell::new("a\nb\tc");
        assert_eq!(cell.value(), "a b c");
        assert_eq!(cell.original(), "a\nb\tc");
        assert!(!cell.is_modified());
        assert_eq!(cell.committed_value(), "a\nb\tc");

        cell.update(&KeyMsg::from_char('!'));
        assert!(cell.is_modified());
        assert_eq!(cell.committed_value(), "a b c!");
    }

    #[test]
    fn test_view_pads_to_width() {
        let cell = EditableCell::new("Bob");
        // Cursor sits after the text as a blank column.
        assert_eq!(plain_view(&cell, 7), "Bob    ");
    }

    #[test]
    fn test_view_scrolls_to_cursor() {
        let cell = EditableCell::new("Philadelphia");
        let view = plain_view(&cell, 5);
        assert_eq!(view, "phia ");
    }

    #[test]
    fn test_view_scrolls_back_to_start() {
        let mut cell = EditableCell::new("Philadelphia");
        cell.update(&key(KeyType::Home));
        assert_eq!(plain_view(&cell, 5), "Phila");
    }

    #[test]
    fn test_layout_marks_cursor() {
        let mut cell = EditableCell::new("Bob");
        cell.update(&key(KeyType::Left));
        assert_eq!(
            cell.layout(6),
            ("Bo".to_string(), "b".to_string(), "   ".to_string())
        );
    }

    #[test]
    fn test_view_zero_width() {
        assert_eq!(plain_view(&EditableCell::new("x"), 0), "");
    }
}
