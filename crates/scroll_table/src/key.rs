//! Keyboard input handling.
//!
//! Key events reach the table as [`KeyMsg`] values. Their `Display` form is
//! the canonical key name that [`Binding`](crate::binding::Binding)s match
//! against, e.g. `"enter"`, `"pgdown"`, `"ctrl+home"`, or `"q"`.

use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};

/// Keyboard key event message.
///
/// # Example
///
/// ```rust
/// use scroll_table::{KeyMsg, KeyType};
///
/// let key = KeyMsg::from_type(KeyType::PgDown);
/// assert_eq!(key.to_string(), "pgdown");
///
/// let key = KeyMsg::from_char('q');
/// assert_eq!(key.to_string(), "q");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For KeyType::Runes, the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
    /// Whether this came from a paste operation.
    pub paste: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
            paste: false,
        }
    }

    /// Create a new key message from a character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
            paste: false,
        }
    }

    /// Create a new key message from multiple characters.
    pub fn from_runes(runes: Vec<char>) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes,
            alt: false,
            paste: false,
        }
    }

    /// Set the alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Set the paste flag.
    pub fn with_paste(mut self) -> Self {
        self.paste = true;
        self
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            if self.paste {
                write!(f, "[")?;
            }
            for c in &self.runes {
                write!(f, "{c}")?;
            }
            if self.paste {
                write!(f, "]")?;
            }
        } else {
            write!(f, "{}", self.key_type)?;
        }
        Ok(())
    }
}

/// Key type enumeration.
///
/// Only the keys a table cares about get their own variant; other control
/// combinations arrive as [`KeyType::Unknown`] and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character(s) input.
    Runes,
    /// Enter / carriage return.
    Enter,
    /// Escape.
    Esc,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Backspace.
    Backspace,
    /// Delete key.
    Delete,
    /// Space key.
    Space,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PgUp,
    /// Page Down.
    PgDown,
    /// Ctrl+Home.
    CtrlHome,
    /// Ctrl+End.
    CtrlEnd,
    /// Ctrl+A.
    CtrlA,
    /// Ctrl+B.
    CtrlB,
    /// Break/Interrupt (Ctrl+C).
    CtrlC,
    /// Ctrl+D.
    CtrlD,
    /// Ctrl+E.
    CtrlE,
    /// Ctrl+F.
    CtrlF,
    /// Ctrl+H.
    CtrlH,
    /// Ctrl+K.
    CtrlK,
    /// Ctrl+U.
    CtrlU,
    /// Ctrl+W.
    CtrlW,
    /// Any key without a dedicated variant.
    Unknown,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Runes => "runes",
            KeyType::Enter => "enter",
            KeyType::Esc => "esc",
            KeyType::Tab => "tab",
            KeyType::ShiftTab => "shift+tab",
            KeyType::Backspace => "backspace",
            KeyType::Delete => "delete",
            KeyType::Space => " ",
            KeyType::Up => "up",
            KeyType::Down => "down",
            KeyType::Left => "left",
            KeyType::Right => "right",
            KeyType::Home => "home",
            KeyType::End => "end",
            KeyType::PgUp => "pgup",
            KeyType::PgDown => "pgdown",
            KeyType::CtrlHome => "ctrl+home",
            KeyType::CtrlEnd => "ctrl+end",
            KeyType::CtrlA => "ctrl+a",
            KeyType::CtrlB => "ctrl+b",
            KeyType::CtrlC => "ctrl+c",
            KeyType::CtrlD => "ctrl+d",
            KeyType::CtrlE => "ctrl+e",
            KeyType::CtrlF => "ctrl+f",
            KeyType::CtrlH => "ctrl+h",
            KeyType::CtrlK => "ctrl+k",
            KeyType::CtrlU => "ctrl+u",
            KeyType::CtrlW => "ctrl+w",
            KeyType::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm key code and modifiers to a [`KeyMsg`].
pub fn from_crossterm_key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char(c) if ctrl => {
            let kt = match c.to_ascii_lowercase() {
                'a' => KeyType::CtrlA,
                'b' => KeyType::CtrlB,
                'c' => KeyType::CtrlC,
                'd' => KeyType::CtrlD,
                'e' => KeyType::CtrlE,
                'f' => KeyType::CtrlF,
                'h' => KeyType::CtrlH,
                'i' => KeyType::Tab,
                'k' => KeyType::CtrlK,
                'm' => KeyType::Enter,
                'u' => KeyType::CtrlU,
                'w' => KeyType::CtrlW,
                _ => KeyType::Unknown,
            };
            (kt, Vec::new())
        }
        KeyCode::Char(' ') => (KeyType::Space, Vec::new()),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::BackTab => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab if shift => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Delete => (KeyType::Delete, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        KeyCode::Home if ctrl => (KeyType::CtrlHome, Vec::new()),
        KeyCode::Home => (KeyType::Home, Vec::new()),
        KeyCode::End if ctrl => (KeyType::CtrlEnd, Vec::new()),
        KeyCode::End => (KeyType::End, Vec::new()),
        KeyCode::PageUp => (KeyType::PgUp, Vec::new()),
        KeyCode::PageDown => (KeyType::PgDown, Vec::new()),
        _ => (KeyType::Unknown, Vec::new()),
    };

    KeyMsg {
        key_type,
        runes,
        alt,
        paste: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_msg_display() {
        let key = KeyMsg::from_type(KeyType::Enter);
        assert_eq!(key.to_string(), "enter");

        let key = KeyMsg::from_char('a');
        assert_eq!(key.to_string(), "a");

        let key = KeyMsg::from_char('a').with_alt();
        assert_eq!(key.to_string(), "alt+a");

        let key = KeyMsg::from_runes(vec!['h', 'e', 'l', 'l', 'o']).with_paste();
        assert_eq!(key.to_string(), "[hello]");
    }

    #[test]
    fn test_key_type_display() {
        assert_eq!(KeyType::PgUp.to_string(), "pgup");
        assert_eq!(KeyType::CtrlEnd.to_string(), "ctrl+end");
        assert_eq!(KeyType::Space.to_string(), " ");
    }

    #[test]
    fn test_from_crossterm_plain_keys() {
        let key = from_crossterm_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(key, KeyMsg::from_char('q'));

        let key = from_crossterm_key(KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::PgDown);

        let key = from_crossterm_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::Space);
    }

    #[test]
    fn test_from_crossterm_modifiers() {
        let key = from_crossterm_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::CtrlC);

        let key = from_crossterm_key(KeyCode::Home, KeyModifiers::CONTROL);
        assert_eq!(key.to_string(), "ctrl+home");

        let key = from_crossterm_key(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key.key_type, KeyType::ShiftTab);

        let key = from_crossterm_key(KeyCode::Char('x'), KeyModifiers::ALT);
        assert_eq!(key.to_string(), "alt+x");

        let key = from_crossterm_key(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::Unknown);
    }
}
