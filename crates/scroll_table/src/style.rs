//! Colors, palettes, and rendered styles.
//!
//! Colors are configured as strings so they can live in TOML files: terminal
//! palette names (`"dark blue"`, `"light gray"`, `"default"`), hex values
//! (`"#12f"`, `"#ff8800"`), or ANSI-256 indices (`"212"`). A [`Palette`]
//! holds foreground/background pairs per table element and resolves into
//! [`Styles`] that render text with ANSI escapes.

use crossterm::style::{Attribute, Color, ContentStyle, Stylize as _};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// Parses a color name, hex value, or ANSI-256 index.
///
/// ```rust
/// use crossterm::style::Color;
/// use scroll_table::style::parse_color;
///
/// assert_eq!(parse_color("dark blue").unwrap(), Color::DarkBlue);
/// assert_eq!(parse_color("#ff0000").unwrap(), Color::Rgb { r: 255, g: 0, b: 0 });
/// assert_eq!(parse_color("212").unwrap(), Color::AnsiValue(212));
/// assert!(parse_color("chartreuse-ish").is_err());
/// ```
///
/// # Errors
/// Returns [`TableError::InvalidColor`] for anything else.
pub fn parse_color(s: &str) -> Result<Color> {
    let raw = s.trim();
    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| TableError::InvalidColor(s.to_string()));
    }
    if let Ok(n) = raw.parse::<u8>() {
        return Ok(Color::AnsiValue(n));
    }
    let name = raw.to_ascii_lowercase().replace(['_', '-'], " ");
    let color = match name.as_str() {
        "default" | "reset" => Color::Reset,
        "black" => Color::Black,
        "dark red" => Color::DarkRed,
        "dark green" => Color::DarkGreen,
        "brown" | "dark yellow" => Color::DarkYellow,
        "dark blue" => Color::DarkBlue,
        "dark magenta" => Color::DarkMagenta,
        "dark cyan" => Color::DarkCyan,
        "light gray" | "light grey" | "gray" | "grey" => Color::Grey,
        "dark gray" | "dark grey" => Color::DarkGrey,
        "light red" | "red" => Color::Red,
        "light green" | "green" => Color::Green,
        "yellow" => Color::Yellow,
        "light blue" | "blue" => Color::Blue,
        "light magenta" | "magenta" => Color::Magenta,
        "light cyan" | "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => return Err(TableError::InvalidColor(s.to_string())),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let (r, g, b) = match hex.len() {
        6 => (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        ),
        3 => (
            u8::from_str_radix(&hex[0..1], 16).ok()? * 17,
            u8::from_str_radix(&hex[1..2], 16).ok()? * 17,
            u8::from_str_radix(&hex[2..3], 16).ok()? * 17,
        ),
        _ => return None,
    };
    Some(Color::Rgb { r, g, b })
}

/// A text style: optional colors plus a few attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
    reverse: bool,
    underline: bool,
}

impl Style {
    /// Creates a style that renders text unchanged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enables bold text.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enables reverse video.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Enables underlined text.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Returns true if rendering leaves text unchanged.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Renders `s` in this style.
    #[must_use]
    pub fn render(&self, s: &str) -> String {
        if self.is_plain() || s.is_empty() {
            return s.to_string();
        }
        let mut content = ContentStyle::new();
        content.foreground_color = self.fg;
        content.background_color = self.bg;
        let mut styled = content.apply(s);
        if self.bold {
            styled = styled.attribute(Attribute::Bold);
        }
        if self.reverse {
            styled = styled.attribute(Attribute::Reverse);
        }
        if self.underline {
            styled = styled.attribute(Attribute::Underlined);
        }
        styled.to_string()
    }
}

/// Foreground and background color names for one table element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Foreground color.
    pub fg: String,
    /// Background color.
    pub bg: String,
}

impl ColorPair {
    /// Creates a color pair.
    #[must_use]
    pub fn new(fg: impl Into<String>, bg: impl Into<String>) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
        }
    }

    /// Resolves the pair into a style.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidColor`] if either color does not parse.
    pub fn to_style(&self) -> Result<Style> {
        Ok(Style::new().fg(parse_color(&self.fg)?).bg(parse_color(&self.bg)?))
    }
}

/// Color pairs for every element the table draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// The header row.
    pub header: ColorPair,
    /// Ordinary cells.
    pub cell: ColorPair,
    /// The cursor cell.
    pub active_cell: ColorPair,
    /// The cell being edited.
    pub editing_cell: ColorPair,
    /// Dropdown popups and status lines.
    pub status: ColorPair,
}

/// Background of the editing cell when none is configured.
pub const DEFAULT_EDIT_COLOR: &str = "yellow";

impl Default for Palette {
    fn default() -> Self {
        Self {
            header: ColorPair::new("white", "dark blue"),
            cell: ColorPair::new("default", "default"),
            active_cell: ColorPair::new("black", "white"),
            editing_cell: ColorPair::new("black", DEFAULT_EDIT_COLOR),
            status: ColorPair::new("white", "black"),
        }
    }
}

impl Palette {
    /// Uses `color` as the background of the editing cell.
    #[must_use]
    pub fn with_edit_color(mut self, color: impl Into<String>) -> Self {
        self.editing_cell.bg = color.into();
        self
    }

    /// Checks that every color parses.
    ///
    /// # Errors
    /// Returns the first [`TableError::InvalidColor`] found.
    pub fn validate(&self) -> Result<()> {
        for pair in [
            &self.header,
            &self.cell,
            &self.active_cell,
            &self.editing_cell,
            &self.status,
        ] {
            pair.to_style()?;
        }
        Ok(())
    }
}

/// Whether rendered output carries colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colors unless `NO_COLOR` is set.
    #[default]
    Auto,
    /// Always colors.
    Always,
    /// Attributes only (bold, reverse), no colors.
    Never,
}

impl ColorMode {
    /// Returns true if this mode renders colors in the current environment.
    #[must_use]
    pub fn use_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()),
        }
    }
}

/// Resolved styles for rendering the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    /// The header row.
    pub header: Style,
    /// Ordinary cells.
    pub cell: Style,
    /// The cursor cell.
    pub selected: Style,
    /// The cell being edited.
    pub editing: Style,
    /// The text cursor inside the editor.
    pub cursor: Style,
    /// Dropdown popup body.
    pub popup: Style,
    /// Highlighted option in the dropdown popup.
    pub popup_selected: Style,
    /// Status lines drawn by hosts.
    pub status: Style,
}

impl Default for Styles {
    fn default() -> Self {
        // The default palette always parses.
        Self::from_palette(&Palette::default()).unwrap_or_else(|_| Self::monochrome())
    }
}

impl Styles {
    /// Styles that render text unchanged.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            header: Style::new(),
            cell: Style::new(),
            selected: Style::new(),
            editing: Style::new(),
            cursor: Style::new(),
            popup: Style::new(),
            popup_selected: Style::new(),
            status: Style::new(),
        }
    }

    /// Styles that use attributes but no colors.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            header: Style::new().bold(),
            cell: Style::new(),
            selected: Style::new().reverse(),
            editing: Style::new().underline(),
            cursor: Style::new().reverse(),
            popup: Style::new(),
            popup_selected: Style::new().reverse(),
            status: Style::new().bold(),
        }
    }

    /// Resolves a palette into styles.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidColor`] if any palette color does not
    /// parse.
    pub fn from_palette(palette: &Palette) -> Result<Self> {
        Ok(Self {
            header: palette.header.to_style()?.bold(),
            cell: palette.cell.to_style()?,
            selected: palette.active_cell.to_style()?,
            editing: palette.editing_cell.to_style()?,
            cursor: Style::new().reverse(),
            popup: palette.status.to_style()?,
            popup_selected: palette.active_cell.to_style()?,
            status: palette.status.to_style()?,
        })
    }

    /// Resolves a palette honoring the color mode.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidColor`] if colors are in use and any
    /// palette color does not parse.
    pub fn resolve(palette: &Palette, mode: ColorMode) -> Result<Self> {
        if mode.use_color() {
            Self::from_palette(palette)
        } else {
            Ok(Self::monochrome())
        }
    }
}
