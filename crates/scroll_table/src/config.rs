//! Table configuration loaded from TOML or JSON.
//!
//! Every field has a default, so an empty file is a valid configuration.
//!
//! ```toml
//! max_width = 100
//! max_height = 25
//! edit_color = "light green"
//! column_types = ["editable", "editable", "text", "dropdown"]
//!
//! [dropdown_options]
//! 3 = ["Active", "Inactive", "Pending"]
//!
//! [palette.header]
//! fg = "white"
//! bg = "dark blue"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::column::{ColumnKinds, ColumnKindsSpec, DropdownOptions};
use crate::error::{Result, TableError};
use crate::style::{ColorMode, Palette, Styles};
use crate::viewport::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Settings for a [`ScrollTable`](crate::ScrollTable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Available width in columns.
    pub max_width: usize,
    /// Available height in lines, header included.
    pub max_height: usize,
    /// Background of the cell being edited. Overrides the palette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_color: Option<String>,
    /// Whether to render colors.
    pub color_mode: ColorMode,
    /// Column kinds, as a list in column order or a map keyed by index.
    pub column_types: ColumnKindsSpec,
    /// Colors per table element.
    pub palette: Palette,
    /// Options for dropdown columns, keyed by column index.
    pub dropdown_options: BTreeMap<String, Vec<String>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_WIDTH,
            max_height: DEFAULT_HEIGHT,
            edit_color: None,
            color_mode: ColorMode::Auto,
            column_types: ColumnKindsSpec::default(),
            palette: Palette::default(),
            dropdown_options: BTreeMap::new(),
        }
    }
}

impl TableConfig {
    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    /// Returns an error if parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// Returns an error if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// # Errors
    /// Returns an error if reading, parsing, or validation fails, or
    /// [`TableError::UnsupportedFormat`] for other extensions.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content),
            Some("json") => Self::from_json(&content),
            Some(ext) => Err(TableError::UnsupportedFormat(ext.into())),
            None => Err(TableError::UnsupportedFormat("unknown".into())),
        }
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serializes to pretty JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks sizes, colors, and column indices.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(TableError::InvalidConfig("max_width must be positive".into()));
        }
        if self.max_height == 0 {
            return Err(TableError::InvalidConfig("max_height must be positive".into()));
        }
        self.effective_palette().validate()?;
        self.column_kinds()?;
        self.dropdown_options()?;
        Ok(())
    }

    /// The palette with `edit_color` applied.
    #[must_use]
    pub fn effective_palette(&self) -> Palette {
        match &self.edit_color {
            Some(color) => self.palette.clone().with_edit_color(color.clone()),
            None => self.palette.clone(),
        }
    }

    /// Resolves the styles for the configured color mode.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidColor`] if a color does not parse.
    pub fn styles(&self) -> Result<Styles> {
        Styles::resolve(&self.effective_palette(), self.color_mode)
    }

    /// The column kinds keyed by column index.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidConfig`] if a map key is not an index.
    pub fn column_kinds(&self) -> Result<ColumnKinds> {
        ColumnKinds::try_from(self.column_types.clone())
    }

    /// The dropdown options keyed by column index.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidConfig`] if a key is not an index.
    pub fn dropdown_options(&self) -> Result<DropdownOptions> {
        DropdownOptions::try_from(self.dropdown_options.clone())
    }
}
