//! Column kinds and per-column dropdown options.
//!
//! Every column is one of three kinds: read-only [`ColumnKind::Text`],
//! inline-editable [`ColumnKind::Editable`], or [`ColumnKind::Dropdown`]
//! (pick one of a fixed list of options). Columns without an explicit kind
//! are text.
//!
//! ```rust
//! use scroll_table::{ColumnKind, ColumnKinds};
//!
//! let kinds = ColumnKinds::from(vec![ColumnKind::Editable, ColumnKind::Dropdown]);
//! assert_eq!(kinds.get(1), ColumnKind::Dropdown);
//! assert_eq!(kinds.get(7), ColumnKind::Text);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// How a column's cells behave when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Read-only text.
    #[default]
    Text,
    /// Edited in place with a single-line text editor.
    Editable,
    /// Edited by choosing from the column's dropdown options.
    Dropdown,
}

impl ColumnKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Editable => "editable",
            Self::Dropdown => "dropdown",
        }
    }

    /// Returns true for kinds whose cells can be changed by the user.
    #[must_use]
    pub fn is_editable(self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "editable" => Ok(Self::Editable),
            "dropdown" => Ok(Self::Dropdown),
            _ => Err(TableError::UnknownColumnKind(s.to_string())),
        }
    }
}

/// Mapping from column index to [`ColumnKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnKinds(BTreeMap<usize, ColumnKind>);

impl ColumnKinds {
    /// Creates an empty mapping (every column is text).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapping that marks the first `count` columns as text.
    #[must_use]
    pub fn all_text(count: usize) -> Self {
        Self((0..count).map(|i| (i, ColumnKind::Text)).collect())
    }

    /// Returns the kind for `col`, defaulting to text.
    #[must_use]
    pub fn get(&self, col: usize) -> ColumnKind {
        self.0.get(&col).copied().unwrap_or_default()
    }

    /// Sets the kind for `col`.
    pub fn set(&mut self, col: usize, kind: ColumnKind) {
        self.0.insert(col, kind);
    }

    /// Returns true if no column has an explicit kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the explicit `(column, kind)` entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ColumnKind)> + '_ {
        self.0.iter().map(|(&col, &kind)| (col, kind))
    }

    /// Returns a copy with every column below `count` filled in, explicit
    /// entries winning.
    #[must_use]
    pub fn filled(&self, count: usize) -> Self {
        let mut out = Self::all_text(count);
        out.0.extend(self.0.iter().map(|(&c, &k)| (c, k)));
        out
    }
}

impl From<Vec<ColumnKind>> for ColumnKinds {
    fn from(kinds: Vec<ColumnKind>) -> Self {
        Self(kinds.into_iter().enumerate().collect())
    }
}

impl<const N: usize> From<[ColumnKind; N]> for ColumnKinds {
    fn from(kinds: [ColumnKind; N]) -> Self {
        Self(kinds.into_iter().enumerate().collect())
    }
}

impl From<BTreeMap<usize, ColumnKind>> for ColumnKinds {
    fn from(map: BTreeMap<usize, ColumnKind>) -> Self {
        Self(map)
    }
}

impl From<HashMap<usize, ColumnKind>> for ColumnKinds {
    fn from(map: HashMap<usize, ColumnKind>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl FromIterator<(usize, ColumnKind)> for ColumnKinds {
    fn from_iter<T: IntoIterator<Item = (usize, ColumnKind)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Column kinds as written in a configuration file: either a list in column
/// order or a table keyed by column index.
///
/// ```toml
/// column_types = ["editable", "text", "dropdown"]
/// # or
/// [column_types]
/// 0 = "editable"
/// 2 = "dropdown"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnKindsSpec {
    /// Kinds in column order.
    List(Vec<ColumnKind>),
    /// Kinds keyed by column index (as a string, since TOML and JSON keys are
    /// strings).
    Map(BTreeMap<String, ColumnKind>),
}

impl Default for ColumnKindsSpec {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl TryFrom<ColumnKindsSpec> for ColumnKinds {
    type Error = TableError;

    fn try_from(spec: ColumnKindsSpec) -> Result<Self, Self::Error> {
        match spec {
            ColumnKindsSpec::List(list) => Ok(Self::from(list)),
            ColumnKindsSpec::Map(map) => map
                .into_iter()
                .map(|(key, kind)| Ok((parse_column_index(&key)?, kind)))
                .collect(),
        }
    }
}

/// Dropdown options per column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DropdownOptions(BTreeMap<usize, Vec<String>>);

impl DropdownOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds options for `col` (builder pattern).
    #[must_use]
    pub fn with<I, S>(mut self, col: usize, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(col, options);
        self
    }

    /// Replaces the options for `col`.
    pub fn set<I, S>(&mut self, col: usize, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(col, options.into_iter().map(Into::into).collect());
    }

    /// Returns the options for `col`; empty when none were configured.
    #[must_use]
    pub fn get(&self, col: usize) -> &[String] {
        self.0.get(&col).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if options were configured for `col`.
    #[must_use]
    pub fn contains(&self, col: usize) -> bool {
        self.0.contains_key(&col)
    }

    /// Returns true if no column has options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(usize, Vec<String>)> for DropdownOptions {
    fn from_iter<T: IntoIterator<Item = (usize, Vec<String>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for DropdownOptions {
    type Error = TableError;

    fn try_from(map: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        map.into_iter()
            .map(|(key, options)| Ok((parse_column_index(&key)?, options)))
            .collect()
    }
}

fn parse_column_index(key: &str) -> Result<usize, TableError> {
    key.trim().parse().map_err(|_| {
        TableError::InvalidConfig(format!("column key {key:?} is not a column index"))
    })
}
