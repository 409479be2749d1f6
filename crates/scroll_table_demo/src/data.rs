//! Built-in staff table and its configuration.

use std::collections::BTreeMap;

use scroll_table::column::{ColumnKind, ColumnKindsSpec};
use scroll_table::style::{ColorPair, Palette};
use scroll_table::{Grid, TableConfig};

/// Column headers.
pub const HEADERS: [&str; 5] = ["Name", "Age", "City", "Status", "Notes"];

/// Choices for the Status column.
pub const STATUS_OPTIONS: [&str; 3] = ["Active", "Inactive", "Pending"];

/// Index of the Status column.
pub const STATUS_COLUMN: usize = 3;

const ROWS: [(&str, u32, &str, &str, &str); 35] = [
    ("Alice", 25, "New York", "Active", "Developer"),
    ("Bob", 30, "Los Angeles", "Active", "Manager"),
    ("Charlie", 35, "Chicago", "Active", "Designer"),
    ("Diana", 28, "Houston", "Active", "Engineer"),
    ("Eve", 32, "Phoenix", "Inactive", "Analyst"),
    ("Frank", 27, "Philadelphia", "Active", "Developer"),
    ("Grace", 29, "San Antonio", "Active", "Manager"),
    ("Henry", 31, "San Diego", "Active", "Designer"),
    ("Ivy", 26, "Dallas", "Active", "Engineer"),
    ("Jack", 33, "San Jose", "Active", "Analyst"),
    ("2nd Diana", 28, "Houston", "Active", "Engineer"),
    ("2nd Eve", 32, "Phoenix", "Inactive", "Analyst"),
    ("2nd Frank", 27, "Philadelphia", "Active", "Developer"),
    ("2nd Grace", 29, "San Antonio", "Active", "Manager"),
    ("2nd Henry", 31, "San Diego", "Active", "Designer"),
    ("3rd Ivy", 26, "Dallas", "Active", "Engineer"),
    ("3rd Jack", 33, "San Jose", "Active", "Analyst"),
    ("4th Alice", 25, "New York", "Active", "Developer"),
    ("4th Bob", 30, "Los Angeles", "Active", "Manager"),
    ("4th Charlie", 35, "Chicago", "Active", "Designer"),
    ("4th Diana", 28, "Houston", "Active", "Engineer"),
    ("4th Eve", 32, "Phoenix", "Inactive", "Analyst"),
    ("4th Frank", 27, "Philadelphia", "Active", "Developer"),
    ("4th Grace", 29, "San Antonio", "Active", "Manager"),
    ("4th Henry", 31, "San Diego", "Active", "Designer"),
    ("4th Ivy", 26, "Dallas", "Active", "Engineer"),
    ("4th Jack", 33, "San Jose", "Active", "Analyst"),
    ("5th Charlie", 35, "Chicago", "Active", "Designer"),
    ("5th Diana", 28, "Houston", "Active", "Engineer"),
    ("5th Eve", 32, "Phoenix", "Inactive", "Analyst"),
    ("5th Frank", 27, "Philadelphia", "Active", "Developer"),
    ("5th Grace", 29, "San Antonio", "Active", "Manager"),
    ("5th Henry", 31, "San Diego", "Active", "Designer"),
    ("5th Ivy", 26, "Dallas", "Active", "Engineer"),
    ("5th Jack", 33, "San Jose", "Active", "Analyst"),
];

/// The staff grid. Ages are stored as their decimal text.
#[must_use]
pub fn staff_grid() -> Grid {
    Grid::new(
        HEADERS,
        ROWS.iter().map(|&(name, age, city, status, notes)| {
            [
                name.to_string(),
                age.to_string(),
                city.to_string(),
                status.to_string(),
                notes.to_string(),
            ]
        }),
    )
}

/// Every column editable except Status, which is a dropdown.
#[must_use]
pub fn staff_config() -> TableConfig {
    let kinds = (0..HEADERS.len())
        .map(|col| {
            if col == STATUS_COLUMN {
                ColumnKind::Dropdown
            } else {
                ColumnKind::Editable
            }
        })
        .collect();

    let mut dropdown_options = BTreeMap::new();
    dropdown_options.insert(
        STATUS_COLUMN.to_string(),
        STATUS_OPTIONS.iter().map(ToString::to_string).collect(),
    );

    TableConfig {
        column_types: ColumnKindsSpec::List(kinds),
        dropdown_options,
        palette: staff_palette(),
        ..TableConfig::default()
    }
}

fn staff_palette() -> Palette {
    Palette {
        header: ColorPair::new("dark blue", "light red"),
        active_cell: ColorPair::new("white", "light green"),
        editing_cell: ColorPair::new("dark blue", "dark green"),
        status: ColorPair::new("white", "black"),
        ..Palette::default()
    }
}
