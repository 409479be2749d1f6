//! Non-interactive value output for the `dump` subcommand.

use std::io::Write;

use anyhow::Context;
use scroll_table::{ScrollTable, TableError, TableInfo};
use serde::Serialize;

use crate::cli::{DumpArgs, DumpFormat};

/// Writes the values selected by `args` to `out`.
///
/// # Errors
///
/// Returns an error if the selected row or cell does not exist, or if
/// writing fails.
pub fn write_dump<W: Write>(table: &ScrollTable, args: &DumpArgs, out: &mut W) -> anyhow::Result<()> {
    let json = args.format == DumpFormat::Json;

    if args.headers {
        let headers = table.headers();
        return if json {
            write_json(out, &headers)
        } else {
            writeln!(out, "Headers: {headers:?}").context("failed to write headers")
        };
    }

    if let Some(row) = args.row {
        let values = table.row_data(row).ok_or(TableError::RowOutOfRange {
            row,
            len: table.grid().row_count(),
        })?;

        if let Some(col) = args.col {
            let value = values
                .get(col)
                .ok_or(TableError::CellOutOfRange { row, col })?;
            return if json {
                write_json(out, value)
            } else {
                writeln!(out, "Cell ({row}, {col}): {value:?}").context("failed to write cell")
            };
        }

        return if json {
            write_json(out, &values)
        } else {
            writeln!(out, "Row {row}: {values:?}").context("failed to write row")
        };
    }

    if args.info {
        let info = table.table_info();
        return if json {
            write_json(out, &info)
        } else {
            write_info(out, &info)
        };
    }

    let rows = table.all_data();
    if json {
        return write_json(out, &rows);
    }
    for (i, values) in rows.iter().enumerate() {
        writeln!(out, "Row {i}: {values:?}").context("failed to write rows")?;
    }
    Ok(())
}

fn write_info<W: Write>(out: &mut W, info: &TableInfo) -> anyhow::Result<()> {
    let kinds = info
        .column_types
        .iter()
        .map(|(col, kind)| format!("{col}={kind}"))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Dimensions: {:?}", info.dimensions)?;
    writeln!(out, "Current position: {:?}", info.current_position)?;
    writeln!(out, "Column types: {kinds}")?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize JSON")?;
    writeln!(out)?;
    Ok(())
}
