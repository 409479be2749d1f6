#![forbid(unsafe_code)]

//! # Scroll Table Demo
//!
//! Interactive demonstration of the `scroll_table` component, plus a
//! `dump` subcommand that prints table values without a terminal UI.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p scroll_table_demo
//! cargo run -p scroll_table_demo -- --edit-color "light green"
//! cargo run -p scroll_table_demo -- dump --info
//! ```

pub mod app;
pub mod cli;
pub mod data;
pub mod dump;

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use scroll_table::program::Program;
use scroll_table::style::{ColorMode, DEFAULT_EDIT_COLOR, parse_color};
use scroll_table::{ScrollTable, TableConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use app::DemoApp;
use cli::{Cli, Command};

/// Builds the table configuration from the config file (or the built-in
/// one) with command-line overrides applied.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the result does
/// not validate.
pub fn build_config(cli: &Cli) -> anyhow::Result<TableConfig> {
    let mut config = match &cli.config {
        Some(path) => TableConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => data::staff_config(),
    };

    if let Some(width) = cli.max_width {
        config.max_width = width;
    }
    if let Some(height) = cli.max_height {
        config.max_height = height;
    }
    if let Some(color) = &cli.edit_color {
        if parse_color(color).is_ok() {
            config.edit_color = Some(color.clone());
        } else {
            eprintln!("Warning: '{color}' is not a valid color. Using '{DEFAULT_EDIT_COLOR}' instead.");
            warn!(color = %color, "invalid edit color, using default");
            config.edit_color = Some(DEFAULT_EDIT_COLOR.to_string());
        }
    }
    if cli.no_color {
        config.color_mode = ColorMode::Never;
    }

    config.validate().context("invalid table configuration")?;
    Ok(config)
}

/// Installs the global tracing subscriber.
///
/// Logs go to `--log-file` when given. Without one, `dump` logs to stderr
/// and the interactive UI does not log at all.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_directive()));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if !cli.is_interactive() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

/// Runs the demo for parsed arguments.
///
/// # Errors
///
/// Returns an error if configuration, the terminal, or output fails.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = build_config(cli)?;
    let table = ScrollTable::from_config(data::staff_grid(), &config)
        .context("failed to build table")?;

    match &cli.command {
        Some(Command::Dump(args)) => {
            let stdout = io::stdout();
            dump::write_dump(&table, args, &mut stdout.lock())
        }
        None => run_interactive(cli, table),
    }
}

fn run_interactive(cli: &Cli, table: ScrollTable) -> anyhow::Result<()> {
    let app = DemoApp::new(table).size_limits(cli.max_width, cli.max_height);

    let mut program = Program::new(app);
    if !cli.no_alt_screen {
        program = program.with_alt_screen();
    }
    let app = program.run().context("terminal UI failed")?;
    info!(changes = app.changes().len(), "demo finished");

    if cli.print_json {
        let info = app.into_table().table_info();
        println!(
            "{}",
            serde_json::to_string_pretty(&info).context("failed to serialize table")?
        );
    }
    Ok(())
}
