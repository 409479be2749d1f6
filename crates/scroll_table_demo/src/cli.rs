//! Command-line interface for `scroll_table_demo`.
//!
//! # Examples
//!
//! ```bash
//! # Browse and edit the staff table
//! scroll_table_demo
//!
//! # Light green editing cell, narrower view, log to a file
//! scroll_table_demo --edit-color "light green" --max-width 60 --log-file demo.log -vv
//!
//! # Print values without starting the terminal UI
//! scroll_table_demo dump --row 2
//! scroll_table_demo dump --row 1 --col 2 --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Scroll table demo - browse and edit a staff table in the terminal.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "scroll_table_demo",
    author,
    version,
    about = "Scroll table demo - browse and edit a staff table in the terminal",
    long_about = "Shows a 35-row staff table with editable text columns and a status \
                  dropdown. Arrow keys move, Enter edits or commits, Esc cancels, q quits."
)]
pub struct Cli {
    /// Table configuration file (TOML or JSON)
    ///
    /// Replaces the built-in demo configuration; the flags below still
    /// override its values.
    #[arg(long, short = 'c', env = "SCROLL_TABLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Available width in columns (defaults to the terminal width)
    #[arg(long, env = "SCROLL_TABLE_MAX_WIDTH")]
    pub max_width: Option<usize>,

    /// Available height in lines (defaults to the terminal height)
    #[arg(long, env = "SCROLL_TABLE_MAX_HEIGHT")]
    pub max_height: Option<usize>,

    /// Background color of the cell being edited
    ///
    /// A color name such as "light green" or a hex value such as "#ffcc00".
    /// Unknown colors fall back to yellow with a warning.
    #[arg(long, short = 'e', env = "SCROLL_TABLE_EDIT_COLOR")]
    pub edit_color: Option<String>,

    /// Disable colors (attributes only)
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Write logs to this file
    ///
    /// The terminal belongs to the table while it runs, so logs are only
    /// written when a file is given (or to stderr for `dump`).
    #[arg(long, env = "SCROLL_TABLE_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the final table as JSON after quitting
    #[arg(long)]
    pub print_json: bool,

    /// Draw in the main screen instead of the alternate screen
    #[arg(long)]
    pub no_alt_screen: bool,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print table values without starting the terminal UI
    Dump(DumpArgs),
}

/// Arguments for the dump subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct DumpArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,

    /// Only this row
    #[arg(long)]
    pub row: Option<usize>,

    /// Only this cell of the row given with --row
    #[arg(long, requires = "row")]
    pub col: Option<usize>,

    /// Only the headers
    #[arg(long, conflicts_with_all = ["row", "info"])]
    pub headers: bool,

    /// Dimensions, cursor position, and column kinds
    #[arg(long, conflicts_with = "row")]
    pub info: bool,
}

/// Dump output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DumpFormat {
    /// One line per row
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Whether this run starts the terminal UI.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        self.command.is_none()
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Only show warnings and errors
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["scroll_table_demo"]).unwrap();
        assert!(cli.max_width.is_none());
        assert!(cli.max_height.is_none());
        assert!(!cli.print_json);
        assert!(!cli.no_alt_screen);
        assert!(cli.is_interactive());
    }

    #[test]
    fn cli_parses_sizes_and_color() {
        let cli = Cli::try_parse_from([
            "scroll_table_demo",
            "--max-width",
            "60",
            "--max-height",
            "15",
            "-e",
            "light green",
        ])
        .unwrap();
        assert_eq!(cli.max_width, Some(60));
        assert_eq!(cli.max_height, Some(15));
        assert_eq!(cli.edit_color.as_deref(), Some("light green"));
    }

    #[test]
    fn cli_rejects_bad_size() {
        assert!(Cli::try_parse_from(["scroll_table_demo", "--max-width", "wide"]).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "scroll_table_demo",
            "--no-color",
            "--print-json",
            "--no-alt-screen",
            "--log-file",
            "/tmp/demo.log",
        ])
        .unwrap();
        assert!(cli.no_color);
        assert!(cli.print_json);
        assert!(cli.no_alt_screen);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/demo.log")));
    }

    #[test]
    fn cli_parses_verbose() {
        let cli = Cli::try_parse_from(["scroll_table_demo"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Warn);

        let cli = Cli::try_parse_from(["scroll_table_demo", "-v"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Info);

        let cli = Cli::try_parse_from(["scroll_table_demo", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Debug);
        assert_eq!(cli.log_level().as_directive(), "debug");

        let cli = Cli::try_parse_from(["scroll_table_demo", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Trace);
    }

    #[test]
    fn cli_parses_dump_subcommand() {
        let cli = Cli::try_parse_from([
            "scroll_table_demo",
            "dump",
            "--row",
            "1",
            "--col",
            "2",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(!cli.is_interactive());
        match cli.command {
            Some(Command::Dump(args)) => {
                assert_eq!(args.row, Some(1));
                assert_eq!(args.col, Some(2));
                assert_eq!(args.format, DumpFormat::Json);
            }
            None => panic!("Expected Dump command"),
        }
    }

    #[test]
    fn cli_dump_col_requires_row() {
        assert!(Cli::try_parse_from(["scroll_table_demo", "dump", "--col", "2"]).is_err());
    }

    #[test]
    fn cli_dump_headers_conflicts_with_row() {
        let result = Cli::try_parse_from(["scroll_table_demo", "dump", "--headers", "--row", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_help_works() {
        let result = Cli::try_parse_from(["scroll_table_demo", "--help"]);
        assert!(result.is_err());
    }
}
