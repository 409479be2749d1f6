#![forbid(unsafe_code)]

use scroll_table_demo::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    scroll_table_demo::init_logging(&cli)?;
    scroll_table_demo::run(&cli)
}
