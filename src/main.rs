use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod cli_bin;

use cli_bin::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    cli_bin::commands::run(cli)
}

/// RUST_LOG, when set, overrides the verbosity flags
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
