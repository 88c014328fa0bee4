// EN: src/bin/matrix-filter.rs

use clap::Parser;
use colored::*;
use matrix_filter::{
    cli::{Cli, dispatcher},
    system::logging::{self, LogConfig},
};

/// The main entry point of `matrix-filter`.
/// It sets up logging from the parsed flags, dispatches, and performs
/// centralized error handling.
fn main() {
    // clap exits on its own for --help, --version and usage errors.
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose, cli.quiet);
    if let Err(e) = logging::init(&log_config) {
        eprintln!("{}: {}", "Warning".yellow().bold(), e);
    }
    log::info!("command-line args: {:?}", cli);

    if let Err(e) = dispatcher::dispatch(&cli) {
        eprintln!("{}: {:#}", matrix_filter::t!("common.error").red().bold(), e);
        std::process::exit(1);
    }
}
