//! Entry point for the `taskfill` CLI.
//!
//! Parses arguments, sets up logging, runs the command, and maps errors to
//! exit codes.

use log::LevelFilter;
use std::process::ExitCode;
use taskfill::cli::Cli;
use taskfill::{commands, exit_codes};

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // RUST_LOG, when set, overrides the default level.
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
