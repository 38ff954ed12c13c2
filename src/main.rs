//! frr-render: render an FRRouting configuration from a Jinja-style template.
//!
//! This is the main entry point for the `frr-render` CLI. It parses
//! arguments, sets up logging, dispatches to the command handler, and maps
//! errors to exit codes. There is no recovery: the first failure ends the
//! run with the exit code of its class.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod params;
pub mod render;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code as u8),
    };
    logging::init(cli.log_args());

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "render failed");

            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
