//! CLI argument parsing for frr-render.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::exit_codes;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// frr-render: Render an FRRouting BGP configuration from a Jinja-style template.
///
/// Variables come from the environment (`ASN`/`ASNUMBER`, `VTEP_LOCAL`,
/// `NEIGHBORS`) or from a YAML/JSON data file. Without an OUTPUT argument
/// the result is written to `./frr.conf`.
#[derive(Parser, Debug)]
#[command(name = "frr-render")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,
}

/// Available subcommands. Rendering is the default when none is given.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved template variables as YAML.
    ///
    /// Loads parameters exactly as a render would, but does not read the
    /// template or write any file.
    Vars(VarsArgs),
}

/// Where template variables are read from.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// Process environment variables.
    Env,
    /// A YAML or JSON data file.
    File,
}

/// Parameter-source flags shared by rendering and `vars`.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Parameter source (defaults to `file` when --vars-file is given, else `env`).
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// YAML/JSON data file whose top-level mapping supplies the variables.
    #[arg(long, value_name = "PATH")]
    pub vars_file: Option<PathBuf>,

    /// Drop empty entries when splitting NEIGHBORS.
    ///
    /// By default an empty NEIGHBORS yields a single empty neighbor.
    #[arg(long)]
    pub drop_empty_neighbors: bool,
}

/// Logging verbosity flags.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the default render command.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Output file path (defaults to ./frr.conf).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Template file to render.
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Print the rendered configuration to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Arguments for the `vars` command.
#[derive(Args, Debug, Clone, Default)]
pub struct VarsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// On failure clap's message (or the help/version text) is printed and
    /// the process exit code is returned instead.
    pub fn parse_args() -> Result<Self, i32> {
        Self::try_parse().map_err(|err| {
            let _ = err.print();
            parse_error_exit_code(&err)
        })
    }

    /// Logging flags of whichever command was selected.
    pub fn log_args(&self) -> LogArgs {
        match &self.command {
            Some(Command::Vars(args)) => args.log,
            None => self.render.log,
        }
    }
}

/// Exit code for a clap parse failure.
///
/// `--help` and `--version` succeed. Anything else is a usage error
/// rather than clap's default `2`, which is `TEMPLATE_FAILURE` here.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::USAGE_ERROR,
    }
}
