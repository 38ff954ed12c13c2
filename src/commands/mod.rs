//! Command implementations for frr-render.
//!
//! This module provides the dispatcher that routes the parsed command line
//! to its handler. Rendering is the default; `vars` only inspects the
//! resolved bindings.

mod render;
mod vars;

use crate::cli::{Cli, Command};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Vars(args)) => vars::cmd_vars(args),
        None => render::cmd_render(cli.render),
    }
}
