//! Implementation of the default render command.
//!
//! # What a render does
//!
//! 1. Resolves the `RenderConfig` from the command line
//! 2. Loads the variable bindings (environment or data file)
//! 3. Loads and parses the template
//! 4. Renders the configuration text
//! 5. Writes it atomically to the destination, creating the parent
//!    directory if needed (or prints it with `--stdout`)
//!
//! Steps 2-4 happen entirely in memory, so any failure there leaves the
//! destination untouched.

use crate::cli::RenderArgs;
use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::fs::atomic_write_file;
use crate::params::RenderParameters;
use crate::render::Renderer;
use std::io::Write;


/// Execute the render command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = RenderConfig::from_args(&args)?;
    run(&config)
}

/// Render once according to an already validated config.
pub fn run(config: &RenderConfig) -> Result<()> {
    let params = RenderParameters::load(&config.source, config.neighbor_split)?;
    tracing::debug!(variables = params.len(), source = ?config.source, "parameters loaded");

    let renderer = Renderer::load(&config.template)?;
    let rendered = renderer.render(&params)?;

    if config.to_stdout {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(rendered.as_str().as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| RenderError::IoError(format!("failed to write to stdout: {}", e)))?;
        return Ok(());
    }

    let output = config.destination.path();
    atomic_write_file(output, rendered.as_str())?;
    tracing::info!(
        output = %output.display(),
        template = renderer.name(),
        "wrote rendered configuration"
    );

    Ok(())
}
