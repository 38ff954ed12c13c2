//! Config resolution and validation.

use super::model::RenderConfig;
use super::types::{DEFAULT_TEMPLATE, DEFAULT_VARS_FILE, Destination, NeighborSplit, ParamSource};
use crate::cli::{RenderArgs, SourceArgs, SourceKind};
use crate::error::{RenderError, Result};
use std::path::PathBuf;

impl ParamSource {
    /// Resolve the parameter source from the command-line flags.
    ///
    /// - no flags: environment
    /// - `--vars-file PATH` alone: that file
    /// - `--source file`: `--vars-file` or `variables.json`
    /// - `--source env --vars-file PATH`: rejected
    pub fn from_args(args: &SourceArgs) -> Result<Self> {
        match (args.source, &args.vars_file) {
            (None, None) | (Some(SourceKind::Env), None) => Ok(Self::Env),
            (None, Some(path)) | (Some(SourceKind::File), Some(path)) => {
                Ok(Self::File(path.clone()))
            }
            (Some(SourceKind::File), None) => Ok(Self::File(PathBuf::from(DEFAULT_VARS_FILE))),
            (Some(SourceKind::Env), Some(path)) => Err(RenderError::UsageError(format!(
                "--vars-file '{}' cannot be combined with --source env",
                path.display()
            ))),
        }
    }
}

impl RenderConfig {
    /// Build and validate a config from the render command's arguments.
    pub fn from_args(args: &RenderArgs) -> Result<Self> {
        let config = Self {
            template: args
                .template
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE)),
            source: ParamSource::from_args(&args.source)?,
            destination: Destination::from_arg(args.output.clone()),
            neighbor_split: NeighborSplit::from_flag(args.source.drop_empty_neighbors),
            to_stdout: args.stdout,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `template` must be non-empty
    /// - a data-file source path must be non-empty
    /// - the destination must name a file, not a directory
    pub fn validate(&self) -> Result<()> {
        if self.template.as_os_str().is_empty() {
            return Err(RenderError::UsageError(
                "config validation failed: template path must not be empty".to_string(),
            ));
        }

        if let ParamSource::File(path) = &self.source
            && path.as_os_str().is_empty()
        {
            return Err(RenderError::UsageError(
                "config validation failed: vars file path must not be empty".to_string(),
            ));
        }

        let output = self.destination.path();
        if output.as_os_str().is_empty() {
            return Err(RenderError::UsageError(
                "config validation failed: output path must not be empty".to_string(),
            ));
        }
        let names_directory = output.file_name().is_none()
            || output.as_os_str().to_string_lossy().ends_with(std::path::MAIN_SEPARATOR);
        if names_directory {
            return Err(RenderError::UsageError(format!(
                "config validation failed: output path '{}' must name a file, not a directory",
                output.display()
            )));
        }

        Ok(())
    }
}
