//! Error types for the frr-render CLI.
//!
//! Uses thiserror for derive macros. Every variant maps to one failure
//! class and therefore one exit code; nothing is recovered from.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for frr-render operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Invalid arguments or configuration.
    #[error("{0}")]
    UsageError(String),

    /// The template file does not exist or could not be read.
    #[error("failed to load template '{}': {source}", .path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template could not be parsed.
    #[error("template '{name}' has a syntax error: {detail}")]
    TemplateSyntax { name: String, detail: String },

    /// The template referenced a variable that was not bound.
    #[error("template '{name}' references undefined variable '{variable}'")]
    UndefinedVariable { name: String, variable: String },

    /// Rendering failed for any other reason (bad filter input, type mismatch).
    #[error("failed to render template '{name}': {detail}")]
    RenderFailed { name: String, detail: String },

    /// The parameter data file could not be read or interpreted.
    #[error("invalid parameters: {0}")]
    ParameterError(String),

    /// Reading or writing the filesystem failed.
    #[error("{0}")]
    IoError(String),
}

impl RenderError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::UsageError(_) => exit_codes::USAGE_ERROR,
            RenderError::TemplateNotFound { .. } => exit_codes::TEMPLATE_FAILURE,
            RenderError::TemplateSyntax { .. } => exit_codes::TEMPLATE_FAILURE,
            RenderError::UndefinedVariable { .. } => exit_codes::BINDING_FAILURE,
            RenderError::RenderFailed { .. } => exit_codes::BINDING_FAILURE,
            RenderError::ParameterError(_) => exit_codes::PARAMETER_FAILURE,
            RenderError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for frr-render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
