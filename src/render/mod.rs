//! Template rendering for frr-render.
//!
//! Templates use Jinja-style syntax (`{{ ASN }}`,
//! `{% for n in NEIGHBORS %}`) and are rendered with tera. Rendering is a
//! pure function of the template source and the bound parameters, and it
//! never writes anything. The caller decides what to do with the text.
//!
//! # Error Handling
//!
//! Failures are classified, never recovered from:
//!
//! - the template file cannot be read: `TemplateNotFound`
//! - the template does not parse: `TemplateSyntax`
//! - a placeholder names an unbound variable: `UndefinedVariable`
//! - anything else during rendering: `RenderFailed`

mod errors;


use crate::error::{RenderError, Result};
use crate::params::RenderParameters;
use std::path::Path;
use tera::Tera;

use errors::{describe, undefined_variable};

/// Rendered configuration text, ready to be written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedConfig {
    text: String,
}

impl RenderedConfig {
    /// The rendered text.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// A parsed template ready to render.
#[derive(Debug)]
pub struct Renderer {
    tera: Tera,
    name: String,
}

impl Renderer {
    /// Load and parse a template file.
    ///
    /// The template is registered under its file name, which is what
    /// error messages refer to.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let source =
            std::fs::read_to_string(path).map_err(|source| RenderError::TemplateNotFound {
                path: path.to_path_buf(),
                source,
            })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!(template = %path.display(), bytes = source.len(), "loaded template");
        Self::from_source(&name, &source)
    }

    /// Parse a template from an in-memory string.
    ///
    /// One trailing newline of the source is dropped, as Jinja does by
    /// default, so a template file ending in `\n` renders without it.
    pub fn from_source(name: &str, source: &str) -> Result<Self> {
        let source = strip_trailing_newline(source);
        let mut tera = Tera::default();
        // Router configs are plain text; never HTML-escape, whatever the file suffix.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)
            .map_err(|e| RenderError::TemplateSyntax {
                name: name.to_string(),
                detail: describe(&e),
            })?;

        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    /// Name the template is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template with the given parameters.
    pub fn render(&self, params: &RenderParameters) -> Result<RenderedConfig> {
        let context = params.to_context()?;

        let text = self.tera.render(&self.name, &context).map_err(|e| {
            let detail = describe(&e);
            match undefined_variable(&detail) {
                Some(variable) => RenderError::UndefinedVariable {
                    name: self.name.clone(),
                    variable,
                },
                None => RenderError::RenderFailed {
                    name: self.name.clone(),
                    detail,
                },
            }
        })?;

        Ok(RenderedConfig { text })
    }
}

fn strip_trailing_newline(source: &str) -> &str {
    source
        .strip_suffix("\r\n")
        .or_else(|| source.strip_suffix('\n'))
        .or_else(|| source.strip_suffix('\r'))
        .unwrap_or(source)
}
