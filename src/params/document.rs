//! Data-file parameter source.
//!
//! The file is parsed as YAML, which also accepts JSON, and its top-level
//! mapping is bound wholesale. No keys are added, renamed or defaulted.

use super::RenderParameters;
use crate::error::{RenderError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

impl RenderParameters {
    /// Load parameters from a YAML or JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            RenderError::ParameterError(format!(
                "failed to read vars file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let params = Self::from_document(&content).map_err(|e| match e {
            RenderError::ParameterError(msg) => {
                RenderError::ParameterError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::debug!(
            path = %path.display(),
            variables = params.len(),
            "read parameters from file"
        );
        if params.is_empty() {
            tracing::warn!(path = %path.display(), "vars file defines no variables");
        }
        Ok(params)
    }

    /// Parse parameters from a YAML or JSON document.
    ///
    /// The top level must be a mapping with string keys.
    pub fn from_document(content: &str) -> Result<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| RenderError::ParameterError(format!("failed to parse YAML: {}", e)))?;

        let mapping = match document {
            serde_yaml::Value::Mapping(mapping) => mapping,
            other => {
                return Err(RenderError::ParameterError(format!(
                    "top level must be a mapping, found {}",
                    kind_of(&other)
                )));
            }
        };

        let mut bindings = BTreeMap::new();
        for (key, value) in mapping {
            let name = match key {
                serde_yaml::Value::String(name) => name,
                other => {
                    return Err(RenderError::ParameterError(format!(
                        "variable names must be strings, found {} key",
                        kind_of(&other)
                    )));
                }
            };
            let value: Value = serde_json::to_value(&value).map_err(|e| {
                RenderError::ParameterError(format!("unsupported value for '{}': {}", name, e))
            })?;
            bindings.insert(name, value);
        }

        Ok(Self { bindings })
    }
}

fn kind_of(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}
