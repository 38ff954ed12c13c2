//! Template variable bindings for frr-render.
//!
//! `RenderParameters` is a flat, ordered mapping from variable name to a
//! JSON-compatible value. It is built once from either the process
//! environment or a YAML/JSON data file and never mutated afterwards.

mod document;
mod env;

use crate::config::{NeighborSplit, ParamSource};
use crate::error::{RenderError, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Variable bindings for one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderParameters {
    bindings: BTreeMap<String, Value>,
}

impl RenderParameters {
    /// Load parameters from the configured source.
    pub fn load(source: &ParamSource, split: NeighborSplit) -> Result<Self> {
        match source {
            ParamSource::Env => Self::from_env(split),
            ParamSource::File(path) => Self::from_file(path),
        }
    }

    /// Build parameters from a list of name/value pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            bindings: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Build a tera context holding every binding.
    pub fn to_context(&self) -> Result<tera::Context> {
        tera::Context::from_serialize(&self.bindings).map_err(|e| {
            RenderError::ParameterError(format!("failed to build template context: {}", e))
        })
    }

    /// Serialize bindings to a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.bindings).map_err(|e| {
            RenderError::ParameterError(format!("failed to serialize parameters to YAML: {}", e))
        })
    }
}

#[cfg(test)]
impl RenderParameters {
    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_pairs_and_lookup() {
        let params = RenderParameters::from_pairs([
            ("ASN", json!(65001)),
            ("NEIGHBORS", json!(["10.0.0.1"])),
        ]);

        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
        assert_eq!(params.get("ASN"), Some(&json!(65001)));
        assert_eq!(params.get("VTEP_LOCAL"), None);
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let params = RenderParameters::from_pairs([
            ("VTEP_LOCAL", json!("")),
            ("ASN", json!(0)),
            ("NEIGHBORS", json!([""])),
        ]);
        let names: Vec<&str> = params.names().collect();
        assert_eq!(names, vec!["ASN", "NEIGHBORS", "VTEP_LOCAL"]);
    }

    #[test]
    fn test_to_context_contains_bindings() {
        let params = RenderParameters::from_pairs([("ASN", json!("65001"))]);
        let context = params.to_context().unwrap();
        assert_eq!(context.get("ASN"), Some(&json!("65001")));
    }

    #[test]
    fn test_to_yaml_orders_keys() {
        let params = RenderParameters::from_pairs([
            ("NEIGHBORS", json!(["10.0.0.1", "10.0.0.2"])),
            ("ASN", json!(65001)),
        ]);
        let yaml = params.to_yaml().unwrap();
        assert!(yaml.starts_with("ASN: 65001\n"), "unexpected YAML: {yaml}");
        let first = yaml.find("10.0.0.1").unwrap();
        let second = yaml.find("10.0.0.2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_default_is_empty() {
        let params = RenderParameters::default();
        assert!(params.is_empty());
        let yaml = params.to_yaml().unwrap();
        let parsed: serde_yaml::Mapping = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed.is_empty());
    }
}
