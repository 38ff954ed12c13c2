//! Environment-variable parameter source.
//!
//! Reads the AS number, VTEP local address and neighbor list. Missing or
//! empty values fall back to defaults (`0`, `""`, `""`) and `NEIGHBORS` is
//! always split on commas, even when empty. A value that is set but not
//! valid UTF-8 is an error, never a default.

use super::RenderParameters;
use crate::config::NeighborSplit;
use crate::error::{RenderError, Result};
use serde_json::{Value, json};
use std::env::VarError;

/// Variables checked for the AS number, in order. The first non-empty one wins.
pub const ASN_VARS: &[&str] = &["ASN", "ASNUMBER"];

/// Variable holding the local VTEP address.
pub const VTEP_LOCAL_VAR: &str = "VTEP_LOCAL";

/// Variable holding the comma-separated neighbor list.
pub const NEIGHBORS_VAR: &str = "NEIGHBORS";

impl RenderParameters {
    /// Build parameters from the process environment.
    pub fn from_env(split: NeighborSplit) -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name), split)
    }

    /// Build parameters from an arbitrary variable lookup.
    ///
    /// Binds `ASN`, `VTEP_LOCAL` and `NEIGHBORS`. Values that are absent or
    /// empty count as unset. `VarError::NotUnicode` fails with
    /// `ParameterError`.
    pub fn from_lookup<F>(lookup: F, split: NeighborSplit) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let non_empty = |name: &str| match lookup(name) {
            Ok(value) if !value.is_empty() => Ok(Some(value)),
            Ok(_) | Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(RenderError::ParameterError(format!(
                "{} is not valid UTF-8",
                name
            ))),
        };

        let asn = ASN_VARS
            .iter()
            .find_map(|name| non_empty(*name).transpose())
            .transpose()?
            .map(Value::String)
            .unwrap_or_else(|| json!(0));
        let vtep_local = non_empty(VTEP_LOCAL_VAR)?.unwrap_or_default();
        let neighbors = non_empty(NEIGHBORS_VAR)?.unwrap_or_default();

        tracing::debug!(
            asn = %asn,
            vtep_local = %vtep_local,
            neighbors = %neighbors,
            "read parameters from environment"
        );

        Ok(Self::from_pairs([
            ("ASN", asn),
            (VTEP_LOCAL_VAR, Value::String(vtep_local)),
            (NEIGHBORS_VAR, json!(split_neighbors(&neighbors, split))),
        ]))
    }
}

/// Split a comma-separated neighbor list.
///
/// Items are kept verbatim (no trimming). With `NeighborSplit::Preserve`
/// an empty input yields one empty item.
pub fn split_neighbors(raw: &str, split: NeighborSplit) -> Vec<String> {
    let items = raw.split(',').map(str::to_string);
    match split {
        NeighborSplit::Preserve => items.collect(),
        NeighborSplit::DropEmpty => items.filter(|item| !item.is_empty()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use serial_test::serial;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_split_two_neighbors() {
        assert_eq!(
            split_neighbors("10.0.0.1,10.0.0.2", NeighborSplit::Preserve),
            vec!["10.0.0.1", "10.0.0.2"]
        );
    }

    #[test]
    fn test_split_empty_preserves_single_empty_item() {
        assert_eq!(split_neighbors("", NeighborSplit::Preserve), vec![""]);
    }

    #[test]
    fn test_split_empty_drop_empty_yields_nothing() {
        assert!(split_neighbors("", NeighborSplit::DropEmpty).is_empty());
    }

    #[test]
    fn test_split_keeps_whitespace_and_inner_empties() {
        assert_eq!(
            split_neighbors("10.0.0.1,, 10.0.0.3", NeighborSplit::Preserve),
            vec!["10.0.0.1", "", " 10.0.0.3"]
        );
        assert_eq!(
            split_neighbors("10.0.0.1,,10.0.0.3,", NeighborSplit::DropEmpty),
            vec!["10.0.0.1", "10.0.0.3"]
        );
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let params =
            RenderParameters::from_lookup(lookup_from(&[]), NeighborSplit::Preserve).unwrap();

        assert_eq!(params.get("ASN"), Some(&json!(0)));
        assert_eq!(params.get("VTEP_LOCAL"), Some(&json!("")));
        assert_eq!(params.get("NEIGHBORS"), Some(&json!([""])));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_empty_asn_falls_back_to_zero() {
        let params =
            RenderParameters::from_lookup(lookup_from(&[("ASN", "")]), NeighborSplit::Preserve)
                .unwrap();
        assert_eq!(params.get("ASN"), Some(&json!(0)));
    }

    #[test]
    fn test_asnumber_is_accepted() {
        let params = RenderParameters::from_lookup(
            lookup_from(&[("ASNUMBER", "65002")]),
            NeighborSplit::Preserve,
        )
        .unwrap();
        assert_eq!(params.get("ASN"), Some(&json!("65002")));
    }

    #[test]
    fn test_asn_takes_precedence_over_asnumber() {
        let params = RenderParameters::from_lookup(
            lookup_from(&[("ASN", "65001"), ("ASNUMBER", "65002")]),
            NeighborSplit::Preserve,
        )
        .unwrap();
        assert_eq!(params.get("ASN"), Some(&json!("65001")));

        let params = RenderParameters::from_lookup(
            lookup_from(&[("ASN", ""), ("ASNUMBER", "65002")]),
            NeighborSplit::Preserve,
        )
        .unwrap();
        assert_eq!(params.get("ASN"), Some(&json!("65002")));
    }

    #[test]
    fn test_all_values_bound() {
        let params = RenderParameters::from_lookup(
            lookup_from(&[
                ("ASN", "65001"),
                ("VTEP_LOCAL", "192.168.0.10"),
                ("NEIGHBORS", "10.0.0.1,10.0.0.2"),
            ]),
            NeighborSplit::Preserve,
        )
        .unwrap();

        assert_eq!(params.get("ASN"), Some(&json!("65001")));
        assert_eq!(params.get("VTEP_LOCAL"), Some(&json!("192.168.0.10")));
        assert_eq!(
            params.get("NEIGHBORS"),
            Some(&json!(["10.0.0.1", "10.0.0.2"]))
        );
    }

    #[test]
    #[serial]
    fn test_from_process_env() {
        let _guard = crate::test_support::EnvGuard::set(&[
            ("ASN", Some("64512")),
            ("ASNUMBER", None),
            ("VTEP_LOCAL", None),
            ("NEIGHBORS", Some("172.16.0.1")),
        ]);

        let params = RenderParameters::from_env(NeighborSplit::Preserve).unwrap();
        assert_eq!(params.get("ASN"), Some(&json!("64512")));
        assert_eq!(params.get("VTEP_LOCAL"), Some(&json!("")));
        assert_eq!(params.get("NEIGHBORS"), Some(&json!(["172.16.0.1"])));
    }

    #[test]
    fn test_non_unicode_value_is_a_parameter_error() {
        let lookup = |name: &str| -> std::result::Result<String, VarError> {
            match name {
                    "NEIGHBORS" => Err(VarError::NotUnicode(OsString::from("10.0.0.1"))),
                _ => Err(VarError::NotPresent),
            }
        };

        let err = RenderParameters::from_lookup(lookup, NeighborSplit::Preserve).unwrap_err();
        assert!(matches!(&err, RenderError::ParameterError(msg) if msg.contains("NEIGHBORS")));
        assert_eq!(err.exit_code(), exit_codes::PARAMETER_FAILURE);
    }

    #[test]
    fn test_non_unicode_asn_does_not_fall_through_to_asnumber() {
        let lookup = |name: &str| -> std::result::Result<String, VarError> {
            match name {
                "ASN" => Err(VarError::NotUnicode(OsString::from("650"))),
                "ASNUMBER" => Ok("65002".to_string()),
                _ => Err(VarError::NotPresent),
            }
        };

        let err = RenderParameters::from_lookup(lookup, NeighborSplit::Preserve).unwrap_err();
        assert!(matches!(&err, RenderError::ParameterError(msg) if msg.contains("ASN")));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_non_unicode_process_env_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let _guard = crate::test_support::EnvGuard::set(&[
            ("ASNUMBER", None),
            ("VTEP_LOCAL", None),
            ("NEIGHBORS", None),
        ]);
        let _asn = crate::test_support::EnvGuard::set_os(&[(
            "ASN",
            Some(OsStr::from_bytes(b"650\xff01")),
        )]);

        let err = RenderParameters::from_env(NeighborSplit::Preserve).unwrap_err();
        assert_eq!(err.to_string(), "invalid parameters: ASN is not valid UTF-8");
        assert_eq!(err.exit_code(), exit_codes::PARAMETER_FAILURE);
    }
}
