//! Configuration types and defaults for frr-render.
//!
//! This module defines the enums and constants that make up a
//! `RenderConfig`: where variables come from, where output goes, and how
//! the neighbor list is split.

use std::path::{Path, PathBuf};

/// Template rendered when no `--template` is given, relative to the working directory.
pub const DEFAULT_TEMPLATE: &str = "template.j2";

/// Output path used when no OUTPUT argument is given.
pub const DEFAULT_OUTPUT: &str = "./frr.conf";

/// Data file read for `--source file` when no `--vars-file` is given.
pub const DEFAULT_VARS_FILE: &str = "variables.json";

/// Where template variables are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSource {
    /// `ASN`/`ASNUMBER`, `VTEP_LOCAL` and `NEIGHBORS` from the process environment.
    Env,
    /// Top-level mapping of a YAML/JSON document, bound wholesale.
    File(PathBuf),
}

/// Where the rendered configuration is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The fixed default path (`./frr.conf`).
    Fixed(PathBuf),
    /// A path supplied as the first command-line argument.
    Argv(PathBuf),
}

impl Destination {
    /// The fixed default destination.
    pub fn fixed() -> Self {
        Self::Fixed(PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Build a destination from an optional command-line path.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::Argv(path),
            None => Self::fixed(),
        }
    }

    /// The path the rendered file is written to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Fixed(path) | Self::Argv(path) => path,
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::fixed()
    }
}

/// How a comma-separated `NEIGHBORS` value becomes a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborSplit {
    /// Split on every comma and keep empty items, so `""` yields `[""]`.
    #[default]
    Preserve,
    /// Split on commas and discard empty items, so `""` yields `[]`.
    DropEmpty,
}

impl NeighborSplit {
    /// Pick the split mode from the `--drop-empty-neighbors` flag.
    pub fn from_flag(drop_empty: bool) -> Self {
        if drop_empty {
            Self::DropEmpty
        } else {
            Self::Preserve
        }
    }
}
