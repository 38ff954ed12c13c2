//! RenderConfig struct definition and default implementation.

use super::types::*;
use std::path::PathBuf;

/// Resolved configuration for one render pass.
///
/// Built once from the command line, validated, then handed to the
/// render command. The default is the fixed-path mode:
/// `template.j2` rendered from environment variables into `./frr.conf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Template file to load.
    pub template: PathBuf,

    /// Where the variables come from.
    pub source: ParamSource,

    /// Where the rendered text is written.
    pub destination: Destination,

    /// How `NEIGHBORS` is split when read from the environment.
    pub neighbor_split: NeighborSplit,

    /// Print to stdout instead of writing `destination`.
    pub to_stdout: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            source: ParamSource::Env,
            destination: Destination::default(),
            neighbor_split: NeighborSplit::default(),
            to_stdout: false,
        }
    }
}
