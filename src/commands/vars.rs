//! Implementation of the `frr-render vars` command.
//!
//! Prints the variable bindings a render would use, as YAML, without
//! touching the template or the output file.

use crate::cli::VarsArgs;
use crate::config::{NeighborSplit, ParamSource};
use crate::error::Result;
use crate::params::RenderParameters;

/// Execute the `vars` command.
pub fn cmd_vars(args: VarsArgs) -> Result<()> {
    let yaml = resolve_vars_yaml(&args)?;
    print!("{}", yaml);
    Ok(())
}

/// Resolve the bindings for `args` and serialize them.
fn resolve_vars_yaml(args: &VarsArgs) -> Result<String> {
    let source = ParamSource::from_args(&args.source)?;
    let split = NeighborSplit::from_flag(args.source.drop_empty_neighbors);
    RenderParameters::load(&source, split)?.to_yaml()
}
