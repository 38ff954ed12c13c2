//! Configuration model for frr-render.
//!
//! A render differs only in where variables come from and where the output
//! goes. Both choices live in one `RenderConfig`: a `ParamSource`
//! (environment or data file) and a `Destination` (fixed path or a path
//! from the command line).

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::RenderConfig;
pub use types::{Destination, NeighborSplit, ParamSource};
