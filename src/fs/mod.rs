//! Filesystem utilities for frr-render.
//!
//! The rendered configuration is written atomically so that a crash or a
//! failed write never leaves a half-written `frr.conf` behind for the
//! router to pick up.

pub mod atomic;

pub use atomic::{atomic_write, atomic_write_file, ensure_parent_dir};
