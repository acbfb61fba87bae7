//! Tooling & Integration Layer
//!
//! Command-line entry points over the snapshot, codec and store layers.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
