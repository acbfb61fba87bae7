//! Dump tree model and snapshot building

pub mod builder;
pub mod node;

pub use builder::{SnapshotBuilder, DEFAULT_MAX_DEPTH};
pub use node::DumpNode;
