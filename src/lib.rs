//! Calypso Dump: Card File System Snapshots
//!
//! Captures a Calypso card file tree (MF, DF and EF files) into a detached
//! in-memory dump, and converts that dump to and from an XML document with
//! hex-encoded record payloads.

pub mod card;
pub mod codec;
pub mod config;
pub mod dump;
pub mod error;
pub mod logging;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;

pub use codec::DocumentCodec;
pub use dump::RawDump;
pub use error::{ApiError, DumpError, StorageError};
pub use tree::node::DumpNode;
