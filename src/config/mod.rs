//! Configuration
//!
//! Layered settings for the codec, the filesystem card source and logging.
//! Sources, lowest precedence first: built-in defaults, `calypso-dump.toml`
//! (or an explicit file), then `CALYPSO_DUMP_*` environment variables with
//! `__` separating nested keys, e.g. `CALYPSO_DUMP_CODEC__MAX_DEPTH=16`.

pub mod facade;
pub mod sources;

use crate::card::fs::DEFAULT_RECORD_SIZE;
use crate::codec::{DocumentCodec, LowerHex};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::store::FsDocumentStore;
use crate::tree::{SnapshotBuilder, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};

pub use facade::ConfigLoader;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DumpConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub codec: CodecConfig,

    #[serde(default)]
    pub source: SourceConfig,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Document codec settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Recursion limit for snapshots and decoding
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Spaces per nesting level in written documents; None writes one line
    #[serde(default)]
    pub indent: Option<usize>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            indent: None,
        }
    }
}

fn default_record_size() -> usize {
    DEFAULT_RECORD_SIZE
}

/// Filesystem card source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Bytes per record when cutting regular files into records
    #[serde(default = "default_record_size")]
    pub record_size: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            record_size: default_record_size(),
        }
    }
}

impl DumpConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.codec.max_depth == 0 {
            return Err(ApiError::ConfigError(
                "codec.max_depth must be at least 1".to_string(),
            ));
        }
        if self.source.record_size == 0 {
            return Err(ApiError::ConfigError(
                "source.record_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn codec(&self) -> DocumentCodec<LowerHex> {
        DocumentCodec::new(LowerHex, self.codec.max_depth)
    }

    pub fn snapshot_builder(&self) -> SnapshotBuilder {
        SnapshotBuilder::new(self.codec.max_depth)
    }

    pub fn document_store(&self) -> FsDocumentStore {
        FsDocumentStore::new()
            .with_indent(self.codec.indent)
            .with_max_depth(self.codec.max_depth)
    }
}
