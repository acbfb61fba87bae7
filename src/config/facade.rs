//! ConfigLoader facade over the layered sources.

use super::sources;
use super::DumpConfig;
use crate::error::ApiError;
use config::Config;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `calypso-dump.toml` in `working_dir` (if any) and environment.
    pub fn load(working_dir: &Path) -> Result<DumpConfig, ApiError> {
        let builder = sources::add_working_dir_file(Config::builder(), working_dir);
        Self::finish(sources::add_environment(builder))
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<DumpConfig, ApiError> {
        let builder = sources::add_explicit_file(Config::builder(), path)?;
        Self::finish(sources::add_environment(builder))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<DumpConfig, ApiError> {
        let config: DumpConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
