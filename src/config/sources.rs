//! Configuration sources: working-directory file and environment overlay

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// File looked up in the working directory when no explicit file is given
pub const CONFIG_FILE_NAME: &str = "calypso-dump.toml";

/// Add `calypso-dump.toml` from `dir`, if present.
pub fn add_working_dir_file(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(dir.join(CONFIG_FILE_NAME)).required(false))
}

/// Add a required configuration file.
pub fn add_explicit_file(
    builder: ConfigBuilder<DefaultState>,
    path: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    Ok(builder.add_source(File::from(path.to_path_buf()).required(true)))
}

/// Add environment variable overlay to builder.
/// Uses CALYPSO_DUMP_ prefix and __ as separator for nested keys.
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("CALYPSO_DUMP")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
