//! CLI Tooling
//!
//! Command-line interface for capturing, inspecting and verifying card dumps.

use crate::card::FsCardEnvironment;
use crate::config::{ConfigLoader, DumpConfig};
use crate::dump::RawDump;
use crate::error::ApiError;
use crate::store::DocumentStore;
use crate::tooling::format::format_stats_text;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// Calypso dump CLI - snapshot card file trees to XML and back
#[derive(Parser)]
#[command(name = "calypso-dump")]
#[command(about = "Snapshot Calypso card file trees and convert them to and from XML dumps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides ./calypso-dump.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply logging flags on top of the loaded configuration.
    ///
    /// `--log-file` is not folded in here; it is passed to `init_logging`
    /// so it keeps precedence over CALYPSO_DUMP_LOG_FILE.
    pub fn apply_log_overrides(&self, config: &mut DumpConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Capture a directory-backed card and write its XML dump
    Snapshot {
        /// Directory whose entries are the card's root files
        #[arg(long)]
        source: PathBuf,
        /// Output document path
        #[arg(long)]
        output: PathBuf,
        /// Bytes per record (overrides source.record_size)
        #[arg(long)]
        record_size: Option<usize>,
        /// Spaces per nesting level (overrides codec.indent)
        #[arg(long)]
        indent: Option<usize>,
    },
    /// Print a stored dump
    Show {
        /// Dump document path
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Summarize a stored dump
    Stats {
        /// Dump document path
        file: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check that a stored dump re-encodes without loss
    Verify {
        /// Dump document path
        file: PathBuf,
    },
}

/// CLI context holding the resolved configuration
pub struct CliContext {
    config: DumpConfig,
}

impl CliContext {
    /// Load configuration from `config_path`, or from the working directory.
    pub fn new(config_path: Option<&Path>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&std::env::current_dir()?)?,
        };
        Ok(Self { config })
    }

    pub fn from_config(config: DumpConfig) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DumpConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DumpConfig {
        &mut self.config
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Snapshot {
                source,
                output,
                record_size,
                indent,
            } => self.snapshot(source, output, *record_size, *indent),
            Commands::Show { file, format } => self.show(file, format),
            Commands::Stats { file, format } => self.stats(file, format),
            Commands::Verify { file } => self.verify(file),
        }
    }

    fn snapshot(
        &self,
        source: &Path,
        output: &Path,
        record_size: Option<usize>,
        indent: Option<usize>,
    ) -> Result<String, ApiError> {
        let record_size = record_size.unwrap_or(self.config.source.record_size);
        let env = FsCardEnvironment::new(source, record_size)?;
        let dump = RawDump::capture(&env, &self.config.snapshot_builder())?;

        let store = self
            .config
            .document_store()
            .with_indent(indent.or(self.config.codec.indent));
        dump.write(&store, &output.to_string_lossy(), &self.config.codec())?;

        let stats = dump.stats();
        info!(
            source = %source.display(),
            output = %output.display(),
            files = stats.files,
            records = stats.records,
            "Snapshot written"
        );
        Ok(format!(
            "Wrote {} files ({} records) to {}",
            stats.files,
            stats.records,
            output.display()
        ))
    }

    fn load(&self, file: &Path) -> Result<RawDump, ApiError> {
        let store = self.config.document_store();
        Ok(RawDump::load(
            &store,
            &file.to_string_lossy(),
            &self.config.codec(),
        )?)
    }

    fn show(&self, file: &Path, format: &str) -> Result<String, ApiError> {
        let dump = self.load(file)?;
        match format {
            "text" => Ok(dump.render_debug(&self.config.codec()).trim_end().to_string()),
            "json" => Ok(serde_json::to_string_pretty(dump.files())?),
            other => Err(invalid_format(other)),
        }
    }

    fn stats(&self, file: &Path, format: &str) -> Result<String, ApiError> {
        let stats = self.load(file)?.stats();
        match format {
            "text" => Ok(format_stats_text(&file.display().to_string(), &stats)
                .trim_end()
                .to_string()),
            "json" => Ok(serde_json::to_string_pretty(&stats)?),
            other => Err(invalid_format(other)),
        }
    }

    fn verify(&self, file: &Path) -> Result<String, ApiError> {
        let codec = self.config.codec();
        let store = self.config.document_store();
        let document = store.load_document(&file.to_string_lossy())?;
        let dump = RawDump::new(codec.from_document(&document)?);

        let shadowed = dump.stats().shadowed_files;
        if shadowed > 0 {
            return Err(ApiError::VerificationFailed(format!(
                "{} container file(s) in {} mix records and child files; their records would be dropped",
                shadowed,
                file.display()
            )));
        }

        let reencoded = dump.to_document(&codec);
        let decoded = RawDump::new(codec.from_document(&reencoded)?);
        if decoded != dump {
            return Err(ApiError::VerificationFailed(format!(
                "{} does not survive re-encoding",
                file.display()
            )));
        }

        Ok(format!(
            "{}: {} files round-trip without loss",
            file.display(),
            dump.stats().files
        ))
    }
}

fn invalid_format(format: &str) -> ApiError {
    ApiError::ConfigError(format!(
        "Invalid output format: {} (must be 'text' or 'json')",
        format
    ))
}
