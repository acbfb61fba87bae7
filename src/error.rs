//! Error types

use thiserror::Error;

/// Failures raised by a document store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("I/O error on {locator}: {source}")]
    Io {
        locator: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised while capturing, encoding or decoding a dump
#[derive(Debug, Error)]
pub enum DumpError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Invalid hex in record {text:?}: {reason}")]
    InvalidHex { text: String, reason: String },

    #[error("Card source error: {0}")]
    Source(String),

    #[error("Tree depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),
}

/// Application-level errors surfaced by the CLI and configuration layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Dump(#[from] DumpError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError::Dump(DumpError::Storage(err))
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
