//! Error types for the cek command-line tool.

use thiserror::Error;

/// Errors surfaced to the command layer.
///
/// Operation errors produced by a wrapped closure are passed through
/// `run_with_progress` untouched; only presentation and configuration
/// failures originate in this crate.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Operation(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}
