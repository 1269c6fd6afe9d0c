//! CLI error types.

use thiserror::Error;
use uqtf_core::types::UqError;
use uqtf_functions::FunctionError;

use crate::config::ConfigError;

/// Errors surfaced by the `uqtf` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Function(#[from] FunctionError),

    #[error(transparent)]
    Core(#[from] UqError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
