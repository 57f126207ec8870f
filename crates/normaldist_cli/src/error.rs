//! Error types for the harness.

use normaldist_core::FillError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by harness commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Result file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Result file could not be encoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No generator registered under the requested name.
    #[error("Unknown generator: {name}. Registered: {available}")]
    UnknownGenerator {
        /// Requested name.
        name: String,
        /// Comma-separated registered names.
        available: String,
    },

    /// A generator rejected its output buffer.
    #[error("Fill error: {0}")]
    Fill(#[from] FillError),

    /// One or more generators failed the moment checks.
    #[error("Verification failed for: {}", .0.join(", "))]
    VerificationFailed(Vec<String>),
}

/// Result alias for harness operations.
pub type Result<T> = std::result::Result<T, CliError>;
