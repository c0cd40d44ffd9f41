//! CLI error types.

use pathcat_types::{ErrorCode, PathError};
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum wrapping all crate errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error.
    #[error("{0}")]
    Extract(#[from] PathError),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// User-facing error with actionable message.
    #[error("{0}")]
    User(String),

    /// Nothing to extract.
    #[error("No paths given. Pass paths as arguments or use --input.")]
    NoPaths,

    /// Config file already exists.
    #[error("Config file already exists at {0}. Use --force to overwrite.")]
    ConfigExists(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-facing error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors: 1
            Self::User(_) | Self::NoPaths | Self::ConfigExists(_) => 1,
            // Bad paths: 2
            Self::Extract(_) => 2,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) => 3,
            // IO errors: 9
            Self::Io(_) => 9,
            // JSON/format errors: 10
            Self::Json(_) => 10,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Extract(e) => e.error_code(),
            Self::Config(_) | Self::Toml(_) | Self::ConfigExists(_) => ErrorCode::InvalidConfig,
            Self::Io(_) | Self::Json(_) | Self::User(_) | Self::NoPaths => ErrorCode::InternalError,
        }
    }
}
