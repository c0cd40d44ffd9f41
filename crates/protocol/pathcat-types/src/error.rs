//! Error types for path extraction.
//!
//! Every failure is a precondition violation: there is no I/O and nothing
//! to retry. Callers decide whether to skip the offending path or abort.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, PathError>;

/// Numeric error codes, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Scheme is not one of the supported storage families
    UnsupportedScheme = 0x0001,
    /// Path or authority is missing a required part
    MalformedPath = 0x0002,
    /// S3 model version text is not recognized
    InvalidModelVersion = 0x0003,
    /// Configuration file is unreadable or invalid
    InvalidConfig = 0x0010,
    /// Unexpected failure outside the extractor (I/O, output)
    InternalError = 0x00FE,
    /// Shared context lock was poisoned by a panicking holder
    LockPoisoned = 0x00FF,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get a user-friendly hint for fixing the input.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedScheme => {
                Some("Supported schemes: hdfs://, ofs://, o3fs://, abfs://, abfss://, s3://, s3a://")
            }
            Self::MalformedPath => Some(
                "Ozone paths need bucket.volume.service hosts; ADLS Gen2 paths need container@account hosts.",
            ),
            Self::InvalidModelVersion => Some("Use 'v1' or 'v2' for the S3 model version."),
            Self::InvalidConfig => Some("Check config.toml, or run 'pathcat init --force' to rewrite it."),
            Self::InternalError | Self::LockPoisoned => None,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.code())
    }
}

/// Errors raised while parsing or extracting a storage path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The scheme prefix does not belong to a supported storage family.
    #[error("Unsupported scheme: {scheme}://")]
    UnsupportedScheme { scheme: String },

    /// The path or its authority is missing a required component.
    #[error("Malformed path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    /// S3 model version is neither v1 nor v2.
    #[error("Invalid S3 model version: {0}")]
    InvalidModelVersion(String),

    /// Lock poisoning error.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

impl PathError {
    /// Create an unsupported scheme error.
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Self {
        PathError::UnsupportedScheme {
            scheme: scheme.into(),
        }
    }

    /// Create a malformed path error.
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        PathError::MalformedPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a lock poisoned error.
    pub fn lock_poisoned(msg: impl Into<String>) -> Self {
        PathError::LockPoisoned(msg.into())
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedScheme { .. } => ErrorCode::UnsupportedScheme,
            Self::MalformedPath { .. } => ErrorCode::MalformedPath,
            Self::InvalidModelVersion(_) => ErrorCode::InvalidModelVersion,
            Self::LockPoisoned(_) => ErrorCode::LockPoisoned,
        }
    }
}
