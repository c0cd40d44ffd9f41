//! Scheme classification.
//!
//! Routes a path to one of the four supported storage families. Anything
//! else is rejected outright; there is no fallback parsing.

use std::fmt;

use pathcat_types::{PathError, Result};

use crate::path::StoragePath;

/// Storage family a path scheme belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeFamily {
    /// `hdfs://`
    Hdfs,
    /// `ofs://`, `o3fs://`
    Ozone,
    /// `abfs://`, `abfss://`
    AdlsGen2,
    /// `s3://`, `s3a://`
    S3,
}

impl SchemeFamily {
    /// Classify a scheme token (without `://`). Matching ignores ASCII case.
    pub fn classify(scheme: &str) -> Result<Self> {
        match scheme.to_ascii_lowercase().as_str() {
            "hdfs" => Ok(Self::Hdfs),
            "ofs" | "o3fs" => Ok(Self::Ozone),
            "abfs" | "abfss" => Ok(Self::AdlsGen2),
            "s3" | "s3a" => Ok(Self::S3),
            _ => Err(PathError::unsupported_scheme(scheme)),
        }
    }

    /// Classify a parsed path.
    pub fn of(path: &StoragePath) -> Result<Self> {
        Self::classify(path.scheme())
    }

    /// Scheme tokens belonging to this family.
    pub fn schemes(&self) -> &'static [&'static str] {
        match self {
            Self::Hdfs => &["hdfs"],
            Self::Ozone => &["ofs", "o3fs"],
            Self::AdlsGen2 => &["abfs", "abfss"],
            Self::S3 => &["s3", "s3a"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hdfs => "hdfs",
            Self::Ozone => "ozone",
            Self::AdlsGen2 => "adls_gen2",
            Self::S3 => "s3",
        }
    }
}

impl fmt::Display for SchemeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
