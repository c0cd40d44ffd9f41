//! Enumeration types for catalog entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// Catalog type of an extracted entity.
///
/// Serializes to the catalog type name (e.g. `ozone_bucket`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// A flat HDFS path
    HdfsPath,
    /// Ozone volume
    OzoneVolume,
    /// Ozone bucket within a volume
    OzoneBucket,
    /// Ozone key within a bucket
    OzoneKey,
    /// ADLS Gen2 storage account
    AdlsGen2Account,
    /// ADLS Gen2 container within an account
    AdlsGen2Container,
    /// ADLS Gen2 directory (also used for terminal objects)
    AdlsGen2Directory,
    /// S3 bucket, model v1
    AwsS3Bucket,
    /// S3 pseudo-directory covering the whole key, model v1
    AwsS3PseudoDir,
    /// S3 bucket, model v2
    AwsS3V2Bucket,
    /// S3 pseudo-directory for one key segment, model v2
    AwsS3V2PseudoDir,
}

impl EntityType {
    /// Catalog type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HdfsPath => "hdfs_path",
            Self::OzoneVolume => "ozone_volume",
            Self::OzoneBucket => "ozone_bucket",
            Self::OzoneKey => "ozone_key",
            Self::AdlsGen2Account => "adls_gen2_account",
            Self::AdlsGen2Container => "adls_gen2_container",
            Self::AdlsGen2Directory => "adls_gen2_directory",
            Self::AwsS3Bucket => "aws_s3_bucket",
            Self::AwsS3PseudoDir => "aws_s3_pseudo_dir",
            Self::AwsS3V2Bucket => "aws_s3_v2_bucket",
            Self::AwsS3V2PseudoDir => "aws_s3_v2_pseudo_dir",
        }
    }

    /// All entity types, in hierarchy order per storage family.
    pub fn all() -> [EntityType; 11] {
        [
            Self::HdfsPath,
            Self::OzoneVolume,
            Self::OzoneBucket,
            Self::OzoneKey,
            Self::AdlsGen2Account,
            Self::AdlsGen2Container,
            Self::AdlsGen2Directory,
            Self::AwsS3Bucket,
            Self::AwsS3PseudoDir,
            Self::AwsS3V2Bucket,
            Self::AwsS3V2PseudoDir,
        ]
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Granularity of the S3 entity model.
///
/// `V1` models a whole object key as one pseudo-directory; `V2` creates one
/// pseudo-directory per key segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum S3ModelVersion {
    #[default]
    V1,
    V2,
}

impl S3ModelVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for S3ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for S3ModelVersion {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            _ => Err(PathError::InvalidModelVersion(s.to_string())),
        }
    }
}
