//! Per-scheme path decomposition.
//!
//! Each decomposer is a pure function from a parsed path and the context's
//! configuration to an [`EntityChain`]; none of them touch the cache.
//!
//! - [`hdfs`]: one flat `hdfs_path` entity
//! - [`ozone`]: volume, bucket, key
//! - [`adls`]: account, container, one directory per segment
//! - [`s3_v1`]: bucket, one pseudo-directory for the whole key
//! - [`s3_v2`]: bucket, one pseudo-directory per segment

pub mod adls;
pub mod hdfs;
pub mod ozone;
pub mod s3_v1;
pub mod s3_v2;

use pathcat_types::{Result, S3ModelVersion};

use crate::context::ExtractionContext;
use crate::materialize::EntityChain;
use crate::path::StoragePath;
use crate::scheme::SchemeFamily;

/// Decompose a path with the strategy for its scheme family.
pub fn decompose(
    path: &StoragePath,
    family: SchemeFamily,
    ctx: &ExtractionContext,
) -> Result<EntityChain> {
    match family {
        SchemeFamily::Hdfs => Ok(hdfs::decompose(path, ctx)),
        SchemeFamily::Ozone => ozone::decompose(path, ctx),
        SchemeFamily::AdlsGen2 => adls::decompose(path, ctx),
        SchemeFamily::S3 => match ctx.s3_model_version() {
            S3ModelVersion::V1 => s3_v1::decompose(path, ctx),
            S3ModelVersion::V2 => s3_v2::decompose(path, ctx),
        },
    }
}
