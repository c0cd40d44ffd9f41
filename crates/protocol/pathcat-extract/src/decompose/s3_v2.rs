//! S3/S3A decomposition, model v2.
//!
//! One `aws_s3_v2_pseudo_dir` per key segment, original case kept. Object
//! prefixes carry a trailing slash.

use pathcat_types::{
    EntityType, PathError, Result, ATTRIBUTE_CONTAINER, ATTRIBUTE_NAME, ATTRIBUTE_OBJECT_PREFIX,
    PATH_SEPARATOR, RELATIONSHIP_AWS_S3_V2_CONTAINER_CONTAINED, SCHEME_SEPARATOR,
};

use crate::context::ExtractionContext;
use crate::materialize::{EntityChain, LevelDescriptor};
use crate::path::StoragePath;

/// Bucket, then one pseudo-directory per segment.
///
/// A path without segments yields the bucket as the leaf.
pub fn decompose(path: &StoragePath, ctx: &ExtractionContext) -> Result<EntityChain> {
    let (bucket, bucket_prefix) = scheme_and_bucket(path)?;

    let bucket_level =
        LevelDescriptor::new(EntityType::AwsS3V2Bucket, ctx.qualified_name(&bucket_prefix))
            .with_attribute(ATTRIBUTE_NAME, bucket)
            .referred();

    let mut ancestors = Vec::new();
    let mut leaf = bucket_level;
    let mut object_prefix = String::from(PATH_SEPARATOR);

    for segment in path.segments() {
        object_prefix.push_str(segment);
        object_prefix.push(PATH_SEPARATOR);

        let dir_level = LevelDescriptor::new(
            EntityType::AwsS3V2PseudoDir,
            ctx.qualified_name(&format!("{bucket_prefix}{object_prefix}")),
        )
        .with_attribute(ATTRIBUTE_NAME, segment)
        .with_attribute(ATTRIBUTE_OBJECT_PREFIX, object_prefix.clone())
        .with_parent(ATTRIBUTE_CONTAINER, RELATIONSHIP_AWS_S3_V2_CONTAINER_CONTAINED);

        ancestors.push(std::mem::replace(&mut leaf, dir_level));
    }

    Ok(EntityChain::new(ancestors, leaf))
}

/// Bucket name and the `scheme://bucket` prefix, both as written
/// shared by both S3 models.
pub(crate) fn scheme_and_bucket(path: &StoragePath) -> Result<(&str, String)> {
    let bucket = path.authority();
    if bucket.is_empty() {
        return Err(PathError::malformed(path.to_string(), "missing S3 bucket"));
    }
    let prefix = format!("{}{}{}", path.scheme(), SCHEME_SEPARATOR, bucket);
    Ok((bucket, prefix))
}
