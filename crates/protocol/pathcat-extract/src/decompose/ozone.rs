//! Ozone decomposition.
//!
//! Paths look like `ofs://{bucket}.{volume}.{service}/{key}`. The key below
//! the bucket is kept as one flat entity.

use pathcat_types::{
    EntityType, PathError, Result, ATTRIBUTE_BUCKET, ATTRIBUTE_NAME, ATTRIBUTE_VOLUME,
    PATH_SEPARATOR, RELATIONSHIP_OZONE_PARENT_CHILDREN, RELATIONSHIP_OZONE_VOLUME_BUCKETS,
};

use crate::context::ExtractionContext;
use crate::materialize::{EntityChain, LevelDescriptor};
use crate::path::StoragePath;

/// Volume, bucket, then the key.
pub fn decompose(path: &StoragePath, ctx: &ExtractionContext) -> Result<EntityChain> {
    let (bucket, volume) = bucket_and_volume(path)?;
    let prefix = path.scheme_prefix();

    let volume_level =
        LevelDescriptor::new(EntityType::OzoneVolume, ctx.qualified_name(&format!("{prefix}{volume}")))
            .with_attribute(ATTRIBUTE_NAME, volume)
            .referred();

    let bucket_level = LevelDescriptor::new(
        EntityType::OzoneBucket,
        ctx.qualified_name(&format!("{prefix}{volume}.{bucket}")),
    )
    .with_attribute(ATTRIBUTE_NAME, bucket)
    .with_parent(ATTRIBUTE_VOLUME, RELATIONSHIP_OZONE_VOLUME_BUCKETS)
    .referred();

    // StoragePath drops trailing slashes except on the bucket root.
    let key_path = path.path().trim_end_matches(PATH_SEPARATOR);
    let key_qn = ctx.qualified_name(&format!("{prefix}{}{key_path}", path.authority()));
    let key_level = LevelDescriptor::new(EntityType::OzoneKey, key_qn)
        .with_attribute(ATTRIBUTE_NAME, path.path_or_root())
        .with_parent(ATTRIBUTE_BUCKET, RELATIONSHIP_OZONE_PARENT_CHILDREN);

    Ok(EntityChain::new(vec![volume_level, bucket_level], key_level))
}

/// Split `bucket.volume[.service...]`.
fn bucket_and_volume(path: &StoragePath) -> Result<(&str, &str)> {
    let mut parts = path.authority().split('.');
    let bucket = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PathError::malformed(path.to_string(), "missing Ozone bucket in host"))?;
    let volume = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            PathError::malformed(path.to_string(), "Ozone host must be bucket.volume.service")
        })?;
    Ok((bucket, volume))
}
