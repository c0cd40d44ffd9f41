//! S3/S3A decomposition, model v1.
//!
//! The whole object key becomes one `aws_s3_pseudo_dir` under the bucket.
//! The key part of the pseudo-directory's qualified name, its name and its
//! object prefix are always lower cased, whatever the context's
//! case-folding setting says. The bucket keeps its case.

use pathcat_types::{
    EntityType, Result, ATTRIBUTE_BUCKET, ATTRIBUTE_NAME, ATTRIBUTE_OBJECT_PREFIX,
    RELATIONSHIP_AWS_S3_BUCKET_S3_PSEUDO_DIRS,
};

use super::s3_v2::scheme_and_bucket;
use crate::context::ExtractionContext;
use crate::materialize::{EntityChain, LevelDescriptor};
use crate::path::StoragePath;

/// Bucket, then one pseudo-directory for the key.
pub fn decompose(path: &StoragePath, ctx: &ExtractionContext) -> Result<EntityChain> {
    let (bucket, bucket_prefix) = scheme_and_bucket(path)?;

    let bucket_level = LevelDescriptor::new(EntityType::AwsS3Bucket, ctx.qualified_name(&bucket_prefix))
        .with_attribute(ATTRIBUTE_NAME, bucket)
        .referred();

    let key = path.path_or_root().to_lowercase();
    let dir_level = LevelDescriptor::new(
        EntityType::AwsS3PseudoDir,
        ctx.qualified_name(&format!("{bucket_prefix}{key}")),
    )
    .with_attribute(ATTRIBUTE_NAME, key.clone())
    .with_attribute(ATTRIBUTE_OBJECT_PREFIX, key)
    .with_parent(ATTRIBUTE_BUCKET, RELATIONSHIP_AWS_S3_BUCKET_S3_PSEUDO_DIRS);

    Ok(EntityChain::new(vec![bucket_level], dir_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATH: &str = "s3://aws_my_bucket1/1234567890/renders/Irradiance_A.csv";

    fn chain(raw: &str) -> EntityChain {
        decompose(
            &StoragePath::parse(raw).unwrap(),
            &ExtractionContext::new("metaspace"),
        )
        .unwrap()
    }

    #[test]
    fn test_key_is_one_lower_cased_level() {
        let chain = chain(PATH);
        assert_eq!(chain.depth(), 2);
        assert_eq!(chain.ancestors[0].qualified_name, "s3://aws_my_bucket1@metaspace");
        assert_eq!(
            chain.leaf.qualified_name,
            format!("{}@metaspace", PATH.to_lowercase())
        );
        assert_eq!(
            chain.leaf.attributes,
            vec![
                (ATTRIBUTE_NAME, "/1234567890/renders/irradiance_a.csv".to_string()),
                (ATTRIBUTE_OBJECT_PREFIX, "/1234567890/renders/irradiance_a.csv".to_string()),
            ]
        );
    }

    #[test]
    fn test_bucket_name_keeps_case() {
        let chain = chain("s3a://MyBucket/Key");
        assert_eq!(chain.ancestors[0].qualified_name, "s3a://MyBucket@metaspace");
        assert_eq!(
            chain.ancestors[0].attributes,
            vec![(ATTRIBUTE_NAME, "MyBucket".to_string())]
        );
        assert_eq!(chain.leaf.qualified_name, "s3a://MyBucket/key@metaspace");
    }

    #[test]
    fn test_empty_key_is_root_prefix() {
        let chain = chain("s3://bucket");
        assert_eq!(chain.leaf.qualified_name, "s3://bucket/@metaspace");
        assert_ne!(chain.leaf.qualified_name, chain.ancestors[0].qualified_name);
    }
}
