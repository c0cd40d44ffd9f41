//! Path extraction scenarios across every supported storage family.
//!
//! Each scenario runs against a fresh context and checks the leaf entity,
//! the referred store-level entities, and what the context ends up knowing.

use std::sync::Arc;

use pathcat_extract::{extract_path, ExtractionContext, ExtractorConfig, SharedExtractionContext};
use pathcat_test_utils::*;
use pathcat_types::{
    EntityType, PathError, S3ModelVersion, ATTRIBUTE_BUCKET, ATTRIBUTE_CLUSTER_NAME,
    ATTRIBUTE_CONTAINER, ATTRIBUTE_OBJECT_PREFIX, ATTRIBUTE_PATH, ATTRIBUTE_VOLUME,
    RELATIONSHIP_AWS_S3_V2_CONTAINER_CONTAINED, RELATIONSHIP_OZONE_PARENT_CHILDREN,
    RELATIONSHIP_OZONE_VOLUME_BUCKETS,
};

fn context() -> ExtractionContext {
    ExtractionContext::new(METADATA_NAMESPACE)
}

fn v2_context() -> ExtractionContext {
    context().with_s3_model_version(S3ModelVersion::V2)
}

// ============ OZONE ============

#[test]
fn test_ozone_paths() {
    for (scheme, location, key_name) in OZONE_PATHS {
        let raw = format!("{scheme}{location}");
        let mut ctx = context();
        let result = extract_path(&raw, &mut ctx).unwrap();

        let entity = &result.entity;
        assert_eq!(entity.type_name, EntityType::OzoneKey, "{raw}");
        assert_eq!(entity.name(), Some(*key_name), "{raw}");
        assert_eq!(
            entity.qualified_name(),
            Some(qname(raw.trim_end_matches('/')).as_str()),
            "{raw}"
        );

        let referred = result.referred_entities().unwrap();
        assert_eq!(referred.len(), 2, "{raw}");
        assert_eq!(ctx.len(), 3, "{raw}");

        let volume_qn = qname(&format!("{scheme}volume1"));
        let bucket_qn = qname(&format!("{scheme}volume1.bucket1"));
        let volume = result.referred_entity(&volume_qn).unwrap();
        let bucket = result.referred_entity(&bucket_qn).unwrap();
        assert_eq!(volume.type_name, EntityType::OzoneVolume);
        assert_eq!(bucket.type_name, EntityType::OzoneBucket);

        let bucket_ref = entity.relationship(ATTRIBUTE_BUCKET).unwrap();
        assert_eq!(bucket_ref.qualified_name, bucket_qn);
        assert_eq!(bucket_ref.relationship_type, RELATIONSHIP_OZONE_PARENT_CHILDREN);

        let volume_ref = bucket.relationship(ATTRIBUTE_VOLUME).unwrap();
        assert_eq!(volume_ref.qualified_name, volume_qn);
        assert_eq!(volume_ref.relationship_type, RELATIONSHIP_OZONE_VOLUME_BUCKETS);
    }
}

#[test]
fn test_ozone_keys_share_bucket() {
    let mut ctx = context();
    for (scheme, location, _) in OZONE_PATHS.iter().filter(|(s, _, _)| *s == "ofs://") {
        extract_path(&format!("{scheme}{location}"), &mut ctx).unwrap();
    }

    // One volume, one bucket, and three distinct keys (the trailing-slash
    // variant normalizes onto an existing key).
    assert_eq!(count_of_type(ctx.known_entities(), EntityType::OzoneVolume), 1);
    assert_eq!(count_of_type(ctx.known_entities(), EntityType::OzoneBucket), 1);
    assert_eq!(count_of_type(ctx.known_entities(), EntityType::OzoneKey), 3);
}

#[test]
fn test_ozone_bucket_root_trailing_slash() {
    let mut ctx = context();
    let bare = extract_path("ofs://b.v.svc", &mut ctx).unwrap();
    let slashed = extract_path("ofs://b.v.svc/", &mut ctx).unwrap();

    assert!(Arc::ptr_eq(&bare.entity, &slashed.entity));
    assert_eq!(bare.entity.qualified_name(), Some(qname("ofs://b.v.svc").as_str()));
    assert_eq!(bare.entity.name(), Some("/"));
    // volume, bucket, root key
    assert_eq!(ctx.len(), 3);
}

// ============ HDFS ============

#[test]
fn test_hdfs_path() {
    let mut ctx = context();
    let result = extract_path(HDFS_PATH, &mut ctx).unwrap();

    let entity = &result.entity;
    assert_eq!(entity.type_name, EntityType::HdfsPath);
    assert_eq!(entity.qualified_name(), Some(qname(HDFS_PATH).as_str()));
    assert_eq!(entity.attribute(ATTRIBUTE_PATH), Some(HDFS_PATH));
    assert_eq!(
        entity.name(),
        Some("/warehouse/tablespace/external/hive/taBlE_306")
    );
    assert_eq!(entity.attribute(ATTRIBUTE_CLUSTER_NAME), Some(METADATA_NAMESPACE));
    assert!(entity.parent().is_none());

    assert!(result.referred_entities().is_none());
    assert!(result.ancestors().is_empty());
    assert_eq!(ctx.len(), 1);
}

#[test]
fn test_hdfs_path_lower_case() {
    let mut ctx = context().with_lower_case(true);
    let result = extract_path(HDFS_PATH, &mut ctx).unwrap();

    let lowered = HDFS_PATH.to_lowercase();
    let entity = &result.entity;
    assert_eq!(entity.qualified_name(), Some(qname(&lowered).as_str()));
    assert_eq!(entity.attribute(ATTRIBUTE_PATH), Some(lowered.as_str()));
    assert_eq!(
        entity.name(),
        Some("/warehouse/tablespace/external/hive/table_306")
    );
    assert!(result.referred_entities().is_none());
    assert_eq!(ctx.len(), 1);
}

#[test]
fn test_hdfs_name_service_from_config() {
    let mut config = ExtractorConfig::new(METADATA_NAMESPACE);
    config.name_services.insert(
        "mycluster".to_string(),
        vec!["nn1.example.com:8020".to_string(), "nn2.example.com:8020".to_string()],
    );
    let mut ctx = config.to_context();

    let a = extract_path("hdfs://nn1.example.com:8020/data/events", &mut ctx).unwrap();
    let b = extract_path("hdfs://NN2.example.com:8020/data/events", &mut ctx).unwrap();

    assert!(Arc::ptr_eq(&a.entity, &b.entity));
    assert_eq!(
        a.entity.qualified_name(),
        Some(qname("hdfs://mycluster/data/events").as_str())
    );
    assert_eq!(ctx.len(), 1);
}

// ============ ADLS GEN2 ============

#[test]
fn test_adls_gen2_paths() {
    for (scheme, raw) in [(ABFS_SCHEME, ABFS_PATH), (ABFSS_SCHEME, ABFSS_PATH)] {
        let mut ctx = context();
        let result = extract_path(raw, &mut ctx).unwrap();

        let entity = &result.entity;
        assert_eq!(entity.type_name, EntityType::AdlsGen2Directory, "{raw}");
        assert_eq!(entity.name(), Some("sample.csv"), "{raw}");
        assert_eq!(
            entity.qualified_name(),
            Some(qname(&format!("{scheme}data@razrangersan/tmp/cdp-demo/sample.csv/")).as_str())
        );

        let referred = result.referred_entities().unwrap();
        assert_eq!(referred.len(), 2, "{raw}");
        assert!(result
            .referred_entity(&qname(&format!("{scheme}razrangersan")))
            .is_some());
        assert!(result
            .referred_entity(&qname(&format!("{scheme}data@razrangersan")))
            .is_some());

        let known = ctx.known_entities();
        assert_eq!(known.len(), 5, "{raw}");
        assert_eq!(count_of_type(known, EntityType::AdlsGen2Account), 1);
        assert_eq!(count_of_type(known, EntityType::AdlsGen2Container), 1);
        assert_eq!(count_of_type(known, EntityType::AdlsGen2Directory), 3);
    }
}

// ============ S3 ============

#[test]
fn test_s3_v1_paths() {
    for (scheme, raw) in [(S3_SCHEME, S3_PATH), (S3A_SCHEME, S3A_PATH)] {
        let mut ctx = context();
        let result = extract_path(raw, &mut ctx).unwrap();

        let entity = &result.entity;
        assert_eq!(entity.type_name, EntityType::AwsS3PseudoDir, "{raw}");
        assert_eq!(entity.name(), Some("/1234567890/renders/irradiance_a.csv"));
        assert_eq!(
            entity.attribute(ATTRIBUTE_OBJECT_PREFIX),
            Some("/1234567890/renders/irradiance_a.csv")
        );
        assert_eq!(
            entity.qualified_name(),
            Some(qname(&raw.to_lowercase()).as_str())
        );

        let referred = result.referred_entities().unwrap();
        assert_eq!(referred.len(), 1);
        let bucket = result
            .referred_entity(&qname(&format!("{scheme}aws_my_bucket1")))
            .unwrap();
        assert_eq!(bucket.type_name, EntityType::AwsS3Bucket);
        assert_eq!(bucket.name(), Some("aws_my_bucket1"));

        assert_eq!(ctx.len(), 2);
    }
}

#[test]
fn test_s3_v2_paths() {
    for (scheme, raw) in [(S3_SCHEME, S3_PATH), (S3A_SCHEME, S3A_PATH)] {
        let mut ctx = v2_context();
        let result = extract_path(raw, &mut ctx).unwrap();

        let entity = &result.entity;
        assert_eq!(entity.type_name, EntityType::AwsS3V2PseudoDir, "{raw}");
        assert_eq!(entity.name(), Some("Irradiance_A.csv"));
        assert_eq!(
            entity.attribute(ATTRIBUTE_OBJECT_PREFIX),
            Some("/1234567890/renders/Irradiance_A.csv/")
        );
        assert_eq!(
            entity.qualified_name(),
            Some(
                qname(&format!(
                    "{scheme}aws_my_bucket1/1234567890/renders/Irradiance_A.csv/"
                ))
                .as_str()
            )
        );

        let container = entity.relationship(ATTRIBUTE_CONTAINER).unwrap();
        assert_eq!(container.type_name, EntityType::AwsS3V2PseudoDir);
        assert_eq!(
            container.relationship_type,
            RELATIONSHIP_AWS_S3_V2_CONTAINER_CONTAINED
        );

        let referred = result.referred_entities().unwrap();
        assert_eq!(referred.len(), 1);
        assert_eq!(
            count_of_type(referred, EntityType::AwsS3V2Bucket),
            1,
            "{raw}"
        );

        let known = ctx.known_entities();
        assert_eq!(known.len(), 4);
        assert_eq!(count_of_type(known, EntityType::AwsS3V2PseudoDir), 3);
    }
}

#[test]
fn test_s3_bucket_keeps_case() {
    let mut ctx = v2_context();
    let result = extract_path("s3a://MyBucket/Data/File.csv", &mut ctx).unwrap();

    assert_eq!(
        result.entity.qualified_name(),
        Some(qname("s3a://MyBucket/Data/File.csv/").as_str())
    );
    assert!(result.referred_entity(&qname("s3a://MyBucket")).is_some());
    assert!(ctx.contains(&qname("s3a://MyBucket/Data/")));

    // A differently cased bucket is a different bucket.
    extract_path("s3a://mybucket/Data/File.csv", &mut ctx).unwrap();
    assert_eq!(count_of_type(ctx.known_entities(), EntityType::AwsS3V2Bucket), 2);

    let mut v1 = context();
    let result = extract_path("s3://MyBucket/Key", &mut v1).unwrap();
    assert!(result.referred_entity(&qname("s3://MyBucket")).is_some());
    assert_eq!(
        result.entity.qualified_name(),
        Some(qname("s3://MyBucket/key").as_str())
    );
}

// ============ CACHE & RESULT SHAPE ============

#[test]
fn test_repeated_extraction_is_idempotent() {
    let mut ctx = context();
    let first = extract_path(ABFS_PATH, &mut ctx).unwrap();
    let known = qualified_names(ctx.known_entities());

    let second = extract_path(ABFS_PATH, &mut ctx).unwrap();
    assert_eq!(qualified_names(ctx.known_entities()), known);
    assert!(Arc::ptr_eq(&first.entity, &second.entity));

    // Cache hits still report the full result.
    assert_eq!(second.referred_entities().map(|m| m.len()), Some(2));
    assert_eq!(second.ancestors().len(), 4);
}

#[test]
fn test_sibling_paths_share_ancestors() {
    let mut ctx = v2_context();
    let a = extract_path("s3a://bkt/logs/2024/a.json", &mut ctx).unwrap();
    let b = extract_path("s3a://bkt/logs/2024/b.json", &mut ctx).unwrap();

    for (x, y) in a.ancestors().iter().zip(b.ancestors()) {
        assert!(Arc::ptr_eq(x, y));
    }
    // bucket, logs, 2024, a.json, b.json
    assert_eq!(ctx.len(), 5);
}

#[test]
fn test_ancestor_chain_links_up() {
    let paths = [
        OZONE_PATHS[0].0.to_string() + OZONE_PATHS[0].1,
        ABFSS_PATH.to_string(),
        S3A_PATH.to_string(),
    ];
    for version in [S3ModelVersion::V1, S3ModelVersion::V2] {
        let mut ctx = context().with_s3_model_version(version);
        for raw in &paths {
            let result = extract_path(raw, &mut ctx).unwrap();

            let chain: Vec<_> = result
                .ancestors()
                .iter()
                .chain(std::iter::once(&result.entity))
                .collect();
            assert!(chain[0].parent().is_none(), "{raw}");
            for pair in chain.windows(2) {
                let parent = pair[1].parent().unwrap();
                assert_eq!(Some(parent.qualified_name.as_str()), pair[0].qualified_name());
                assert_eq!(parent.type_name, pair[0].type_name);
            }

            // Everything referred is also an ancestor.
            for referred in result.referred_entities().unwrap().values() {
                assert!(result.ancestors().iter().any(|a| Arc::ptr_eq(a, referred)));
            }
        }
    }
}

#[test]
fn test_trailing_slash_normalized() {
    let mut ctx = v2_context();
    let a = extract_path("s3://bucket/dir/sub", &mut ctx).unwrap();
    let b = extract_path("s3://bucket/dir//sub/", &mut ctx).unwrap();
    assert!(Arc::ptr_eq(&a.entity, &b.entity));
    assert_eq!(ctx.len(), 3);
}

#[test]
fn test_leaf_serializes_with_catalog_names() {
    let mut ctx = context();
    let result = extract_path(S3_PATH, &mut ctx).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["entity"]["typeName"], "aws_s3_pseudo_dir");
    assert_eq!(
        json["entity"]["relationshipAttributes"]["bucket"]["typeName"],
        "aws_s3_bucket"
    );
    assert!(json["referredEntities"].is_object());
}

// ============ ERRORS ============

#[test]
fn test_unsupported_scheme() {
    let mut ctx = context();
    for raw in ["gs://bucket/key", "file:///tmp/x", "wasb://c@a.blob.core.windows.net/x"] {
        let err = extract_path(raw, &mut ctx).unwrap_err();
        assert!(matches!(err, PathError::UnsupportedScheme { .. }), "{raw}");
    }
    assert!(ctx.is_empty());
}

#[test]
fn test_malformed_paths() {
    let mut ctx = context();
    for raw in ["", "no-scheme/path", "://host/path", "ofs://bucket-only/k", "s3:///key"] {
        let err = extract_path(raw, &mut ctx).unwrap_err();
        assert!(matches!(err, PathError::MalformedPath { .. }), "{raw:?}");
    }
    assert!(ctx.is_empty());
}

// ============ CONCURRENCY ============

#[test]
fn test_shared_context_matches_sequential() {
    let inputs = [ABFS_PATH, ABFSS_PATH, S3_PATH, S3A_PATH, HDFS_PATH];

    let mut sequential = v2_context();
    for raw in inputs {
        extract_path(raw, &mut sequential).unwrap();
    }

    let shared = SharedExtractionContext::new(v2_context());
    std::thread::scope(|scope| {
        for raw in inputs {
            let shared = shared.clone();
            scope.spawn(move || shared.extract(raw).unwrap());
        }
    });

    assert_eq!(
        qualified_names(&shared.known_entities().unwrap()),
        qualified_names(sequential.known_entities())
    );
}
