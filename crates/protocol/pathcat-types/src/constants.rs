//! Attribute, relationship and separator constants.
//!
//! These names are part of the catalog's wire format and must not change.

// =============================================================================
// Separators
// =============================================================================

/// Separator between a URI scheme and its authority
pub const SCHEME_SEPARATOR: &str = "://";

/// Separator between a qualified name and its metadata namespace
pub const QNAME_SEP_METADATA_NAMESPACE: char = '@';

/// Path segment separator
pub const PATH_SEPARATOR: char = '/';

// =============================================================================
// Attribute Names
// =============================================================================

/// Globally unique identity of an entity within a namespace
pub const ATTRIBUTE_QUALIFIED_NAME: &str = "qualifiedName";

/// Display label
pub const ATTRIBUTE_NAME: &str = "name";

/// Full HDFS path
pub const ATTRIBUTE_PATH: &str = "path";

/// Metadata namespace of an HDFS path
pub const ATTRIBUTE_CLUSTER_NAME: &str = "clusterName";

/// HA name service an HDFS path was resolved through
pub const ATTRIBUTE_NAMESERVICE_ID: &str = "nameServiceId";

/// Object key prefix of an S3 pseudo-directory
pub const ATTRIBUTE_OBJECT_PREFIX: &str = "objectPrefix";

// =============================================================================
// Relationship Attribute Names
// =============================================================================

/// Ozone bucket -> volume
pub const ATTRIBUTE_VOLUME: &str = "volume";

/// Ozone key -> bucket, S3 v1 pseudo-dir -> bucket
pub const ATTRIBUTE_BUCKET: &str = "bucket";

/// ADLS Gen2 container -> account
pub const ATTRIBUTE_ACCOUNT: &str = "account";

/// ADLS Gen2 directory -> container or directory
pub const ATTRIBUTE_PARENT: &str = "parent";

/// S3 v2 pseudo-dir -> bucket or pseudo-dir
pub const ATTRIBUTE_CONTAINER: &str = "container";

// =============================================================================
// Relationship Types
// =============================================================================

pub const RELATIONSHIP_OZONE_VOLUME_BUCKETS: &str = "ozone_volume_buckets";
pub const RELATIONSHIP_OZONE_PARENT_CHILDREN: &str = "ozone_parent_children";
pub const RELATIONSHIP_ADLS_GEN2_ACCOUNT_CONTAINERS: &str = "adls_gen2_account_containers";
pub const RELATIONSHIP_ADLS_GEN2_PARENT_CHILDREN: &str = "adls_gen2_parent_children";
pub const RELATIONSHIP_AWS_S3_BUCKET_S3_PSEUDO_DIRS: &str = "aws_s3_bucket_aws_s3_pseudo_dirs";
pub const RELATIONSHIP_AWS_S3_V2_CONTAINER_CONTAINED: &str = "aws_s3_v2_container_contained";
