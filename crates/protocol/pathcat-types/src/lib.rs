//! Data structures for storage path extraction.
//!
//! This crate provides the catalog entity model produced when a storage path
//! (HDFS, Ozone, ADLS Gen2, S3) is decomposed into a hierarchy of entities.
//! It contains no extraction logic, only type definitions with serialization
//! support.
//!
//! # Module Organization
//!
//! - [`enums`] - Entity types and the S3 model version
//! - [`constants`] - Attribute, relationship and separator names
//! - [`entity`] - The catalog entity and its parent references
//! - [`ext_info`] - The per-call extraction result
//! - [`error`] - Error codes and the main error type
//!
//! # Example
//!
//! ```
//! use pathcat_types::{Entity, EntityType, ATTRIBUTE_NAME, ATTRIBUTE_QUALIFIED_NAME};
//!
//! let bucket = Entity::new(EntityType::AwsS3Bucket)
//!     .with_attribute(ATTRIBUTE_QUALIFIED_NAME, "s3://my-bucket@cluster1")
//!     .with_attribute(ATTRIBUTE_NAME, "my-bucket");
//!
//! assert_eq!(bucket.qualified_name(), Some("s3://my-bucket@cluster1"));
//! assert_eq!(bucket.type_name.as_str(), "aws_s3_bucket");
//! ```

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod entity;
pub mod enums;
pub mod error;
pub mod ext_info;

// Re-export all public types at the crate root for convenience

pub use constants::*;
pub use entity::{Entity, RelatedObjectRef};
pub use enums::{EntityType, S3ModelVersion};
pub use error::{ErrorCode, PathError, Result};
pub use ext_info::EntityWithExtInfo;
