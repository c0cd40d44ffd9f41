//! Storage path to catalog entity extraction.
//!
//! This crate turns a storage path (HDFS, Ozone, ADLS Gen2, S3/S3A) into the
//! hierarchy of catalog entities describing where it lives: service or
//! account, volume/container/bucket, intermediate directories, and the path
//! itself. Entities are identified by qualified name and cached in an
//! [`ExtractionContext`] so a batch of calls shares its ancestors.
//!
//! # Module Organization
//!
//! - [`path`] - `StoragePath` parser
//! - [`scheme`] - Scheme classifier
//! - [`context`] - Session configuration and entity cache
//! - [`config`] - Serializable extractor settings
//! - [`nameservice`] - HDFS HA name service mapping
//! - [`decompose`] - Per-scheme decomposers
//! - [`materialize`] - Builds or reuses entities along a chain
//! - [`extract`] - Entry points
//! - [`shared`] - Mutex-guarded context for concurrent workers
//!
//! # Example
//!
//! ```
//! use pathcat_extract::{extract_path, ExtractionContext};
//! use pathcat_types::EntityType;
//!
//! let mut ctx = ExtractionContext::new("metaspace");
//! let result = extract_path("ofs://bucket1.volume1.ozone1/files/file.txt", &mut ctx).unwrap();
//!
//! assert_eq!(result.entity.type_name, EntityType::OzoneKey);
//! assert_eq!(result.entity.name(), Some("/files/file.txt"));
//! assert_eq!(result.referred_entities().map(|m| m.len()), Some(2));
//! assert_eq!(ctx.len(), 3);
//! ```
//!
//! # Case folding
//!
//! HDFS paths are folded only when the context asks for it. S3 v1
//! pseudo-directory keys are always folded, below a bucket that keeps its
//! case. S3 v2 and ADLS Gen2 never fold.

pub mod config;
pub mod context;
pub mod decompose;
pub mod extract;
pub mod materialize;
pub mod nameservice;
pub mod path;
pub mod scheme;
pub mod shared;

pub use config::{ExtractorConfig, DEFAULT_NAMESPACE};
pub use context::ExtractionContext;
pub use extract::{extract_path, get_path_entity};
pub use materialize::{materialize, EntityChain, LevelDescriptor, ParentLink};
pub use nameservice::{NameServiceMap, NameServiceMatch};
pub use path::StoragePath;
pub use scheme::SchemeFamily;
pub use shared::SharedExtractionContext;
