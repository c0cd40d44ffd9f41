//! Extraction context.
//!
//! The context carries the session configuration (namespace, case folding,
//! S3 model version, name services) and the cache of every entity
//! materialized so far, keyed by qualified name. The cache only grows;
//! the first entity stored under a qualified name is the one every later
//! call gets back.

use std::collections::BTreeMap;
use std::sync::Arc;

use pathcat_types::{Entity, S3ModelVersion, QNAME_SEP_METADATA_NAMESPACE};

use crate::nameservice::NameServiceMap;

/// Session-scoped configuration and deduplication cache.
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    namespace: String,
    lower_case: bool,
    s3_model_version: S3ModelVersion,
    name_services: NameServiceMap,
    known_entities: BTreeMap<String, Arc<Entity>>,
}

impl ExtractionContext {
    /// Create a context for the given metadata namespace, with case
    /// folding off and the v1 S3 model.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            lower_case: false,
            s3_model_version: S3ModelVersion::V1,
            name_services: NameServiceMap::new(),
            known_entities: BTreeMap::new(),
        }
    }

    /// Fold HDFS paths to lower case.
    pub fn with_lower_case(mut self, lower_case: bool) -> Self {
        self.lower_case = lower_case;
        self
    }

    pub fn with_s3_model_version(mut self, version: S3ModelVersion) -> Self {
        self.s3_model_version = version;
        self
    }

    /// Register an HDFS HA name service and its namenode addresses.
    pub fn with_name_service<I, S>(mut self, id: impl Into<String>, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.name_services.insert(id, addresses);
        self
    }

    pub fn with_name_services(mut self, name_services: NameServiceMap) -> Self {
        self.name_services = name_services;
        self
    }

    /// Seed the cache with entities carried over from an earlier session.
    pub fn with_known_entities(mut self, entities: BTreeMap<String, Arc<Entity>>) -> Self {
        self.known_entities = entities;
        self
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_lower_case(&self) -> bool {
        self.lower_case
    }

    pub fn s3_model_version(&self) -> S3ModelVersion {
        self.s3_model_version
    }

    pub fn name_services(&self) -> &NameServiceMap {
        &self.name_services
    }

    /// Append `@namespace` to a qualified name prefix.
    pub fn qualified_name(&self, prefix: &str) -> String {
        let mut qn = String::with_capacity(prefix.len() + 1 + self.namespace.len());
        qn.push_str(prefix);
        qn.push(QNAME_SEP_METADATA_NAMESPACE);
        qn.push_str(&self.namespace);
        qn
    }

    /// Look up a known entity by qualified name.
    pub fn entity(&self, qualified_name: &str) -> Option<&Arc<Entity>> {
        self.known_entities.get(qualified_name)
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.known_entities.contains_key(qualified_name)
    }

    /// Store an entity under its qualified name and return the cached
    /// instance. If the name is already known the existing entity wins and
    /// `entity` is dropped.
    pub fn put_entity(&mut self, entity: Entity) -> Arc<Entity> {
        let key = entity.qualified_name().unwrap_or_default().to_string();
        Arc::clone(
            self.known_entities
                .entry(key)
                .or_insert_with(|| Arc::new(entity)),
        )
    }

    /// Every entity materialized in this context, keyed by qualified name.
    pub fn known_entities(&self) -> &BTreeMap<String, Arc<Entity>> {
        &self.known_entities
    }

    pub fn into_known_entities(self) -> BTreeMap<String, Arc<Entity>> {
        self.known_entities
    }

    pub fn len(&self) -> usize {
        self.known_entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_entities.is_empty()
    }

    /// Fold another context's entities into this one.
    ///
    /// Entities already known here are kept. Returns how many were added.
    pub fn merge(&mut self, other: ExtractionContext) -> usize {
        let mut added = 0;
        for (qn, entity) in other.known_entities {
            if !self.known_entities.contains_key(&qn) {
                self.known_entities.insert(qn, entity);
                added += 1;
            }
        }
        added
    }
}
