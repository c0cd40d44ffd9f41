//! Shared test utilities for pathcat.
//!
//! Provides the sample paths and namespace used across the integration
//! tests, plus small helpers for inspecting entity maps.

pub mod fixtures;

pub use fixtures::*;

use std::collections::BTreeMap;
use std::sync::Arc;

use pathcat_types::{Entity, EntityType};

/// Count entities of one type in a qualified-name keyed map.
pub fn count_of_type(entities: &BTreeMap<String, Arc<Entity>>, type_name: EntityType) -> usize {
    entities
        .values()
        .filter(|e| e.type_name == type_name)
        .count()
}

/// Entities of one type, in qualified-name order.
pub fn of_type(entities: &BTreeMap<String, Arc<Entity>>, type_name: EntityType) -> Vec<Arc<Entity>> {
    entities
        .values()
        .filter(|e| e.type_name == type_name)
        .cloned()
        .collect()
}

/// Qualified names of a map, in order.
pub fn qualified_names(entities: &BTreeMap<String, Arc<Entity>>) -> Vec<String> {
    entities.keys().cloned().collect()
}

/// Append `@namespace` the way the extractor does.
pub fn qname(prefix: &str) -> String {
    format!("{prefix}@{METADATA_NAMESPACE}")
}
