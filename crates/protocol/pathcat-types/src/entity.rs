//! Catalog entity types.
//!
//! An [`Entity`] is a typed bag of string attributes plus relationship
//! attributes pointing at other entities by qualified name. Entities never
//! own their parents; the extraction context owns every entity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{ATTRIBUTE_NAME, ATTRIBUTE_QUALIFIED_NAME};
use crate::enums::EntityType;

/// Reference from one entity to a related entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedObjectRef {
    /// Type of the referenced entity
    pub type_name: EntityType,
    /// Qualified name of the referenced entity
    pub qualified_name: String,
    /// Catalog relationship type carrying the reference
    pub relationship_type: String,
}

impl RelatedObjectRef {
    /// Reference `target` through the given relationship type.
    ///
    /// An entity without a qualified name yields an empty reference name.
    pub fn to(target: &Entity, relationship_type: impl Into<String>) -> Self {
        Self {
            type_name: target.type_name,
            qualified_name: target.qualified_name().unwrap_or_default().to_string(),
            relationship_type: relationship_type.into(),
        }
    }
}

/// A catalog entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Catalog type
    pub type_name: EntityType,
    /// Plain attributes (all values are strings)
    pub attributes: BTreeMap<String, String>,
    /// Relationship attributes, keyed by attribute name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationship_attributes: BTreeMap<String, RelatedObjectRef>,
}

impl Entity {
    /// Create an entity with no attributes.
    pub fn new(type_name: EntityType) -> Self {
        Self {
            type_name,
            attributes: BTreeMap::new(),
            relationship_attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute, builder style.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Set a relationship attribute, replacing any previous reference.
    pub fn set_relationship(&mut self, key: impl Into<String>, target: RelatedObjectRef) {
        self.relationship_attributes.insert(key.into(), target);
    }

    /// Get an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Get a relationship attribute.
    pub fn relationship(&self, key: &str) -> Option<&RelatedObjectRef> {
        self.relationship_attributes.get(key)
    }

    pub fn qualified_name(&self) -> Option<&str> {
        self.attribute(ATTRIBUTE_QUALIFIED_NAME)
    }

    pub fn name(&self) -> Option<&str> {
        self.attribute(ATTRIBUTE_NAME)
    }

    /// The single parent reference of a hierarchy entity, if any.
    pub fn parent(&self) -> Option<&RelatedObjectRef> {
        self.relationship_attributes.values().next()
    }
}
