//! Entity materialization.
//!
//! Decomposers describe a path as an [`EntityChain`]: level descriptors
//! from the root down to the leaf. [`materialize`] walks the chain top-down,
//! reusing any entity already known to the context under the level's
//! qualified name and creating (and caching) the rest, each new entity
//! linked to the entity of the level above it.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, trace};

use pathcat_types::{
    Entity, EntityType, EntityWithExtInfo, RelatedObjectRef, ATTRIBUTE_QUALIFIED_NAME,
};

use crate::context::ExtractionContext;

/// How a level points at the level above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    /// Relationship attribute name on the child
    pub attribute: &'static str,
    /// Catalog relationship type
    pub relationship_type: &'static str,
}

/// Description of one hierarchy level, before materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDescriptor {
    pub type_name: EntityType,
    pub qualified_name: String,
    pub attributes: Vec<(&'static str, String)>,
    pub parent_link: Option<ParentLink>,
    /// Report this level in `referred_entities` when it sits above the leaf.
    pub referred: bool,
}

impl LevelDescriptor {
    pub fn new(type_name: EntityType, qualified_name: impl Into<String>) -> Self {
        Self {
            type_name,
            qualified_name: qualified_name.into(),
            attributes: Vec::new(),
            parent_link: None,
            referred: false,
        }
    }

    pub fn with_attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    pub fn with_parent(mut self, attribute: &'static str, relationship_type: &'static str) -> Self {
        self.parent_link = Some(ParentLink {
            attribute,
            relationship_type,
        });
        self
    }

    /// Mark as a store-level entity (volume, bucket, account, container).
    pub fn referred(mut self) -> Self {
        self.referred = true;
        self
    }
}

/// Ordered levels from root to leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityChain {
    pub ancestors: Vec<LevelDescriptor>,
    pub leaf: LevelDescriptor,
    /// False for flat schemes, whose results carry no referred entities.
    pub hierarchical: bool,
}

impl EntityChain {
    /// A hierarchical chain.
    pub fn new(ancestors: Vec<LevelDescriptor>, leaf: LevelDescriptor) -> Self {
        Self {
            ancestors,
            leaf,
            hierarchical: true,
        }
    }

    /// A single-level chain with no hierarchy.
    pub fn flat(leaf: LevelDescriptor) -> Self {
        Self {
            ancestors: Vec::new(),
            leaf,
            hierarchical: false,
        }
    }

    /// Number of levels including the leaf.
    pub fn depth(&self) -> usize {
        self.ancestors.len() + 1
    }
}

/// Materialize a chain against the context and assemble the call result.
///
/// `ancestors` and `referred_entities` of the result are computed from this
/// chain alone, whether its entities were created now or by earlier calls.
pub fn materialize(chain: EntityChain, ctx: &mut ExtractionContext) -> EntityWithExtInfo {
    let EntityChain {
        ancestors,
        leaf,
        hierarchical,
    } = chain;

    let mut resolved = Vec::with_capacity(ancestors.len());
    let mut referred = Vec::new();
    let mut parent: Option<Arc<Entity>> = None;

    for level in ancestors {
        let is_referred = level.referred;
        let entity = resolve(level, parent.as_deref(), ctx);
        if is_referred {
            referred.push(Arc::clone(&entity));
        }
        resolved.push(Arc::clone(&entity));
        parent = Some(entity);
    }

    let mut result = EntityWithExtInfo::new(resolve(leaf, parent.as_deref(), ctx));
    result.ancestors = resolved;
    if hierarchical {
        result.referred_entities = Some(BTreeMap::new());
        for entity in referred {
            result.add_referred_entity(entity);
        }
    }
    result
}

fn resolve(
    level: LevelDescriptor,
    parent: Option<&Entity>,
    ctx: &mut ExtractionContext,
) -> Arc<Entity> {
    if let Some(existing) = ctx.entity(&level.qualified_name) {
        trace!(qualified_name = %level.qualified_name, "Reusing known entity");
        return Arc::clone(existing);
    }

    let mut entity = Entity::new(level.type_name);
    entity.set_attribute(ATTRIBUTE_QUALIFIED_NAME, level.qualified_name);
    for (key, value) in level.attributes {
        entity.set_attribute(key, value);
    }
    if let (Some(link), Some(parent)) = (level.parent_link, parent) {
        entity.set_relationship(
            link.attribute,
            RelatedObjectRef::to(parent, link.relationship_type),
        );
    }

    debug!(
        type_name = %entity.type_name,
        qualified_name = entity.qualified_name().unwrap_or_default(),
        "Created entity"
    );
    ctx.put_entity(entity)
}
