//! Per-call extraction result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::entity::Entity;

/// The leaf entity of one extraction call, plus the ancestors it touched.
///
/// `ancestors` is the full chain strictly above the leaf, root first.
/// `referred_entities` holds the store-level subset of that chain (volume,
/// bucket, account, container) keyed by qualified name, and is `None` for
/// flat schemes that have no hierarchy at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityWithExtInfo {
    pub entity: Arc<Entity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_entities: Option<BTreeMap<String, Arc<Entity>>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<Arc<Entity>>,
}

impl EntityWithExtInfo {
    /// A result with no referred entities.
    pub fn new(entity: Arc<Entity>) -> Self {
        Self {
            entity,
            referred_entities: None,
            ancestors: Vec::new(),
        }
    }

    /// Record a referred entity under its qualified name.
    pub fn add_referred_entity(&mut self, entity: Arc<Entity>) {
        let key = entity.qualified_name().unwrap_or_default().to_string();
        self.referred_entities
            .get_or_insert_with(BTreeMap::new)
            .insert(key, entity);
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn referred_entities(&self) -> Option<&BTreeMap<String, Arc<Entity>>> {
        self.referred_entities.as_ref()
    }

    /// Look up a referred entity by qualified name.
    pub fn referred_entity(&self, qualified_name: &str) -> Option<&Arc<Entity>> {
        self.referred_entities.as_ref()?.get(qualified_name)
    }

    /// Entities strictly above the leaf, root first.
    pub fn ancestors(&self) -> &[Arc<Entity>] {
        &self.ancestors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ATTRIBUTE_QUALIFIED_NAME;
    use crate::enums::EntityType;

    #[test]
    fn test_referred_entities_start_absent() {
        let leaf = Arc::new(Entity::new(EntityType::HdfsPath));
        let info = EntityWithExtInfo::new(leaf);
        assert!(info.referred_entities().is_none());
        assert!(info.ancestors().is_empty());
    }

    #[test]
    fn test_add_referred_entity_dedups_by_qualified_name() {
        let leaf = Arc::new(Entity::new(EntityType::OzoneKey));
        let volume = Arc::new(
            Entity::new(EntityType::OzoneVolume).with_attribute(ATTRIBUTE_QUALIFIED_NAME, "ofs://v@ns"),
        );
        let mut info = EntityWithExtInfo::new(leaf);
        info.add_referred_entity(Arc::clone(&volume));
        info.add_referred_entity(volume);

        assert_eq!(info.referred_entities().map(|m| m.len()), Some(1));
        assert!(info.referred_entity("ofs://v@ns").is_some());
    }

    #[test]
    fn test_json_omits_absent_referred_entities() {
        let leaf = Arc::new(Entity::new(EntityType::HdfsPath));
        let json = serde_json::to_value(EntityWithExtInfo::new(leaf)).unwrap();
        assert!(json.get("referredEntities").is_none());
        assert!(json.get("ancestors").is_none());
    }
}
