//! HDFS decomposition.

use pathcat_types::{
    EntityType, ATTRIBUTE_CLUSTER_NAME, ATTRIBUTE_NAME, ATTRIBUTE_NAMESERVICE_ID, ATTRIBUTE_PATH,
    SCHEME_SEPARATOR,
};

use crate::context::ExtractionContext;
use crate::materialize::{EntityChain, LevelDescriptor};
use crate::path::StoragePath;

/// One `hdfs_path` entity for the whole path.
///
/// With case folding on, `path`, `name` and the qualified name are lower
/// cased (scheme and host included); the namespace and `clusterName` never
/// are. A namenode address registered under an HA name service is replaced
/// by the name service id.
pub fn decompose(path: &StoragePath, ctx: &ExtractionContext) -> EntityChain {
    let fold = |s: &str| {
        if ctx.is_lower_case() {
            s.to_lowercase()
        } else {
            s.to_string()
        }
    };

    let mut level = LevelDescriptor::new(EntityType::HdfsPath, String::new());

    let attr_path = match ctx.name_services().resolve(path.authority()) {
        Some(found) => {
            level = level.with_attribute(ATTRIBUTE_NAMESERVICE_ID, found.id);
            if found.rewrite {
                format!(
                    "{}{}{}{}",
                    fold(path.scheme()),
                    SCHEME_SEPARATOR,
                    found.id,
                    fold(path.path())
                )
            } else {
                fold(&path.to_string())
            }
        }
        None => fold(&path.to_string()),
    };

    level.qualified_name = ctx.qualified_name(&attr_path);
    let level = level
        .with_attribute(ATTRIBUTE_PATH, attr_path)
        .with_attribute(ATTRIBUTE_NAME, fold(path.path_or_root()))
        .with_attribute(ATTRIBUTE_CLUSTER_NAME, ctx.namespace());

    EntityChain::flat(level)
}
