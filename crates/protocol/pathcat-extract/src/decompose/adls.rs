//! ADLS Gen2 decomposition.
//!
//! Paths look like `abfs://{container}@{account}.dfs.core.windows.net/{dirs...}`.
//! Every path segment becomes an `adls_gen2_directory`, the last one
//! included: files and directories are not told apart.

use pathcat_types::{
    EntityType, PathError, Result, ATTRIBUTE_ACCOUNT, ATTRIBUTE_NAME, ATTRIBUTE_PARENT,
    PATH_SEPARATOR, RELATIONSHIP_ADLS_GEN2_ACCOUNT_CONTAINERS,
    RELATIONSHIP_ADLS_GEN2_PARENT_CHILDREN,
};

use crate::context::ExtractionContext;
use crate::materialize::{EntityChain, LevelDescriptor};
use crate::path::StoragePath;

/// Account, container, then one directory per segment.
///
/// A path without segments yields the container as the leaf.
pub fn decompose(path: &StoragePath, ctx: &ExtractionContext) -> Result<EntityChain> {
    let (container, account) = container_and_account(path)?;
    let prefix = path.scheme_prefix();

    let account_level = LevelDescriptor::new(
        EntityType::AdlsGen2Account,
        ctx.qualified_name(&format!("{prefix}{account}")),
    )
    .with_attribute(ATTRIBUTE_NAME, account)
    .referred();

    let container_prefix = format!("{prefix}{container}@{account}");
    let container_level =
        LevelDescriptor::new(EntityType::AdlsGen2Container, ctx.qualified_name(&container_prefix))
            .with_attribute(ATTRIBUTE_NAME, container)
            .with_parent(ATTRIBUTE_ACCOUNT, RELATIONSHIP_ADLS_GEN2_ACCOUNT_CONTAINERS)
            .referred();

    let mut ancestors = vec![account_level];
    let mut leaf = container_level;
    let mut dir_path = String::from(PATH_SEPARATOR);

    for segment in path.segments() {
        dir_path.push_str(segment);
        dir_path.push(PATH_SEPARATOR);

        let dir_level = LevelDescriptor::new(
            EntityType::AdlsGen2Directory,
            ctx.qualified_name(&format!("{container_prefix}{dir_path}")),
        )
        .with_attribute(ATTRIBUTE_NAME, segment)
        .with_parent(ATTRIBUTE_PARENT, RELATIONSHIP_ADLS_GEN2_PARENT_CHILDREN);

        ancestors.push(std::mem::replace(&mut leaf, dir_level));
    }

    Ok(EntityChain::new(ancestors, leaf))
}

/// Split `container@account.<endpoint>`. The endpoint suffix is not checked.
fn container_and_account(path: &StoragePath) -> Result<(&str, &str)> {
    let (container, host) = path.authority().split_once('@').ok_or_else(|| {
        PathError::malformed(path.to_string(), "ADLS Gen2 host must be container@account")
    })?;
    if container.is_empty() {
        return Err(PathError::malformed(path.to_string(), "missing ADLS Gen2 container"));
    }
    let account = host.split('.').next().unwrap_or_default();
    if account.is_empty() {
        return Err(PathError::malformed(path.to_string(), "missing ADLS Gen2 account"));
    }
    Ok((container, account))
}
