//! Extraction entry points.

use tracing::debug;

use pathcat_types::{EntityWithExtInfo, Result};

use crate::context::ExtractionContext;
use crate::decompose::decompose;
use crate::materialize::materialize;
use crate::path::StoragePath;
use crate::scheme::SchemeFamily;

/// Build (or reuse) the entities describing `path`.
///
/// Returns the leaf entity with the ancestors it was built from. Every
/// entity involved ends up in `ctx`'s known entities.
pub fn get_path_entity(path: &StoragePath, ctx: &mut ExtractionContext) -> Result<EntityWithExtInfo> {
    let family = SchemeFamily::of(path)?;
    debug!(path = %path, family = %family, "Extracting path entity");

    let chain = decompose(path, family, ctx)?;
    Ok(materialize(chain, ctx))
}

/// Parse `raw` and extract it. See [`get_path_entity`].
pub fn extract_path(raw: &str, ctx: &mut ExtractionContext) -> Result<EntityWithExtInfo> {
    let path = StoragePath::parse(raw)?;
    get_path_entity(&path, ctx)
}

impl ExtractionContext {
    /// Parse and extract a path against this context.
    pub fn extract(&mut self, raw: &str) -> Result<EntityWithExtInfo> {
        extract_path(raw, self)
    }
}
