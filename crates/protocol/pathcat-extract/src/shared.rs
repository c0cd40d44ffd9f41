//! Thread-safe extraction context.
//!
//! Concurrent workers either keep private contexts and merge them at the
//! end, or share one context through [`SharedExtractionContext`], which
//! holds the lock across a call's whole lookup-and-insert sequence so two
//! workers can never create the same qualified name twice.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use pathcat_types::{Entity, EntityWithExtInfo, PathError, Result};

use crate::context::ExtractionContext;
use crate::extract::get_path_entity;
use crate::path::StoragePath;

/// An [`ExtractionContext`] behind a mutex, cheap to clone across threads.
#[derive(Debug, Clone)]
pub struct SharedExtractionContext {
    inner: Arc<Mutex<ExtractionContext>>,
}

impl SharedExtractionContext {
    pub fn new(ctx: ExtractionContext) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ctx)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ExtractionContext>> {
        self.inner
            .lock()
            .map_err(|_| PathError::lock_poisoned("extraction context lock poisoned"))
    }

    /// Parse and extract a path.
    pub fn extract(&self, raw: &str) -> Result<EntityWithExtInfo> {
        let path = StoragePath::parse(raw)?;
        self.get_path_entity(&path)
    }

    pub fn get_path_entity(&self, path: &StoragePath) -> Result<EntityWithExtInfo> {
        let mut ctx = self.lock()?;
        get_path_entity(path, &mut ctx)
    }

    /// Fold a worker's private context in. Returns how many entities were added.
    pub fn merge(&self, other: ExtractionContext) -> Result<usize> {
        Ok(self.lock()?.merge(other))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Copy of the known entities at this moment.
    pub fn known_entities(&self) -> Result<BTreeMap<String, Arc<Entity>>> {
        Ok(self.lock()?.known_entities().clone())
    }

    /// Recover the context. Clones it if other handles are still alive.
    pub fn into_inner(self) -> Result<ExtractionContext> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => mutex
                .into_inner()
                .map_err(|_| PathError::lock_poisoned("extraction context lock poisoned")),
            Err(shared) => {
                let ctx = shared
                    .lock()
                    .map_err(|_| PathError::lock_poisoned("extraction context lock poisoned"))?;
                Ok(ctx.clone())
            }
        }
    }
}

impl From<ExtractionContext> for SharedExtractionContext {
    fn from(ctx: ExtractionContext) -> Self {
        Self::new(ctx)
    }
}
