//! HDFS high-availability name service mappings.
//!
//! An HA cluster exposes one logical name service id backed by several
//! namenode addresses. Paths written against a concrete namenode are
//! catalogued under the name service id so every namenode yields the same
//! entity. The mapping is supplied by the caller; nothing is looked up.

use std::collections::HashMap;

/// Outcome of resolving an HDFS authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameServiceMatch<'a> {
    /// Name service id as configured
    pub id: &'a str,
    /// True when the authority was a namenode address that should be
    /// replaced by the id; false when it already was the id.
    pub rewrite: bool,
}

/// Name service id to namenode address mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameServiceMap {
    /// lower-cased namenode address -> name service id
    by_address: HashMap<String, String>,
    /// lower-cased name service id -> name service id
    ids: HashMap<String, String>,
}

impl NameServiceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name service and its namenode `host:port` addresses.
    pub fn insert<I, S>(&mut self, id: impl Into<String>, addresses: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = id.into();
        for address in addresses {
            self.by_address
                .insert(address.as_ref().to_ascii_lowercase(), id.clone());
        }
        self.ids.insert(id.to_ascii_lowercase(), id);
    }

    /// Resolve an HDFS authority against the configured name services.
    pub fn resolve(&self, authority: &str) -> Option<NameServiceMatch<'_>> {
        let key = authority.to_ascii_lowercase();
        if let Some(id) = self.ids.get(&key) {
            return Some(NameServiceMatch { id, rewrite: false });
        }
        self.by_address
            .get(&key)
            .map(|id| NameServiceMatch { id, rewrite: true })
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of registered name services.
    pub fn len(&self) -> usize {
        self.ids.len()
    }
}
