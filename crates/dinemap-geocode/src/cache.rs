//! Process-lifetime memo of completed lookups.
//!
//! The cache is an explicit object owned by whoever builds the [`Geocoder`]
//! and shared through `Arc`. Entries are write-once. Growth is unbounded
//! unless an [`EvictionPolicy`] trims the map after inserts.
//!
//! [`Geocoder`]: crate::resolver::Geocoder

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::types::Resolution;

/// Hook run after every insert with exclusive access to the entry map.
pub trait EvictionPolicy: Send + Sync + fmt::Debug {
    fn after_insert(&self, entries: &mut HashMap<String, Resolution>);
}

/// Keeps every entry for the life of the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoEviction;

impl EvictionPolicy for NoEviction {
    fn after_insert(&self, _entries: &mut HashMap<String, Resolution>) {}
}

#[derive(Debug)]
pub struct GeocodeCache {
    entries: RwLock<HashMap<String, Resolution>>,
    policy: Box<dyn EvictionPolicy>,
}

impl Default for GeocodeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeCache {
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(NoEviction)
    }

    #[must_use]
    pub fn with_policy(policy: impl EvictionPolicy + 'static) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            policy: Box::new(policy),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Resolution> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    /// Stores `resolution` under `key` unless an entry already exists, and
    /// returns whichever value the cache now holds.
    pub fn insert(&self, key: String, resolution: Resolution) -> Resolution {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let stored = *entries.entry(key).or_insert(resolution);
        self.policy.after_insert(&mut entries);
        stored
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry so subsequent lookups hit the network again.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
