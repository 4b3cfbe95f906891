//! Persisted id lists.
//!
//! Both user-state lists are JSON string arrays in one key-value cell,
//! exactly the shape the dashboard historically kept in browser storage.
//! A missing or corrupt cell reads as an empty list; membership mutations
//! rewrite the whole cell.

use std::collections::HashSet;
use std::sync::Arc;

use crate::kv::KeyValueStore;

/// Storage key for the starred feature ids.
pub const STARRED_IDS_KEY: &str = "starred-feature-ids";

/// Storage key for user-added feature ids.
pub const CUSTOM_IDS_KEY: &str = "custom-feature-ids";

/// An ordered, duplicate-free list of ids in one key-value cell.
///
/// Insertion order is preserved (new ids append), matching how the
/// dashboard renders user-added entries.
pub struct IdList {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
}

impl IdList {
    /// Create a list over `key` in `store`.
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Current ids, in insertion order. Missing or unparseable state reads
    /// as empty.
    pub fn ids(&self) -> Vec<String> {
        let Some(raw) = self.store.get(self.key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => ids,
            Err(error) => {
                tracing::warn!(key = self.key, %error, "stored id list unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Whether `id` is in the list.
    pub fn contains(&self, id: &str) -> bool {
        self.ids().iter().any(|existing| existing == id)
    }

    /// Append `id` if absent. Returns whether the list changed.
    pub fn add(&self, id: &str) -> bool {
        let mut ids = self.ids();
        if ids.iter().any(|existing| existing == id) {
            return false;
        }
        ids.push(id.to_string());
        self.write(&ids);
        true
    }

    /// Remove `id` if present. Returns whether the list changed.
    pub fn remove(&self, id: &str) -> bool {
        let mut ids = self.ids();
        let before = ids.len();
        ids.retain(|existing| existing != id);
        if ids.len() == before {
            return false;
        }
        self.write(&ids);
        true
    }

    /// Empty the list.
    pub fn clear(&self) {
        self.write(&[]);
    }

    fn write(&self, ids: &[String]) {
        match serde_json::to_string(ids) {
            Ok(json) => self.store.set(self.key, &json),
            Err(error) => tracing::warn!(key = self.key, %error, "failed to encode id list"),
        }
    }
}

/// The starred ("favorite") feature ids.
pub struct StarredIds {
    list: IdList,
}

impl StarredIds {
    /// Open the starred list in `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            list: IdList::new(store, STARRED_IDS_KEY),
        }
    }

    /// Starred ids in starring order.
    pub fn ids(&self) -> Vec<String> {
        self.list.ids()
    }

    /// Membership set for filter evaluation.
    pub fn starred_set(&self) -> HashSet<String> {
        self.list.ids().into_iter().collect()
    }

    /// Whether `id` is starred.
    pub fn is_starred(&self, id: &str) -> bool {
        self.list.contains(id)
    }

    /// Star `id`. Returns whether it was newly starred.
    pub fn star(&self, id: &str) -> bool {
        self.list.add(id)
    }

    /// Unstar `id`. Returns whether it was starred before.
    pub fn unstar(&self, id: &str) -> bool {
        self.list.remove(id)
    }

    /// Flip `id`'s starred state; returns the new state.
    pub fn toggle(&self, id: &str) -> bool {
        if self.list.remove(id) {
            false
        } else {
            self.list.add(id);
            true
        }
    }
}

/// User-added feature ids, fetched alongside the base catalog.
pub struct CustomIds {
    list: IdList,
}

impl CustomIds {
    /// Open the custom-id list in `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            list: IdList::new(store, CUSTOM_IDS_KEY),
        }
    }

    /// Custom ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.list.ids()
    }

    /// Record a new id. Returns whether the list changed.
    pub fn add(&self, id: &str) -> bool {
        self.list.add(id)
    }

    /// Forget an id. Returns whether the list changed.
    pub fn remove(&self, id: &str) -> bool {
        self.list.remove(id)
    }
}

// ============================================================================
// Tests
// ============================================================================
