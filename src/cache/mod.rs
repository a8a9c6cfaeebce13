// ABOUTME: Nutrition profile cache with a write-through durable backend
// ABOUTME: In-memory ordered map for lookups, pluggable ProfileStore for persistence across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition cache
//!
//! [`CacheStore`] keeps every resolved profile in memory keyed by normalized
//! dish name and writes the full snapshot through to a [`ProfileStore`] after
//! each insert. Persistence failures are logged and never fail a resolution.

/// Cache factory selecting a backend from settings
pub mod factory;
/// JSON file backend
pub mod file;
/// In-process backend
pub mod memory;
/// `SQLite` backend
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use factory::create_store;
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use dishwise_core::{normalize_dish_name, AppResult, NutritionProfile};
use dishwise_intelligence::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// Shortest normalized key that takes part in fuzzy cache matching
pub const MIN_FUZZY_KEY_CHARS: usize = 3;

fn fuzzy_eligible(key: &str) -> bool {
    key.chars().count() >= MIN_FUZZY_KEY_CHARS
}

/// One persisted cache record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Normalized dish name
    pub key: String,
    /// Cached profile
    pub profile: NutritionProfile,
}

/// Durable storage for cache snapshots
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &'static str;

    /// Load every persisted entry; a store that was never written is empty
    async fn load(&self) -> AppResult<Vec<CacheEntry>>;

    /// Replace the persisted contents with `entries`
    async fn save_all(&self, entries: &[CacheEntry]) -> AppResult<()>;

    /// Remove every persisted entry
    async fn clear(&self) -> AppResult<()>;
}

/// Profile cache keyed by normalized dish name
pub struct CacheStore {
    entries: RwLock<BTreeMap<String, CacheEntry>>,
    backend: Arc<dyn ProfileStore>,
    policy: MatchPolicy,
    persist_lock: Mutex<()>,
}

impl CacheStore {
    /// Open a cache over `backend`, loading whatever it has persisted
    ///
    /// A backend that fails to load is logged and the cache starts empty.
    pub async fn open(backend: Arc<dyn ProfileStore>) -> Self {
        Self::open_with_policy(backend, MatchPolicy::default()).await
    }

    /// Open a cache with an explicit fuzzy-lookup policy
    pub async fn open_with_policy(backend: Arc<dyn ProfileStore>, policy: MatchPolicy) -> Self {
        let entries = match backend.load().await {
            Ok(loaded) => loaded
                .into_iter()
                .map(|entry| (entry.key.clone(), entry))
                .collect(),
            Err(e) => {
                warn!(backend = backend.name(), error = %e, "Failed to load nutrition cache, starting empty");
                BTreeMap::new()
            }
        };
        info!(
            backend = backend.name(),
            entries = entries.len(),
            "Nutrition cache opened"
        );

        Self {
            entries: RwLock::new(entries),
            backend,
            policy,
            persist_lock: Mutex::new(()),
        }
    }

    /// Look up a dish by exact key, then by the fuzzy policy in key order
    ///
    /// Placeholder profiles are never returned, so the caller resolves the
    /// dish again and overwrites them. Keys shorter than
    /// [`MIN_FUZZY_KEY_CHARS`] only match exactly.
    pub async fn lookup(&self, dish_name: &str) -> Option<NutritionProfile> {
        let key = normalize_dish_name(dish_name);
        if key.is_empty() {
            return None;
        }

        let entries = self.entries.read().await;
        if let Some(entry) = entries.get(&key) {
            if entry.profile.is_placeholder() {
                debug!(key = %key, "Ignoring placeholder nutrition cache entry");
                return None;
            }
            debug!(key = %key, "Nutrition cache hit");
            return Some(entry.profile.clone());
        }

        if !fuzzy_eligible(&key) {
            return None;
        }

        entries
            .values()
            .find(|entry| {
                !entry.profile.is_placeholder()
                    && fuzzy_eligible(&entry.key)
                    && self.policy.matches(&key, &entry.key)
            })
            .map(|entry| {
                debug!(key = %key, matched = %entry.key, "Nutrition cache fuzzy hit");
                entry.profile.clone()
            })
    }

    /// Insert a profile and write the snapshot through to the backend
    pub async fn put(&self, dish_name: &str, profile: NutritionProfile) {
        let key = normalize_dish_name(dish_name);
        if key.is_empty() {
            return;
        }

        self.entries
            .write()
            .await
            .insert(key.clone(), CacheEntry { key, profile });

        if let Err(e) = self.persist().await {
            warn!(backend = self.backend.name(), error = %e, "Failed to persist nutrition cache");
        }
    }

    /// Write the current snapshot to the backend
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    pub async fn flush(&self) -> AppResult<()> {
        self.persist().await
    }

    async fn persist(&self) -> AppResult<()> {
        let _guard = self.persist_lock.lock().await;
        let snapshot: Vec<CacheEntry> = self.entries.read().await.values().cloned().collect();
        self.backend.save_all(&snapshot).await
    }

    /// Drop every entry in memory and in the backend
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to clear
    pub async fn clear(&self) -> AppResult<()> {
        let _guard = self.persist_lock.lock().await;
        self.entries.write().await.clear();
        self.backend.clear().await?;
        info!(backend = self.backend.name(), "Nutrition cache cleared");
        Ok(())
    }

    /// Number of cached dishes
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no dishes
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Backend name
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dishwise_intelligence::estimate_profile;

    fn store() -> Arc<dyn ProfileStore> {
        Arc::new(InMemoryStore::new())
    }

    #[tokio::test]
    async fn test_exact_and_fuzzy_lookup() {
        let cache = CacheStore::open(store()).await;
        cache.put("Chicken Adobo", estimate_profile("chicken adobo", &[])).await;

        assert!(cache.lookup("chicken  ADOBO").await.is_some());
        assert!(cache.lookup("adobo").await.is_some());
        assert!(cache.lookup("sinigang").await.is_none());
        assert!(cache.lookup("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_exact_policy_disables_fuzzy_lookup() {
        let cache = CacheStore::open_with_policy(store(), MatchPolicy::ExactOnly).await;
        cache.put("chicken adobo", estimate_profile("chicken adobo", &[])).await;

        assert!(cache.lookup("adobo").await.is_none());
        assert!(cache.lookup("chicken adobo").await.is_some());
    }

    #[tokio::test]
    async fn test_placeholder_never_returned() {
        let cache = CacheStore::open(store()).await;
        let mut placeholder = estimate_profile("mystery stew", &[]);
        placeholder.nutrition.calories = 0.0;
        cache.put("mystery stew", placeholder).await;

        assert!(cache.lookup("stew").await.is_none());
        assert!(cache.lookup("mystery stew").await.is_none());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_short_keys_only_match_exactly() {
        let cache = CacheStore::open(store()).await;
        cache.put("A", estimate_profile("a", &[])).await;
        cache.put("pancit canton", estimate_profile("pancit canton", &[])).await;

        assert!(cache.lookup("adobo").await.is_none());
        assert!(cache.lookup("pa").await.is_none());
        assert!(cache.lookup("a").await.is_some());
        assert!(cache.lookup("canton").await.is_some());
    }

    #[tokio::test]
    async fn test_put_writes_through_and_clear_empties_backend() {
        let backend = Arc::new(InMemoryStore::new());
        let cache = CacheStore::open(backend.clone()).await;
        cache.put("laing", estimate_profile("laing", &[])).await;

        assert_eq!(backend.load().await.unwrap().len(), 1);
        cache.clear().await.unwrap();
        assert!(cache.is_empty().await);
        assert!(backend.load().await.unwrap().is_empty());
    }
}
