// ABOUTME: In-process ProfileStore that keeps the snapshot in memory only
// ABOUTME: Used for tests and for runs that must not touch the filesystem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheEntry, ProfileStore};
use async_trait::async_trait;
use dishwise_core::AppResult;
use tokio::sync::Mutex;

/// Snapshot held in process memory
#[derive(Default)]
pub struct InMemoryStore {
    entries: Mutex<Vec<CacheEntry>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries
    #[must_use]
    pub fn with_entries(entries: Vec<CacheEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> AppResult<Vec<CacheEntry>> {
        Ok(self.entries.lock().await.clone())
    }

    async fn save_all(&self, entries: &[CacheEntry]) -> AppResult<()> {
        *self.entries.lock().await = entries.to_vec();
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.entries.lock().await.clear();
        Ok(())
    }
}
