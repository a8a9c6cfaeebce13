// ABOUTME: Integration tests for durable nutrition cache backends
// ABOUTME: Verifies JSON file and SQLite round-trips, corrupt files, and clearing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use dishwise::cache::{create_store, CacheStore, JsonFileStore, ProfileStore};
use dishwise::config::{CacheBackendKind, CacheSettings};
use dishwise_intelligence::{estimate_profile, KnowledgeBase};
use std::sync::Arc;
use tempfile::TempDir;

fn sample_profiles() -> Vec<(&'static str, dishwise::NutritionProfile)> {
    let kb = KnowledgeBase::curated();
    vec![
        ("kare kare", kb.resolve("kare kare").unwrap()),
        ("halo halo", kb.resolve("halo halo").unwrap()),
        (
            "spicy tofu sisig",
            estimate_profile("Spicy Tofu Sisig", &["tokwa".to_owned(), "sili".to_owned()]),
        ),
    ]
}

async fn assert_round_trip(backend: Arc<dyn ProfileStore>, reopen: Arc<dyn ProfileStore>) {
    let cache = CacheStore::open(backend).await;
    for (name, profile) in sample_profiles() {
        cache.put(name, profile).await;
    }

    let reloaded = CacheStore::open(reopen).await;
    assert_eq!(reloaded.len().await, 3);
    for (name, profile) in sample_profiles() {
        let cached = reloaded.lookup(name).await.unwrap();
        assert_eq!(cached.id, profile.id);
        assert_eq!(cached.nutrition, profile.nutrition);
        assert_eq!(cached.allergens, profile.allergens);
        assert_eq!(cached.dietary_tags, profile.dietary_tags);
        assert_eq!(cached.spice_level, profile.spice_level);
        assert_eq!(cached.source, profile.source);
    }
}

#[tokio::test]
async fn test_json_file_round_trip() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("nutrition_cache.json");

    assert_round_trip(
        Arc::new(JsonFileStore::new(path.clone())),
        Arc::new(JsonFileStore::new(path.clone())),
    )
    .await;

    assert!(path.exists());
    assert!(!path.with_file_name("nutrition_cache.json.tmp").exists());
    Ok(())
}

#[tokio::test]
async fn test_json_file_preserves_profiles_exactly() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path().join("cache.json"));
    let cache = CacheStore::open(Arc::new(JsonFileStore::new(store.path()))).await;

    let profile = KnowledgeBase::curated().resolve("bulalo").unwrap();
    cache.put("bulalo", profile.clone()).await;

    let entries = store.load().await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, "bulalo");
    assert_eq!(entries[0].profile, profile);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_loads_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_corrupt_file_starts_empty() -> Result<()> {
    common::init_test_logging();
    let dir = TempDir::new()?;
    let path = dir.path().join("cache.json");
    std::fs::write(&path, "{ not json")?;

    let store = Arc::new(JsonFileStore::new(path));
    assert!(store.load().await.is_err());

    let cache = CacheStore::open(store).await;
    assert!(cache.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_clear_removes_durable_copy() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("cache.json");
    let cache = CacheStore::open(Arc::new(JsonFileStore::new(path.clone()))).await;
    cache.put("laing", KnowledgeBase::curated().resolve("laing").unwrap()).await;
    assert!(path.exists());

    cache.clear().await?;

    assert!(!path.exists());
    let reopened = CacheStore::open(Arc::new(JsonFileStore::new(path))).await;
    assert!(reopened.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn test_factory_builds_configured_backend() -> Result<()> {
    let dir = TempDir::new()?;
    let settings = CacheSettings {
        backend: CacheBackendKind::File,
        file_path: dir.path().join("factory.json"),
        ..CacheSettings::default()
    };
    assert_eq!(create_store(&settings).await?.name(), "file");
    assert_eq!(create_store(&CacheSettings::memory()).await?.name(), "memory");
    Ok(())
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use dishwise::cache::SqliteStore;

    #[tokio::test]
    async fn test_sqlite_round_trip() -> Result<()> {
        common::init_test_logging();
        let dir = TempDir::new()?;
        let url = format!("sqlite:{}", dir.path().join("cache.db").display());

        assert_round_trip(
            Arc::new(SqliteStore::connect(&url).await?),
            Arc::new(SqliteStore::connect(&url).await?),
        )
        .await;
        Ok(())
    }

    #[tokio::test]
    async fn test_sqlite_clear() -> Result<()> {
        let dir = TempDir::new()?;
        let url = format!("sqlite:{}", dir.path().join("cache.db").display());
        let store = Arc::new(SqliteStore::connect(&url).await?);
        let cache = CacheStore::open(store.clone()).await;
        cache.put("turon", KnowledgeBase::curated().resolve("turon").unwrap()).await;
        assert_eq!(store.load().await?.len(), 1);

        cache.clear().await?;
        assert!(store.load().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_factory_builds_sqlite_backend() -> Result<()> {
        let dir = TempDir::new()?;
        let settings = CacheSettings {
            backend: CacheBackendKind::Sqlite,
            database_url: format!("sqlite:{}", dir.path().join("factory.db").display()),
            ..CacheSettings::default()
        };
        assert_eq!(create_store(&settings).await?.name(), "sqlite");
        Ok(())
    }
}
