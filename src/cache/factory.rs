// ABOUTME: Cache factory for settings-based backend selection
// ABOUTME: Builds the ProfileStore named by NUTRITION_CACHE_BACKEND
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{InMemoryStore, JsonFileStore, ProfileStore};
use crate::config::{CacheBackendKind, CacheSettings};
use dishwise_core::AppResult;
use std::sync::Arc;
use tracing::info;

/// Create the durable backend described by `settings`
///
/// # Errors
///
/// Returns an error if the sqlite backend is selected and cannot be opened,
/// or if it is selected in a build without the `sqlite` feature
pub async fn create_store(settings: &CacheSettings) -> AppResult<Arc<dyn ProfileStore>> {
    match settings.backend {
        CacheBackendKind::Memory => {
            info!("Initializing in-memory nutrition cache");
            Ok(Arc::new(InMemoryStore::new()))
        }
        CacheBackendKind::File => {
            info!(path = %settings.file_path.display(), "Initializing file nutrition cache");
            Ok(Arc::new(JsonFileStore::new(settings.file_path.clone())))
        }
        CacheBackendKind::Sqlite => sqlite_store(&settings.database_url).await,
    }
}

#[cfg(feature = "sqlite")]
async fn sqlite_store(database_url: &str) -> AppResult<Arc<dyn ProfileStore>> {
    info!(database_url, "Initializing SQLite nutrition cache");
    Ok(Arc::new(super::SqliteStore::connect(database_url).await?))
}

#[cfg(not(feature = "sqlite"))]
#[allow(clippy::unused_async)]
async fn sqlite_store(_database_url: &str) -> AppResult<Arc<dyn ProfileStore>> {
    Err(dishwise_core::AppError::config(
        "NUTRITION_CACHE_BACKEND=sqlite requires the `sqlite` feature",
    ))
}
