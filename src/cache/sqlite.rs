// ABOUTME: SQLite ProfileStore keeping one row per cached dish
// ABOUTME: Snapshots are replaced inside a single transaction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheEntry, ProfileStore};
use async_trait::async_trait;
use dishwise_core::{AppError, AppResult, NutritionProfile};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use tracing::info;

/// Cache snapshot stored in a `nutrition_cache` table
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to `database_url`, creating the database file and table if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the database cannot be opened
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| AppError::config(format!("Invalid cache database URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| AppError::storage(format!("Failed to open cache database: {e}")))?;

        let store = Self { pool };
        store.migrate().await?;
        info!("SQLite nutrition cache ready");
        Ok(store)
    }

    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_cache (
                key TEXT PRIMARY KEY,
                profile TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::storage(format!("Failed to create nutrition_cache table: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for SqliteStore {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    async fn load(&self) -> AppResult<Vec<CacheEntry>> {
        let rows = sqlx::query("SELECT key, profile FROM nutrition_cache ORDER BY key")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to load nutrition cache: {e}")))?;

        rows.into_iter()
            .map(|row| {
                let key: String = row.get("key");
                let raw: String = row.get("profile");
                let profile: NutritionProfile = serde_json::from_str(&raw).map_err(|e| {
                    AppError::storage(format!("Corrupt cache row for {key}: {e}"))
                })?;
                Ok(CacheEntry { key, profile })
            })
            .collect()
    }

    async fn save_all(&self, entries: &[CacheEntry]) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::storage(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM nutrition_cache")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::storage(format!("Failed to reset nutrition cache: {e}")))?;

        for entry in entries {
            let profile = serde_json::to_string(&entry.profile)?;
            sqlx::query("INSERT INTO nutrition_cache (key, profile) VALUES ($1, $2)")
                .bind(&entry.key)
                .bind(profile)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::storage(format!("Failed to store cache entry {}: {e}", entry.key))
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::storage(format!("Failed to commit nutrition cache: {e}")))
    }

    async fn clear(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM nutrition_cache")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::storage(format!("Failed to clear nutrition cache: {e}")))?;
        Ok(())
    }
}
