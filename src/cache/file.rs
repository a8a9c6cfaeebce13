// ABOUTME: JSON file ProfileStore persisting the cache snapshot as one array
// ABOUTME: Writes go to a sibling temp file first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{CacheEntry, ProfileStore};
use async_trait::async_trait;
use dishwise_core::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Cache snapshot stored as a JSON array of entries
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`; the file and its parent are created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(ToOwned::to_owned)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> AppResult<Vec<CacheEntry>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::storage(format!(
                    "Failed to read cache file {}: {e}",
                    self.path.display()
                )))
            }
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            AppError::storage(format!(
                "Failed to parse cache file {}: {e}",
                self.path.display()
            ))
        })
    }

    async fn save_all(&self, entries: &[CacheEntry]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!(
                    "Failed to create cache directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(entries)?;
        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| AppError::storage(format!("Failed to write cache file: {e}")))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| AppError::storage(format!("Failed to replace cache file: {e}")))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Cache file written");
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to remove cache file {}: {e}",
                self.path.display()
            ))),
        }
    }
}
