// ABOUTME: Environment configuration for the recipe provider, durable cache, and match policy
// ABOUTME: Unparseable values fall back to defaults with a warning instead of failing startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use dishwise_intelligence::MatchPolicy;
use dishwise_providers::{HttpClientSettings, RecipeApiConfig};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Default recipe API endpoint
pub const DEFAULT_RECIPE_API_BASE_URL: &str = "https://api.spoonacular.com";

/// Default `SQLite` URL for the sqlite cache backend
pub const DEFAULT_CACHE_DATABASE_URL: &str = "sqlite:./data/nutrition_cache.db";

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse `key` as `T`, warning and using `default` when the value is invalid
fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, default = %default, "Invalid environment value, using default");
            default
        }),
        Err(_) => default,
    }
}

fn env_bool_or(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                warn!(key, value = %raw, default, "Invalid boolean environment value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Durable backend for the nutrition cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheBackendKind {
    /// Process memory only; nothing survives a restart
    Memory,
    /// JSON array of cache entries in one file
    #[default]
    File,
    /// One row per key in a `SQLite` table
    Sqlite,
}

impl CacheBackendKind {
    /// Parse a backend name, warning and falling back to `file` on unknown values
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "none" => Self::Memory,
            "file" | "json" => Self::File,
            "sqlite" => Self::Sqlite,
            other => {
                warn!(backend = other, "Unknown cache backend, using file");
                Self::File
            }
        }
    }
}

impl fmt::Display for CacheBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Memory => "memory",
            Self::File => "file",
            Self::Sqlite => "sqlite",
        })
    }
}

/// Recipe API provider settings
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Master switch; a missing API key also disables the provider
    pub enabled: bool,
    /// API key, if configured
    pub api_key: Option<String>,
    /// Base URL of the recipe API
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Requests per rolling minute; 0 disables local limiting
    pub rate_limit_per_minute: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            base_url: DEFAULT_RECIPE_API_BASE_URL.to_owned(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            rate_limit_per_minute: 60,
        }
    }
}

impl ProviderSettings {
    /// Load provider settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_bool_or("DISHWISE_PROVIDER_ENABLED", defaults.enabled),
            api_key: env::var("RECIPE_API_KEY")
                .ok()
                .map(|key| key.trim().to_owned())
                .filter(|key| !key.is_empty()),
            base_url: env_var_or("RECIPE_API_BASE_URL", &defaults.base_url),
            timeout_secs: env_parse_or("RECIPE_API_TIMEOUT_SECS", defaults.timeout_secs),
            connect_timeout_secs: env_parse_or(
                "RECIPE_API_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
            rate_limit_per_minute: env_parse_or(
                "RECIPE_API_RATE_LIMIT_PER_MINUTE",
                defaults.rate_limit_per_minute,
            ),
        }
    }

    /// Whether the provider should be consulted at all
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && self.api_key.is_some()
    }

    /// Client configuration for the recipe API
    #[must_use]
    pub fn recipe_api_config(&self) -> RecipeApiConfig {
        RecipeApiConfig {
            api_key: self.api_key.clone().unwrap_or_default(),
            base_url: self.base_url.clone(),
            rate_limit_per_minute: self.rate_limit_per_minute,
            max_rate_limit_wait: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Timeouts for the shared HTTP client
    #[must_use]
    pub const fn http_settings(&self) -> HttpClientSettings {
        HttpClientSettings {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

/// Durable cache settings
#[derive(Debug, Clone)]
pub struct CacheSettings {
    /// Which backend persists the cache
    pub backend: CacheBackendKind,
    /// JSON file used by the file backend
    pub file_path: PathBuf,
    /// Database URL used by the sqlite backend
    pub database_url: String,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            backend: CacheBackendKind::default(),
            file_path: default_cache_path(),
            database_url: DEFAULT_CACHE_DATABASE_URL.to_owned(),
        }
    }
}

impl CacheSettings {
    /// Load cache settings from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            backend: env::var("NUTRITION_CACHE_BACKEND")
                .map(|raw| CacheBackendKind::from_str_or_default(&raw))
                .unwrap_or_default(),
            file_path: env::var("NUTRITION_CACHE_PATH")
                .map_or_else(|_| default_cache_path(), PathBuf::from),
            database_url: env_var_or("NUTRITION_CACHE_DATABASE_URL", DEFAULT_CACHE_DATABASE_URL),
        }
    }

    /// Memory-only settings, handy for tests and one-shot runs
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: CacheBackendKind::Memory,
            ..Self::default()
        }
    }
}

/// `<data dir>/dishwise/nutrition_cache.json`, or the working directory when no data dir exists
#[must_use]
pub fn default_cache_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dishwise")
        .join("nutrition_cache.json")
}

/// Full engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Recipe API provider settings
    pub provider: ProviderSettings,
    /// Durable cache settings
    pub cache: CacheSettings,
    /// Matching policy for the cache, knowledge base, and allergen checks
    pub match_policy: MatchPolicy,
}

impl EngineConfig {
    /// Load the whole configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            provider: ProviderSettings::from_env(),
            cache: CacheSettings::from_env(),
            match_policy: env::var("NUTRITION_MATCH_POLICY")
                .map(|raw| MatchPolicy::from_str_lossy(&raw))
                .unwrap_or_default(),
        }
    }

    /// Offline configuration: memory cache, provider disabled
    #[must_use]
    pub fn offline() -> Self {
        Self {
            provider: ProviderSettings {
                enabled: false,
                ..ProviderSettings::default()
            },
            cache: CacheSettings::memory(),
            match_policy: MatchPolicy::default(),
        }
    }
}
