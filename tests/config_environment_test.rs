// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates defaults, overrides, and fallback on unparseable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use dishwise::config::environment::{
    default_cache_path, CacheBackendKind, CacheSettings, EngineConfig, ProviderSettings,
    DEFAULT_CACHE_DATABASE_URL, DEFAULT_RECIPE_API_BASE_URL,
};
use dishwise_intelligence::MatchPolicy;
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const VARS: &[&str] = &[
    "DISHWISE_PROVIDER_ENABLED",
    "RECIPE_API_KEY",
    "RECIPE_API_BASE_URL",
    "RECIPE_API_TIMEOUT_SECS",
    "RECIPE_API_CONNECT_TIMEOUT_SECS",
    "RECIPE_API_RATE_LIMIT_PER_MINUTE",
    "NUTRITION_CACHE_BACKEND",
    "NUTRITION_CACHE_PATH",
    "NUTRITION_CACHE_DATABASE_URL",
    "NUTRITION_MATCH_POLICY",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_cache_backend_parsing() {
    assert_eq!(CacheBackendKind::from_str_or_default("memory"), CacheBackendKind::Memory);
    assert_eq!(CacheBackendKind::from_str_or_default("FILE"), CacheBackendKind::File);
    assert_eq!(CacheBackendKind::from_str_or_default(" sqlite "), CacheBackendKind::Sqlite);
    assert_eq!(CacheBackendKind::from_str_or_default("redis"), CacheBackendKind::File); // Default fallback
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = EngineConfig::from_env();

    assert!(config.provider.enabled);
    assert!(config.provider.api_key.is_none());
    assert!(!config.provider.is_active());
    assert_eq!(config.provider.base_url, DEFAULT_RECIPE_API_BASE_URL);
    assert_eq!(config.provider.rate_limit_per_minute, 60);
    assert_eq!(
        config.provider.http_settings().timeout,
        Duration::from_secs(30)
    );
    assert_eq!(config.cache.backend, CacheBackendKind::File);
    assert_eq!(config.cache.file_path, default_cache_path());
    assert_eq!(config.cache.database_url, DEFAULT_CACHE_DATABASE_URL);
    assert_eq!(config.match_policy, MatchPolicy::Substring);
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("RECIPE_API_KEY", "  secret  ");
    env::set_var("RECIPE_API_BASE_URL", "http://127.0.0.1:9999");
    env::set_var("RECIPE_API_TIMEOUT_SECS", "5");
    env::set_var("RECIPE_API_RATE_LIMIT_PER_MINUTE", "0");
    env::set_var("NUTRITION_CACHE_BACKEND", "sqlite");
    env::set_var("NUTRITION_CACHE_PATH", "/tmp/dishwise-test.json");
    env::set_var("NUTRITION_MATCH_POLICY", "exact");

    let config = EngineConfig::from_env();
    clear_env();

    assert!(config.provider.is_active());
    let api = config.provider.recipe_api_config();
    assert_eq!(api.api_key, "secret");
    assert_eq!(api.base_url, "http://127.0.0.1:9999");
    assert_eq!(api.rate_limit_per_minute, 0);
    assert_eq!(api.max_rate_limit_wait, Duration::from_secs(5));
    assert_eq!(config.provider.http_settings().timeout, Duration::from_secs(5));
    assert_eq!(config.cache.backend, CacheBackendKind::Sqlite);
    assert_eq!(config.cache.file_path, PathBuf::from("/tmp/dishwise-test.json"));
    assert_eq!(config.match_policy, MatchPolicy::ExactOnly);
}

#[test]
#[serial]
fn test_invalid_values_fall_back() {
    clear_env();
    env::set_var("RECIPE_API_TIMEOUT_SECS", "soon");
    env::set_var("RECIPE_API_RATE_LIMIT_PER_MINUTE", "-3");
    env::set_var("DISHWISE_PROVIDER_ENABLED", "maybe");

    let provider = ProviderSettings::from_env();
    clear_env();

    assert_eq!(provider.timeout_secs, 30);
    assert_eq!(provider.rate_limit_per_minute, 60);
    assert!(provider.enabled);
}

#[test]
#[serial]
fn test_provider_switch_and_blank_key() {
    clear_env();
    env::set_var("DISHWISE_PROVIDER_ENABLED", "false");
    env::set_var("RECIPE_API_KEY", "secret");
    assert!(!ProviderSettings::from_env().is_active());

    env::set_var("DISHWISE_PROVIDER_ENABLED", "1");
    env::set_var("RECIPE_API_KEY", "   ");
    let provider = ProviderSettings::from_env();
    clear_env();

    assert!(provider.enabled);
    assert!(provider.api_key.is_none());
    assert!(!provider.is_active());
}

#[test]
fn test_memory_settings() {
    let settings = CacheSettings::memory();
    assert_eq!(settings.backend, CacheBackendKind::Memory);
    assert!(settings.file_path.ends_with("nutrition_cache.json"));
}
