// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, memory-backed engines, and canned provider profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls
)]
//! Shared test utilities for `dishwise`

use chrono::Utc;
use dishwise::cache::{CacheStore, InMemoryStore, ProfileStore};
use dishwise::{NutritionEngine, NutritionProfile, NutritionValues, ProfileSource, SpiceLevel};
use dishwise_intelligence::KnowledgeBase;
use dishwise_providers::NutritionProvider;
use std::collections::BTreeSet;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Cache over a fresh in-memory backend
pub async fn memory_cache() -> Arc<CacheStore> {
    let backend: Arc<dyn ProfileStore> = Arc::new(InMemoryStore::new());
    Arc::new(CacheStore::open(backend).await)
}

/// Engine with no provider, curated knowledge base, and in-memory cache
pub async fn offline_engine() -> NutritionEngine {
    init_test_logging();
    NutritionEngine::new(memory_cache().await, None, KnowledgeBase::curated())
}

/// Offline engine sharing an existing cache
pub fn offline_engine_with_cache(cache: Arc<CacheStore>) -> NutritionEngine {
    init_test_logging();
    NutritionEngine::new(cache, None, KnowledgeBase::curated())
}

/// Engine over an explicit provider, knowledge base, and cache
pub fn engine_with(
    cache: Arc<CacheStore>,
    provider: Arc<dyn NutritionProvider>,
    knowledge_base: KnowledgeBase,
) -> NutritionEngine {
    init_test_logging();
    NutritionEngine::new(cache, Some(provider), knowledge_base)
}

/// A provider-sourced profile with the given calories
pub fn provider_profile(name: &str, calories: f64) -> NutritionProfile {
    NutritionProfile {
        id: format!("provider:{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_owned(),
        nutrition: NutritionValues::macros(calories, 20.0, 30.0, 10.0),
        allergens: BTreeSet::from(["soy".to_owned()]),
        spice_level: SpiceLevel::Mild,
        dietary_tags: BTreeSet::new(),
        serving_size: "1 serving".to_owned(),
        last_updated: Utc::now(),
        source: ProfileSource::Provider,
    }
}
