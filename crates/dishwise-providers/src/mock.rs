// ABOUTME: In-memory nutrition provider with canned profiles for tests and offline demos
// ABOUTME: Counts calls so callers can assert how often the provider was consulted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::provider::NutritionProvider;
use async_trait::async_trait;
use dishwise_core::text::normalize_dish_name;
use dishwise_core::NutritionProfile;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock provider (no network)
///
/// Profiles are keyed by normalized dish name and matched exactly. A failing
/// mock counts calls and always misses, standing in for an unreachable API.
#[derive(Debug, Default)]
pub struct MockNutritionProvider {
    profiles: HashMap<String, NutritionProfile>,
    calls: AtomicUsize,
    delay: Option<Duration>,
    failing: bool,
}

impl MockNutritionProvider {
    /// Mock with no canned profiles
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that misses every call, as if the API were down
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Add a canned profile for `dish_name`
    #[must_use]
    pub fn with_profile(mut self, dish_name: &str, profile: NutritionProfile) -> Self {
        self.profiles.insert(normalize_dish_name(dish_name), profile);
        self
    }

    /// Sleep this long inside every call
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Calls received so far, both lookups and ingredient analyses
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn answer(&self, dish_name: &str) -> Option<NutritionProfile> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return None;
        }
        self.profiles.get(&normalize_dish_name(dish_name)).cloned()
    }
}

#[async_trait]
impl NutritionProvider for MockNutritionProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn lookup_dish(&self, dish_name: &str) -> Option<NutritionProfile> {
        self.answer(dish_name).await
    }

    async fn analyze_ingredients(
        &self,
        dish_name: &str,
        _ingredients: &[String],
    ) -> Option<NutritionProfile> {
        self.answer(dish_name).await
    }
}
