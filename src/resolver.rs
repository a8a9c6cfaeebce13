// ABOUTME: Nutrition resolution pipeline from cache through provider, knowledge base, and estimator
// ABOUTME: Coalesces concurrent provider calls for the same dish and always returns a profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dish resolution
//!
//! Resolution is a first-success pipeline over ordered tiers:
//!
//! | Tier | Source | Misses when |
//! |------|--------|-------------|
//! | 1 | [`CacheStore`] | no exact or fuzzy key match |
//! | 2 | [`NutritionProvider`] | disabled, failing, empty, or placeholder |
//! | 3 | [`KnowledgeBase`] | no curated dish matches |
//! | 4 | estimator | never |
//!
//! Whatever tiers 2-4 produce is written to the cache before it is returned.

use crate::cache::CacheStore;
use dashmap::DashMap;
use dishwise_core::{normalize_dish_name, IngredientRef, NutritionProfile};
use dishwise_intelligence::{estimate_profile, KnowledgeBase};
use dishwise_providers::NutritionProvider;
use futures_util::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

type InFlight = Arc<OnceCell<Option<NutritionProfile>>>;

/// One dish on a menu, as collaborators submit it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRequest {
    /// Dish name as printed on the menu
    #[serde(alias = "name")]
    pub dish_name: String,
    /// Ingredients in any accepted shape
    #[serde(default)]
    pub ingredients: Vec<IngredientRef>,
}

impl MenuItemRequest {
    /// Request for a dish without ingredients
    #[must_use]
    pub fn new(dish_name: impl Into<String>) -> Self {
        Self {
            dish_name: dish_name.into(),
            ingredients: Vec::new(),
        }
    }

    /// Attach ingredient names
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<IngredientRef>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}

/// Resolves dish names to nutrition profiles
pub struct NutritionResolver {
    cache: Arc<CacheStore>,
    provider: Option<Arc<dyn NutritionProvider>>,
    knowledge_base: KnowledgeBase,
    in_flight: DashMap<String, InFlight>,
}

impl NutritionResolver {
    /// Build a resolver; `provider = None` skips the provider tier entirely
    #[must_use]
    pub fn new(
        cache: Arc<CacheStore>,
        provider: Option<Arc<dyn NutritionProvider>>,
        knowledge_base: KnowledgeBase,
    ) -> Self {
        Self {
            cache,
            provider,
            knowledge_base,
            in_flight: DashMap::new(),
        }
    }

    /// Cache backing this resolver
    #[must_use]
    pub const fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// Knowledge base consulted after the provider
    #[must_use]
    pub const fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Resolve one dish; never fails
    pub async fn resolve(&self, dish_name: &str, ingredients: &[String]) -> NutritionProfile {
        let key = normalize_dish_name(dish_name);
        let ingredients: Vec<String> = ingredients
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();

        if let Some(profile) = self.cache.lookup(&key).await {
            debug!(dish = %dish_name, key = %key, "Resolved from cache");
            return profile;
        }

        let provided = self.from_provider(&key, dish_name, &ingredients).await;
        let profile = provided.unwrap_or_else(|| {
            self.knowledge_base
                .resolve(&key)
                .unwrap_or_else(|| estimate_profile(dish_name, &ingredients))
        });

        info!(
            dish = %dish_name,
            key = %key,
            source = profile.source.as_str(),
            calories = profile.nutrition.calories,
            "Resolved nutrition profile"
        );
        self.cache.put(&key, profile.clone()).await;
        profile
    }

    /// Resolve a menu concurrently, returning profiles in request order
    pub async fn resolve_many(&self, requests: &[MenuItemRequest]) -> Vec<NutritionProfile> {
        let normalized: Vec<(&str, Vec<String>)> = requests
            .iter()
            .map(|request| {
                (
                    request.dish_name.as_str(),
                    IngredientRef::normalize_all(&request.ingredients),
                )
            })
            .collect();

        join_all(
            normalized
                .iter()
                .map(|(dish_name, ingredients)| self.resolve(dish_name, ingredients)),
        )
        .await
    }

    /// Provider tier with in-flight coalescing per dish and ingredient list
    async fn from_provider(
        &self,
        key: &str,
        dish_name: &str,
        ingredients: &[String],
    ) -> Option<NutritionProfile> {
        let provider = self.provider.as_ref()?;
        let flight_key = format!("{key}|{}", ingredients.join("\u{1f}"));

        let cell = Arc::clone(
            self.in_flight
                .entry(flight_key.clone())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .value(),
        );

        let profile = cell
            .get_or_init(|| async {
                let found = if ingredients.is_empty() {
                    provider.lookup_dish(dish_name).await
                } else {
                    provider.analyze_ingredients(dish_name, ingredients).await
                };
                found.filter(|profile| {
                    let usable = !profile.is_placeholder();
                    if !usable {
                        debug!(provider = provider.name(), dish = %dish_name, "Ignoring placeholder provider result");
                    }
                    usable
                })
            })
            .await
            .clone();

        self.in_flight
            .remove_if(&flight_key, |_, slot| Arc::ptr_eq(slot, &cell));
        profile
    }
}
