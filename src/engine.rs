// ABOUTME: NutritionEngine facade exposing resolution, compatibility, search, and cache control
// ABOUTME: Wires configuration into the cache backend, provider, knowledge base, and resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine facade used by the CLI and by menu collaborators

use crate::cache::{create_store, CacheStore, InMemoryStore, ProfileStore};
use crate::config::EngineConfig;
use crate::resolver::{MenuItemRequest, NutritionResolver};
use dishwise_core::{AllergenProfile, AppResult, CompatibilityResult, DishCriteria, NutritionProfile};
use dishwise_intelligence::KnowledgeBase;
use dishwise_providers::{configure_shared_client, NutritionProvider, RecipeApiProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Nutrition and allergen engine
pub struct NutritionEngine {
    resolver: NutritionResolver,
}

impl NutritionEngine {
    /// Assemble an engine from parts
    #[must_use]
    pub fn new(
        cache: Arc<CacheStore>,
        provider: Option<Arc<dyn NutritionProvider>>,
        knowledge_base: KnowledgeBase,
    ) -> Self {
        Self {
            resolver: NutritionResolver::new(cache, provider, knowledge_base),
        }
    }

    /// Build an engine from configuration
    ///
    /// A misconfigured provider is logged and disabled; the engine still runs
    /// on the knowledge base and estimator. A cache backend that cannot be
    /// opened is replaced by an in-memory one.
    pub async fn from_config(config: &EngineConfig) -> Self {
        let backend: Arc<dyn ProfileStore> = match create_store(&config.cache).await {
            Ok(backend) => backend,
            Err(e) => {
                warn!(
                    backend = %config.cache.backend,
                    error = %e,
                    "Nutrition cache backend unavailable, falling back to memory"
                );
                Arc::new(InMemoryStore::new())
            }
        };
        let cache = Arc::new(CacheStore::open_with_policy(backend, config.match_policy).await);

        let provider: Option<Arc<dyn NutritionProvider>> = if config.provider.is_active() {
            if !configure_shared_client(config.provider.http_settings()) {
                debug!("Shared HTTP client already configured, keeping existing timeouts");
            }
            match RecipeApiProvider::from_config(config.provider.recipe_api_config()) {
                Ok(provider) => Some(Arc::new(provider)),
                Err(e) => {
                    warn!(error = %e, "Recipe API provider misconfigured, continuing without it");
                    None
                }
            }
        } else {
            info!("Recipe API provider disabled");
            None
        };

        let knowledge_base = KnowledgeBase::curated().with_policy(config.match_policy);
        info!(
            cache = cache.backend_name(),
            provider = provider.as_ref().map_or("none", |p| p.name()),
            match_policy = %config.match_policy,
            "Nutrition engine ready"
        );
        Self::new(cache, provider, knowledge_base)
    }

    /// Build an engine from environment configuration
    pub async fn from_env() -> Self {
        Self::from_config(&EngineConfig::from_env()).await
    }

    /// Resolve a dish to a nutrition profile; never fails
    pub async fn resolve(&self, dish_name: &str, ingredients: &[String]) -> NutritionProfile {
        self.resolver.resolve(dish_name, ingredients).await
    }

    /// Resolve a whole menu concurrently, in request order
    pub async fn resolve_many(&self, requests: &[MenuItemRequest]) -> Vec<NutritionProfile> {
        self.resolver.resolve_many(requests).await
    }

    /// Check a profile against a plain list of user allergens
    #[must_use]
    pub fn check_compatibility<S: AsRef<str>>(
        &self,
        profile: &NutritionProfile,
        user_allergens: &[S],
    ) -> CompatibilityResult {
        dishwise_intelligence::check_compatibility_with(
            profile,
            user_allergens,
            self.resolver.knowledge_base().policy(),
        )
    }

    /// Check a profile against a user's allergen profile, severities included
    #[must_use]
    pub fn check_allergen_profile(
        &self,
        profile: &NutritionProfile,
        allergen_profile: &AllergenProfile,
    ) -> CompatibilityResult {
        dishwise_intelligence::check_allergen_profile(
            profile,
            allergen_profile,
            self.resolver.knowledge_base().policy(),
        )
    }

    /// Curated dishes matching every criterion, in declaration order
    #[must_use]
    pub fn search_dishes_by_criteria(&self, criteria: &DishCriteria) -> Vec<String> {
        dishwise_intelligence::search_dishes_by_criteria(self.resolver.knowledge_base(), criteria)
    }

    /// Curated dish keys in declaration order
    #[must_use]
    pub fn list_known_dishes(&self) -> Vec<String> {
        self.resolver.knowledge_base().list_known_dishes()
    }

    /// Drop every cached profile, in memory and on the durable backend
    ///
    /// # Errors
    ///
    /// Returns an error if the durable backend fails to clear
    pub async fn clear_cache(&self) -> AppResult<()> {
        self.resolver.cache().clear().await
    }

    /// Write the in-memory cache to the durable backend
    ///
    /// # Errors
    ///
    /// Returns an error if the durable backend rejects the write
    pub async fn flush_cache(&self) -> AppResult<()> {
        self.resolver.cache().flush().await
    }

    /// Number of cached dishes
    pub async fn cache_len(&self) -> usize {
        self.resolver.cache().len().await
    }

    /// Name of the cache backend in use
    #[must_use]
    pub fn cache_backend_name(&self) -> &'static str {
        self.resolver.cache().backend_name()
    }
}
