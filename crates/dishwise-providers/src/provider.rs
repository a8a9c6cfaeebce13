// ABOUTME: NutritionProvider trait and the recipe API adapter behind a circuit breaker
// ABOUTME: Provider failures are logged and reported as misses, never as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::recipe_api::client::PROVIDER_NAME;
use crate::recipe_api::{RecipeApiClient, RecipeApiConfig, RecipeConverters};
use async_trait::async_trait;
use dishwise_core::NutritionProfile;
use tracing::{debug, warn};

/// Source of externally resolved nutrition profiles
///
/// Implementations never fail past this boundary: any transport, decode, or
/// availability problem comes back as `None`.
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Resolve a dish by name
    async fn lookup_dish(&self, dish_name: &str) -> Option<NutritionProfile>;

    /// Resolve a dish from its ingredient list
    async fn analyze_ingredients(
        &self,
        dish_name: &str,
        ingredients: &[String],
    ) -> Option<NutritionProfile>;
}

/// Log a provider failure at a level matching its severity and turn it into a miss
fn into_miss(
    provider: &str,
    dish_name: &str,
    result: ProviderResult<NutritionProfile>,
) -> Option<NutritionProfile> {
    match result {
        Ok(profile) => Some(profile),
        Err(ProviderError::NotFound { .. }) => {
            debug!(provider, dish = %dish_name, "Provider has no match");
            None
        }
        Err(error) => {
            warn!(provider, dish = %dish_name, error = %error, "Provider lookup failed");
            None
        }
    }
}

/// [`NutritionProvider`] over the recipe API
pub struct RecipeApiProvider {
    client: RecipeApiClient,
    circuit_breaker: CircuitBreaker,
}

impl RecipeApiProvider {
    /// Adapter with the default circuit breaker thresholds
    #[must_use]
    pub fn new(client: RecipeApiClient) -> Self {
        Self::with_circuit_breaker(client, CircuitBreakerConfig::default())
    }

    /// Adapter with explicit circuit breaker thresholds
    #[must_use]
    pub fn with_circuit_breaker(client: RecipeApiClient, config: CircuitBreakerConfig) -> Self {
        Self {
            client,
            circuit_breaker: CircuitBreaker::with_config(PROVIDER_NAME, config),
        }
    }

    /// Adapter on the shared HTTP pool
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::ConfigurationError`] when no API key is set
    pub fn from_config(config: RecipeApiConfig) -> ProviderResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::ConfigurationError {
                provider: PROVIDER_NAME.to_owned(),
                details: "API key is empty".to_owned(),
            });
        }
        Ok(Self::new(RecipeApiClient::new(config)))
    }

    /// Breaker state, exposed for diagnostics
    #[must_use]
    pub fn circuit_state(&self) -> CircuitState {
        self.circuit_breaker.state()
    }

    /// Name search, top result, then that recipe's nutrition
    ///
    /// # Errors
    ///
    /// Returns the first provider failure, or `NotFound` when the search is empty
    pub async fn try_lookup_dish(&self, dish_name: &str) -> ProviderResult<NutritionProfile> {
        let results = self
            .circuit_breaker
            .call(self.client.search_recipes(dish_name, 1))
            .await?;

        let top = results
            .into_iter()
            .find(|recipe| recipe.id > 0)
            .ok_or_else(|| ProviderError::NotFound {
                provider: PROVIDER_NAME.to_owned(),
                resource_type: "recipe".to_owned(),
                resource_id: dish_name.to_owned(),
            })?;
        debug!(dish = %dish_name, recipe_id = top.id, title = %top.title, "Recipe search hit");

        let info = self
            .circuit_breaker
            .call(self.client.get_recipe_information(top.id))
            .await?;

        Ok(RecipeConverters::from_recipe_information(dish_name, &info))
    }

    /// Ingredient analysis totalled into one profile
    ///
    /// # Errors
    ///
    /// Returns the provider failure, or `NotFound` when nothing was parsed
    pub async fn try_analyze_ingredients(
        &self,
        dish_name: &str,
        ingredients: &[String],
    ) -> ProviderResult<NutritionProfile> {
        let parsed = self
            .circuit_breaker
            .call(self.client.parse_ingredients(ingredients))
            .await?;

        if parsed.is_empty() {
            return Err(ProviderError::NotFound {
                provider: PROVIDER_NAME.to_owned(),
                resource_type: "ingredients".to_owned(),
                resource_id: dish_name.to_owned(),
            });
        }

        Ok(RecipeConverters::from_parsed_ingredients(dish_name, &parsed))
    }
}

#[async_trait]
impl NutritionProvider for RecipeApiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn lookup_dish(&self, dish_name: &str) -> Option<NutritionProfile> {
        into_miss(PROVIDER_NAME, dish_name, self.try_lookup_dish(dish_name).await)
    }

    async fn analyze_ingredients(
        &self,
        dish_name: &str,
        ingredients: &[String],
    ) -> Option<NutritionProfile> {
        into_miss(
            PROVIDER_NAME,
            dish_name,
            self.try_analyze_ingredients(dish_name, ingredients).await,
        )
    }
}

/// Provider that always misses; used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProvider;

#[async_trait]
impl NutritionProvider for DisabledProvider {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn lookup_dish(&self, _dish_name: &str) -> Option<NutritionProfile> {
        None
    }

    async fn analyze_ingredients(
        &self,
        _dish_name: &str,
        _ingredients: &[String],
    ) -> Option<NutritionProfile> {
        None
    }
}
