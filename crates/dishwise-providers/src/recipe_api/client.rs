// ABOUTME: HTTP client for the recipe API with a sliding-window rate limiter
// ABOUTME: Search, recipe information, and ingredient parsing calls returning ProviderError on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::{ParsedIngredient, RecipeInformation, RecipeSearchResponse, RecipeSummary};
use crate::errors::provider::ProviderError;
use crate::http_client::shared_client;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

/// Provider name used in errors and logs
pub const PROVIDER_NAME: &str = "recipe-api";

/// Retry hint when a 429 carries no usable `Retry-After`
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Recipe API client configuration
#[derive(Debug, Clone)]
pub struct RecipeApiConfig {
    /// API key sent as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL (default: <https://api.spoonacular.com>)
    pub base_url: String,
    /// Requests allowed per rolling minute; 0 disables local limiting
    pub rate_limit_per_minute: u32,
    /// Longest wait for a local rate limit slot before giving up
    pub max_rate_limit_wait: Duration,
}

impl Default for RecipeApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.spoonacular.com".to_owned(),
            rate_limit_per_minute: 60,
            max_rate_limit_wait: Duration::from_secs(30),
        }
    }
}

/// Sliding-window request limiter
#[derive(Debug)]
struct RateLimiter {
    requests: VecDeque<Instant>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    fn new(limit: u32, window: Duration) -> Self {
        Self {
            requests: VecDeque::new(),
            limit: usize::try_from(limit).unwrap_or(usize::MAX),
            window,
        }
    }

    /// Time until a slot frees up, or `None` when a request may go now
    fn wait_time(&mut self, now: Instant) -> Option<Duration> {
        if self.limit == 0 {
            return None;
        }
        while self
            .requests
            .front()
            .is_some_and(|sent| now.duration_since(*sent) >= self.window)
        {
            self.requests.pop_front();
        }
        if self.requests.len() < self.limit {
            return None;
        }
        self.requests
            .front()
            .map(|oldest| self.window.saturating_sub(now.duration_since(*oldest)))
    }

    fn record(&mut self, now: Instant) {
        if self.limit > 0 {
            self.requests.push_back(now);
        }
    }
}

/// Recipe API client
pub struct RecipeApiClient {
    config: RecipeApiConfig,
    http_client: Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl RecipeApiClient {
    /// Client on the process-wide shared HTTP pool
    #[must_use]
    pub fn new(config: RecipeApiConfig) -> Self {
        Self::with_http_client(config, shared_client().clone())
    }

    /// Client on a caller-supplied HTTP client
    #[must_use]
    pub fn with_http_client(config: RecipeApiConfig, http_client: Client) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));
        Self {
            config,
            http_client,
            rate_limiter: Mutex::new(rate_limiter),
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &RecipeApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Block until the rate limiter admits one more request
    ///
    /// Fails fast with `RateLimitExceeded` when the slot is further away than
    /// `max_rate_limit_wait`.
    async fn acquire_slot(&self) -> Result<(), ProviderError> {
        let mut limiter = self.rate_limiter.lock().await;
        while let Some(wait) = limiter.wait_time(Instant::now()) {
            if wait > self.config.max_rate_limit_wait {
                debug!(?wait, "Recipe API rate limit slot too far away, giving up");
                return Err(ProviderError::RateLimitExceeded {
                    provider: PROVIDER_NAME.to_owned(),
                    retry_after_secs: wait.as_secs().max(1),
                    limit_type: "local per-minute limit".to_owned(),
                });
            }
            debug!(?wait, "Recipe API rate limit reached, waiting");
            tokio::time::sleep(wait).await;
        }
        limiter.record(Instant::now());
        Ok(())
    }

    /// Send a request and decode a JSON body
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        field: &'static str,
    ) -> Result<T, ProviderError> {
        self.acquire_slot().await?;

        let response = request
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let text = response.text().await.unwrap_or_default();

        if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::PAYMENT_REQUIRED {
            return Err(ProviderError::RateLimitExceeded {
                provider: PROVIDER_NAME.to_owned(),
                retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
                limit_type: if status == StatusCode::PAYMENT_REQUIRED {
                    "daily_quota".to_owned()
                } else {
                    "requests_per_minute".to_owned()
                },
            });
        }

        if !status.is_success() {
            return Err(ProviderError::ApiError {
                provider: PROVIDER_NAME.to_owned(),
                status_code: status.as_u16(),
                message: text,
                retryable: status.is_server_error(),
            });
        }

        serde_json::from_str(&text).map_err(|e| ProviderError::ParseError {
            provider: PROVIDER_NAME.to_owned(),
            field,
            source: e,
        })
    }

    /// Search recipes by dish name, best match first
    ///
    /// # Errors
    ///
    /// Returns an error if the query is blank, the request fails, or the body
    /// cannot be decoded
    pub async fn search_recipes(
        &self,
        query: &str,
        number: u32,
    ) -> Result<Vec<RecipeSummary>, ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProviderError::NotFound {
                provider: PROVIDER_NAME.to_owned(),
                resource_type: "recipe".to_owned(),
                resource_id: String::new(),
            });
        }

        let number = number.clamp(1, 100).to_string();
        let request = self
            .http_client
            .get(self.url("/recipes/complexSearch"))
            .query(&[("query", query), ("number", number.as_str())]);

        let response: RecipeSearchResponse = self.execute(request, "search_response").await?;
        Ok(response.results)
    }

    /// Fetch one recipe with per-serving nutrition
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded
    pub async fn get_recipe_information(&self, id: u64) -> Result<RecipeInformation, ProviderError> {
        let request = self
            .http_client
            .get(self.url(&format!("/recipes/{id}/information")))
            .query(&[("includeNutrition", "true")]);

        self.execute(request, "recipe_information").await
    }

    /// Parse free-text ingredient lines into nutrition for one serving
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, the request fails, or the body
    /// cannot be decoded
    pub async fn parse_ingredients(
        &self,
        ingredients: &[String],
    ) -> Result<Vec<ParsedIngredient>, ProviderError> {
        let lines: Vec<&str> = ingredients
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ProviderError::NotFound {
                provider: PROVIDER_NAME.to_owned(),
                resource_type: "ingredients".to_owned(),
                resource_id: String::new(),
            });
        }

        let ingredient_list = lines.join("\n");
        let request = self
            .http_client
            .post(self.url("/recipes/parseIngredients"))
            .form(&[
                ("ingredientList", ingredient_list.as_str()),
                ("servings", "1"),
                ("includeNutrition", "true"),
            ]);

        self.execute(request, "parsed_ingredients").await
    }
}
