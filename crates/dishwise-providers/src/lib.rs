// ABOUTME: External nutrition provider implementations for the Dishwise engine
// ABOUTME: Recipe API client and adapter, circuit breaker, shared HTTP client, and test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition provider implementations and core abstractions.
//!
//! The resolver only sees [`NutritionProvider`]: every implementation answers
//! `Option<NutritionProfile>` and swallows its own failures after logging them.

pub use dishwise_core::errors;

/// Circuit breaker pattern for provider resilience
pub mod circuit_breaker;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// In-memory provider with canned profiles and a call counter
pub mod mock;
/// Provider trait and the recipe API adapter
pub mod provider;
/// Spoonacular-shaped recipe API client, wire models, and converters
pub mod recipe_api;

pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use dishwise_core::errors::provider::{ProviderError, ProviderResult};
pub use http_client::{build_client, configure_shared_client, shared_client, HttpClientSettings};
pub use mock::MockNutritionProvider;
pub use provider::{DisabledProvider, NutritionProvider, RecipeApiProvider};
pub use recipe_api::{RecipeApiClient, RecipeApiConfig};
