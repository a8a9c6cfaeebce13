// ABOUTME: Main library entry point for the Dishwise nutrition and allergen engine
// ABOUTME: Resolves dish names to nutrition profiles and checks them against user allergens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dishwise
//!
//! Turns restaurant dish names into nutrition profiles (calories, macros,
//! allergens, spice level, dietary tags) and checks them against a user's
//! allergens.
//!
//! ## Architecture
//!
//! - **dishwise-core**: profile data model, errors, name normalization
//! - **dishwise-intelligence**: curated knowledge base, estimator, tag inference,
//!   compatibility, criteria search
//! - **dishwise-providers**: recipe API client behind a rate limiter and circuit breaker
//! - **this crate**: durable cache, resolution pipeline, configuration, logging,
//!   and the [`engine::NutritionEngine`] facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dishwise::config::EngineConfig;
//! use dishwise::engine::NutritionEngine;
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = NutritionEngine::from_config(&EngineConfig::offline()).await;
//!     let profile = engine.resolve("Chicken Adobo", &[]).await;
//!     let result = engine.check_compatibility(&profile, &["soy"]);
//!     println!("{} kcal, safe: {}", profile.nutrition.calories, result.is_safe);
//! }
//! ```

/// Nutrition cache with durable backends
pub mod cache;

/// Environment configuration
pub mod config;

/// Engine facade
pub mod engine;

/// Unified error handling, re-exported from `dishwise-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Resolution pipeline
pub mod resolver;

pub use dishwise_core::{
    AllergenProfile, AllergenSeverity, CompatibilityResult, DishCriteria, IngredientRef,
    NutritionProfile, NutritionValues, ProfileSource, SpiceLevel,
};
pub use engine::NutritionEngine;
pub use resolver::{MenuItemRequest, NutritionResolver};
