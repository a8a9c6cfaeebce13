// ABOUTME: Spoonacular-shaped recipe API integration
// ABOUTME: HTTP client with rate limiting, lenient wire models, and profile converters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe API
//!
//! Three endpoints are used:
//!
//! | Operation | Endpoint |
//! |---|---|
//! | name search | `GET /recipes/complexSearch` |
//! | recipe nutrition | `GET /recipes/{id}/information?includeNutrition=true` |
//! | ingredient analysis | `POST /recipes/parseIngredients` |
//!
//! Responses are decoded leniently: missing fields default, amounts may be
//! numbers or numeric strings, and unknown nutrients are ignored.

/// HTTP client and rate limiter
pub mod client;
/// Conversion from wire models to nutrition profiles
pub mod converters;
/// Wire models
pub mod models;

pub use client::{RecipeApiClient, RecipeApiConfig};
pub use converters::RecipeConverters;
pub use models::{
    ExtendedIngredient, Nutrient, ParsedIngredient, RecipeInformation, RecipeNutrition,
    RecipeSearchResponse, RecipeSummary,
};
