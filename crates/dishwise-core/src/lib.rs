// ABOUTME: Core types and constants for the Dishwise nutrition and allergen engine
// ABOUTME: Foundation crate with error handling, the profile data model, and text normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dishwise Core
//!
//! Foundation crate providing shared types for the Dishwise nutrition engine.
//! This crate changes infrequently so the intelligence, provider, and root
//! crates can build on it without recompiling each other.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **models**: `NutritionProfile`, `NutritionValues`, allergen and ingredient types
//! - **text**: Dish-name normalization shared by every lookup path
//! - **constants**: Canonical allergen and dietary tag names

/// Unified error handling system with standard error codes
pub mod errors;

/// Canonical allergen names, dietary tags, and defaults
pub mod constants;

/// Nutrition profile, allergen, and ingredient data model
pub mod models;

/// Dish-name normalization
pub mod text;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    AllergenProfile, AllergenSeverity, CompatibilityResult, DishCriteria, IngredientRef,
    NutritionProfile, NutritionValues, ProfileSource, SpiceLevel,
};
pub use text::normalize_dish_name;
