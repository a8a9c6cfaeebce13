// ABOUTME: Data model for resolved nutrition profiles and allergen checks
// ABOUTME: Value types shared by every crate in the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// User allergen profiles and compatibility verdicts
pub mod allergen;
/// Criteria for searching the curated knowledge base
pub mod criteria;
/// Ingredient references in their several wire shapes
pub mod ingredient;
/// Nutrition values and resolved profiles
pub mod nutrition;

pub use allergen::{AllergenProfile, AllergenSeverity, CompatibilityResult};
pub use criteria::DishCriteria;
pub use ingredient::IngredientRef;
pub use nutrition::{NutritionProfile, NutritionValues, ProfileSource, SpiceLevel};
