// ABOUTME: Canonical allergen names, dietary tags, and profile defaults
// ABOUTME: Shared by tag inference, the knowledge base, and the provider adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Canonical lower-cased allergen names stored on profiles
pub mod allergens {
    /// Egg and egg-derived ingredients
    pub const EGGS: &str = "eggs";
    /// Milk, cheese, butter, cream
    pub const DAIRY: &str = "dairy";
    /// Peanuts and peanut sauces
    pub const PEANUTS: &str = "peanuts";
    /// Crustaceans and molluscs
    pub const SHELLFISH: &str = "shellfish";
    /// Finfish and fish sauce
    pub const FISH: &str = "fish";
    /// Soy sauce, tofu, soybeans
    pub const SOY: &str = "soy";
    /// Wheat and gluten-bearing grains
    pub const GLUTEN: &str = "gluten";
}

/// Dietary tag names stored on profiles
pub mod dietary_tags {
    /// No meat, fish, egg, or dairy keywords and at least one vegetable keyword
    pub const VEGETARIAN: &str = "vegetarian";
    /// Same evidence as vegetarian; inference does not distinguish the two
    pub const VEGAN: &str = "vegan";
    /// No gluten keyword found
    pub const GLUTEN_FREE: &str = "gluten-free";
    /// No dairy keyword found
    pub const DAIRY_FREE: &str = "dairy-free";
    /// Curated marker for lighter dishes
    pub const HEALTHY: &str = "healthy";
    /// Curated marker for protein-dense dishes
    pub const HIGH_PROTEIN: &str = "high-protein";
}

/// Profile id prefixes, one per resolution tier
pub mod sources {
    /// Profiles built from external provider data
    pub const PROVIDER: &str = "provider";
    /// Profiles copied from the curated knowledge base
    pub const CURATED: &str = "curated";
    /// Profiles produced by the heuristic estimator
    pub const ESTIMATED: &str = "estimated";
}

/// Serving size used when a source does not describe one
pub const DEFAULT_SERVING_SIZE: &str = "1 serving";

/// Serving size label for heuristic estimates
pub const ESTIMATED_SERVING_SIZE: &str = "1 serving (estimated)";
