// ABOUTME: Search criteria for filtering the curated knowledge base
// ABOUTME: All fields are optional; an empty criteria matches every dish
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SpiceLevel;
use serde::{Deserialize, Serialize};

/// Filters applied by knowledge-base dish search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCriteria {
    /// Exact spice level required
    #[serde(default)]
    pub spice_level: Option<SpiceLevel>,
    /// Allergens the dish must not contain
    #[serde(default)]
    pub allergen_free: Vec<String>,
    /// Upper bound on calories per serving (inclusive)
    #[serde(default)]
    pub max_calories: Option<f64>,
    /// Dietary tags the dish must all carry
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}
