// ABOUTME: NutritionValues, NutritionProfile, SpiceLevel, and ProfileSource definitions
// ABOUTME: Profiles are immutable value objects produced by one of three resolution tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::sources;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Per-serving nutrient amounts
///
/// Calories and milligram micronutrients are whole numbers; gram amounts keep
/// one decimal. Every field is non-negative once passed through [`Self::rounded`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionValues {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fat: f64,
    /// Dietary fiber (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Sodium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    /// Sugar (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// Calcium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium: Option<f64>,
    /// Iron (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron: Option<f64>,
    /// Vitamin C (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_c: Option<f64>,
}

impl NutritionValues {
    /// Macro-only values with no micronutrient data
    #[must_use]
    pub const fn macros(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber: None,
            sodium: None,
            sugar: None,
            calcium: None,
            iron: None,
            vitamin_c: None,
        }
    }

    /// Clamp negatives to zero and apply the storage rounding rules
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            calories: round_whole(self.calories),
            protein: round_to_1(self.protein),
            carbs: round_to_1(self.carbs),
            fat: round_to_1(self.fat),
            fiber: self.fiber.map(round_to_1),
            sodium: self.sodium.map(round_whole),
            sugar: self.sugar.map(round_to_1),
            calcium: self.calcium.map(round_whole),
            iron: self.iron.map(round_to_1),
            vitamin_c: self.vitamin_c.map(round_to_1),
        }
    }

    /// Add another set of values field by field (used to total ingredient lists)
    #[must_use]
    pub fn add(self, other: &Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: add_optional(self.fiber, other.fiber),
            sodium: add_optional(self.sodium, other.sodium),
            sugar: add_optional(self.sugar, other.sugar),
            calcium: add_optional(self.calcium, other.calcium),
            iron: add_optional(self.iron, other.iron),
            vitamin_c: add_optional(self.vitamin_c, other.vitamin_c),
        }
    }
}

fn add_optional(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(a.unwrap_or(0.0) + b.unwrap_or(0.0)),
    }
}

fn round_whole(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0).round()
    } else {
        0.0
    }
}

fn round_to_1(value: f64) -> f64 {
    if value.is_finite() {
        (value.max(0.0) * 10.0).round() / 10.0
    } else {
        0.0
    }
}

/// Perceived heat of a dish, ordered mildest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    /// No noticeable heat
    #[default]
    Mild,
    /// Peppery or gingery warmth
    Medium,
    /// Chili-forward
    Spicy,
    /// Bird's-eye chili territory
    VerySpicy,
}

impl SpiceLevel {
    /// Wire name of this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Medium => "medium",
            Self::Spicy => "spicy",
            Self::VerySpicy => "very_spicy",
        }
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which resolution tier produced a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    /// External recipe/nutrition provider
    Provider,
    /// Curated knowledge base
    Curated,
    /// Keyword heuristic estimate
    Estimated,
}

impl ProfileSource {
    /// Id prefix for profiles from this source
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Provider => sources::PROVIDER,
            Self::Curated => sources::CURATED,
            Self::Estimated => sources::ESTIMATED,
        }
    }
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved nutrition, allergen, spice, and dietary record for one dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionProfile {
    /// Stable identifier, `<source>:<slug>`
    pub id: String,
    /// Display name
    pub name: String,
    /// Nutrient amounts per serving
    pub nutrition: NutritionValues,
    /// Canonical lower-cased allergen names
    pub allergens: BTreeSet<String>,
    /// Perceived heat
    pub spice_level: SpiceLevel,
    /// Dietary tags such as `vegetarian` or `gluten-free`
    pub dietary_tags: BTreeSet<String>,
    /// Free-text serving description
    pub serving_size: String,
    /// When the profile was produced
    pub last_updated: DateTime<Utc>,
    /// Tier that produced the profile
    pub source: ProfileSource,
}

impl NutritionProfile {
    /// A zero-calorie profile is a placeholder, not a confident resolution
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.nutrition.calories <= 0.0
    }

    /// Whether the profile lists the given allergen (exact canonical name)
    #[must_use]
    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens.contains(&allergen.to_lowercase())
    }

    /// Whether the profile carries the given dietary tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.dietary_tags.contains(&tag.to_lowercase())
    }
}
