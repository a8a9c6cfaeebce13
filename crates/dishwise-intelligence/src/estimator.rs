// ABOUTME: Heuristic nutrition estimator classifying dish names into keyword buckets
// ABOUTME: Always succeeds; unmatched names fall back to a generic mid-range profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::tags::TagSet;
use chrono::Utc;
use dishwise_core::constants::{sources, ESTIMATED_SERVING_SIZE};
use dishwise_core::text::{normalize_dish_name, slugify};
use dishwise_core::{NutritionProfile, NutritionValues, ProfileSource};
use serde::{Deserialize, Serialize};

/// Keyword bucket a dish name falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishCategory {
    /// Rice and rice-based plates
    StapleGrain,
    /// Pork dishes
    Pork,
    /// Chicken and other birds
    Poultry,
    /// Fish and seafood
    Fish,
    /// Vegetable-forward dishes
    Vegetable,
    /// Noodles and pasta
    Noodle,
    /// Nothing matched
    Generic,
}

struct Bucket {
    category: DishCategory,
    keywords: &'static [&'static str],
    values: NutritionValues,
}

const fn with_micros(base: NutritionValues, fiber: f64, sodium: f64) -> NutritionValues {
    NutritionValues {
        fiber: Some(fiber),
        sodium: Some(sodium),
        ..base
    }
}

/// Checked top to bottom; the first bucket with a matching keyword wins
const BUCKETS: &[Bucket] = &[
    Bucket {
        category: DishCategory::StapleGrain,
        keywords: &[
            "rice", "kanin", "sinangag", "arroz", "lugaw", "champorado", "silog",
        ],
        values: with_micros(NutritionValues::macros(240.0, 4.5, 52.0, 1.0), 0.6, 380.0),
    },
    Bucket {
        category: DishCategory::Pork,
        keywords: &[
            "pork", "baboy", "liempo", "lechon", "sisig", "longganisa", "tocino", "bacon",
            "chicharon", "crispy pata", "bicol express", "dinuguan", "menudo",
        ],
        values: with_micros(NutritionValues::macros(450.0, 24.0, 6.0, 36.0), 0.5, 820.0),
    },
    Bucket {
        category: DishCategory::Poultry,
        keywords: &["chicken", "manok", "inasal", "tinola", "duck", "turkey"],
        values: with_micros(NutritionValues::macros(320.0, 30.0, 8.0, 18.0), 0.8, 640.0),
    },
    Bucket {
        category: DishCategory::Fish,
        keywords: &[
            "fish", "isda", "bangus", "tilapia", "tuna", "salmon", "galunggong", "sardine",
            "daing", "tinapa", "seafood", "shrimp", "hipon", "squid", "pusit",
        ],
        values: with_micros(NutritionValues::macros(240.0, 26.0, 5.0, 12.0), 0.4, 520.0),
    },
    Bucket {
        category: DishCategory::Vegetable,
        keywords: &[
            "vegetable", "veggie", "gulay", "pinakbet", "salad", "ensalada", "laing", "kangkong",
            "ampalaya", "talong", "eggplant", "monggo", "chop suey",
        ],
        values: with_micros(NutritionValues::macros(160.0, 6.0, 18.0, 8.0), 5.0, 450.0),
    },
    Bucket {
        category: DishCategory::Noodle,
        keywords: &[
            "noodle", "pancit", "mami", "bihon", "canton", "miki", "sotanghon", "palabok",
            "lomi", "spaghetti", "pasta", "ramen",
        ],
        values: with_micros(NutritionValues::macros(400.0, 14.0, 58.0, 12.0), 2.5, 980.0),
    },
];

const GENERIC_VALUES: NutritionValues = NutritionValues::macros(350.0, 15.0, 40.0, 14.0);

/// Bucket a dish name falls into
#[must_use]
pub fn classify(dish_name: &str) -> DishCategory {
    let key = normalize_dish_name(dish_name);
    BUCKETS
        .iter()
        .find(|bucket| bucket.keywords.iter().any(|keyword| key.contains(keyword)))
        .map_or(DishCategory::Generic, |bucket| bucket.category)
}

/// Estimate per-serving nutrition from the dish name alone
#[must_use]
pub fn estimate(dish_name: &str) -> NutritionValues {
    let category = classify(dish_name);
    BUCKETS
        .iter()
        .find(|bucket| bucket.category == category)
        .map_or(GENERIC_VALUES, |bucket| bucket.values)
}

/// Build a complete estimated profile, tags included
///
/// Nutrition is classified from the name; allergens, spice level, and dietary
/// tags come from the name plus any ingredient names.
#[must_use]
pub fn estimate_profile(dish_name: &str, ingredients: &[String]) -> NutritionProfile {
    let key = normalize_dish_name(dish_name);
    let slug = if key.is_empty() {
        "unknown".to_owned()
    } else {
        slugify(&key)
    };
    let display = dish_name.trim();
    let tags = TagSet::infer(dish_name, ingredients);

    NutritionProfile {
        id: format!("{}:{slug}", sources::ESTIMATED),
        name: if display.is_empty() {
            "Unknown dish".to_owned()
        } else {
            display.to_owned()
        },
        nutrition: estimate(dish_name).rounded(),
        allergens: tags.allergens,
        spice_level: tags.spice_level,
        dietary_tags: tags.dietary_tags,
        serving_size: ESTIMATED_SERVING_SIZE.to_owned(),
        last_updated: Utc::now(),
        source: ProfileSource::Estimated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_order() {
        assert_eq!(classify("Pork Fried Rice"), DishCategory::StapleGrain);
        assert_eq!(classify("Lechon Manok"), DishCategory::Pork);
        assert_eq!(classify("Pancit Bihon with Chicken"), DishCategory::Poultry);
        assert_eq!(classify("Fried Bangus"), DishCategory::Fish);
        assert_eq!(classify("Ginisang Gulay"), DishCategory::Vegetable);
        assert_eq!(classify("Pancit Malabon"), DishCategory::Noodle);
        assert_eq!(classify("mystery stew"), DishCategory::Generic);
    }

    #[test]
    fn test_generic_default() {
        let values = estimate("xyz-unknown-dish-123");
        assert!((values.calories - 350.0).abs() < f64::EPSILON);
        assert!(values.protein > 0.0);
    }

    #[test]
    fn test_estimate_profile_is_complete() {
        let profile = estimate_profile("  Tofu Veggie Salad ", &[]);
        assert_eq!(profile.id, "estimated:tofu-veggie-salad");
        assert_eq!(profile.name, "Tofu Veggie Salad");
        assert_eq!(profile.source, ProfileSource::Estimated);
        assert!(profile.nutrition.calories > 0.0);
        assert!(profile.allergens.contains("soy"));
        assert!(profile.dietary_tags.contains("vegan"));
    }

    #[test]
    fn test_empty_name_still_estimates() {
        let profile = estimate_profile("   ", &[]);
        assert_eq!(profile.id, "estimated:unknown");
        assert!(!profile.is_placeholder());
    }
}
