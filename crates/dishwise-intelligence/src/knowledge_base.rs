// ABOUTME: Curated knowledge base of restaurant dishes with authoritative nutrition data
// ABOUTME: Lookup by exact normalized key, then by substring in declaration order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::matching::MatchPolicy;
use chrono::Utc;
use dishwise_core::constants::{allergens as a, dietary_tags as t, sources};
use dishwise_core::text::{normalize_dish_name, slugify};
use dishwise_core::{NutritionProfile, NutritionValues, ProfileSource, SpiceLevel};
use tracing::debug;

/// One curated dish
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuratedDish {
    /// Normalized lookup key
    pub key: &'static str,
    /// Display name
    pub display_name: &'static str,
    /// Per-serving nutrition
    pub nutrition: NutritionValues,
    /// Canonical allergen names
    pub allergens: &'static [&'static str],
    /// Perceived heat
    pub spice_level: SpiceLevel,
    /// Dietary tags
    pub dietary_tags: &'static [&'static str],
    /// Serving description
    pub serving_size: &'static str,
}

impl CuratedDish {
    /// Materialize the entry as a fresh profile
    #[must_use]
    pub fn to_profile(&self) -> NutritionProfile {
        NutritionProfile {
            id: format!("{}:{}", sources::CURATED, slugify(self.key)),
            name: self.display_name.to_owned(),
            nutrition: self.nutrition,
            allergens: self.allergens.iter().map(|s| (*s).to_owned()).collect(),
            spice_level: self.spice_level,
            dietary_tags: self.dietary_tags.iter().map(|s| (*s).to_owned()).collect(),
            serving_size: self.serving_size.to_owned(),
            last_updated: Utc::now(),
            source: ProfileSource::Curated,
        }
    }
}

const fn nutrients(
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sodium: f64,
) -> NutritionValues {
    NutritionValues {
        fiber: Some(fiber),
        sodium: Some(sodium),
        ..NutritionValues::macros(calories, protein, carbs, fat)
    }
}

#[allow(clippy::too_many_arguments)]
const fn dish(
    key: &'static str,
    display_name: &'static str,
    nutrition: NutritionValues,
    allergens: &'static [&'static str],
    spice_level: SpiceLevel,
    dietary_tags: &'static [&'static str],
    serving_size: &'static str,
) -> CuratedDish {
    CuratedDish {
        key,
        display_name,
        nutrition,
        allergens,
        spice_level,
        dietary_tags,
        serving_size,
    }
}

/// Built-in menu, in lookup order
#[rustfmt::skip]
static CURATED_DISHES: &[CuratedDish] = &[
    dish("adobo", "Adobo", nutrients(350.0, 25.0, 8.0, 24.0, 0.5, 980.0), &[a::SOY], SpiceLevel::Mild, &[t::HIGH_PROTEIN, t::DAIRY_FREE], "1 cup (200g)"),
    dish("sisig", "Sisig", nutrients(450.0, 28.0, 6.0, 35.0, 0.8, 870.0), &[a::EGGS, a::SOY], SpiceLevel::Medium, &[t::HIGH_PROTEIN, t::GLUTEN_FREE], "1 plate (250g)"),
    dish("sinigang", "Sinigang", nutrients(250.0, 22.0, 12.0, 12.0, 3.0, 1100.0), &[a::FISH], SpiceLevel::Mild, &[t::HEALTHY, t::GLUTEN_FREE, t::DAIRY_FREE], "1 bowl (350g)"),
    dish("kare kare", "Kare-Kare", nutrients(520.0, 30.0, 18.0, 38.0, 4.0, 760.0), &[a::PEANUTS, a::SHELLFISH], SpiceLevel::Mild, &[t::GLUTEN_FREE, t::DAIRY_FREE], "1 bowl (300g)"),
    dish("lechon kawali", "Lechon Kawali", nutrients(580.0, 26.0, 2.0, 52.0, 0.0, 690.0), &[], SpiceLevel::Mild, &[t::HIGH_PROTEIN, t::GLUTEN_FREE, t::DAIRY_FREE], "1 plate (200g)"),
    dish("pancit canton", "Pancit Canton", nutrients(420.0, 15.0, 60.0, 13.0, 3.0, 1150.0), &[a::GLUTEN, a::SOY, a::SHELLFISH], SpiceLevel::Mild, &[t::DAIRY_FREE], "1 plate (250g)"),
    dish("lumpia shanghai", "Lumpia Shanghai", nutrients(300.0, 12.0, 22.0, 18.0, 1.0, 540.0), &[a::GLUTEN, a::EGGS, a::SOY], SpiceLevel::Mild, &[t::DAIRY_FREE], "5 pieces"),
    dish("tinola", "Tinola", nutrients(220.0, 24.0, 9.0, 9.0, 2.0, 780.0), &[a::FISH], SpiceLevel::Mild, &[t::HEALTHY, t::HIGH_PROTEIN, t::GLUTEN_FREE, t::DAIRY_FREE], "1 bowl (350g)"),
    dish("bicol express", "Bicol Express", nutrients(490.0, 20.0, 10.0, 42.0, 2.0, 820.0), &[a::SHELLFISH], SpiceLevel::Spicy, &[t::GLUTEN_FREE, t::DAIRY_FREE], "1 cup (200g)"),
    dish("laing", "Laing", nutrients(280.0, 7.0, 14.0, 23.0, 6.0, 610.0), &[a::SHELLFISH], SpiceLevel::Spicy, &[t::GLUTEN_FREE, t::DAIRY_FREE], "1 cup (180g)"),
    dish("pinakbet", "Pinakbet", nutrients(180.0, 6.0, 16.0, 10.0, 6.0, 720.0), &[a::SHELLFISH], SpiceLevel::Mild, &[t::HEALTHY, t::GLUTEN_FREE, t::DAIRY_FREE], "1 cup (200g)"),
    dish("chicken inasal", "Chicken Inasal", nutrients(380.0, 35.0, 4.0, 24.0, 0.3, 690.0), &[], SpiceLevel::Mild, &[t::HIGH_PROTEIN, t::GLUTEN_FREE, t::DAIRY_FREE], "1 quarter chicken"),
    dish("bulalo", "Bulalo", nutrients(480.0, 38.0, 10.0, 32.0, 2.0, 950.0), &[a::FISH], SpiceLevel::Mild, &[t::HIGH_PROTEIN, t::GLUTEN_FREE, t::DAIRY_FREE], "1 bowl (400g)"),
    dish("kaldereta", "Kaldereta", nutrients(450.0, 28.0, 15.0, 30.0, 2.5, 880.0), &[a::DAIRY], SpiceLevel::Medium, &[t::HIGH_PROTEIN, t::GLUTEN_FREE], "1 cup (220g)"),
    dish("ginisang monggo", "Ginisang Monggo", nutrients(230.0, 14.0, 30.0, 6.0, 9.0, 520.0), &[], SpiceLevel::Mild, &[t::HEALTHY, t::GLUTEN_FREE, t::DAIRY_FREE], "1 bowl (250g)"),
    dish("ensaladang talong", "Ensaladang Talong", nutrients(120.0, 3.0, 12.0, 7.0, 5.0, 310.0), &[], SpiceLevel::Mild, &[t::HEALTHY, t::VEGETARIAN, t::VEGAN, t::GLUTEN_FREE, t::DAIRY_FREE], "1 cup (150g)"),
    dish("garlic rice", "Garlic Rice", nutrients(260.0, 5.0, 52.0, 4.0, 0.6, 300.0), &[], SpiceLevel::Mild, &[t::VEGETARIAN, t::VEGAN, t::GLUTEN_FREE, t::DAIRY_FREE], "1 cup (180g)"),
    dish("leche flan", "Leche Flan", nutrients(300.0, 7.0, 45.0, 10.0, 0.0, 90.0), &[a::EGGS, a::DAIRY], SpiceLevel::Mild, &[t::VEGETARIAN, t::GLUTEN_FREE], "1 slice (100g)"),
    dish("halo halo", "Halo-Halo", nutrients(380.0, 6.0, 72.0, 8.0, 3.0, 120.0), &[a::DAIRY], SpiceLevel::Mild, &[t::VEGETARIAN, t::GLUTEN_FREE], "1 glass (350g)"),
    dish("turon", "Turon", nutrients(280.0, 2.0, 45.0, 11.0, 2.0, 80.0), &[a::GLUTEN], SpiceLevel::Mild, &[t::VEGETARIAN, t::VEGAN, t::DAIRY_FREE], "2 pieces"),
];

/// Fixed table of curated dishes with a matching policy
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    dishes: &'static [CuratedDish],
    policy: MatchPolicy,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::curated()
    }
}

impl KnowledgeBase {
    /// The built-in restaurant menu with substring matching
    #[must_use]
    pub const fn curated() -> Self {
        Self {
            dishes: CURATED_DISHES,
            policy: MatchPolicy::Substring,
        }
    }

    /// A knowledge base with no entries; every lookup misses
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            dishes: &[],
            policy: MatchPolicy::Substring,
        }
    }

    /// Replace the matching policy
    #[must_use]
    pub const fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Active matching policy
    #[must_use]
    pub const fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Entries in declaration order
    #[must_use]
    pub const fn dishes(&self) -> &'static [CuratedDish] {
        self.dishes
    }

    /// Find an entry: exact key first, then the first entry the policy accepts
    #[must_use]
    pub fn lookup(&self, dish_name: &str) -> Option<&'static CuratedDish> {
        let key = normalize_dish_name(dish_name);
        if key.is_empty() {
            return None;
        }

        if let Some(found) = self.dishes.iter().find(|dish| dish.key == key) {
            return Some(found);
        }

        let found = self
            .dishes
            .iter()
            .find(|dish| self.policy.matches(&key, dish.key));
        if let Some(dish) = found {
            debug!(dish = %dish_name, matched = dish.key, "Curated dish matched by substring");
        }
        found
    }

    /// Look up a dish and materialize it as a profile
    #[must_use]
    pub fn resolve(&self, dish_name: &str) -> Option<NutritionProfile> {
        self.lookup(dish_name).map(CuratedDish::to_profile)
    }

    /// Every curated key, in declaration order
    #[must_use]
    pub fn list_known_dishes(&self) -> Vec<String> {
        self.dishes.iter().map(|dish| dish.key.to_owned()).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_adobo_entry() {
        let profile = KnowledgeBase::curated().resolve("Adobo").unwrap();
        assert!((profile.nutrition.calories - 350.0).abs() < f64::EPSILON);
        assert!((profile.nutrition.protein - 25.0).abs() < f64::EPSILON);
        assert_eq!(profile.allergens.len(), 1);
        assert!(profile.has_allergen("soy"));
        assert_eq!(profile.spice_level, SpiceLevel::Mild);
        assert_eq!(profile.id, "curated:adobo");
        assert_eq!(profile.source, ProfileSource::Curated);
    }

    #[test]
    fn test_fuzzy_lookup_first_declared_wins() {
        let kb = KnowledgeBase::curated();
        assert_eq!(kb.lookup("Chicken Adobo").map(|d| d.key), Some("adobo"));
        assert_eq!(kb.lookup("Kare-Kare").map(|d| d.key), Some("kare kare"));
        assert_eq!(kb.lookup("lechon").map(|d| d.key), Some("lechon kawali"));
    }

    #[test]
    fn test_exact_policy_rejects_partial_names() {
        let kb = KnowledgeBase::curated().with_policy(MatchPolicy::ExactOnly);
        assert!(kb.lookup("Chicken Adobo").is_none());
        assert!(kb.lookup("ADOBO").is_some());
    }

    #[test]
    fn test_empty_name_misses() {
        assert!(KnowledgeBase::curated().lookup(" -- ").is_none());
        assert!(KnowledgeBase::empty().lookup("adobo").is_none());
    }

    #[test]
    fn test_table_is_well_formed() {
        let kb = KnowledgeBase::curated();
        let keys = kb.list_known_dishes();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
        assert_eq!(keys.first().map(String::as_str), Some("adobo"));
        for dish in kb.dishes() {
            assert_eq!(normalize_dish_name(dish.key), dish.key);
            assert!(dish.nutrition.calories > 0.0);
        }
    }
}
