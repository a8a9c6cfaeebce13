// ABOUTME: Converters from recipe API wire models to nutrition profiles
// ABOUTME: Nutrients are matched by name; allergens and tags come from flags plus keyword inference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::models::{Nutrient, ParsedIngredient, RecipeInformation, RecipeNutrition};
use chrono::Utc;
use dishwise_core::constants::{allergens, dietary_tags, sources, DEFAULT_SERVING_SIZE};
use dishwise_core::text::{normalize_dish_name, slugify};
use dishwise_core::{NutritionProfile, NutritionValues, ProfileSource};
use dishwise_intelligence::TagSet;

/// Converter utilities for recipe API payloads
pub struct RecipeConverters;

impl RecipeConverters {
    /// Amount of the first nutrient named `wanted`
    ///
    /// An exact (case-insensitive) name beats a substring match, so `"Fat"` is
    /// preferred over `"Saturated Fat"` when both are present.
    fn find_nutrient(nutrients: &[Nutrient], wanted: &str) -> Option<f64> {
        let lowered: Vec<String> = nutrients.iter().map(|n| n.name.to_lowercase()).collect();
        lowered
            .iter()
            .position(|name| name == wanted)
            .or_else(|| lowered.iter().position(|name| name.contains(wanted)))
            .and_then(|index| nutrients.get(index))
            .map(|nutrient| nutrient.amount.max(0.0))
    }

    /// Map a nutrient list onto [`NutritionValues`]; unmatched macros are zero
    #[must_use]
    pub fn nutrition_values(nutrition: &RecipeNutrition) -> NutritionValues {
        let n = &nutrition.nutrients;
        NutritionValues {
            calories: Self::find_nutrient(n, "calories").unwrap_or(0.0),
            protein: Self::find_nutrient(n, "protein").unwrap_or(0.0),
            carbs: Self::find_nutrient(n, "carbohydrates").unwrap_or(0.0),
            fat: Self::find_nutrient(n, "fat").unwrap_or(0.0),
            fiber: Self::find_nutrient(n, "fiber"),
            sodium: Self::find_nutrient(n, "sodium"),
            sugar: Self::find_nutrient(n, "sugar"),
            calcium: Self::find_nutrient(n, "calcium"),
            iron: Self::find_nutrient(n, "iron"),
            vitamin_c: Self::find_nutrient(n, "vitamin c"),
        }
    }

    /// Describe one serving from the provider's serving weight
    #[must_use]
    pub fn serving_size(nutrition: Option<&RecipeNutrition>) -> String {
        nutrition
            .and_then(|n| n.weight_per_serving.as_ref())
            .filter(|weight| weight.amount > 0.0)
            .map_or_else(
                || DEFAULT_SERVING_SIZE.to_owned(),
                |weight| format!("1 serving ({}{})", weight.amount.round(), weight.unit),
            )
    }

    /// Apply the provider's diet flags on top of inferred tags
    ///
    /// `Some(true)` adds the tag, `Some(false)` removes it, `None` keeps the
    /// inferred answer. A positive gluten-free or dairy-free flag also clears
    /// the matching inferred allergen.
    fn apply_diet_flags(info: &RecipeInformation, tags: &mut TagSet) {
        let flags = [
            (info.vegetarian, dietary_tags::VEGETARIAN, None),
            (info.vegan, dietary_tags::VEGAN, None),
            (info.gluten_free, dietary_tags::GLUTEN_FREE, Some(allergens::GLUTEN)),
            (info.dairy_free, dietary_tags::DAIRY_FREE, Some(allergens::DAIRY)),
        ];

        for (flag, tag, allergen) in flags {
            match flag {
                Some(true) => {
                    tags.dietary_tags.insert(tag.to_owned());
                    if let Some(allergen) = allergen {
                        tags.allergens.remove(allergen);
                    }
                }
                Some(false) => {
                    tags.dietary_tags.remove(tag);
                }
                None => {}
            }
        }

        if info.vegan == Some(true) {
            tags.dietary_tags.insert(dietary_tags::VEGETARIAN.to_owned());
        }
    }

    fn profile(
        dish_name: &str,
        nutrition: NutritionValues,
        tags: TagSet,
        serving_size: String,
    ) -> NutritionProfile {
        let key = normalize_dish_name(dish_name);
        NutritionProfile {
            id: format!("{}:{}", sources::PROVIDER, slugify(&key)),
            name: dish_name.trim().to_owned(),
            nutrition: nutrition.rounded(),
            allergens: tags.allergens,
            spice_level: tags.spice_level,
            dietary_tags: tags.dietary_tags,
            serving_size,
            last_updated: Utc::now(),
            source: ProfileSource::Provider,
        }
    }

    /// Build a profile for `dish_name` from a recipe information payload
    #[must_use]
    pub fn from_recipe_information(dish_name: &str, info: &RecipeInformation) -> NutritionProfile {
        let ingredients: Vec<String> = info
            .extended_ingredients
            .iter()
            .map(|ingredient| {
                if ingredient.name.trim().is_empty() {
                    ingredient.original.clone()
                } else {
                    ingredient.name.clone()
                }
            })
            .collect();

        let mut tags = TagSet::infer(dish_name, &ingredients);
        Self::apply_diet_flags(info, &mut tags);

        let nutrition = info
            .nutrition
            .as_ref()
            .map(Self::nutrition_values)
            .unwrap_or_default();

        Self::profile(
            dish_name,
            nutrition,
            tags,
            Self::serving_size(info.nutrition.as_ref()),
        )
    }

    /// Build a profile for `dish_name` by totalling parsed ingredient nutrition
    #[must_use]
    pub fn from_parsed_ingredients(
        dish_name: &str,
        parsed: &[ParsedIngredient],
    ) -> NutritionProfile {
        let total = parsed
            .iter()
            .filter_map(|ingredient| ingredient.nutrition.as_ref())
            .map(Self::nutrition_values)
            .fold(NutritionValues::default(), |sum, values| sum.add(&values));

        let names: Vec<String> = parsed
            .iter()
            .map(|ingredient| {
                if ingredient.name.trim().is_empty() {
                    ingredient.original.clone()
                } else {
                    ingredient.name.clone()
                }
            })
            .collect();

        Self::profile(
            dish_name,
            total,
            TagSet::infer(dish_name, &names),
            DEFAULT_SERVING_SIZE.to_owned(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use dishwise_core::SpiceLevel;
    use serde_json::json;

    fn adobo_information() -> RecipeInformation {
        serde_json::from_value(json!({
            "id": 1001,
            "title": "Filipino Chicken Adobo",
            "glutenFree": true,
            "dairyFree": true,
            "vegetarian": false,
            "extendedIngredients": [
                { "name": "chicken thighs" },
                { "name": "soy sauce" },
                { "name": "", "original": "2 tbsp white vinegar" }
            ],
            "nutrition": {
                "nutrients": [
                    { "name": "Calories", "amount": 412.37, "unit": "kcal" },
                    { "name": "Saturated Fat", "amount": 6.1, "unit": "g" },
                    { "name": "Fat", "amount": 24.44, "unit": "g" },
                    { "name": "Net Carbohydrates", "amount": "7.0", "unit": "g" },
                    { "name": "Carbohydrates", "amount": "8.26", "unit": "g" },
                    { "name": "Protein", "amount": 38.5, "unit": "g" },
                    { "name": "Sodium", "amount": 1203.7, "unit": "mg" },
                    { "name": "Vitamin C", "amount": 2.04, "unit": "mg" }
                ],
                "weightPerServing": { "amount": 310, "unit": "g" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_recipe_information_conversion() {
        let profile = RecipeConverters::from_recipe_information("Chicken Adobo", &adobo_information());

        assert_eq!(profile.id, "provider:chicken-adobo");
        assert_eq!(profile.source, ProfileSource::Provider);
        assert_eq!(profile.nutrition.calories, 412.0);
        assert_eq!(profile.nutrition.fat, 24.4);
        assert_eq!(profile.nutrition.carbs, 8.3);
        assert_eq!(profile.nutrition.protein, 38.5);
        assert_eq!(profile.nutrition.sodium, Some(1204.0));
        assert_eq!(profile.nutrition.vitamin_c, Some(2.0));
        assert_eq!(profile.nutrition.fiber, None);
        assert_eq!(profile.serving_size, "1 serving (310g)");
        assert!(profile.has_allergen("soy"));
        assert!(profile.has_tag("gluten-free"));
        assert!(!profile.has_tag("vegetarian"));
    }

    #[test]
    fn test_missing_nutrition_is_placeholder() {
        let info = RecipeInformation {
            title: "Mystery".to_owned(),
            ..RecipeInformation::default()
        };
        let profile = RecipeConverters::from_recipe_information("Mystery", &info);
        assert!(profile.is_placeholder());
        assert_eq!(profile.serving_size, DEFAULT_SERVING_SIZE);
    }

    #[test]
    fn test_parsed_ingredients_are_totalled() {
        let parsed: Vec<ParsedIngredient> = serde_json::from_value(json!([
            {
                "name": "shrimp",
                "nutrition": { "nutrients": [
                    { "name": "Calories", "amount": 120, "unit": "kcal" },
                    { "name": "Protein", "amount": 23, "unit": "g" }
                ]}
            },
            {
                "name": "coconut milk",
                "nutrition": { "nutrients": [
                    { "name": "Calories", "amount": "230", "unit": "kcal" },
                    { "name": "Fat", "amount": 24, "unit": "g" }
                ]}
            },
            { "name": "siling labuyo" }
        ]))
        .unwrap();

        let profile = RecipeConverters::from_parsed_ingredients("Ginataang Hipon", &parsed);
        assert_eq!(profile.nutrition.calories, 350.0);
        assert_eq!(profile.nutrition.protein, 23.0);
        assert_eq!(profile.nutrition.fat, 24.0);
        assert!(profile.has_allergen("shellfish"));
        assert!(!profile.has_allergen("dairy"));
        assert_eq!(profile.spice_level, SpiceLevel::VerySpicy);
    }
}
