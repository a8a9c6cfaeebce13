// ABOUTME: Wire models for recipe search, recipe information, and ingredient parsing responses
// ABOUTME: Decoding tolerates missing or null fields and string-typed numeric amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read a numeric amount from a JSON number or numeric string
#[must_use]
pub fn amount_from_value(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount.filter(|amount| amount.is_finite())
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value).unwrap_or(0.0))
}

fn lenient_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(flag)) => Some(flag),
        Some(Value::String(text)) => text.trim().parse::<bool>().ok(),
        _ => None,
    })
}

/// `GET /recipes/complexSearch` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSearchResponse {
    /// Matching recipes, best first
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RecipeSummary>,
    /// Total matches on the provider side
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u64,
}

/// One search hit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Provider recipe id
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    /// Recipe title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

/// Nutrition block shared by recipe information and parsed ingredients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutrition {
    /// Per-serving nutrients
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrients: Vec<Nutrient>,
    /// Weight of one serving
    #[serde(default)]
    pub weight_per_serving: Option<ServingWeight>,
}

/// One nutrient amount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutrient {
    /// Nutrient name as the provider spells it (e.g. `"Carbohydrates"`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Amount in `unit`
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    /// Unit such as `g`, `mg`, `kcal`
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}

/// Serving weight
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServingWeight {
    /// Amount in `unit`
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
    /// Unit, usually `g`
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}

/// One ingredient listed on a recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    /// Ingredient name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Original recipe line
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
}

/// `GET /recipes/{id}/information?includeNutrition=true` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    /// Provider recipe id
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    /// Recipe title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Servings the recipe yields
    #[serde(default, deserialize_with = "lenient_optional_amount")]
    pub servings: Option<f64>,
    /// Provider's vegetarian flag
    #[serde(default, deserialize_with = "lenient_flag")]
    pub vegetarian: Option<bool>,
    /// Provider's vegan flag
    #[serde(default, deserialize_with = "lenient_flag")]
    pub vegan: Option<bool>,
    /// Provider's gluten-free flag
    #[serde(default, deserialize_with = "lenient_flag")]
    pub gluten_free: Option<bool>,
    /// Provider's dairy-free flag
    #[serde(default, deserialize_with = "lenient_flag")]
    pub dairy_free: Option<bool>,
    /// Ingredients with names
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    /// Per-serving nutrition
    #[serde(default)]
    pub nutrition: Option<RecipeNutrition>,
}

/// One element of the `POST /recipes/parseIngredients` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Canonical ingredient name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Line as submitted
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
    /// Nutrition for the parsed amount
    #[serde(default)]
    pub nutrition: Option<RecipeNutrition>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amounts_accept_strings_and_nulls() {
        let nutrition: RecipeNutrition = serde_json::from_value(json!({
            "nutrients": [
                { "name": "Calories", "amount": "412.5", "unit": "kcal" },
                { "name": "Protein", "amount": 21, "unit": "g" },
                { "name": "Fat", "amount": null, "unit": "g" },
                { "name": "Sugar", "amount": "n/a", "unit": "g" },
                { "name": "Fiber" }
            ]
        }))
        .unwrap();

        let amounts: Vec<f64> = nutrition.nutrients.iter().map(|n| n.amount).collect();
        assert_eq!(amounts, vec![412.5, 21.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_null_strings_and_lists_default_to_empty() {
        let search: RecipeSearchResponse = serde_json::from_value(json!({
            "results": [{ "id": 5, "title": null }],
            "totalResults": null
        }))
        .unwrap();
        assert_eq!(search.results[0].id, 5);
        assert!(search.results[0].title.is_empty());
        assert_eq!(search.total_results, 0);

        let info: RecipeInformation = serde_json::from_value(json!({
            "id": 9,
            "title": null,
            "extendedIngredients": [{ "name": null, "original": null }],
            "nutrition": {
                "nutrients": [{ "name": "Calories", "amount": 300, "unit": null }],
                "weightPerServing": { "amount": 250, "unit": null }
            }
        }))
        .unwrap();
        assert!(info.title.is_empty());
        assert!(info.extended_ingredients[0].name.is_empty());
        let nutrition = info.nutrition.unwrap();
        assert_eq!(nutrition.nutrients[0].amount, 300.0);
        assert!(nutrition.nutrients[0].unit.is_empty());

        let parsed: Vec<ParsedIngredient> =
            serde_json::from_value(json!([{ "name": null, "original": null, "nutrition": null }]))
                .unwrap();
        assert!(parsed[0].name.is_empty());
        assert!(parsed[0].nutrition.is_none());

        let empty: RecipeSearchResponse = serde_json::from_value(json!({ "results": null })).unwrap();
        assert!(empty.results.is_empty());
    }

    #[test]
    fn test_information_defaults_missing_fields() {
        let info: RecipeInformation =
            serde_json::from_value(json!({ "id": 715_538, "glutenFree": "true" })).unwrap();
        assert_eq!(info.id, 715_538);
        assert_eq!(info.gluten_free, Some(true));
        assert_eq!(info.vegan, None);
        assert!(info.nutrition.is_none());
        assert!(info.extended_ingredients.is_empty());
    }
}
