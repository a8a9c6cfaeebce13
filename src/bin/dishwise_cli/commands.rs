// ABOUTME: Subcommand handlers for dishwise-cli
// ABOUTME: Each handler drives the engine and prints one JSON document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use dishwise::{DishCriteria, NutritionEngine, SpiceLevel};
use serde::Serialize;
use serde_json::json;

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn resolve(engine: &NutritionEngine, dish: &str, ingredients: &[String]) -> Result<()> {
    let profile = engine.resolve(dish, ingredients).await;
    print_json(&profile)
}

pub async fn check(engine: &NutritionEngine, dish: &str, allergens: &[String]) -> Result<()> {
    let profile = engine.resolve(dish, &[]).await;
    let result = engine.check_compatibility(&profile, allergens);
    print_json(&json!({
        "dish": profile.name,
        "allergens": profile.allergens,
        "compatibility": result,
    }))
}

pub fn search(
    engine: &NutritionEngine,
    max_calories: Option<f64>,
    spice_level: Option<SpiceLevel>,
    allergen_free: Vec<String>,
    dietary_tags: Vec<String>,
) -> Result<()> {
    let criteria = DishCriteria {
        spice_level,
        allergen_free,
        max_calories,
        dietary_tags,
    };
    print_json(&engine.search_dishes_by_criteria(&criteria))
}

pub fn list(engine: &NutritionEngine) -> Result<()> {
    print_json(&engine.list_known_dishes())
}

pub async fn clear_cache(engine: &NutritionEngine) -> Result<()> {
    let removed = engine.cache_len().await;
    engine.clear_cache().await?;
    print_json(&json!({ "cleared": removed }))
}
