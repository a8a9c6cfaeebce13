// ABOUTME: Criteria search over the curated knowledge base
// ABOUTME: Filters by spice level, allergen exclusions, calorie cap, and required tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::knowledge_base::{CuratedDish, KnowledgeBase};
use dishwise_core::DishCriteria;

fn satisfies(dish: &CuratedDish, criteria: &DishCriteria, kb: &KnowledgeBase) -> bool {
    if criteria
        .spice_level
        .is_some_and(|level| level != dish.spice_level)
    {
        return false;
    }

    if criteria
        .max_calories
        .is_some_and(|max| dish.nutrition.calories > max)
    {
        return false;
    }

    let policy = kb.policy();
    let contains_excluded = criteria.allergen_free.iter().any(|excluded| {
        let excluded = excluded.trim().to_lowercase();
        dish.allergens
            .iter()
            .any(|allergen| policy.matches(allergen, &excluded))
    });
    if contains_excluded {
        return false;
    }

    criteria.dietary_tags.iter().all(|wanted| {
        dish.dietary_tags
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(wanted.trim()))
    })
}

/// Keys of curated dishes meeting every criterion, in declaration order
///
/// Only the knowledge base is consulted, so results are always a subset of
/// [`KnowledgeBase::list_known_dishes`].
#[must_use]
pub fn search_dishes_by_criteria(kb: &KnowledgeBase, criteria: &DishCriteria) -> Vec<String> {
    kb.dishes()
        .iter()
        .filter(|dish| satisfies(dish, criteria, kb))
        .map(|dish| dish.key.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishwise_core::SpiceLevel;

    #[test]
    fn test_empty_criteria_returns_everything() {
        let kb = KnowledgeBase::curated();
        let found = search_dishes_by_criteria(&kb, &DishCriteria::default());
        assert_eq!(found, kb.list_known_dishes());
    }

    #[test]
    fn test_light_healthy_dishes() {
        let kb = KnowledgeBase::curated();
        let criteria = DishCriteria {
            max_calories: Some(300.0),
            dietary_tags: vec!["Healthy".into()],
            ..DishCriteria::default()
        };
        let found = search_dishes_by_criteria(&kb, &criteria);
        assert_eq!(
            found,
            vec!["sinigang", "tinola", "pinakbet", "ginisang monggo", "ensaladang talong"]
        );
    }

    #[test]
    fn test_allergen_free_and_spice() {
        let kb = KnowledgeBase::curated();
        let criteria = DishCriteria {
            spice_level: Some(SpiceLevel::Spicy),
            allergen_free: vec!["Shellfish".into()],
            ..DishCriteria::default()
        };
        assert!(search_dishes_by_criteria(&kb, &criteria).is_empty());

        let criteria = DishCriteria {
            allergen_free: vec!["peanut".into(), "soy".into()],
            ..DishCriteria::default()
        };
        let found = search_dishes_by_criteria(&kb, &criteria);
        assert!(!found.contains(&"kare kare".to_owned()));
        assert!(!found.contains(&"adobo".to_owned()));
        assert!(found.contains(&"tinola".to_owned()));
    }
}
