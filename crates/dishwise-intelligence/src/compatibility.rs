// ABOUTME: Allergen compatibility analysis between a dish profile and a user's allergens
// ABOUTME: Produces a safety verdict, the conflicting allergens, and one warning per conflict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::matching::MatchPolicy;
use dishwise_core::{AllergenProfile, CompatibilityResult, NutritionProfile};
use std::collections::BTreeSet;

/// Compare a profile's allergens with a user's list using substring matching
///
/// `"peanuts"` on the profile conflicts with `"Peanut"` from the user, and the
/// reverse holds too.
#[must_use]
pub fn check_compatibility<S: AsRef<str>>(
    profile: &NutritionProfile,
    user_allergens: &[S],
) -> CompatibilityResult {
    check_compatibility_with(profile, user_allergens, MatchPolicy::Substring)
}

/// Compare a profile's allergens with a user's list under an explicit policy
#[must_use]
pub fn check_compatibility_with<S: AsRef<str>>(
    profile: &NutritionProfile,
    user_allergens: &[S],
    policy: MatchPolicy,
) -> CompatibilityResult {
    analyze(profile, user_allergens, policy, |dish_allergen, user_allergen| {
        format!("Contains {dish_allergen} (matches your {user_allergen} allergy)")
    })
}

/// Compare against a full allergen profile, naming the severity in warnings
#[must_use]
pub fn check_allergen_profile(
    profile: &NutritionProfile,
    allergen_profile: &AllergenProfile,
    policy: MatchPolicy,
) -> CompatibilityResult {
    let selected: Vec<&str> = allergen_profile
        .selected_allergens
        .iter()
        .map(String::as_str)
        .collect();

    analyze(profile, &selected, policy, |dish_allergen, user_allergen| {
        allergen_profile.severity_of(user_allergen).map_or_else(
            || format!("Contains {dish_allergen} (matches your {user_allergen} allergy)"),
            |severity| {
                format!("Contains {dish_allergen} (matches your {severity} {user_allergen} allergy)")
            },
        )
    })
}

fn analyze<S, F>(
    profile: &NutritionProfile,
    user_allergens: &[S],
    policy: MatchPolicy,
    warning: F,
) -> CompatibilityResult
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> String,
{
    let mut conflicting_allergens = BTreeSet::new();
    let mut warnings = Vec::new();

    for dish_allergen in &profile.allergens {
        let folded = dish_allergen.trim().to_lowercase();
        let hit = user_allergens
            .iter()
            .map(|user| user.as_ref())
            .find(|user| policy.matches(&folded, &user.trim().to_lowercase()));

        if let Some(user_allergen) = hit {
            conflicting_allergens.insert(dish_allergen.clone());
            warnings.push(warning(dish_allergen, user_allergen.trim()));
        }
    }

    CompatibilityResult {
        is_safe: conflicting_allergens.is_empty(),
        conflicting_allergens,
        warnings,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::knowledge_base::KnowledgeBase;
    use dishwise_core::AllergenSeverity;

    fn kare_kare() -> NutritionProfile {
        KnowledgeBase::curated().resolve("kare kare").unwrap()
    }

    #[test]
    fn test_peanut_conflicts_with_peanuts() {
        let result = check_compatibility(&kare_kare(), &["Peanut"]);
        assert!(!result.is_safe);
        assert_eq!(result.conflicting_allergens.len(), 1);
        assert!(result.conflicting_allergens.contains("peanuts"));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_no_user_allergens_is_safe() {
        let result = check_compatibility::<&str>(&kare_kare(), &[]);
        assert!(result.is_safe);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_exact_policy() {
        let result = check_compatibility_with(&kare_kare(), &["peanut"], MatchPolicy::ExactOnly);
        assert!(result.is_safe);
    }

    #[test]
    fn test_severity_in_warning() {
        let user = AllergenProfile::from_names(["shellfish"])
            .with_severity("shellfish", AllergenSeverity::Severe);
        let result = check_allergen_profile(&kare_kare(), &user, MatchPolicy::Substring);
        assert!(!result.is_safe);
        assert_eq!(
            result.warnings,
            vec!["Contains shellfish (matches your severe shellfish allergy)".to_owned()]
        );
    }
}
