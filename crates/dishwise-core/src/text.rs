// ABOUTME: Dish-name normalization used as the lookup key for every tier
// ABOUTME: Folds case, strips punctuation, and collapses whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Normalize a dish name into its lookup key
///
/// Trims, lower-cases, drops every character that is not alphanumeric or
/// whitespace, and collapses runs of whitespace into one space. Hyphens are
/// treated as separators so `"Kare-Kare"` and `"kare kare"` share a key.
#[must_use]
pub fn normalize_dish_name(name: &str) -> String {
    let folded: String = name
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Turn a normalized key into a slug suitable for profile ids
#[must_use]
pub fn slugify(normalized: &str) -> String {
    normalized.replace(' ', "-")
}

/// Whether two normalized names match by containment in either direction
///
/// Empty strings never match; containment of the empty string is trivially
/// true and would turn every lookup into a hit.
#[must_use]
pub fn contains_either_way(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
