// ABOUTME: Keyword rules deriving allergens, spice level, and dietary tags from dish text
// ABOUTME: Case-insensitive substring matching over normalized dish names and ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tag inference
//!
//! Keyword families cover English and common Filipino ingredient names. Rules
//! are plain substring checks, so some over-matching is expected; a handful of
//! known false friends are rewritten before scanning.

use dishwise_core::constants::{allergens, dietary_tags};
use dishwise_core::text::normalize_dish_name;
use dishwise_core::SpiceLevel;
use std::collections::BTreeSet;

/// One allergen and the keywords that imply it
struct AllergenRule {
    allergen: &'static str,
    keywords: &'static [&'static str],
}

/// Phrases rewritten before scanning so they do not trip an unrelated family
const FALSE_FRIENDS: &[(&str, &str)] = &[
    ("eggplant", "talong"),
    ("butternut", "squash"),
    ("coconut milk", "gata"),
    ("coconut cream", "gata"),
    ("peanut butter", "peanut spread"),
    ("cocoa butter", "cocoa"),
];

const ALLERGEN_RULES: &[AllergenRule] = &[
    AllergenRule {
        allergen: allergens::EGGS,
        keywords: &[
            "egg", "itlog", "leche flan", "omelet", "torta", "mayo", "custard", "silog",
        ],
    },
    AllergenRule {
        allergen: allergens::DAIRY,
        keywords: &[
            "milk", "cheese", "queso", "cream", "butter", "leche", "gatas", "yogurt",
            "evaporada", "condensada",
        ],
    },
    AllergenRule {
        allergen: allergens::PEANUTS,
        keywords: &["peanut", "groundnut", "kare kare"],
    },
    AllergenRule {
        allergen: allergens::SHELLFISH,
        keywords: &[
            "shrimp", "hipon", "prawn", "crab", "alimango", "alimasag", "lobster", "squid",
            "pusit", "calamari", "shellfish", "bagoong", "tahong", "mussel", "clam", "halaan",
            "oyster", "talaba", "scallop",
        ],
    },
    AllergenRule {
        allergen: allergens::FISH,
        keywords: &[
            "fish", "isda", "bangus", "tilapia", "tuna", "salmon", "galunggong", "patis",
            "daing", "tinapa", "dilis", "sardine", "anchov",
        ],
    },
    AllergenRule {
        allergen: allergens::SOY,
        keywords: &["soy", "toyo", "tofu", "tokwa", "adobo", "tausi", "edamame", "miso"],
    },
    AllergenRule {
        allergen: allergens::GLUTEN,
        keywords: &[
            "wheat", "flour", "bread", "pandesal", "noodle", "pasta", "spaghetti", "canton",
            "miki", "mami", "lumpia", "breaded", "batter", "siopao", "siomai", "dumpling",
            "cake", "ensaymada", "barley", "beer",
        ],
    },
];

const VERY_SPICY_KEYWORDS: &[&str] = &[
    "very spicy",
    "extra spicy",
    "extra hot",
    "labuyo",
    "ghost pepper",
    "habanero",
    "carolina reaper",
];

const SPICY_KEYWORDS: &[&str] = &[
    "spicy", "bicol express", "chili", "chile", "sili", "sriracha", "hot sauce", "maanghang",
    "diablo", "buffalo", "kimchi", "sambal",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "sisig", "pepper", "paminta", "ginger", "luya", "curry", "kaldereta", "caldereta",
    "jalapeno",
];

const VEGETABLE_KEYWORDS: &[&str] = &[
    "vegetable", "veggie", "gulay", "salad", "ensalada", "pinakbet", "laing", "kangkong",
    "ampalaya", "talong", "okra", "sitaw", "monggo", "mongo", "chop suey", "chopsuey", "tofu",
    "tokwa", "mushroom",
];

const MEAT_KEYWORDS: &[&str] = &[
    "pork", "baboy", "beef", "baka", "chicken", "manok", "lechon", "liempo", "sisig",
    "longganisa", "tapa", "tocino", "bacon", "meat", "karne", "kare kare", "bulalo", "dinuguan",
    "lamb", "goat", "kambing", "duck", "turkey", "sausage", "chorizo", "hotdog", "inasal",
    "kaldereta", "mechado", "menudo", "afritada", "tinola", "bicol express", "chicharon",
];

/// Normalize text and rewrite known false friends
fn prepare(text: &str) -> String {
    let mut folded = normalize_dish_name(text);
    for (from, to) in FALSE_FRIENDS {
        if folded.contains(from) {
            folded = folded.replace(from, to);
        }
    }
    folded
}

fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

fn allergens_in(prepared: &str) -> BTreeSet<String> {
    ALLERGEN_RULES
        .iter()
        .filter(|rule| mentions_any(prepared, rule.keywords))
        .map(|rule| rule.allergen.to_owned())
        .collect()
}

fn spice_in(prepared: &str) -> SpiceLevel {
    if mentions_any(prepared, VERY_SPICY_KEYWORDS) {
        SpiceLevel::VerySpicy
    } else if mentions_any(prepared, SPICY_KEYWORDS) {
        SpiceLevel::Spicy
    } else if mentions_any(prepared, MEDIUM_KEYWORDS) {
        SpiceLevel::Medium
    } else {
        SpiceLevel::Mild
    }
}

fn dietary_tags_in(prepared: &str, detected_allergens: &BTreeSet<String>) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    let animal_product = mentions_any(prepared, MEAT_KEYWORDS)
        || [
            allergens::FISH,
            allergens::SHELLFISH,
            allergens::EGGS,
            allergens::DAIRY,
        ]
        .iter()
        .any(|allergen| detected_allergens.contains(*allergen));

    if mentions_any(prepared, VEGETABLE_KEYWORDS) && !animal_product {
        tags.insert(dietary_tags::VEGETARIAN.to_owned());
        tags.insert(dietary_tags::VEGAN.to_owned());
    }
    if !detected_allergens.contains(allergens::GLUTEN) {
        tags.insert(dietary_tags::GLUTEN_FREE.to_owned());
    }
    if !detected_allergens.contains(allergens::DAIRY) {
        tags.insert(dietary_tags::DAIRY_FREE.to_owned());
    }
    tags
}

/// Allergens implied by keywords in `text`
#[must_use]
pub fn infer_allergens(text: &str) -> BTreeSet<String> {
    allergens_in(&prepare(text))
}

/// Spice level implied by keywords in `text`, hottest rule first
#[must_use]
pub fn infer_spice_level(text: &str) -> SpiceLevel {
    spice_in(&prepare(text))
}

/// Dietary tags implied by `text`
///
/// `vegetarian` and `vegan` need positive evidence (a vegetable keyword) and no
/// meat, fish, egg, or dairy keyword. `gluten-free` and `dairy-free` are
/// assumed unless a matching allergen keyword appears.
#[must_use]
pub fn infer_dietary_tags(text: &str) -> BTreeSet<String> {
    let prepared = prepare(text);
    let detected = allergens_in(&prepared);
    dietary_tags_in(&prepared, &detected)
}

/// All inferred tags for a dish
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    /// Canonical allergen names
    pub allergens: BTreeSet<String>,
    /// Inferred heat
    pub spice_level: SpiceLevel,
    /// Inferred dietary tags
    pub dietary_tags: BTreeSet<String>,
}

impl TagSet {
    /// Run every rule family over the dish name plus ingredient names
    #[must_use]
    pub fn infer(dish_name: &str, ingredients: &[String]) -> Self {
        let mut text = dish_name.to_owned();
        for ingredient in ingredients {
            text.push(' ');
            text.push_str(ingredient);
        }

        let prepared = prepare(&text);
        let allergens = allergens_in(&prepared);
        let dietary_tags = dietary_tags_in(&prepared, &allergens);

        Self {
            spice_level: spice_in(&prepared),
            allergens,
            dietary_tags,
        }
    }
}
