// ABOUTME: Nutrition intelligence algorithms for dish tagging, estimation, and allergen analysis
// ABOUTME: Extracted from the root crate so providers and the resolver share one rule set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Dishwise Intelligence
//!
//! Every function in this crate is pure and total: given a dish name (and
//! optionally ingredient names) it always produces an answer, never an error.
//!
//! - [`tags`]: allergen, spice, and dietary tag inference from keywords
//! - [`estimator`]: keyword-bucket nutrition estimates
//! - [`knowledge_base`]: curated dishes with authoritative data
//! - [`compatibility`]: allergen conflict analysis
//! - [`criteria`]: knowledge-base search by spice, allergens, calories, and tags

/// Allergen conflict analysis against a user's allergen list
pub mod compatibility;
/// Knowledge-base search by criteria
pub mod criteria;
/// Keyword-bucket nutrition estimation
pub mod estimator;
/// Curated dish table and lookup
pub mod knowledge_base;
/// Name matching policies shared by lookups and allergen checks
pub mod matching;
/// Keyword rules for allergens, spice level, and dietary tags
pub mod tags;

pub use compatibility::{check_allergen_profile, check_compatibility, check_compatibility_with};
pub use criteria::search_dishes_by_criteria;
pub use estimator::{estimate, estimate_profile, DishCategory};
pub use knowledge_base::{CuratedDish, KnowledgeBase};
pub use matching::MatchPolicy;
pub use tags::{infer_allergens, infer_dietary_tags, infer_spice_level, TagSet};
