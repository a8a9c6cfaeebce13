// ABOUTME: User allergen profile and compatibility verdict types
// ABOUTME: AllergenProfile is owned by the user-settings collaborator and read-only here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// How strongly a user reacts to an allergen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllergenSeverity {
    /// Discomfort only
    Mild,
    /// Noticeable reaction
    Moderate,
    /// Potentially dangerous reaction
    Severe,
}

impl fmt::Display for AllergenSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        })
    }
}

/// A user's declared allergens with optional per-allergen severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenProfile {
    /// Allergen display names as the user selected them
    pub selected_allergens: BTreeSet<String>,
    /// Severity keyed by the same display names
    #[serde(default)]
    pub severities: HashMap<String, AllergenSeverity>,
}

impl AllergenProfile {
    /// Build a profile from display names with no severities recorded
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_allergens: names.into_iter().map(Into::into).collect(),
            severities: HashMap::new(),
        }
    }

    /// Record a severity for one of the selected allergens
    #[must_use]
    pub fn with_severity(mut self, allergen: impl Into<String>, severity: AllergenSeverity) -> Self {
        let allergen = allergen.into();
        self.selected_allergens.insert(allergen.clone());
        self.severities.insert(allergen, severity);
        self
    }

    /// Severity recorded for an allergen, matched case-insensitively
    #[must_use]
    pub fn severity_of(&self, allergen: &str) -> Option<AllergenSeverity> {
        self.severities
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(allergen))
            .map(|(_, severity)| *severity)
    }
}

/// Outcome of checking a profile against a user's allergens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    /// True when no allergen conflicts were found
    pub is_safe: bool,
    /// Profile allergen names that conflict with the user's list
    pub conflicting_allergens: BTreeSet<String>,
    /// One message per conflicting allergen, in the profile's allergen order
    pub warnings: Vec<String>,
}
