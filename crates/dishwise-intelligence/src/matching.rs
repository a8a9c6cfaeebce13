// ABOUTME: Name matching policy used by cache, knowledge-base, and allergen comparisons
// ABOUTME: Substring matching over-matches deliberately; exact matching is the strict option
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dishwise_core::text::contains_either_way;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How two already-folded names are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Equal, or either contains the other
    #[default]
    Substring,
    /// Equal only
    ExactOnly,
}

impl MatchPolicy {
    /// Parse a policy from string, defaulting to substring matching
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "exact" | "exact_only" | "exact-only" => Self::ExactOnly,
            _ => Self::Substring,
        }
    }

    /// Compare two folded names under this policy
    ///
    /// Empty names never match.
    #[must_use]
    pub fn matches(self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        match self {
            Self::Substring => contains_either_way(a, b),
            Self::ExactOnly => a == b,
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Substring => "substring",
            Self::ExactOnly => "exact",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matches_both_directions() {
        assert!(MatchPolicy::Substring.matches("peanuts", "peanut"));
        assert!(MatchPolicy::Substring.matches("peanut", "peanuts"));
        assert!(!MatchPolicy::ExactOnly.matches("peanut", "peanuts"));
        assert!(MatchPolicy::ExactOnly.matches("soy", "soy"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!MatchPolicy::Substring.matches("", "soy"));
        assert!(!MatchPolicy::ExactOnly.matches("", ""));
    }

    #[test]
    fn test_parse() {
        assert_eq!(MatchPolicy::from_str_lossy("EXACT"), MatchPolicy::ExactOnly);
        assert_eq!(MatchPolicy::from_str_lossy("fuzzy"), MatchPolicy::Substring);
    }
}
