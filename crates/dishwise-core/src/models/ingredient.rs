// ABOUTME: Ingredient references in the shapes menu collaborators send them
// ABOUTME: Normalized to plain names once at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One ingredient as supplied by a collaborator
///
/// Menu records carry ingredients as bare strings, as `{ "name": .. }`
/// objects, or as older `{ "ingredientName": .. }` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientRef {
    /// Bare ingredient string
    Name(String),
    /// Object with a `name` field
    Named {
        /// Ingredient name
        name: String,
    },
    /// Legacy object with an `ingredientName` field
    LegacyNamed {
        /// Ingredient name
        #[serde(rename = "ingredientName")]
        ingredient_name: String,
    },
}

impl IngredientRef {
    /// Plain trimmed ingredient name
    #[must_use]
    pub fn as_name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Named { name } => name.trim(),
            Self::LegacyNamed { ingredient_name } => ingredient_name.trim(),
        }
    }

    /// Normalize a slice of references into non-empty plain names
    #[must_use]
    pub fn normalize_all(refs: &[Self]) -> Vec<String> {
        refs.iter()
            .map(Self::as_name)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl From<&str> for IngredientRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for IngredientRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_every_shape() {
        let refs: Vec<IngredientRef> = serde_json::from_str(
            r#"["garlic", {"name": " soy sauce "}, {"ingredientName": "vinegar"}, "  "]"#,
        )
        .unwrap();

        assert_eq!(
            IngredientRef::normalize_all(&refs),
            vec!["garlic", "soy sauce", "vinegar"]
        );
    }
}
