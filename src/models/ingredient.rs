//! Ingredient models
//!
//! Registry definitions, the static references recipes hold, and the
//! display rows produced by scaling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::units::normalize_language;

/// Language used when an ingredient has no name in the requested one
pub const DEFAULT_NAME_LANGUAGE: &str = "en";

/// A static ingredient definition from the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientDefinition {
    pub id: String,
    #[serde(default)]
    pub emoji: String,
    /// Canonical unit used when a recipe reference gives none
    #[serde(default)]
    pub unit: String,
    /// Display name keyed by language code
    #[serde(default)]
    pub names: HashMap<String, String>,
}

impl IngredientDefinition {
    /// Localized name, falling back to English
    pub fn name_for(&self, language: &str) -> Option<&str> {
        let language = normalize_language(language);
        self.names
            .get(&language)
            .or_else(|| self.names.get(DEFAULT_NAME_LANGUAGE))
            .map(String::as_str)
    }
}

/// An ingredient as used by a recipe, at the recipe's original servings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientReference {
    pub ingredient_id: String,
    pub amount: f64,
    /// Overrides the definition's canonical unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RecipeIngredientReference {
    pub fn new(ingredient_id: impl Into<String>, amount: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            amount,
            unit: None,
            notes: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A display-ready ingredient line, recomputed for every request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientDisplayRow {
    pub id: String,
    pub emoji: String,
    pub name: String,
    /// Scaled and converted amount before display rounding
    pub amount: f64,
    /// Amount after display rounding
    pub display_amount: f64,
    /// Unit symbol translated to the display language
    pub unit: String,
    /// "<amount> <unit>"
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice() -> IngredientDefinition {
        IngredientDefinition {
            id: "rice".to_string(),
            emoji: "🍚".to_string(),
            unit: "cups".to_string(),
            names: HashMap::from([
                ("en".to_string(), "Rice".to_string()),
                ("ja".to_string(), "ご飯".to_string()),
            ]),
        }
    }

    #[test]
    fn test_name_for_language() {
        let rice = rice();
        assert_eq!(rice.name_for("ja"), Some("ご飯"));
        assert_eq!(rice.name_for("JA-jp"), Some("ご飯"));
    }

    #[test]
    fn test_name_falls_back_to_english() {
        assert_eq!(rice().name_for("fr"), Some("Rice"));
    }

    #[test]
    fn test_name_missing_everywhere() {
        let mut rice = rice();
        rice.names.clear();
        assert_eq!(rice.name_for("en"), None);
    }

    #[test]
    fn test_reference_deserializes_without_optional_fields() {
        let reference: RecipeIngredientReference =
            serde_json::from_str(r#"{"ingredient_id": "rice", "amount": 2}"#).unwrap();
        assert_eq!(reference, RecipeIngredientReference::new("rice", 2.0));
    }
}
