//! Recipe model
//!
//! A static recipe from the catalog, plus the filter, sort and stats types
//! used to query the catalog.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::ingredient::{RecipeIngredientReference, DEFAULT_NAME_LANGUAGE};
use crate::units::normalize_language;

/// Localized recipe text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeTranslation {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A recipe from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    /// 1 (easiest) to 5
    pub difficulty: u8,
    pub time_minutes: u32,
    pub servings: u32,
    #[serde(default)]
    pub is_favorite: bool,
    pub category_id: String,
    pub anime_id: String,
    pub ingredients: Vec<RecipeIngredientReference>,
    pub translations: HashMap<String, RecipeTranslation>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// ISO 8601 date or date-time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Recipe {
    /// Translation for a language, falling back to English
    pub fn translation(&self, language: &str) -> Option<&RecipeTranslation> {
        self.translations
            .get(&normalize_language(language))
            .or_else(|| self.translations.get(DEFAULT_NAME_LANGUAGE))
    }

    /// Localized title, or the recipe id when no translation exists
    pub fn title(&self, language: &str) -> &str {
        self.translation(language)
            .map(|t| t.title.as_str())
            .unwrap_or(self.id.as_str())
    }

    /// Parse `created_at` as a calendar date
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    /// Check the recipe for authoring mistakes
    ///
    /// Returns every problem found; an empty list means the recipe is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push("ID is required".to_string());
        }
        if !(1..=5).contains(&self.difficulty) {
            errors.push(format!(
                "Difficulty must be between 1 and 5 (got {})",
                self.difficulty
            ));
        }
        if self.time_minutes == 0 {
            errors.push("Time must be greater than 0".to_string());
        }
        if self.servings == 0 {
            errors.push("Servings must be greater than 0".to_string());
        }
        if self.category_id.trim().is_empty() {
            errors.push("Category is required".to_string());
        }
        if self.anime_id.trim().is_empty() {
            errors.push("Anime is required".to_string());
        }
        if self.ingredients.is_empty() {
            errors.push("Ingredients are required".to_string());
        }
        for ingredient in &self.ingredients {
            if !ingredient.amount.is_finite() || ingredient.amount < 0.0 {
                errors.push(format!(
                    "Ingredient '{}' has invalid amount {}",
                    ingredient.ingredient_id, ingredient.amount
                ));
            }
        }
        if self.translations.is_empty() {
            errors.push("At least one translation is required".to_string());
        }
        if self.created_at.is_some() && self.created_date().is_none() {
            errors.push(format!(
                "Invalid created_at date: {}",
                self.created_at.as_deref().unwrap_or_default()
            ));
        }

        errors
    }

    pub fn summary(&self, language: &str) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            title: self.title(language).to_string(),
            anime_id: self.anime_id.clone(),
            category_id: self.category_id.clone(),
            difficulty: self.difficulty,
            time_minutes: self.time_minutes,
            servings: self.servings,
            is_favorite: self.is_favorite,
            ingredient_count: self.ingredients.len(),
        }
    }
}

/// Recipe summary for listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub anime_id: String,
    pub category_id: String,
    pub difficulty: u8,
    pub time_minutes: u32,
    pub servings: u32,
    pub is_favorite: bool,
    pub ingredient_count: usize,
}

/// Preparation time bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBucket {
    /// Up to 15 minutes
    Quick,
    /// 16 to 30 minutes
    Medium,
    /// Over 30 minutes
    Long,
}

impl TimeBucket {
    pub fn contains(&self, minutes: u32) -> bool {
        match self {
            TimeBucket::Quick => minutes <= 15,
            TimeBucket::Medium => minutes > 15 && minutes <= 30,
            TimeBucket::Long => minutes > 30,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quick" => Some(TimeBucket::Quick),
            "medium" => Some(TimeBucket::Medium),
            "long" => Some(TimeBucket::Long),
            _ => None,
        }
    }
}

/// Filters applied to the catalog
///
/// Empty lists place no constraint. Values inside one list are alternatives;
/// all non-empty lists must match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFilters {
    #[serde(default)]
    pub difficulty: Vec<u8>,
    #[serde(default)]
    pub time: Vec<TimeBucket>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub anime: Vec<String>,
    #[serde(default)]
    pub servings: Vec<u32>,
}

impl RecipeFilters {
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_empty()
            && self.time.is_empty()
            && self.category.is_empty()
            && self.anime.is_empty()
            && self.servings.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if !self.difficulty.is_empty() && !self.difficulty.contains(&recipe.difficulty) {
            return false;
        }
        if !self.time.is_empty() && !self.time.iter().any(|b| b.contains(recipe.time_minutes)) {
            return false;
        }
        if !self.category.is_empty()
            && !self
                .category
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&recipe.category_id))
        {
            return false;
        }
        if !self.anime.is_empty()
            && !self
                .anime
                .iter()
                .any(|a| a.eq_ignore_ascii_case(&recipe.anime_id))
        {
            return false;
        }
        if !self.servings.is_empty() && !self.servings.contains(&recipe.servings) {
            return false;
        }
        true
    }
}

/// Field to sort recipes by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Title,
    Difficulty,
    Time,
    CreatedAt,
}

impl SortBy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Some(SortBy::Title),
            "difficulty" => Some(SortBy::Difficulty),
            "time" => Some(SortBy::Time),
            "created_at" | "createdat" => Some(SortBy::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Aggregate numbers over the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeStats {
    pub total_recipes: usize,
    pub by_anime: BTreeMap<String, usize>,
    pub by_category: BTreeMap<String, usize>,
    pub by_difficulty: BTreeMap<u8, usize>,
    pub average_time_minutes: f64,
    pub most_popular: Vec<RecipeSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn onigiri() -> Recipe {
        Recipe {
            id: "onigiri".to_string(),
            difficulty: 2,
            time_minutes: 20,
            servings: 4,
            is_favorite: false,
            category_id: "snacks".to_string(),
            anime_id: "spirited-away".to_string(),
            ingredients: vec![RecipeIngredientReference::new("rice", 2.0)],
            translations: HashMap::from([(
                "en".to_string(),
                RecipeTranslation {
                    title: "Onigiri".to_string(),
                    description: "Rice balls".to_string(),
                },
            )]),
            tags: vec!["rice".to_string()],
            created_at: Some("2024-03-01".to_string()),
        }
    }

    #[test]
    fn test_valid_recipe_has_no_errors() {
        assert!(onigiri().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut recipe = onigiri();
        recipe.difficulty = 9;
        recipe.servings = 0;
        recipe.ingredients.clear();
        recipe.created_at = Some("yesterday".to_string());

        let errors = recipe.validate();
        assert_eq!(errors.len(), 4, "{:?}", errors);
    }

    #[test]
    fn test_created_date_formats() {
        let mut recipe = onigiri();
        assert_eq!(recipe.created_date(), NaiveDate::from_ymd_opt(2024, 3, 1));

        recipe.created_at = Some("2024-05-06T10:00:00Z".to_string());
        assert_eq!(recipe.created_date(), NaiveDate::from_ymd_opt(2024, 5, 6));

        recipe.created_at = None;
        assert_eq!(recipe.created_date(), None);
    }

    #[test]
    fn test_title_falls_back() {
        let mut recipe = onigiri();
        assert_eq!(recipe.title("de"), "Onigiri");
        recipe.translations.clear();
        assert_eq!(recipe.title("de"), "onigiri");
    }

    #[test]
    fn test_time_buckets() {
        assert!(TimeBucket::Quick.contains(15));
        assert!(!TimeBucket::Quick.contains(16));
        assert!(TimeBucket::Medium.contains(16));
        assert!(TimeBucket::Medium.contains(30));
        assert!(TimeBucket::Long.contains(31));
    }

    #[test]
    fn test_filters_and_between_lists_or_within() {
        let recipe = onigiri();
        let mut filters = RecipeFilters::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&recipe));

        filters.difficulty = vec![1, 2];
        filters.category = vec!["SNACKS".to_string()];
        assert!(filters.matches(&recipe));

        filters.time = vec![TimeBucket::Long];
        assert!(!filters.matches(&recipe));

        filters.time.push(TimeBucket::Medium);
        assert!(filters.matches(&recipe));

        filters.servings = vec![1];
        assert!(!filters.matches(&recipe));
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!(SortBy::from_str("createdAt"), Some(SortBy::CreatedAt));
        assert_eq!(SortBy::from_str("calories"), None);
        assert_eq!(SortOrder::from_str("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::from_str("sideways"), SortOrder::Asc);
    }
}
