//! Catalog queries
//!
//! In-memory lookups, text search, filtering, sorting and statistics over
//! the recipe list. Results keep catalog order unless sorted explicitly.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::Catalog;
use crate::models::{Recipe, RecipeFilters, RecipeStats, SortBy, SortOrder};

/// Number of favorites reported in stats
const MOST_POPULAR_LIMIT: usize = 5;

impl Catalog {
    pub fn by_anime(&self, anime_id: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.anime_id.eq_ignore_ascii_case(anime_id))
            .collect()
    }

    pub fn by_category(&self, category_id: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category_id.eq_ignore_ascii_case(category_id))
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: u8) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.difficulty == difficulty)
            .collect()
    }

    /// Recipes that take at most `max_minutes`
    pub fn by_max_time(&self, max_minutes: u32) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.time_minutes <= max_minutes)
            .collect()
    }

    pub fn favorites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite).collect()
    }

    /// Case-insensitive text search over title, description and tags
    ///
    /// Titles and descriptions are read in `language`, falling back to
    /// English. A blank query matches every recipe.
    pub fn search(&self, query: &str, language: &str) -> Vec<&Recipe> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.recipes.iter().collect();
        }

        self.recipes
            .iter()
            .filter(|recipe| {
                let text_match = recipe.translation(language).is_some_and(|t| {
                    t.title.to_lowercase().contains(&needle)
                        || t.description.to_lowercase().contains(&needle)
                });
                text_match
                    || recipe
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn filter(&self, filters: &RecipeFilters) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| filters.matches(r)).collect()
    }

    /// Same anime or same category, excluding the recipe itself
    pub fn similar(&self, recipe_id: &str, limit: usize) -> Vec<&Recipe> {
        let Some(target) = self.recipe(recipe_id) else {
            return Vec::new();
        };

        self.recipes
            .iter()
            .filter(|r| {
                r.id != target.id
                    && (r.anime_id == target.anime_id || r.category_id == target.category_id)
            })
            .take(limit)
            .collect()
    }

    pub fn stats(&self, language: &str) -> RecipeStats {
        let mut by_anime = BTreeMap::new();
        let mut by_category = BTreeMap::new();
        let mut by_difficulty = BTreeMap::new();
        let mut total_time: u64 = 0;

        for recipe in &self.recipes {
            *by_anime.entry(recipe.anime_id.clone()).or_insert(0) += 1;
            *by_category.entry(recipe.category_id.clone()).or_insert(0) += 1;
            *by_difficulty.entry(recipe.difficulty).or_insert(0) += 1;
            total_time += u64::from(recipe.time_minutes);
        }

        let average_time_minutes = if self.recipes.is_empty() {
            0.0
        } else {
            total_time as f64 / self.recipes.len() as f64
        };

        RecipeStats {
            total_recipes: self.recipes.len(),
            by_anime,
            by_category,
            by_difficulty,
            average_time_minutes,
            most_popular: self
                .favorites()
                .into_iter()
                .take(MOST_POPULAR_LIMIT)
                .map(|r| r.summary(language))
                .collect(),
        }
    }
}

/// Sort recipes in place
///
/// The sort is stable. Titles compare case-insensitively in `language`;
/// recipes without a parseable creation date sort first in ascending order.
pub fn sort_recipes(recipes: &mut [&Recipe], sort_by: SortBy, order: SortOrder, language: &str) {
    recipes.sort_by(|a, b| {
        let ordering = compare(a, b, sort_by, language);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &Recipe, b: &Recipe, sort_by: SortBy, language: &str) -> Ordering {
    match sort_by {
        SortBy::Title => a
            .title(language)
            .to_lowercase()
            .cmp(&b.title(language).to_lowercase()),
        SortBy::Difficulty => a.difficulty.cmp(&b.difficulty),
        SortBy::Time => a.time_minutes.cmp(&b.time_minutes),
        SortBy::CreatedAt => a.created_date().cmp(&b.created_date()),
    }
}
