//! Recipe MCP Tools
//!
//! Read-only tools for browsing the recipe catalog.

use serde::Serialize;

use crate::catalog::{sort_recipes, Catalog};
use crate::models::{
    IngredientDisplayRow, Recipe, RecipeFilters, RecipeStats, RecipeSummary, SortBy, SortOrder,
};
use crate::scaling::{scale_ingredients, ScaleRequest};
use crate::units::normalize_language;

const MAX_LIMIT: i64 = 200;

/// Full recipe detail with localized ingredient rows at the recipe's own servings
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub anime_id: String,
    pub category_id: String,
    pub difficulty: u8,
    pub time_minutes: u32,
    pub servings: u32,
    pub is_favorite: bool,
    pub tags: Vec<String>,
    pub created_at: Option<String>,
    pub language: String,
    pub ingredients: Vec<IngredientDisplayRow>,
}

/// Response for search_recipes
#[derive(Debug, Serialize)]
pub struct SearchRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    /// Matches before pagination
    pub total: usize,
    pub limit: i64,
    pub offset: i64,
}

/// Response for similar_recipes
#[derive(Debug, Serialize)]
pub struct SimilarRecipesResponse {
    pub recipe_id: String,
    pub recipes: Vec<RecipeSummary>,
}

pub fn get_recipe(
    catalog: &Catalog,
    recipe_id: &str,
    language: &str,
) -> Result<Option<RecipeDetail>, String> {
    let Some(recipe) = catalog.recipe(recipe_id) else {
        return Ok(None);
    };

    let language = normalize_language(language);
    let servings = f64::from(recipe.servings);
    let request = ScaleRequest::new(servings, servings).with_language(language.clone());
    let ingredients = scale_ingredients(catalog, &recipe.ingredients, &request)
        .map_err(|e| format!("Failed to resolve ingredients: {}", e))?;

    let (title, description) = match recipe.translation(&language) {
        Some(t) => (t.title.clone(), t.description.clone()),
        None => (recipe.id.clone(), String::new()),
    };

    Ok(Some(RecipeDetail {
        id: recipe.id.clone(),
        title,
        description,
        anime_id: recipe.anime_id.clone(),
        category_id: recipe.category_id.clone(),
        difficulty: recipe.difficulty,
        time_minutes: recipe.time_minutes,
        servings: recipe.servings,
        is_favorite: recipe.is_favorite,
        tags: recipe.tags.clone(),
        created_at: recipe.created_at.clone(),
        language,
        ingredients,
    }))
}

/// Search, filter, sort and paginate the catalog
///
/// Without `sort_by` results keep catalog order.
#[allow(clippy::too_many_arguments)]
pub fn search_recipes(
    catalog: &Catalog,
    query: Option<&str>,
    filters: &RecipeFilters,
    sort_by: Option<&str>,
    sort_order: &str,
    language: &str,
    limit: i64,
    offset: i64,
) -> Result<SearchRecipesResponse, String> {
    let limit = limit.clamp(1, MAX_LIMIT);
    let offset = offset.max(0);
    let language = normalize_language(language);

    let sort_by = match sort_by.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => Some(SortBy::from_str(s).ok_or_else(|| {
            format!(
                "Invalid sort_by '{}' (expected title, difficulty, time or created_at)",
                s
            )
        })?),
        None => None,
    };

    let mut matches: Vec<&Recipe> = catalog
        .search(query.unwrap_or_default(), &language)
        .into_iter()
        .filter(|r| filters.matches(r))
        .collect();

    if let Some(sort_by) = sort_by {
        sort_recipes(&mut matches, sort_by, SortOrder::from_str(sort_order), &language);
    }

    let total = matches.len();
    let recipes = matches
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .map(|r| r.summary(&language))
        .collect();

    Ok(SearchRecipesResponse {
        recipes,
        total,
        limit,
        offset,
    })
}

pub fn recipe_stats(catalog: &Catalog, language: &str) -> RecipeStats {
    catalog.stats(&normalize_language(language))
}

pub fn similar_recipes(
    catalog: &Catalog,
    recipe_id: &str,
    limit: i64,
    language: &str,
) -> Option<SimilarRecipesResponse> {
    catalog.recipe(recipe_id)?;

    let language = normalize_language(language);
    let limit = limit.clamp(1, MAX_LIMIT) as usize;

    Some(SimilarRecipesResponse {
        recipe_id: recipe_id.to_string(),
        recipes: catalog
            .similar(recipe_id, limit)
            .into_iter()
            .map(|r| r.summary(&language))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeBucket;

    const CATALOG: &str = r#"{
        "ingredients": [
            {"id": "rice", "emoji": "🍚", "unit": "cups", "names": {"en": "Rice", "es": "Arroz"}},
            {"id": "nori", "emoji": "🟩", "unit": "sheets", "names": {"en": "Nori"}}
        ],
        "recipes": [
            {
                "id": "onigiri",
                "difficulty": 1,
                "time_minutes": 15,
                "servings": 4,
                "is_favorite": true,
                "category_id": "snacks",
                "anime_id": "spirited-away",
                "ingredients": [
                    {"ingredient_id": "rice", "amount": 2},
                    {"ingredient_id": "nori", "amount": 4}
                ],
                "translations": {
                    "en": {"title": "Onigiri", "description": "Rice balls"},
                    "es": {"title": "Bolas de arroz", "description": "Onigiri clásico"}
                },
                "tags": ["rice", "picnic"],
                "created_at": "2024-01-15"
            },
            {
                "id": "katsudon",
                "difficulty": 3,
                "time_minutes": 40,
                "servings": 2,
                "category_id": "mains",
                "anime_id": "yuri-on-ice",
                "ingredients": [{"ingredient_id": "rice", "amount": 1.5}],
                "translations": {"en": {"title": "Katsudon", "description": "Pork cutlet bowl"}},
                "tags": ["rice", "pork"],
                "created_at": "2023-06-01"
            },
            {
                "id": "rice-omelette",
                "difficulty": 2,
                "time_minutes": 25,
                "servings": 2,
                "category_id": "mains",
                "anime_id": "spirited-away",
                "ingredients": [{"ingredient_id": "rice", "amount": 1}],
                "translations": {"en": {"title": "Omurice"}},
                "tags": ["rice", "egg"]
            }
        ]
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json_str(CATALOG).unwrap()
    }

    fn ids(response: &SearchRecipesResponse) -> Vec<&str> {
        response.recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_get_recipe_localized() {
        let detail = get_recipe(&catalog(), "onigiri", "es-MX").unwrap().unwrap();
        assert_eq!(detail.language, "es");
        assert_eq!(detail.title, "Bolas de arroz");
        assert_eq!(detail.ingredients[0].display, "2 tazas");
        assert_eq!(detail.ingredients[0].name, "Arroz");
        // Nori has no Spanish name, falls back to English
        assert_eq!(detail.ingredients[1].name, "Nori");
        assert_eq!(detail.ingredients[1].display, "4 hojas");
    }

    #[test]
    fn test_get_recipe_not_found() {
        assert!(get_recipe(&catalog(), "missing", "en").unwrap().is_none());
    }

    #[test]
    fn test_search_recipes_query_and_filters() {
        let catalog = catalog();
        let filters = RecipeFilters::default();
        let response = search_recipes(&catalog, Some("rice"), &filters, None, "asc", "en", 50, 0).unwrap();
        assert_eq!(response.total, 3);
        assert_eq!(ids(&response), vec!["onigiri", "katsudon", "rice-omelette"]);

        let filters = RecipeFilters {
            time: vec![TimeBucket::Medium, TimeBucket::Long],
            category: vec!["MAINS".to_string()],
            ..Default::default()
        };
        let response = search_recipes(&catalog, None, &filters, Some("time"), "desc", "en", 50, 0).unwrap();
        assert_eq!(ids(&response), vec!["katsudon", "rice-omelette"]);
    }

    #[test]
    fn test_search_recipes_pagination() {
        let catalog = catalog();
        let filters = RecipeFilters::default();
        let response =
            search_recipes(&catalog, None, &filters, Some("title"), "asc", "en", 1, 1).unwrap();
        assert_eq!(response.total, 3);
        assert_eq!(response.limit, 1);
        // Katsudon, Omurice, Onigiri
        assert_eq!(ids(&response), vec!["rice-omelette"]);

        // Out-of-range limits are clamped
        let response = search_recipes(&catalog, None, &filters, None, "asc", "en", 0, -5).unwrap();
        assert_eq!(response.limit, 1);
        assert_eq!(response.offset, 0);
    }

    #[test]
    fn test_search_recipes_invalid_sort() {
        let filters = RecipeFilters::default();
        let err = search_recipes(&catalog(), None, &filters, Some("calories"), "asc", "en", 10, 0)
            .unwrap_err();
        assert!(err.contains("calories"));
    }

    #[test]
    fn test_similar_recipes() {
        let catalog = catalog();
        let response = similar_recipes(&catalog, "onigiri", 10, "en").unwrap();
        let ids: Vec<&str> = response.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rice-omelette"]);

        assert!(similar_recipes(&catalog, "missing", 10, "en").is_none());
    }

    #[test]
    fn test_recipe_stats() {
        let stats = recipe_stats(&catalog(), "es");
        assert_eq!(stats.total_recipes, 3);
        assert_eq!(stats.most_popular.len(), 1);
        assert_eq!(stats.most_popular[0].title, "Bolas de arroz");
    }
}
