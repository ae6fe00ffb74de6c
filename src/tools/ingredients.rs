//! Ingredient scaling MCP Tools
//!
//! Scales a catalog recipe, or an ad-hoc ingredient list, to a serving count,
//! unit system and display language.

use serde::Serialize;

use super::units::parse_unit_system;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{IngredientDisplayRow, RecipeIngredientReference};
use crate::scaling::{scale_ingredients, ScaleRequest};
use crate::units::{normalize_language, UnitSystem};

/// Keyword that keeps recipe units instead of the configured default system
const KEEP_ORIGINAL_UNITS: &str = "original";

/// Response for scale_recipe
#[derive(Debug, Serialize)]
pub struct ScaledRecipeResponse {
    pub recipe_id: String,
    pub title: String,
    pub original_servings: f64,
    pub requested_servings: f64,
    pub unit_system: Option<UnitSystem>,
    pub language: String,
    pub ingredients: Vec<IngredientDisplayRow>,
    /// References dropped because their ingredient could not be resolved
    pub omitted: usize,
}

/// Response for scale_ingredients
#[derive(Debug, Serialize)]
pub struct ScaledIngredientsResponse {
    pub original_servings: f64,
    pub requested_servings: f64,
    pub unit_system: Option<UnitSystem>,
    pub language: String,
    pub ingredients: Vec<IngredientDisplayRow>,
    pub omitted: usize,
}

/// Resolve the unit system for a request
///
/// No value uses the configured default; "original" keeps recipe units.
pub fn resolve_unit_system(
    requested: Option<&str>,
    default: Option<UnitSystem>,
) -> Result<Option<UnitSystem>, String> {
    match requested.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) if value.eq_ignore_ascii_case(KEEP_ORIGINAL_UNITS) => Ok(None),
        Some(value) => parse_unit_system(value).map(Some),
    }
}

fn resolve_language(requested: Option<&str>, default: &str) -> String {
    match requested.map(str::trim) {
        Some(language) if !language.is_empty() => normalize_language(language),
        _ => default.to_string(),
    }
}

/// Scale a catalog recipe
///
/// `servings` defaults to the recipe's own serving count.
pub fn scale_recipe(
    catalog: &Catalog,
    config: &Config,
    recipe_id: &str,
    servings: Option<f64>,
    unit_system: Option<&str>,
    language: Option<&str>,
) -> Result<Option<ScaledRecipeResponse>, String> {
    let Some(recipe) = catalog.recipe(recipe_id) else {
        return Ok(None);
    };

    let unit_system = resolve_unit_system(unit_system, config.unit_system)?;
    let language = resolve_language(language, &config.language);
    let original_servings = f64::from(recipe.servings);
    let requested_servings = servings.unwrap_or(original_servings);

    let request = ScaleRequest::new(original_servings, requested_servings)
        .with_unit_system(unit_system)
        .with_language(language.clone());

    let ingredients = scale_ingredients(catalog, &recipe.ingredients, &request)
        .map_err(|e| format!("Failed to scale recipe '{}': {}", recipe_id, e))?;

    Ok(Some(ScaledRecipeResponse {
        recipe_id: recipe.id.clone(),
        title: recipe.title(&language).to_string(),
        original_servings,
        requested_servings,
        unit_system,
        omitted: recipe.ingredients.len() - ingredients.len(),
        language,
        ingredients,
    }))
}

/// Scale an ad-hoc ingredient list against the catalog's ingredients
pub fn scale_ingredient_list(
    catalog: &Catalog,
    config: &Config,
    ingredients: &[RecipeIngredientReference],
    original_servings: f64,
    requested_servings: f64,
    unit_system: Option<&str>,
    language: Option<&str>,
) -> Result<ScaledIngredientsResponse, String> {
    let unit_system = resolve_unit_system(unit_system, config.unit_system)?;
    let language = resolve_language(language, &config.language);

    let request = ScaleRequest::new(original_servings, requested_servings)
        .with_unit_system(unit_system)
        .with_language(language.clone());

    let rows = scale_ingredients(catalog, ingredients, &request)
        .map_err(|e| format!("Failed to scale ingredients: {}", e))?;

    Ok(ScaledIngredientsResponse {
        original_servings,
        requested_servings,
        unit_system,
        language,
        omitted: ingredients.len() - rows.len(),
        ingredients: rows,
    })
}
