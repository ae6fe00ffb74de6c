//! Data models
//!
//! Static catalog entities and the derived rows built from them.

mod ingredient;
mod recipe;

pub use ingredient::{
    IngredientDefinition, IngredientDisplayRow, RecipeIngredientReference, DEFAULT_NAME_LANGUAGE,
};
pub use recipe::{
    Recipe, RecipeFilters, RecipeStats, RecipeSummary, RecipeTranslation, SortBy, SortOrder,
    TimeBucket,
};
