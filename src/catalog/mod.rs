//! Recipe catalog
//!
//! The static dataset of ingredient definitions and recipes, loaded once from
//! JSON and shared read-only.

mod loader;
mod query;

pub use loader::{CatalogError, CatalogResult};
pub use query::sort_recipes;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{IngredientDefinition, Recipe};
use crate::scaling::IngredientRegistry;

/// On-disk catalog layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub ingredients: Vec<IngredientDefinition>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// Validated, indexed catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    ingredients: HashMap<String, IngredientDefinition>,
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// All recipes in catalog order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn ingredient(&self, id: &str) -> Option<&IngredientDefinition> {
        self.ingredients.get(id)
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

impl IngredientRegistry for Catalog {
    fn lookup(&self, ingredient_id: &str) -> Option<&IngredientDefinition> {
        self.ingredient(ingredient_id)
    }
}
