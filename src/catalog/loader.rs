//! Catalog loading and validation

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{Catalog, CatalogFile};

/// Catalog error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid recipe '{id}': {}", .errors.join("; "))]
    InvalidRecipe { id: String, errors: Vec<String> },

    #[error("Duplicate recipe id: {0}")]
    DuplicateRecipe(String),

    #[error("Duplicate ingredient id: {0}")]
    DuplicateIngredient(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

impl Catalog {
    /// Build a catalog, validating every recipe
    pub fn from_file(file: CatalogFile) -> CatalogResult<Self> {
        let mut ingredients = HashMap::with_capacity(file.ingredients.len());
        for definition in file.ingredients {
            if ingredients.contains_key(&definition.id) {
                return Err(CatalogError::DuplicateIngredient(definition.id));
            }
            ingredients.insert(definition.id.clone(), definition);
        }

        let mut seen = HashSet::with_capacity(file.recipes.len());
        for recipe in &file.recipes {
            let errors = recipe.validate();
            if !errors.is_empty() {
                return Err(CatalogError::InvalidRecipe {
                    id: recipe.id.clone(),
                    errors,
                });
            }
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateRecipe(recipe.id.clone()));
            }

            // Scaling skips these rows; flag them for content authors
            for reference in &recipe.ingredients {
                if !ingredients.contains_key(&reference.ingredient_id) {
                    tracing::warn!(
                        "Recipe '{}' references unknown ingredient '{}'",
                        recipe.id,
                        reference.ingredient_id
                    );
                }
            }
        }

        Ok(Self {
            ingredients,
            recipes: file.recipes,
        })
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    /// Load a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded catalog from {}: {} recipes, {} ingredients",
            path.display(),
            catalog.recipe_count(),
            catalog.ingredient_count()
        );
        Ok(catalog)
    }
}
