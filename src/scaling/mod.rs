//! Ingredient scaling module
//!
//! Builds servings- and locale-correct ingredient lists from recipe
//! references.

pub mod registry;
pub mod scaler;

pub use registry::IngredientRegistry;
pub use scaler::{scale_amount, scale_ingredients, ScaleError, ScaleRequest, ScaleResult};
