//! Ingredient scaler
//!
//! Turns a recipe's ingredient references into display rows for a serving
//! count, unit system and language. Each row is computed independently:
//! unknown ingredients are dropped with a warning, while caller contract
//! violations fail the whole request.

use thiserror::Error;

use super::registry::IngredientRegistry;
use crate::models::{IngredientDisplayRow, RecipeIngredientReference};
use crate::units::{convert_to_system, format_amount, format_quantity, translate_unit, UnitSystem};

/// Scaling error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    #[error("Original servings must be a positive number (got {0})")]
    InvalidOriginalServings(f64),

    #[error("Requested servings must be a finite number (got {0})")]
    InvalidRequestedServings(f64),

    #[error("Ingredient '{ingredient_id}' has invalid amount {amount}")]
    InvalidAmount { ingredient_id: String, amount: f64 },

    #[error("Ingredient '{ingredient_id}' has no unit and its definition has no canonical unit")]
    MissingUnit { ingredient_id: String },
}

/// Result type for scaling operations
pub type ScaleResult<T> = Result<T, ScaleError>;

/// Parameters for one scaling request
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRequest {
    /// Servings the recipe amounts are written for
    pub original_servings: f64,
    /// Servings to scale to; callers usually clamp this to 1..=12
    pub requested_servings: f64,
    /// Convert units into this system; `None` keeps recipe units
    pub unit_system: Option<UnitSystem>,
    /// Display language code
    pub language: String,
}

impl ScaleRequest {
    pub fn new(original_servings: f64, requested_servings: f64) -> Self {
        Self {
            original_servings,
            requested_servings,
            unit_system: None,
            language: "en".to_string(),
        }
    }

    pub fn with_unit_system(mut self, unit_system: Option<UnitSystem>) -> Self {
        self.unit_system = unit_system;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    fn validate(&self) -> ScaleResult<()> {
        if !self.original_servings.is_finite() || self.original_servings <= 0.0 {
            return Err(ScaleError::InvalidOriginalServings(self.original_servings));
        }
        if !self.requested_servings.is_finite() {
            return Err(ScaleError::InvalidRequestedServings(self.requested_servings));
        }
        Ok(())
    }
}

/// Scale an amount by the servings ratio
pub fn scale_amount(amount: f64, original_servings: f64, requested_servings: f64) -> f64 {
    (amount * requested_servings) / original_servings
}

/// Build display rows for a recipe's ingredients
///
/// Input order is preserved. References whose ingredient cannot be resolved
/// are omitted from the output.
pub fn scale_ingredients<R>(
    registry: &R,
    ingredients: &[RecipeIngredientReference],
    request: &ScaleRequest,
) -> ScaleResult<Vec<IngredientDisplayRow>>
where
    R: IngredientRegistry + ?Sized,
{
    request.validate()?;

    let mut rows = Vec::with_capacity(ingredients.len());
    for reference in ingredients {
        if let Some(row) = display_row(registry, reference, request)? {
            rows.push(row);
        }
    }

    Ok(rows)
}

fn display_row<R>(
    registry: &R,
    reference: &RecipeIngredientReference,
    request: &ScaleRequest,
) -> ScaleResult<Option<IngredientDisplayRow>>
where
    R: IngredientRegistry + ?Sized,
{
    if !reference.amount.is_finite() || reference.amount < 0.0 {
        return Err(ScaleError::InvalidAmount {
            ingredient_id: reference.ingredient_id.clone(),
            amount: reference.amount,
        });
    }

    let Some(definition) = registry.lookup(&reference.ingredient_id) else {
        tracing::warn!("Ingredient not found: {}", reference.ingredient_id);
        return Ok(None);
    };

    let Some(name) = definition.name_for(&request.language) else {
        tracing::warn!(
            "No name for ingredient '{}' in language '{}'",
            reference.ingredient_id,
            request.language
        );
        return Ok(None);
    };

    let working_unit = reference
        .unit
        .as_deref()
        .filter(|unit| !unit.trim().is_empty())
        .unwrap_or(definition.unit.as_str());

    if working_unit.trim().is_empty() {
        return Err(ScaleError::MissingUnit {
            ingredient_id: reference.ingredient_id.clone(),
        });
    }

    let (amount, unit) = match request.unit_system {
        Some(system) => {
            let converted = convert_to_system(reference.amount, working_unit, system);
            (converted.amount, converted.unit)
        }
        None => (reference.amount, working_unit.to_string()),
    };

    let amount = scale_amount(amount, request.original_servings, request.requested_servings);
    let unit = translate_unit(&unit, &request.language);

    Ok(Some(IngredientDisplayRow {
        id: definition.id.clone(),
        emoji: definition.emoji.clone(),
        name: name.to_string(),
        amount,
        display_amount: format_amount(amount),
        display: format_quantity(amount, &unit),
        unit,
        notes: reference.notes.clone(),
    }))
}
