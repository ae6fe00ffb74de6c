//! Ingredient registry
//!
//! Read-only lookup of ingredient definitions by id.

use std::collections::HashMap;

use crate::models::IngredientDefinition;

/// Source of static ingredient definitions
pub trait IngredientRegistry {
    fn lookup(&self, ingredient_id: &str) -> Option<&IngredientDefinition>;
}

impl IngredientRegistry for HashMap<String, IngredientDefinition> {
    fn lookup(&self, ingredient_id: &str) -> Option<&IngredientDefinition> {
        self.get(ingredient_id)
    }
}

impl IngredientRegistry for [IngredientDefinition] {
    fn lookup(&self, ingredient_id: &str) -> Option<&IngredientDefinition> {
        self.iter().find(|d| d.id == ingredient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(id: &str) -> IngredientDefinition {
        IngredientDefinition {
            id: id.to_string(),
            emoji: String::new(),
            unit: "g".to_string(),
            names: HashMap::new(),
        }
    }

    #[test]
    fn test_map_registry() {
        let map: HashMap<String, IngredientDefinition> =
            HashMap::from([("miso".to_string(), definition("miso"))]);
        assert!(map.lookup("miso").is_some());
        assert!(map.lookup("natto").is_none());
    }

    #[test]
    fn test_slice_registry() {
        let defs = vec![definition("nori"), definition("tofu")];
        assert_eq!(defs[..].lookup("tofu").map(|d| d.id.as_str()), Some("tofu"));
        assert!(defs[..].lookup("egg").is_none());
    }
}
