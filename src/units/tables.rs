//! Unit systems, conversion factors and system mappings
//!
//! All tables are immutable and built once on first use. Keys are lowercase
//! unit symbols; lookups normalize their input the same way.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Measurement system a recipe can be displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588;
/// Milliliters per tablespoon
pub const ML_PER_TBSP: f64 = 14.7868;
/// Milliliters per teaspoon
pub const ML_PER_TSP: f64 = 4.92892;
/// Cups (US) per liter
pub const CUPS_PER_LITER: f64 = 4.22675;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.20462;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Fahrenheit degrees per Celsius degree
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;
/// Freezing point of water in Fahrenheit
pub const FAHRENHEIT_FREEZING: f64 = 32.0;

/// A direct conversion between two unit symbols
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionFactor {
    pub from: &'static str,
    pub to: &'static str,
    pub factor: f64,
    /// Added before multiplying (temperature only)
    pub offset: Option<f64>,
}

impl ConversionFactor {
    const fn scale(from: &'static str, to: &'static str, factor: f64) -> Self {
        Self {
            from,
            to,
            factor,
            offset: None,
        }
    }

    const fn shifted(from: &'static str, to: &'static str, factor: f64, offset: f64) -> Self {
        Self {
            from,
            to,
            factor,
            offset: Some(offset),
        }
    }

    /// Apply this conversion to an amount
    pub fn apply(&self, amount: f64) -> f64 {
        match self.offset {
            Some(offset) => (amount + offset) * self.factor,
            None => amount * self.factor,
        }
    }
}

/// Equivalent symbols for a unit under each system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemMapping {
    pub metric: &'static str,
    pub imperial: &'static str,
}

impl SystemMapping {
    const fn same(unit: &'static str) -> Self {
        Self {
            metric: unit,
            imperial: unit,
        }
    }

    pub fn for_system(&self, system: UnitSystem) -> &'static str {
        match system {
            UnitSystem::Metric => self.metric,
            UnitSystem::Imperial => self.imperial,
        }
    }
}

static CONVERSION_FACTORS: LazyLock<HashMap<(String, String), ConversionFactor>> =
    LazyLock::new(|| {
        let factors = [
            // Volume
            ConversionFactor::scale("cups", "ml", ML_PER_CUP),
            ConversionFactor::scale("ml", "cups", 1.0 / ML_PER_CUP),
            ConversionFactor::scale("cup", "ml", ML_PER_CUP),
            ConversionFactor::scale("ml", "cup", 1.0 / ML_PER_CUP),
            ConversionFactor::scale("tbsp", "ml", ML_PER_TBSP),
            ConversionFactor::scale("ml", "tbsp", 1.0 / ML_PER_TBSP),
            ConversionFactor::scale("tsp", "ml", ML_PER_TSP),
            ConversionFactor::scale("ml", "tsp", 1.0 / ML_PER_TSP),
            ConversionFactor::scale("l", "cups", CUPS_PER_LITER),
            ConversionFactor::scale("cups", "l", 1.0 / CUPS_PER_LITER),
            // Weight
            ConversionFactor::scale("kg", "lb", LB_PER_KG),
            ConversionFactor::scale("lb", "kg", 1.0 / LB_PER_KG),
            ConversionFactor::scale("oz", "g", G_PER_OZ),
            ConversionFactor::scale("g", "oz", 1.0 / G_PER_OZ),
            // Temperature: (c + 160/9) * 1.8 == c * 1.8 + 32
            ConversionFactor::shifted(
                "°C",
                "°F",
                FAHRENHEIT_PER_CELSIUS,
                FAHRENHEIT_FREEZING / FAHRENHEIT_PER_CELSIUS,
            ),
            ConversionFactor::shifted(
                "°F",
                "°C",
                1.0 / FAHRENHEIT_PER_CELSIUS,
                -FAHRENHEIT_FREEZING,
            ),
        ];

        factors
            .into_iter()
            .map(|f| ((f.from.to_lowercase(), f.to.to_lowercase()), f))
            .collect()
    });

static UNIT_SYSTEM_MAP: LazyLock<HashMap<String, SystemMapping>> = LazyLock::new(|| {
    let volume_and_weight = [
        ("cups", SystemMapping { metric: "ml", imperial: "cups" }),
        ("cup", SystemMapping { metric: "ml", imperial: "cup" }),
        ("ml", SystemMapping { metric: "ml", imperial: "cups" }),
        ("tbsp", SystemMapping { metric: "ml", imperial: "tbsp" }),
        ("tsp", SystemMapping { metric: "ml", imperial: "tsp" }),
        ("l", SystemMapping { metric: "l", imperial: "cups" }),
        ("kg", SystemMapping { metric: "kg", imperial: "lb" }),
        ("g", SystemMapping { metric: "g", imperial: "oz" }),
        ("lb", SystemMapping { metric: "kg", imperial: "lb" }),
        ("oz", SystemMapping { metric: "g", imperial: "oz" }),
        ("°c", SystemMapping { metric: "°C", imperial: "°F" }),
        ("°f", SystemMapping { metric: "°C", imperial: "°F" }),
    ];

    // Countable units have no cross-system equivalent
    let countable = [
        "piece", "pieces", "clove", "cloves", "unit", "units", "slice", "slices", "pinch",
        "to taste", "sheet", "sheets", "can", "cans", "stalk", "stalks",
    ];

    volume_and_weight
        .into_iter()
        .map(|(unit, mapping)| (unit.to_string(), mapping))
        .chain(
            countable
                .into_iter()
                .map(|unit| (unit.to_string(), SystemMapping::same(unit))),
        )
        .collect()
});

fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// Look up the direct conversion for an ordered pair of unit symbols
pub fn conversion_factor(from: &str, to: &str) -> Option<&'static ConversionFactor> {
    CONVERSION_FACTORS.get(&(normalize_unit(from), normalize_unit(to)))
}

/// Look up the per-system symbols for a unit
pub fn system_mapping(unit: &str) -> Option<&'static SystemMapping> {
    UNIT_SYSTEM_MAP.get(&normalize_unit(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_from_str() {
        assert_eq!(UnitSystem::from_str("metric"), Some(UnitSystem::Metric));
        assert_eq!(UnitSystem::from_str(" Imperial "), Some(UnitSystem::Imperial));
        assert_eq!(UnitSystem::from_str("nautical"), None);
    }

    #[test]
    fn test_unit_system_serde() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
        let parsed: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(parsed, UnitSystem::Metric);
    }

    #[test]
    fn test_conversion_factor_lookup_is_case_insensitive() {
        let f = conversion_factor("CUPS", "ml").unwrap();
        assert_eq!(f.factor, ML_PER_CUP);
        assert!(conversion_factor("°c", "°F").is_some());
        assert!(conversion_factor("piece", "g").is_none());
    }

    #[test]
    fn test_temperature_factor() {
        let c_to_f = conversion_factor("°C", "°F").unwrap();
        assert!((c_to_f.apply(100.0) - 212.0).abs() < 1e-9);
        assert!((c_to_f.apply(0.0) - 32.0).abs() < 1e-9);

        let f_to_c = conversion_factor("°F", "°C").unwrap();
        assert!((f_to_c.apply(212.0) - 100.0).abs() < 1e-9);
        assert!((f_to_c.apply(32.0)).abs() < 1e-9);
    }

    #[test]
    fn test_every_factor_has_reverse() {
        for ((from, to), _) in CONVERSION_FACTORS.iter() {
            assert!(
                conversion_factor(to, from).is_some(),
                "missing reverse for {} -> {}",
                from,
                to
            );
        }
    }

    #[test]
    fn test_system_mapping_is_idempotent() {
        for (unit, mapping) in UNIT_SYSTEM_MAP.iter() {
            for system in [UnitSystem::Metric, UnitSystem::Imperial] {
                let target = mapping.for_system(system);
                let again = system_mapping(target)
                    .unwrap_or_else(|| panic!("{} maps to unknown {}", unit, target))
                    .for_system(system);
                assert_eq!(again, target, "mapping {} twice under {}", unit, system);
            }
        }
    }

    #[test]
    fn test_every_cross_system_mapping_has_factor() {
        for (unit, mapping) in UNIT_SYSTEM_MAP.iter() {
            for system in [UnitSystem::Metric, UnitSystem::Imperial] {
                let target = mapping.for_system(system);
                if normalize_unit(target) != *unit {
                    assert!(
                        conversion_factor(unit, target).is_some(),
                        "no factor for {} -> {}",
                        unit,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_countable_units_map_to_themselves() {
        let mapping = system_mapping("Cloves").unwrap();
        assert_eq!(mapping.metric, "cloves");
        assert_eq!(mapping.imperial, "cloves");
    }
}
