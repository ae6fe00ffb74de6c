//! Unit conversion functions
//!
//! Converts amounts between metric and imperial symbols. Missing data never
//! fails: an unknown pair passes the amount through and logs a warning.

use serde::{Deserialize, Serialize};

use super::tables::{conversion_factor, system_mapping, UnitSystem};

/// An amount together with the unit it is expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertedAmount {
    pub amount: f64,
    pub unit: String,
}

/// Convert an amount from one unit symbol to another
///
/// Uses the direct factor for the ordered pair only. If none is registered
/// the amount is returned unchanged; count-style units like "piece" rely on
/// this to pass through the scaling pipeline.
pub fn convert_amount(amount: f64, from_unit: &str, to_unit: &str) -> f64 {
    if from_unit == to_unit || from_unit.trim().eq_ignore_ascii_case(to_unit.trim()) {
        return amount;
    }

    match conversion_factor(from_unit, to_unit) {
        Some(conversion) => conversion.apply(amount),
        None => {
            tracing::warn!(
                "No unit conversion from '{}' to '{}'. Keeping amount {} unconverted.",
                from_unit,
                to_unit,
                amount
            );
            amount
        }
    }
}

/// Get the symbol to use for a unit under the given system
///
/// Units missing from the system map are treated as system-agnostic and
/// returned unchanged.
pub fn resolve_unit_for_system(unit: &str, system: UnitSystem) -> String {
    match system_mapping(unit) {
        Some(mapping) => mapping.for_system(system).to_string(),
        None => unit.to_string(),
    }
}

/// Convert an amount and unit into the target system
pub fn convert_to_system(amount: f64, current_unit: &str, target: UnitSystem) -> ConvertedAmount {
    let target_unit = resolve_unit_for_system(current_unit, target);

    if target_unit == current_unit {
        return ConvertedAmount {
            amount,
            unit: current_unit.to_string(),
        };
    }

    ConvertedAmount {
        amount: convert_amount(amount, current_unit, &target_unit),
        unit: target_unit,
    }
}

/// Whether a unit uses a different symbol in metric and imperial
pub fn needs_conversion(unit: &str) -> bool {
    system_mapping(unit)
        .map(|mapping| mapping.metric != mapping.imperial)
        .unwrap_or(false)
}

/// Classify a unit symbol by measurement system
///
/// Anything not recognized as imperial counts as metric.
pub fn unit_system_of(unit: &str) -> UnitSystem {
    let lower = unit.trim().to_lowercase();

    match lower.as_str() {
        "cup" | "cups" | "tbsp" | "tsp" | "lb" | "oz" | "fl oz" | "gal" | "qt" | "pt" | "°f" => {
            UnitSystem::Imperial
        }
        _ => UnitSystem::Metric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_relative_eq(actual: f64, expected: f64, tolerance: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() / scale < tolerance,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_conversion_is_exact() {
        for unit in ["cups", "ml", "g", "piece", "°C", "mystery"] {
            for amount in [0.0, 1.0, 2.5, 1e9, -3.25, 0.1 + 0.2] {
                assert_eq!(convert_amount(amount, unit, unit), amount);
            }
        }
    }

    #[test]
    fn test_cups_to_ml() {
        assert_eq!(convert_amount(1.0, "cups", "ml"), 236.588);
    }

    #[test]
    fn test_ml_to_cups() {
        assert!((convert_amount(236.588, "ml", "cups") - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip_conversions() {
        let pairs = [
            ("cups", "ml"),
            ("cup", "ml"),
            ("tbsp", "ml"),
            ("tsp", "ml"),
            ("l", "cups"),
            ("kg", "lb"),
            ("g", "oz"),
            ("°C", "°F"),
        ];
        for (a, b) in pairs {
            for amount in [0.25, 1.0, 3.0, 180.0, 1234.5] {
                let there = convert_amount(amount, a, b);
                let back = convert_amount(there, b, a);
                assert_relative_eq(back, amount, 1e-6);
            }
        }
    }

    #[test]
    fn test_unknown_pair_passes_through() {
        assert_eq!(convert_amount(3.0, "piece", "g"), 3.0);
        assert_eq!(convert_amount(2.0, "cups", "kg"), 2.0);
    }

    #[test]
    fn test_case_insensitive_pair() {
        assert_eq!(convert_amount(1.0, "Cups", "ML"), 236.588);
        assert_eq!(convert_amount(5.0, "Cups", "cups"), 5.0);
    }

    #[test]
    fn test_resolve_unit_for_system() {
        assert_eq!(resolve_unit_for_system("cups", UnitSystem::Metric), "ml");
        assert_eq!(resolve_unit_for_system("ml", UnitSystem::Imperial), "cups");
        assert_eq!(resolve_unit_for_system("KG", UnitSystem::Imperial), "lb");
        assert_eq!(resolve_unit_for_system("g", UnitSystem::Metric), "g");
        assert_eq!(resolve_unit_for_system("clove", UnitSystem::Imperial), "clove");
        assert_eq!(resolve_unit_for_system("handful", UnitSystem::Metric), "handful");
    }

    #[test]
    fn test_convert_to_system_kg_to_imperial() {
        let converted = convert_to_system(2.0, "kg", UnitSystem::Imperial);
        assert_eq!(converted.unit, "lb");
        assert!((converted.amount - 4.40924).abs() < 1e-9);
    }

    #[test]
    fn test_convert_to_system_short_circuits() {
        let converted = convert_to_system(0.1 + 0.2, "g", UnitSystem::Metric);
        assert_eq!(converted.amount, 0.1 + 0.2);
        assert_eq!(converted.unit, "g");

        let converted = convert_to_system(3.0, "pieces", UnitSystem::Imperial);
        assert_eq!(converted, ConvertedAmount { amount: 3.0, unit: "pieces".to_string() });
    }

    #[test]
    fn test_convert_to_system_temperature() {
        let converted = convert_to_system(180.0, "°C", UnitSystem::Imperial);
        assert_eq!(converted.unit, "°F");
        assert!((converted.amount - 356.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_to_system_tbsp_to_metric() {
        let converted = convert_to_system(2.0, "tbsp", UnitSystem::Metric);
        assert_eq!(converted.unit, "ml");
        assert!((converted.amount - 29.5736).abs() < 1e-9);
    }

    #[test]
    fn test_needs_conversion() {
        assert!(needs_conversion("cups"));
        assert!(needs_conversion("G"));
        assert!(!needs_conversion("slice"));
        assert!(!needs_conversion("handful"));
    }

    #[test]
    fn test_unit_system_of() {
        assert_eq!(unit_system_of("cups"), UnitSystem::Imperial);
        assert_eq!(unit_system_of("Fl Oz"), UnitSystem::Imperial);
        assert_eq!(unit_system_of("ml"), UnitSystem::Metric);
        assert_eq!(unit_system_of("kg"), UnitSystem::Metric);
        assert_eq!(unit_system_of("piece"), UnitSystem::Metric);
    }
}
