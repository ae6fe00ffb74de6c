//! Unit MCP Tools
//!
//! Direct access to unit conversion, translation and display rounding.

use serde::Serialize;

use crate::units::{
    conversion_factor, convert_amount, convert_to_system, format_amount, format_quantity,
    lookup_unit_translation, normalize_language, translate_unit, UnitSystem,
    SUPPORTED_LANGUAGES,
};

/// Response for convert_unit
#[derive(Debug, Serialize)]
pub struct ConvertUnitResponse {
    pub amount: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub converted_amount: f64,
    pub display_amount: f64,
    /// False when no factor exists and the amount passed through unchanged
    pub converted: bool,
}

/// Response for convert_to_system
#[derive(Debug, Serialize)]
pub struct ConvertToSystemResponse {
    pub amount: f64,
    pub unit: String,
    pub unit_system: UnitSystem,
    pub converted_amount: f64,
    pub converted_unit: String,
    pub display: String,
}

/// Response for translate_unit
#[derive(Debug, Serialize)]
pub struct TranslateUnitResponse {
    pub unit: String,
    pub language: String,
    pub translated: String,
    /// True when the English table or the raw symbol was used
    pub fallback_used: bool,
    pub supported_languages: &'static [&'static str],
}

/// Response for format_amount
#[derive(Debug, Serialize)]
pub struct FormatAmountResponse {
    pub amount: f64,
    pub formatted: f64,
    pub display: String,
}

fn ensure_finite(amount: f64) -> Result<(), String> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(format!("Amount must be a finite number (got {})", amount))
    }
}

/// Parse a unit system parameter
pub fn parse_unit_system(value: &str) -> Result<UnitSystem, String> {
    UnitSystem::from_str(value).ok_or_else(|| {
        format!(
            "Invalid unit system '{}' (expected 'metric' or 'imperial')",
            value
        )
    })
}

pub fn convert_unit(amount: f64, from_unit: &str, to_unit: &str) -> Result<ConvertUnitResponse, String> {
    ensure_finite(amount)?;

    let converted_amount = convert_amount(amount, from_unit, to_unit);
    let converted = from_unit.trim().eq_ignore_ascii_case(to_unit.trim())
        || conversion_factor(from_unit, to_unit).is_some();

    Ok(ConvertUnitResponse {
        amount,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        converted_amount,
        display_amount: format_amount(converted_amount),
        converted,
    })
}

pub fn convert_to_unit_system(
    amount: f64,
    unit: &str,
    unit_system: &str,
) -> Result<ConvertToSystemResponse, String> {
    ensure_finite(amount)?;
    let system = parse_unit_system(unit_system)?;

    let converted = convert_to_system(amount, unit, system);

    Ok(ConvertToSystemResponse {
        amount,
        unit: unit.to_string(),
        unit_system: system,
        display: format_quantity(converted.amount, &converted.unit),
        converted_amount: converted.amount,
        converted_unit: converted.unit,
    })
}

pub fn translate(unit: &str, language: &str) -> TranslateUnitResponse {
    let translated = translate_unit(unit, language);
    let fallback_used = lookup_unit_translation(unit, language).is_none();

    TranslateUnitResponse {
        unit: unit.to_string(),
        language: normalize_language(language),
        translated,
        fallback_used,
        supported_languages: SUPPORTED_LANGUAGES,
    }
}

pub fn format(amount: f64, unit: Option<&str>) -> Result<FormatAmountResponse, String> {
    ensure_finite(amount)?;

    Ok(FormatAmountResponse {
        amount,
        formatted: format_amount(amount),
        display: format_quantity(amount, unit.unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_unit_reports_passthrough() {
        let result = convert_unit(1.0, "cups", "ml").unwrap();
        assert_eq!(result.converted_amount, 236.588);
        assert!(result.converted);

        let result = convert_unit(3.0, "piece", "g").unwrap();
        assert_eq!(result.converted_amount, 3.0);
        assert!(!result.converted);
    }

    #[test]
    fn test_convert_unit_rejects_nan() {
        assert!(convert_unit(f64::NAN, "cups", "ml").is_err());
    }

    #[test]
    fn test_convert_to_unit_system() {
        let result = convert_to_unit_system(2.0, "kg", "imperial").unwrap();
        assert_eq!(result.converted_unit, "lb");
        assert_eq!(result.display, "4.41 lb");

        assert!(convert_to_unit_system(2.0, "kg", "cubits").is_err());
    }

    #[test]
    fn test_translate_reports_fallback() {
        let result = translate("tbsp", "es");
        assert_eq!(result.translated, "cda");
        assert!(!result.fallback_used);

        let result = translate("tbsp", "xx-unknown");
        assert_eq!(result.translated, "tbsp");
        assert_eq!(result.language, "xx");
        assert!(result.fallback_used);
    }

    #[test]
    fn test_format() {
        let result = format(1.999999, Some("cups")).unwrap();
        assert_eq!(result.formatted, 2.0);
        assert_eq!(result.display, "2 cups");

        let result = format(2.5, None).unwrap();
        assert_eq!(result.display, "2.5");
    }
}
