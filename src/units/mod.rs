//! Unit conversion module
//!
//! Handles metric/imperial conversion, unit translation and display rounding.

pub mod converter;
pub mod format;
pub mod tables;
pub mod translations;

pub use converter::{
    convert_amount, convert_to_system, needs_conversion, resolve_unit_for_system,
    unit_system_of, ConvertedAmount,
};
pub use format::{format_amount, format_quantity};
pub use tables::{conversion_factor, system_mapping, ConversionFactor, SystemMapping, UnitSystem};
pub use translations::{
    lookup_unit_translation, normalize_language, translate_unit, SUPPORTED_LANGUAGES,
};
