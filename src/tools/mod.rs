//! Anime Kitchen Tools module
//!
//! MCP tool implementations for recipe scaling, unit conversion and the catalog.

pub mod ingredients;
pub mod recipes;
pub mod status;
pub mod units;
