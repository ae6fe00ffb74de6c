//! Anime Kitchen Library
//!
//! Ingredient scaling, unit-system conversion and unit localization for a
//! catalog of anime recipes.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod mcp;
pub mod models;
pub mod scaling;
pub mod tools;
pub mod units;
