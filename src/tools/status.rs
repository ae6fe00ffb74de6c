//! Anime Kitchen Status Tool
//!
//! Provides runtime status information about the Anime Kitchen service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::units::SUPPORTED_LANGUAGES;

/// Recipe scaling instructions for AI assistants
pub const KITCHEN_INSTRUCTIONS: &str = r#"
# Anime Kitchen Instructions

This guide explains how to scale recipes and convert units with the Anime Kitchen tools.

## Overview

Every recipe in the catalog is written for a fixed number of servings. Each ingredient
line references a catalog ingredient and gives an amount and, optionally, a unit. When the
line has no unit the ingredient's canonical unit is used.

Scaling always works in this order:
1. **Convert** the unit into the requested unit system (metric or imperial), if one was asked for
2. **Scale** the amount by `requested_servings / original_servings`
3. **Translate** the unit symbol into the display language
4. **Round** for display to at most two decimals (whole numbers print without decimals)

---

## Finding a Recipe

**Tool:** `search_recipes`
- `query` matches the title, description and tags (case-insensitive)
- Filters: `difficulty` (1-5), `time` (`quick` up to 15 min, `medium` 16-30, `long` over 30),
  `category`, `anime`, `servings`
- Values inside one filter are alternatives; different filters must all match
- `sort_by`: `title`, `difficulty`, `time` or `created_at`; `sort_order`: `asc` or `desc`

Use `get_recipe` for full details and `similar_recipes` for more dishes from the same anime
or category.

---

## Scaling a Recipe

**Tool:** `scale_recipe`
- `recipe_id` - required
- `servings` - defaults to the recipe's own servings
- `unit_system` - `metric`, `imperial`, or `original` to keep the recipe's units.
  Omitted means the server default.
- `language` - language tag such as `es`, `ja-JP` or `pt_BR`

### Example
- Ichiraku Ramen serves 2 and uses 3 cups of broth
- Scale to 4 servings, metric: 3 cups → 709.764 ml → ×2 = **1419.53 ml**

Rows whose ingredient is missing from the catalog are skipped and counted in `omitted`.

**Tool:** `scale_ingredients` scales an ad-hoc list of `{ingredient_id, amount, unit}` lines
the same way.

---

## Unit Tools

- `convert_unit` - convert between two specific units (`cups` → `ml`, `°C` → `°F`).
  If no conversion exists the amount is returned unchanged with `converted: false`.
- `convert_to_system` - convert to the matching unit of a unit system
- `translate_unit` - localized unit symbol; unknown units or languages fall back to
  English, then to the symbol itself
- `format_amount` - display rounding

Count units (`piece`, `clove`, `slice`, `sheet`, `can`, `stalk`, `pinch`, `to taste`) never
convert between systems; they only scale and translate.

---

## Supported Languages

es, en, it, de, fr, pt, ja, hi, zh, ru, ko, ar, tr, th, id
"#;

/// Kitchen status information
#[derive(Debug, Clone, Serialize)]
pub struct KitchenStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub catalog_path: String,
    pub catalog_size_bytes: Option<u64>,
    pub recipe_count: usize,
    pub ingredient_count: usize,
    pub supported_languages: &'static [&'static str],

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    catalog_path: PathBuf,
    recipe_count: usize,
    ingredient_count: usize,
}

impl StatusTracker {
    pub fn new(catalog_path: PathBuf, recipe_count: usize, ingredient_count: usize) -> Self {
        Self {
            start_time: Instant::now(),
            catalog_path,
            recipe_count,
            ingredient_count,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> KitchenStatus {
        let build_info = BuildInfo::current();

        let catalog_size_bytes = std::fs::metadata(&self.catalog_path)
            .ok()
            .map(|m| m.len());

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        KitchenStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            catalog_path: self.catalog_path.display().to_string(),
            catalog_size_bytes,
            recipe_count: self.recipe_count,
            ingredient_count: self.ingredient_count,
            supported_languages: SUPPORTED_LANGUAGES,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
