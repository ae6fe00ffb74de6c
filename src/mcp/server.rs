//! Anime Kitchen MCP Server Implementation
//!
//! Implements the MCP server with all Anime Kitchen tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{RecipeFilters, RecipeIngredientReference, TimeBucket};
use crate::tools::status::StatusTracker;
use crate::tools::{ingredients, recipes, units};

/// Anime Kitchen MCP Service
#[derive(Clone)]
pub struct KitchenService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    catalog: Arc<Catalog>,
    config: Config,
    tool_router: ToolRouter<KitchenService>,
}

impl KitchenService {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        let tracker = StatusTracker::new(
            config.catalog_path.clone(),
            catalog.recipe_count(),
            catalog.ingredient_count(),
        );
        Self {
            status_tracker: Arc::new(Mutex::new(tracker)),
            catalog: Arc::new(catalog),
            config,
            tool_router: Self::tool_router(),
        }
    }

    fn language<'a>(&'a self, requested: &'a Option<String>) -> &'a str {
        requested.as_deref().unwrap_or(&self.config.language)
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn not_found(kind: &str, id: &str) -> Result<CallToolResult, McpError> {
    to_json(&serde_json::json!({ "error": format!("{} not found", kind), "id": id }))
}

// ============================================================================
// Scaling Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleRecipeParams {
    /// Recipe ID
    pub recipe_id: String,
    /// Target servings (default: the recipe's own servings)
    pub servings: Option<f64>,
    /// metric, imperial, or original to keep recipe units (default: server setting)
    pub unit_system: Option<String>,
    /// Display language tag, e.g. es, ja-JP (default: server setting)
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientLineParams {
    /// Catalog ingredient ID
    pub ingredient_id: String,
    /// Amount at the original servings
    pub amount: f64,
    /// Unit (default: the ingredient's canonical unit)
    pub unit: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleIngredientsParams {
    pub ingredients: Vec<IngredientLineParams>,
    /// Servings the amounts are written for
    pub original_servings: f64,
    pub requested_servings: f64,
    /// metric, imperial, or original (default: server setting)
    pub unit_system: Option<String>,
    pub language: Option<String>,
}

// ============================================================================
// Unit Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitParams {
    pub amount: f64,
    /// Source unit, e.g. cups, g, °C
    pub from_unit: String,
    /// Target unit, e.g. ml, oz, °F
    pub to_unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertToSystemParams {
    pub amount: f64,
    pub unit: String,
    /// metric or imperial
    pub unit_system: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TranslateUnitParams {
    pub unit: String,
    /// Language tag (default: server setting)
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatAmountParams {
    pub amount: f64,
    /// Optional unit appended to the display string
    pub unit: Option<String>,
}

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecipeParams {
    /// Recipe ID
    pub id: String,
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRecipesParams {
    /// Text matched against title, description and tags (optional)
    pub query: Option<String>,
    /// Difficulty levels 1-5
    #[serde(default)]
    pub difficulty: Vec<u8>,
    /// Time buckets: quick (<=15 min), medium (16-30), long (>30)
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub anime: Vec<String>,
    #[serde(default)]
    pub servings: Vec<u32>,
    /// Sort by: title, difficulty, time, or created_at (default: catalog order)
    pub sort_by: Option<String>,
    /// Sort order: asc or desc (default asc)
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
    pub language: Option<String>,
    /// Maximum results (default 50, max 200)
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    /// Offset for pagination (default 0)
    #[serde(default)]
    pub offset: i64,
}

fn default_sort_order() -> String { "asc".to_string() }
fn default_list_limit() -> i64 { 50 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeStatsParams {
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimilarRecipesParams {
    /// Recipe ID
    pub id: String,
    /// Maximum results (default 3)
    #[serde(default = "default_similar_limit")]
    pub limit: i64,
    pub language: Option<String>,
}

fn default_similar_limit() -> i64 { 3 }

fn parse_time_buckets(values: &[String]) -> Result<Vec<TimeBucket>, McpError> {
    values
        .iter()
        .map(|v| {
            TimeBucket::from_str(v).ok_or_else(|| {
                McpError::invalid_params(
                    format!("Invalid time bucket '{}' (expected quick, medium or long)", v),
                    None,
                )
            })
        })
        .collect()
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl KitchenService {
    // --- Status ---

    #[tool(description = "Get the current status of the Anime Kitchen service including build info, catalog size, and process information")]
    async fn kitchen_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        to_json(&status)
    }

    #[tool(description = "Get instructions for scaling recipes and converting units. Call this when starting a cooking session or when unsure how to use the kitchen tools.")]
    fn kitchen_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::KITCHEN_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(KITCHEN_INSTRUCTIONS)]))
    }

    // --- Scaling ---

    #[tool(description = "Scale a catalog recipe to a number of servings, optionally converting to metric or imperial and localizing names and units")]
    fn scale_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = ingredients::scale_recipe(
            &self.catalog,
            &self.config,
            &p.recipe_id,
            p.servings,
            p.unit_system.as_deref(),
            p.language.as_deref(),
        )
        .map_err(|e| McpError::internal_error(e, None))?;
        match result {
            Some(scaled) => to_json(&scaled),
            None => not_found("Recipe", &p.recipe_id),
        }
    }

    #[tool(description = "Scale an ad-hoc list of catalog ingredients from one serving count to another")]
    fn scale_ingredients(&self, Parameters(p): Parameters<ScaleIngredientsParams>) -> Result<CallToolResult, McpError> {
        let lines: Vec<RecipeIngredientReference> = p
            .ingredients
            .into_iter()
            .map(|line| RecipeIngredientReference {
                ingredient_id: line.ingredient_id,
                amount: line.amount,
                unit: line.unit,
                notes: line.notes,
            })
            .collect();
        let result = ingredients::scale_ingredient_list(
            &self.catalog,
            &self.config,
            &lines,
            p.original_servings,
            p.requested_servings,
            p.unit_system.as_deref(),
            p.language.as_deref(),
        )
        .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Units ---

    #[tool(description = "Convert an amount between two units (cups, tbsp, tsp, ml, l, g, kg, oz, lb, °C, °F). Unknown pairs return the amount unchanged.")]
    fn convert_unit(&self, Parameters(p): Parameters<ConvertUnitParams>) -> Result<CallToolResult, McpError> {
        let result = units::convert_unit(p.amount, &p.from_unit, &p.to_unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert an amount to the matching unit of the metric or imperial system")]
    fn convert_to_system(&self, Parameters(p): Parameters<ConvertToSystemParams>) -> Result<CallToolResult, McpError> {
        let result = units::convert_to_unit_system(p.amount, &p.unit, &p.unit_system)
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Translate a unit symbol into a display language, falling back to English")]
    fn translate_unit(&self, Parameters(p): Parameters<TranslateUnitParams>) -> Result<CallToolResult, McpError> {
        let result = units::translate(&p.unit, self.language(&p.language));
        to_json(&result)
    }

    #[tool(description = "Round an amount for display (two decimals, whole numbers without decimals)")]
    fn format_amount(&self, Parameters(p): Parameters<FormatAmountParams>) -> Result<CallToolResult, McpError> {
        let result = units::format(p.amount, p.unit.as_deref())
            .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    // --- Recipes ---

    #[tool(description = "Get full recipe details with localized title and ingredient rows")]
    fn get_recipe(&self, Parameters(p): Parameters<GetRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::get_recipe(&self.catalog, &p.id, self.language(&p.language))
            .map_err(|e| McpError::internal_error(e, None))?;
        match result {
            Some(recipe) => to_json(&recipe),
            None => not_found("Recipe", &p.id),
        }
    }

    #[tool(description = "Search recipes by text with optional difficulty, time, category, anime and servings filters, sorting, and pagination")]
    fn search_recipes(&self, Parameters(p): Parameters<SearchRecipesParams>) -> Result<CallToolResult, McpError> {
        let filters = RecipeFilters {
            difficulty: p.difficulty,
            time: parse_time_buckets(&p.time)?,
            category: p.category,
            anime: p.anime,
            servings: p.servings,
        };
        let result = recipes::search_recipes(
            &self.catalog,
            p.query.as_deref(),
            &filters,
            p.sort_by.as_deref(),
            &p.sort_order,
            self.language(&p.language),
            p.limit,
            p.offset,
        )
        .map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get catalog statistics: totals by anime, category and difficulty, average time, and favorites")]
    fn recipe_stats(&self, Parameters(p): Parameters<RecipeStatsParams>) -> Result<CallToolResult, McpError> {
        let stats = recipes::recipe_stats(&self.catalog, self.language(&p.language));
        to_json(&stats)
    }

    #[tool(description = "Find recipes from the same anime or category as a given recipe")]
    fn similar_recipes(&self, Parameters(p): Parameters<SimilarRecipesParams>) -> Result<CallToolResult, McpError> {
        match recipes::similar_recipes(&self.catalog, &p.id, p.limit, self.language(&p.language)) {
            Some(result) => to_json(&result),
            None => not_found("Recipe", &p.id),
        }
    }
}

#[tool_handler]
impl ServerHandler for KitchenService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "anime-kitchen".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Anime Kitchen".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Anime Kitchen - recipes from anime, scaled and localized. \
                 IMPORTANT: Call kitchen_instructions before scaling recipes. \
                 Scaling: scale_recipe, scale_ingredients. \
                 Units: convert_unit, convert_to_system, translate_unit, format_amount. \
                 Catalog: get_recipe, search_recipes, recipe_stats, similar_recipes. \
                 Status: kitchen_status."
                    .into(),
            ),
        }
    }
}
