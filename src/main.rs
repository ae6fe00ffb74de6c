//! Anime Kitchen
//!
//! An MCP server for scaling and localizing anime recipes.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use anime_kitchen::build_info;
use anime_kitchen::catalog::Catalog;
use anime_kitchen::config::Config;
use anime_kitchen::mcp::KitchenService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("anime_kitchen=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env()?;
    eprintln!("Catalog path: {}", config.catalog_path.display());
    eprintln!("Default language: {}", config.language);
    match config.unit_system {
        Some(system) => eprintln!("Default unit system: {}", system),
        None => eprintln!("Default unit system: original"),
    }

    let catalog = Catalog::load(&config.catalog_path)?;

    // Create the kitchen service
    let service = KitchenService::new(config, catalog);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
