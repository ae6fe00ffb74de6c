//! Utility to print a scaled recipe from the catalog
//!
//! Usage: scale_recipe <recipe-id> [servings] [metric|imperial|original] [language]

use tracing_subscriber::EnvFilter;

use anime_kitchen::catalog::Catalog;
use anime_kitchen::config::Config;
use anime_kitchen::tools::ingredients;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("anime_kitchen=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(recipe_id) = args.get(1) else {
        let program = args.first().map(String::as_str).unwrap_or("scale_recipe");
        eprintln!("Usage: {} <recipe-id> [servings] [metric|imperial|original] [language]", program);
        std::process::exit(2);
    };

    let servings = match args.get(2) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .map_err(|e| format!("Invalid servings '{}': {}", raw, e))?,
        ),
        None => None,
    };
    let unit_system = args.get(3).map(String::as_str);
    let language = args.get(4).map(String::as_str);

    let config = Config::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;

    let scaled = ingredients::scale_recipe(&catalog, &config, recipe_id, servings, unit_system, language)?
        .ok_or_else(|| format!("Recipe not found: {}", recipe_id))?;

    println!("{} ({} servings)", scaled.title, scaled.requested_servings);
    for row in &scaled.ingredients {
        match &row.notes {
            Some(notes) => println!("{} {} {} ({})", row.emoji, row.name, row.display, notes),
            None => println!("{} {} {}", row.emoji, row.name, row.display),
        }
    }
    if scaled.omitted > 0 {
        eprintln!("{} ingredient(s) could not be resolved", scaled.omitted);
    }

    Ok(())
}
