//! Recipe search command line.
//!
//! Run with: `picnic <KIND> <CATEGORY> <LEVEL>`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use picnic_content::IngredientLoader;
use picnic_core::{Category, EffectKind, Recipe, RequestedEffect};
use picnic_search::{RecipeSearch, SearchOutcome};

/// Search the ingredient catalog for a recipe reproducing a target effect
#[derive(Parser)]
#[command(name = "picnic")]
#[command(about = "Find an ingredient combination for a target effect", long_about = None)]
#[command(version)]
struct Cli {
    /// Effect kind to reproduce (e.g. Lure, Brood, Radiant)
    #[arg(value_name = "KIND")]
    kind: EffectKind,

    /// Elemental category of the effect (ignored for category-less kinds)
    #[arg(value_name = "CATEGORY")]
    category: Category,

    /// Strength level, 1 through 3
    #[arg(value_name = "LEVEL")]
    level: u8,

    /// Custom ingredient catalog (defaults to the built-in one)
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Abort after this many search steps instead of running to exhaustion
    #[arg(short, long, value_name = "STEPS")]
    budget: Option<u64>,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &cli.catalog {
        Some(path) => IngredientLoader::load(path)?,
        None => IngredientLoader::builtin()?,
    };

    let requested = RequestedEffect {
        kind: cli.kind,
        category: cli.category,
        level: cli.level,
    };
    let mut search = RecipeSearch::new(catalog.ingredients());
    if let Some(budget) = cli.budget {
        search = search.with_step_budget(budget);
    }

    match search.search(&requested) {
        SearchOutcome::Found(recipe) => print_recipe(&recipe, cli.json)?,
        SearchOutcome::InvalidRequest => {
            anyhow::bail!("requested effect is not expressible (level must be 1-3)")
        }
        SearchOutcome::Exhausted => println!("No recipe realizes this effect."),
        SearchOutcome::BudgetSpent => {
            println!("No recipe found within the step budget; one may still exist.")
        }
    }
    Ok(())
}

fn print_recipe(recipe: &Recipe, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
        return Ok(());
    }

    println!("Fillings:");
    for ingredient in &recipe.fillings {
        println!("  {}", ingredient.name);
    }
    println!("Condiments:");
    for ingredient in &recipe.condiments {
        println!("  {}", ingredient.name);
    }
    println!("Effects:");
    for effect in &recipe.effects {
        match effect.category {
            Some(category) => {
                println!("  {} {} Lv.{}", effect.kind, category, effect.level)
            }
            None => println!("  {} Lv.{}", effect.kind, effect.level),
        }
    }
    Ok(())
}
