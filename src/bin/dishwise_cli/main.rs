// ABOUTME: Dishwise CLI - resolve dishes, check allergens, and search the curated menu
// ABOUTME: Reads engine configuration from the environment and prints JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Resolve a dish, optionally with ingredients
//! dishwise-cli resolve "Chicken Adobo"
//! dishwise-cli resolve "house salad" --ingredient lettuce --ingredient tomato
//!
//! # Check a dish against allergens
//! dishwise-cli check "Kare Kare" --allergen peanut --allergen shrimp
//!
//! # Search curated dishes
//! dishwise-cli search --max-calories 300 --tag healthy --allergen-free soy
//!
//! # List curated dishes, clear the cache
//! dishwise-cli list
//! dishwise-cli clear-cache
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use dishwise::config::EngineConfig;
use dishwise::logging::LoggingConfig;
use dishwise::{NutritionEngine, SpiceLevel};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "dishwise-cli",
    about = "Dishwise nutrition and allergen CLI",
    long_about = "Resolve restaurant dishes to nutrition profiles, check them against allergens, and search the curated menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Resolve a dish to a nutrition profile
    Resolve {
        /// Dish name as printed on the menu
        dish: String,

        /// Ingredient name (repeatable)
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,
    },

    /// Resolve a dish and check it against allergens
    Check {
        /// Dish name as printed on the menu
        dish: String,

        /// Allergen to avoid (repeatable)
        #[arg(long = "allergen", short = 'a', required = true)]
        allergens: Vec<String>,
    },

    /// Search curated dishes by criteria
    Search {
        /// Maximum calories per serving (inclusive)
        #[arg(long)]
        max_calories: Option<f64>,

        /// Exact spice level
        #[arg(long, value_enum)]
        spice: Option<SpiceArg>,

        /// Allergen the dish must not contain (repeatable)
        #[arg(long = "allergen-free")]
        allergen_free: Vec<String>,

        /// Dietary tag the dish must carry (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// List curated dish names
    List,

    /// Remove every cached profile
    ClearCache,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum SpiceArg {
    Mild,
    Medium,
    Spicy,
    #[value(alias = "very_spicy")]
    VerySpicy,
}

impl From<SpiceArg> for SpiceLevel {
    fn from(arg: SpiceArg) -> Self {
        match arg {
            SpiceArg::Mild => Self::Mild,
            SpiceArg::Medium => Self::Medium,
            SpiceArg::Spicy => Self::Spicy,
            SpiceArg::VerySpicy => Self::VerySpicy,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env_verbose(cli.verbose).init()?;

    let config = EngineConfig::from_env();
    debug!(
        cache_backend = %config.cache.backend,
        provider_active = config.provider.is_active(),
        "Loaded engine configuration"
    );
    let engine = NutritionEngine::from_config(&config).await;

    match cli.command {
        Command::Resolve { dish, ingredients } => {
            commands::resolve(&engine, &dish, &ingredients).await?;
        }
        Command::Check { dish, allergens } => {
            commands::check(&engine, &dish, &allergens).await?;
        }
        Command::Search {
            max_calories,
            spice,
            allergen_free,
            tags,
        } => {
            commands::search(&engine, max_calories, spice.map(SpiceLevel::from), allergen_free, tags)?;
        }
        Command::List => commands::list(&engine)?,
        Command::ClearCache => commands::clear_cache(&engine).await?,
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn search_spice(args: &[&str]) -> Option<SpiceArg> {
        match Cli::try_parse_from(args).unwrap().command {
            Command::Search { spice, .. } => spice,
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_search_accepts_known_spice_levels() {
        assert_eq!(
            search_spice(&["dishwise-cli", "search", "--spice", "spicy"]),
            Some(SpiceArg::Spicy)
        );
        assert_eq!(
            search_spice(&["dishwise-cli", "search", "--spice", "very_spicy"]),
            Some(SpiceArg::VerySpicy)
        );
        assert_eq!(
            search_spice(&["dishwise-cli", "search", "--spice", "very-spicy"]),
            Some(SpiceArg::VerySpicy)
        );
        assert_eq!(search_spice(&["dishwise-cli", "search"]), None);
    }

    #[test]
    fn test_search_rejects_unknown_spice_level() {
        let err = Cli::try_parse_from(["dishwise-cli", "search", "--spice", "hot"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
