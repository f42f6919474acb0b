// ABOUTME: FoodSeer CLI - preference-driven food recommendations from the command line
// ABOUTME: Runs recommendations on local or live catalogs and saves wizard preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FoodSeer
//!
//! Usage:
//! ```bash
//! # Recommend from the built-in sample catalog
//! food-seer-cli recommend --cost moderate --diet "vegan, nut"
//!
//! # Explain why each item of a local catalog was kept or dropped
//! food-seer-cli recommend --catalog foods.json --user me.json --explain
//!
//! # Recommend from the live service
//! food-seer-cli fetch --username sam --password secret
//!
//! # Save preferences the way the two-step wizard composes them
//! food-seer-cli preferences --budget under-20 --restriction tree-nuts --restriction milk --custom-dietary vegan
//!
//! # Dump the sample catalog as JSON
//! food-seer-cli catalog
//! ```

mod commands;
mod helpers;

use clap::{Args, Parser, Subcommand};
use food_seer::errors::{AppError, AppResult};
use food_seer::intelligence::{BudgetOption, DietaryOption};
use food_seer::logging::LoggingConfig;
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "food-seer-cli",
    about = "FoodSeer recommendation CLI",
    long_about = "Filters a FoodSeer food catalog by a user's budget and dietary restrictions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// How results are printed
#[derive(Args, Debug, Clone, Copy, Default)]
struct OutputArgs {
    /// Print a verdict for every catalog item instead of the kept items
    #[arg(long)]
    explain: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Connection to the FoodSeer REST service
#[derive(Args, Debug, Clone, Default)]
struct ServiceArgs {
    /// Service base URL (defaults to `FOOD_SEER_API_URL` or http://localhost:8080)
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token (defaults to `FOOD_SEER_TOKEN`)
    #[arg(long, conflicts_with_all = ["username", "password"])]
    token: Option<String>,

    /// Username to log in with
    #[arg(long, requires = "password")]
    username: Option<String>,

    /// Password to log in with
    #[arg(long, requires = "username")]
    password: Option<String>,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend foods from a local catalog file or the sample catalog
    Recommend {
        /// JSON array of foods (defaults to the sample catalog)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// JSON user object providing stored preferences
        #[arg(long)]
        user: Option<PathBuf>,

        /// Cost preference, overriding the user file
        #[arg(long)]
        cost: Option<String>,

        /// Dietary restrictions, overriding the user file
        #[arg(long)]
        diet: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch the current user and catalog from the service and recommend
    Fetch {
        #[command(flatten)]
        service: ServiceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compose preferences like the wizard does and save them
    Preferences {
        /// Budget option: under-10, under-20, under-30 or other
        #[arg(long)]
        budget: BudgetOption,

        /// Free-text budget used with `--budget other`
        #[arg(long)]
        custom_budget: Option<String>,

        /// Allergen code such as MILK, TREE-NUTS or CAFFEINE, case-insensitive (repeatable)
        #[arg(long = "restriction")]
        restrictions: Vec<DietaryOption>,

        /// Free-text restrictions appended after the codes, e.g. "vegan"
        #[arg(long)]
        custom_dietary: Option<String>,

        /// Print the composed preferences without saving them
        #[arg(long)]
        dry_run: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Print the sample catalog as JSON
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    match cli.command {
        Command::Recommend {
            catalog,
            user,
            cost,
            diet,
            output,
        } => commands::recommend::run(catalog, user, cost, diet, output).await?,
        Command::Fetch { service, output } => commands::fetch::run(&service, output).await?,
        Command::Preferences {
            budget,
            custom_budget,
            restrictions,
            custom_dietary,
            dry_run,
            json,
            service,
        } => {
            let draft = commands::preferences::compose(
                budget,
                custom_budget,
                &restrictions,
                custom_dietary,
            );
            commands::preferences::run(&draft, dry_run, json, &service).await?;
        }
        Command::Catalog => commands::catalog::run()?,
    }

    Ok(())
}
