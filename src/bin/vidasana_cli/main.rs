// ABOUTME: VidaSana CLI - terminal front end for the recipe club core
// ABOUTME: Onboarding, daily insights, recipe generation, and catalog browsing
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//!
//! Usage:
//! ```bash
//! # Complete onboarding (required before generation)
//! vidasana-cli onboard --name Valentina --age 28 --gender female --goal lose-weight
//!
//! # Show the persisted profile
//! vidasana-cli status
//!
//! # Fetch today's insight
//! vidasana-cli insight
//!
//! # Generate a luxury recipe from what's in the fridge
//! vidasana-cli generate "atún, tomate, aguacate"
//!
//! # Browse the collection and the gift vault
//! vidasana-cli recipes
//! vidasana-cli gifts
//! ```

mod commands;

use clap::{Parser, Subcommand};
use vidasana::errors::AppResult;
use vidasana::logging::{init_logging, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "vidasana-cli",
    about = "VidaSana Elite recipe club CLI",
    long_about = "Terminal front end for the VidaSana Elite core: onboarding, AI recipe generation, daily insights, and catalog browsing."
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
    /// Complete onboarding and persist the profile
    Onboard {
        /// Display name
        #[arg(long)]
        name: String,
        /// Age in years
        #[arg(long)]
        age: String,
        /// Biological profile (masculino/femenino/otro or male/female/other)
        #[arg(long)]
        gender: String,
        /// Wellness objective (lose-weight, gain-muscle, detox, stay-healthy)
        #[arg(long)]
        goal: String,
    },

    /// Show the persisted profile
    Status,

    /// Fetch today's "Insight de Poder"
    Insight,

    /// Generate a luxury recipe from free-text ingredients
    Generate {
        /// What's in your fridge
        query: String,
    },

    /// List the recipe collection
    Recipes,

    /// List the premium gift vault
    Gifts,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    init_logging(&logging)?;

    match cli.command {
        Command::Onboard {
            name,
            age,
            gender,
            goal,
        } => commands::onboard(name, age, &gender, &goal).await,
        Command::Status => commands::status(),
        Command::Insight => commands::insight().await,
        Command::Generate { query } => commands::generate(query).await,
        Command::Recipes => commands::recipes(),
        Command::Gifts => commands::gifts(),
    }
}
