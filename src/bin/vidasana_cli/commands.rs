// ABOUTME: Subcommand implementations for the VidaSana CLI
// ABOUTME: Wires the session controller, provider, and profile store together
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::Arc;

use vidasana::catalog;
use vidasana::errors::AppResult;
use vidasana::llm::GeminiProvider;
use vidasana::models::{Gender, Goal, Recipe, UserProfile};
use vidasana::session::RecipeSession;
use vidasana::storage::ProfileStore;

/// Build a session with the live Gemini provider (needs `GEMINI_API_KEY`)
fn live_session() -> AppResult<RecipeSession> {
    let provider = Arc::new(GeminiProvider::from_env()?);
    RecipeSession::new(provider, ProfileStore::from_env()?)
}

/// `onboard` — validate, persist, and adopt a new profile
pub async fn onboard(name: String, age: String, gender: &str, goal: &str) -> AppResult<()> {
    let profile = UserProfile {
        name,
        age,
        gender: gender.parse::<Gender>()?,
        goal: goal.parse::<Goal>()?,
    };

    let session = live_session()?;
    session.complete_onboarding(profile).await?;

    println!("Bienvenido al club, {}.", session.profile().map(|p| p.name).unwrap_or_default());
    let insight = session.daily_insight();
    if !insight.is_empty() {
        println!("\n  \"{insight}\"");
    }
    Ok(())
}

/// `status` — show the persisted profile without touching the network
pub fn status() -> AppResult<()> {
    let store = ProfileStore::from_env()?;
    match store.load()? {
        Some(profile) => {
            println!("Perfil: {} ({} años)", profile.name, profile.age);
            println!("Objetivo: {}", profile.goal);
            println!("Registro: {}", store.path().display());
        }
        None => println!("Sin perfil. Ejecuta `vidasana-cli onboard` primero."),
    }
    Ok(())
}

/// `insight` — fetch today's motivational line for the profile's goal
pub async fn insight() -> AppResult<()> {
    let session = live_session()?;
    session.refresh_insight().await;
    let line = session.daily_insight();
    if line.is_empty() {
        println!("Sin perfil. Ejecuta `vidasana-cli onboard` primero.");
    } else {
        println!("\"{line}\"");
    }
    Ok(())
}

/// `generate` — run one generation cycle and print the detail view
pub async fn generate(query: String) -> AppResult<()> {
    let session = live_session()?;
    session.set_generation_input(query);
    let recipe = session.submit_generation_request().await?;
    print_recipe_detail(&recipe);
    Ok(())
}

/// `recipes` — list the session's visible collection, most recent first
pub fn recipes() -> AppResult<()> {
    let session = live_session()?;
    for recipe in session.recipes() {
        println!(
            "[{}] {} — {} kcal, {} ({:?})",
            recipe.id, recipe.title, recipe.calories, recipe.time, recipe.category
        );
    }
    Ok(())
}

/// `gifts` — list the premium vault
pub fn gifts() -> AppResult<()> {
    for gift in catalog::premium_gifts() {
        println!("{} [{}] — {} ({})", gift.title, gift.tag, gift.description, gift.value);
    }
    Ok(())
}

fn print_recipe_detail(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("{}", recipe.description);
    println!(
        "{} · {} kcal · {:?} · ★ {:.1} ({} reseñas)",
        recipe.time, recipe.calories, recipe.difficulty, recipe.rating, recipe.reviews
    );
    println!("\nIngredientes:");
    for ingredient in &recipe.ingredients {
        println!("  - {ingredient}");
    }
    println!("\nPreparación:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    if !recipe.dietary_restrictions.is_empty() {
        println!("\nEtiquetas: {}", recipe.dietary_restrictions.join(", "));
    }
}
