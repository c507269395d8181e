// ABOUTME: Prompt construction and output-schema declaration for model calls
// ABOUTME: Spanish-locale instructions parameterized by the user's goal
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Prompts
//!
//! Natural-language instructions sent to the generative model, and the JSON
//! schema declared alongside the recipe request. The schema uses the
//! Generative Language API's OpenAPI-subset type names (`OBJECT`, `STRING`,
//! `NUMBER`, `ARRAY`).

use serde_json::{json, Value};

use crate::constants::generation::INSIGHT_MAX_CHARS;
use crate::models::{Difficulty, Goal, RecipeCategory};

/// System instruction for the recipe generation call
pub const RECIPE_SYSTEM_PROMPT: &str =
    "Eres un chef Michelin y experto en biohacking. Respondes estrictamente en JSON, sin texto adicional.";

/// User prompt for one recipe generation cycle
///
/// The query is user-supplied free text and is embedded verbatim; the model
/// treats it as an ingredient list, not as instructions.
#[must_use]
pub fn recipe_prompt(query: &str, goal: Goal) -> String {
    format!(
        "Genera una receta de LUJO para el objetivo: \"{goal}\" basada en: \"{query}\". \
         La receta debe incluir un ingrediente 'secreto' que potencie el metabolismo. \
         Responde estrictamente en JSON."
    )
}

/// User prompt for the daily insight call
#[must_use]
pub fn insight_prompt(goal: Goal) -> String {
    format!(
        "Genera un \"Insight de Poder\" corto (máximo {INSIGHT_MAX_CHARS} caracteres) \
         para alguien que quiere \"{goal}\". \
         Debe sonar exclusivo, científico y motivador. En español."
    )
}

/// Output schema for the recipe generation call
///
/// Declares the ten required fields with their types; `category` and
/// `difficulty` are bound to their closed enums so the provider constrains
/// generation to valid values.
#[must_use]
pub fn recipe_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "category": { "type": "STRING", "enum": RecipeCategory::WIRE_VALUES },
            "time": { "type": "STRING" },
            "timeValue": { "type": "NUMBER" },
            "calories": { "type": "NUMBER" },
            "ingredients": { "type": "ARRAY", "items": { "type": "STRING" } },
            "instructions": { "type": "ARRAY", "items": { "type": "STRING" } },
            "difficulty": { "type": "STRING", "enum": Difficulty::WIRE_VALUES },
            "dietaryRestrictions": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": [
            "title", "description", "category", "time", "timeValue", "calories",
            "ingredients", "instructions", "difficulty", "dietaryRestrictions"
        ]
    })
}
