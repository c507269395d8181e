// ABOUTME: Recipe generation client with schema validation of the model reply
// ABOUTME: Rejects incomplete payloads instead of admitting partial records
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Recipe Generator
//!
//! One generation cycle: build the prompt from the user's free text and
//! goal, request schema-constrained JSON from the provider, validate the
//! reply against the declared schema, and synthesize the client-side display
//! fields (id, image, rating, review count).
//!
//! A reply that parses but omits a required field, carries an enum value
//! outside the closed set, or ships empty ingredient/instruction lists is
//! rejected with [`ErrorCode::InvalidResponse`] — never merged into a
//! partially-populated [`Recipe`].

use std::sync::Arc;

use rand::Rng;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::prompts;
use crate::constants::generation;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::{Difficulty, Goal, Recipe, RecipeCategory};

/// The ten fields the provider must return, exactly as declared in the
/// output schema. Deserializing through this type is the validation step:
/// missing fields, mistyped fields, and out-of-set enum values all fail.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipePayload {
    title: String,
    description: String,
    category: RecipeCategory,
    time: String,
    time_value: u32,
    calories: u32,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    difficulty: Difficulty,
    dietary_restrictions: Vec<String>,
}

impl RecipePayload {
    /// Checks beyond what deserialization enforces: a usable detail view
    /// needs a title and non-empty ingredient/instruction lists.
    fn check_usable(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::invalid_response("recipe title is empty"));
        }
        if self.ingredients.is_empty() {
            return Err(AppError::invalid_response("recipe has no ingredients"));
        }
        if self.instructions.is_empty() {
            return Err(AppError::invalid_response("recipe has no instructions"));
        }
        Ok(())
    }
}

/// Recipe generation client
///
/// Stateless beyond its provider handle; never mutates the recipe
/// collection itself.
#[derive(Clone)]
pub struct RecipeGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl RecipeGenerator {
    /// Create a generator backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Run one generation cycle
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the query is blank
    /// - `TransportError` / `ProviderError` / `ExternalRateLimited` from the
    ///   provider call
    /// - `InvalidResponse` when the reply fails JSON parsing or schema
    ///   validation
    #[instrument(skip(self, query), fields(provider = self.provider.name(), goal = %goal))]
    pub async fn generate(&self, query: &str, goal: Goal) -> AppResult<Recipe> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("ingredient query must not be empty"));
        }

        let mut request = ChatRequest::new(vec![
            ChatMessage::system(prompts::RECIPE_SYSTEM_PROMPT),
            ChatMessage::user(prompts::recipe_prompt(query, goal)),
        ]);
        // Providers without JSON mode still get the strict-JSON instruction
        // in the prompt itself.
        if self.provider.capabilities().supports_json_mode() {
            request = request.with_json_schema(prompts::recipe_response_schema());
        }

        let response = self.provider.complete(&request).await?;
        let payload = Self::parse_payload(&response.content)?;

        debug!(title = %payload.title, "Generated recipe accepted");

        Ok(Self::into_recipe(payload))
    }

    /// Parse and validate the model reply
    fn parse_payload(content: &str) -> AppResult<RecipePayload> {
        let body = strip_code_fences(content);
        let payload: RecipePayload = serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, "Rejected generation reply");
            AppError::new(
                ErrorCode::InvalidResponse,
                format!("reply does not match the declared schema: {e}"),
            )
        })?;
        payload.check_usable()?;
        Ok(payload)
    }

    /// Merge the validated payload with the client-synthesized fields
    fn into_recipe(payload: RecipePayload) -> Recipe {
        let reviews =
            rand::thread_rng().gen_range(generation::REVIEWS_MIN..generation::REVIEWS_MAX);

        Recipe {
            id: Uuid::new_v4().simple().to_string(),
            title: payload.title,
            description: payload.description,
            category: payload.category,
            time: payload.time,
            time_value: payload.time_value,
            calories: payload.calories,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
            image: generation::FALLBACK_IMAGE_URL.to_owned(),
            difficulty: payload.difficulty,
            dietary_restrictions: payload.dietary_restrictions,
            rating: generation::GENERATED_RECIPE_RATING,
            reviews,
        }
    }
}

/// Strip a Markdown code fence (```json ... ```) if the model wrapped its
/// reply in one despite the strict-JSON instruction.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
