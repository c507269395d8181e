// ABOUTME: Integration tests for the recipe generation client
// ABOUTME: Drives generate() through a scripted provider, no network involved
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;

use common::{full_recipe_json, ScriptedProvider};
use vidasana::constants::generation;
use vidasana::errors::{AppError, ErrorCode};
use vidasana::models::{Difficulty, Goal, RecipeCategory};
use vidasana::services::RecipeGenerator;

fn generator_with(provider: ScriptedProvider) -> (RecipeGenerator, Arc<ScriptedProvider>) {
    let provider = Arc::new(provider);
    (RecipeGenerator::new(provider.clone()), provider)
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_generate_success_synthesizes_display_fields() {
    let (generator, _) =
        generator_with(ScriptedProvider::with_text(full_recipe_json().to_string()));

    let recipe = generator
        .generate("atún, tomate, aguacate", Goal::LoseWeight)
        .await
        .unwrap();

    assert_eq!(recipe.title, "Tartar de Atún Elite");
    assert_eq!(recipe.category, RecipeCategory::Dinner);
    assert_eq!(recipe.difficulty, Difficulty::Medium);

    // Client-synthesized fields
    assert!(!recipe.id.is_empty());
    assert_eq!(recipe.image, generation::FALLBACK_IMAGE_URL);
    assert!((recipe.rating - generation::GENERATED_RECIPE_RATING).abs() < f32::EPSILON);
    assert!(recipe.reviews >= generation::REVIEWS_MIN);
    assert!(recipe.reviews < generation::REVIEWS_MAX);
}

#[tokio::test]
async fn test_generate_ids_are_unique_per_cycle() {
    let body = full_recipe_json().to_string();
    let (generator, _) = generator_with(ScriptedProvider::new(vec![
        common::ScriptedReply::Text(body.clone()),
        common::ScriptedReply::Text(body),
    ]));

    let first = generator.generate("atún", Goal::Detox).await.unwrap();
    let second = generator.generate("atún", Goal::Detox).await.unwrap();
    assert_ne!(first.id, second.id);
}

// ============================================================================
// Prompt & Schema Contents
// ============================================================================

#[tokio::test]
async fn test_generate_declares_schema_and_embeds_inputs() {
    let (generator, provider) =
        generator_with(ScriptedProvider::with_text(full_recipe_json().to_string()));

    generator
        .generate("atún, tomate, aguacate", Goal::LoseWeight)
        .await
        .unwrap();

    let request = provider.last_request().expect("one call expected");
    let schema = request.response_schema.expect("schema must be declared");
    assert_eq!(schema["required"].as_array().unwrap().len(), 10);

    let user_prompt = &request.messages.last().unwrap().content;
    assert!(user_prompt.contains("Perder Peso"));
    assert!(user_prompt.contains("atún, tomate, aguacate"));
}

// ============================================================================
// Failure Paths
// ============================================================================

#[tokio::test]
async fn test_generate_propagates_transport_failure() {
    let (generator, _) =
        generator_with(ScriptedProvider::failing(AppError::transport("offline")));

    let error = generator.generate("atún", Goal::Detox).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::TransportError);
}

#[tokio::test]
async fn test_generate_rejects_unparseable_reply() {
    let (generator, _) =
        generator_with(ScriptedProvider::with_text("Aquí tienes tu receta: tartar"));

    let error = generator.generate("atún", Goal::Detox).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidResponse);
}

#[tokio::test]
async fn test_generate_rejects_missing_required_field() {
    let mut payload = full_recipe_json();
    payload.as_object_mut().unwrap().remove("instructions");
    let (generator, _) = generator_with(ScriptedProvider::with_text(payload.to_string()));

    let error = generator.generate("atún", Goal::Detox).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidResponse);
}

#[tokio::test]
async fn test_generate_rejects_out_of_set_enum_value() {
    let mut payload = full_recipe_json();
    payload["difficulty"] = serde_json::json!("Imposible");
    let (generator, _) = generator_with(ScriptedProvider::with_text(payload.to_string()));

    let error = generator.generate("atún", Goal::Detox).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidResponse);
}

#[tokio::test]
async fn test_generate_rejects_blank_query_without_calling_provider() {
    let (generator, provider) =
        generator_with(ScriptedProvider::with_text(full_recipe_json().to_string()));

    let error = generator.generate("   ", Goal::Detox).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(provider.call_count(), 0);
}
