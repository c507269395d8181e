// ABOUTME: AI-backed service clients for the recipe club
// ABOUTME: Recipe generation with schema validation, and daily insight fetching
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Service Clients
//!
//! The two clients that talk to the generative model: the recipe generator
//! (structured output, validated before acceptance) and the insight service
//! (free text with static fallbacks). Both are thin request/response
//! wrappers; state mutation is the session controller's job.

mod insights;
pub mod prompts;
mod recipe_generator;

pub use insights::InsightService;
pub use recipe_generator::RecipeGenerator;
