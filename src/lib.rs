// ABOUTME: Main library entry point for the VidaSana Elite recipe club core
// ABOUTME: AI recipe generation, daily insights, session state, and profile storage
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(unsafe_code)]

//! # VidaSana Core
//!
//! Core library behind the VidaSana Elite premium recipe club: a Gemini
//! client that turns free-text ingredient lists into schema-validated luxury
//! recipes, a daily-insight client with static fallbacks, and a session
//! controller that owns the application state behind guarded commands.
//!
//! ## Architecture
//!
//! - **`llm`**: provider abstraction and the Gemini implementation with
//!   structured-output support
//! - **`services`**: the recipe generator and insight client
//! - **`session`**: application state and the single-flight generation
//!   state machine
//! - **`storage`**: the single durable profile record
//! - **`catalog`**: static seed recipes and the premium gift catalog
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vidasana::llm::GeminiProvider;
//! use vidasana::session::RecipeSession;
//! use vidasana::storage::ProfileStore;
//!
//! #[tokio::main]
//! async fn main() -> vidasana::errors::AppResult<()> {
//!     let provider = Arc::new(GeminiProvider::from_env()?);
//!     let session = RecipeSession::new(provider, ProfileStore::from_env()?)?;
//!     session.refresh_insight().await;
//!
//!     session.set_generation_input("atún, tomate, aguacate");
//!     let recipe = session.submit_generation_request().await?;
//!     println!("{}", recipe.title);
//!     Ok(())
//! }
//! ```

/// Static seed recipes and the premium gift catalog
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Unified error handling
pub mod errors;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Logging configuration and tracing setup
pub mod logging;

/// Core domain models
pub mod models;

/// AI-backed service clients (recipe generation, daily insights)
pub mod services;

/// Session controller and application state
pub mod session;

/// Durable profile storage
pub mod storage;
