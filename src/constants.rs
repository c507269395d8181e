// ABOUTME: Application constants organized by domain
// ABOUTME: Environment variable names, generation defaults, and fallback copy
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constants module
//!
//! Application constants grouped by domain rather than scattered across the
//! modules that consume them.

/// Environment variable names
pub mod env_vars {
    /// Gemini API key (required for live generation)
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Override for the default Gemini model
    pub const GEMINI_MODEL: &str = "VIDASANA_GEMINI_MODEL";
    /// Override for the profile record location
    pub const PROFILE_PATH: &str = "VIDASANA_PROFILE_PATH";
    /// Log level for the CLI (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "VIDASANA_LOG_LEVEL";
    /// Log format for the CLI (pretty, compact, json is not supported)
    pub const LOG_FORMAT: &str = "VIDASANA_LOG_FORMAT";
}

/// Recipe generation defaults and limits
pub mod generation {
    /// Rating assigned to every freshly generated recipe
    pub const GENERATED_RECIPE_RATING: f32 = 4.9;
    /// Lower bound (inclusive) for the synthesized review count
    pub const REVIEWS_MIN: u32 = 500;
    /// Upper bound (exclusive) for the synthesized review count
    pub const REVIEWS_MAX: u32 = 1500;
    /// Display image used for generated recipes.
    ///
    /// A per-recipe image search was considered (the title would be the
    /// search term) but the product ships with a single curated fallback.
    pub const FALLBACK_IMAGE_URL: &str =
        "https://images.unsplash.com/photo-1547592166-23ac45744acd?q=80&w=800&auto=format&fit=crop";
    /// Target length for daily insights, stated in the prompt only
    pub const INSIGHT_MAX_CHARS: usize = 150;
}

/// Static fallback copy for the insight path (Spanish, like all user copy)
pub mod insight_fallbacks {
    /// Returned when the provider succeeds but sends an empty body
    pub const EMPTY_REPLY: &str = "Tu cuerpo es un templo, trátalo con excelencia hoy.";
    /// Returned when the provider call fails outright
    pub const CALL_FAILED: &str = "La disciplina es el puente entre tus metas y tus logros.";
}

/// Service identity for logging
pub mod service {
    /// Service name recorded in structured logs
    pub const NAME: &str = "vidasana-core";
}
