// ABOUTME: Environment-based configuration for the VidaSana core
// ABOUTME: Gemini credentials, model override, and profile record location
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management
//!
//! All configuration is read from environment variables; there is no config
//! file. See [`crate::constants::env_vars`] for the variable names.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::env_vars;
use crate::errors::{AppError, AppResult};

/// Default Gemini model used when no override is set
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Credentials and model selection for the Gemini provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key from Google AI Studio
    pub api_key: String,
    /// Model identifier sent with every request
    pub model: String,
}

impl GeminiConfig {
    /// Load the Gemini configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(env_vars::GEMINI_API_KEY).map_err(|_| {
            AppError::config(format!(
                "{} environment variable not set",
                env_vars::GEMINI_API_KEY
            ))
        })?;
        let model = env::var(env_vars::GEMINI_MODEL)
            .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_owned());

        debug!(model = %model, "Gemini configuration loaded");

        Ok(Self { api_key, model })
    }
}

/// Resolve the location of the durable profile record
///
/// Honors `VIDASANA_PROFILE_PATH`; otherwise lands in the platform data
/// directory (`<data_dir>/vidasana/profile.json`).
///
/// # Errors
///
/// Returns `ConfigError` when no platform data directory can be determined
/// and no override is set.
pub fn profile_path() -> AppResult<PathBuf> {
    if let Ok(path) = env::var(env_vars::PROFILE_PATH) {
        return Ok(PathBuf::from(path));
    }

    dirs::data_dir()
        .map(|dir| dir.join("vidasana").join("profile.json"))
        .ok_or_else(|| AppError::config("no data directory available for the profile record"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_profile_path_env_override() {
        env::set_var(env_vars::PROFILE_PATH, "/tmp/vidasana-test/profile.json");
        let path = profile_path().unwrap();
        assert_eq!(path, PathBuf::from("/tmp/vidasana-test/profile.json"));
        env::remove_var(env_vars::PROFILE_PATH);
    }

    #[test]
    #[serial]
    fn test_gemini_config_requires_api_key() {
        env::remove_var(env_vars::GEMINI_API_KEY);
        let result = GeminiConfig::from_env();
        assert!(result.is_err());
    }
}
