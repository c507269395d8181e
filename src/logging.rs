// ABOUTME: Logging configuration and tracing subscriber setup for the CLI
// ABOUTME: Level and format are environment-driven with sensible defaults
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Structured logging setup built on `tracing`

use std::env;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::constants::{env_vars, service};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format for development
    Pretty,
    /// Single-line format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// Build the configuration from `VIDASANA_LOG_LEVEL` / `VIDASANA_LOG_FORMAT`
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = env::var(env_vars::LOG_LEVEL) {
            config.level = level;
        }
        if let Ok(format) = env::var(env_vars::LOG_FORMAT) {
            if format.eq_ignore_ascii_case("pretty") {
                config.format = LogFormat::Pretty;
            }
        }
        config
    }
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the level directive does not parse or a subscriber
/// is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("invalid log level directive: {}", config.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    info!(service = service::NAME, level = %config.level, "logging initialized");
    Ok(())
}
