// ABOUTME: Durable storage for the single user profile record
// ABOUTME: One JSON file in the platform data directory, read at startup, written once
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Profile Store
//!
//! The only durable record in the application. Absence of the file is the
//! signal to run onboarding; presence means the dashboard can load. The
//! record is written once at onboarding completion and never mutated
//! afterward.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::UserProfile;

/// Persistence envelope around the profile
///
/// Versioned so a future record shape can migrate the file in place.
#[derive(Debug, Serialize, Deserialize)]
struct StoredProfile {
    version: u32,
    created_at: DateTime<Utc>,
    profile: UserProfile,
}

/// Current envelope version
const STORE_VERSION: u32 = 1;

/// File-backed store for the user profile
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    /// Create a store at an explicit path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the configured location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when no location can be resolved.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(config::profile_path()?))
    }

    /// Location of the record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile, if onboarding has completed
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on IO failure and `SerializationError` when
    /// the file exists but does not parse.
    pub fn load(&self) -> AppResult<Option<UserProfile>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No profile record, onboarding required");
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::storage(format!("failed to read {}: {e}", self.path.display()))
        })?;

        let stored: StoredProfile = serde_json::from_str(&raw).map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("profile record is corrupt: {e}"),
            )
        })?;

        debug!(version = stored.version, "Profile record loaded");
        Ok(Some(stored.profile))
    }

    /// Persist the profile at onboarding completion
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the profile fails validation, or
    /// `StorageError` on IO failure.
    pub fn save(&self, profile: &UserProfile) -> AppResult<()> {
        profile.validate()?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let stored = StoredProfile {
            version: STORE_VERSION,
            created_at: Utc::now(),
            profile: profile.clone(),
        };
        let raw = serde_json::to_string_pretty(&stored).map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("failed to serialize profile: {e}"),
            )
        })?;

        fs::write(&self.path, raw).map_err(|e| {
            AppError::storage(format!("failed to write {}: {e}", self.path.display()))
        })?;

        info!(path = %self.path.display(), "Profile record saved");
        Ok(())
    }
}
