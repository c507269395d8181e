// ABOUTME: Session controller owning application state behind guarded commands
// ABOUTME: Enforces single-flight generation with an atomic check-and-set flag
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Session Controller
//!
//! Owns the application state (profile, recipe collection, selection,
//! pending generation input, daily insight) and exposes mutation only
//! through named commands — no call site assigns fields directly.
//!
//! ## Generation state machine
//!
//! `idle --submit--> generating --settle--> idle`. The transition into
//! `generating` is guarded by an atomic check-and-set: a submission while a
//! cycle is in flight is rejected with `GenerationInFlight` rather than
//! queued. On settle — success or failure — the pending input is cleared
//! and the flag drops. Only a successful cycle touches the collection: the
//! new recipe is prepended (most-recent-first) and selected.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, instrument};

use crate::catalog;
use crate::errors::{AppError, AppResult};
use crate::llm::LlmProvider;
use crate::models::{Recipe, UserProfile};
use crate::services::{InsightService, RecipeGenerator};
use crate::storage::ProfileStore;

/// Application state owned by the session controller
///
/// Plain data; all access goes through [`RecipeSession`] commands.
#[derive(Debug, Default)]
struct AppState {
    profile: Option<UserProfile>,
    recipes: Vec<Recipe>,
    selected_recipe: Option<String>,
    generation_input: String,
    daily_insight: String,
}

struct SessionInner {
    state: Mutex<AppState>,
    /// Single-flight guard for the generation cycle
    in_flight: AtomicBool,
    generator: RecipeGenerator,
    insights: InsightService,
    store: ProfileStore,
}

/// Cloneable handle to the session
#[derive(Clone)]
pub struct RecipeSession {
    inner: Arc<SessionInner>,
}

impl RecipeSession {
    /// Create a session backed by the given provider and profile store
    ///
    /// Loads the persisted profile (if any) and seeds the recipe collection
    /// from the static catalog. Call [`Self::refresh_insight`] afterwards to
    /// populate the daily insight.
    ///
    /// # Errors
    ///
    /// Returns a storage error when an existing profile record cannot be
    /// read. A missing record is not an error; it means onboarding.
    pub fn new(provider: Arc<dyn LlmProvider>, store: ProfileStore) -> AppResult<Self> {
        let profile = store.load()?;

        let state = AppState {
            profile,
            recipes: catalog::seed_recipes(),
            ..AppState::default()
        };

        Ok(Self {
            inner: Arc::new(SessionInner {
                state: Mutex::new(state),
                in_flight: AtomicBool::new(false),
                generator: RecipeGenerator::new(Arc::clone(&provider)),
                insights: InsightService::new(provider),
                store,
            }),
        })
    }

    /// State is plain data, so a poisoned lock is still coherent; recover
    /// instead of propagating a panic from an unrelated thread.
    fn state(&self) -> MutexGuard<'_, AppState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // Onboarding / profile
    // ========================================================================

    /// Whether a profile exists (dashboard vs. onboarding)
    #[must_use]
    pub fn is_onboarded(&self) -> bool {
        self.state().profile.is_some()
    }

    /// The current profile, if onboarding has completed
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.state().profile.clone()
    }

    /// Complete onboarding: validate, persist, and adopt the profile, then
    /// fetch the first daily insight for its goal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a malformed profile or a storage error
    /// when persisting fails; the in-memory profile is only adopted after a
    /// successful write.
    pub async fn complete_onboarding(&self, profile: UserProfile) -> AppResult<()> {
        self.inner.store.save(&profile)?;
        info!(goal = %profile.goal, "Onboarding completed");
        self.state().profile = Some(profile);
        self.refresh_insight().await;
        Ok(())
    }

    /// Refresh the daily insight for the current goal
    ///
    /// One call per profile load or goal change. Failures degrade to the
    /// static fallback copy; the stored insight is always non-empty once a
    /// profile exists.
    pub async fn refresh_insight(&self) {
        let Some(goal) = self.state().profile.as_ref().map(|p| p.goal) else {
            return;
        };
        let insight = self.inner.insights.daily_insight_or_default(goal).await;
        self.state().daily_insight = insight;
    }

    /// The current daily insight (empty until the first refresh)
    #[must_use]
    pub fn daily_insight(&self) -> String {
        self.state().daily_insight.clone()
    }

    // ========================================================================
    // Recipe collection / selection
    // ========================================================================

    /// Snapshot of the visible recipe collection, most recent first
    #[must_use]
    pub fn recipes(&self) -> Vec<Recipe> {
        self.state().recipes.clone()
    }

    /// The recipe currently open in the detail view
    #[must_use]
    pub fn selected_recipe(&self) -> Option<Recipe> {
        let state = self.state();
        let id = state.selected_recipe.as_deref()?;
        state.recipes.iter().find(|r| r.id == id).cloned()
    }

    /// Open a recipe's detail view
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no recipe carries the id.
    pub fn select_recipe(&self, id: &str) -> AppResult<()> {
        let mut state = self.state();
        if !state.recipes.iter().any(|r| r.id == id) {
            return Err(AppError::not_found(format!("recipe {id}")));
        }
        state.selected_recipe = Some(id.to_owned());
        Ok(())
    }

    /// Close the detail view
    pub fn clear_selection(&self) {
        self.state().selected_recipe = None;
    }

    // ========================================================================
    // Generation
    // ========================================================================

    /// Stage the free-text ingredient query for the next submission
    pub fn set_generation_input(&self, text: impl Into<String>) {
        self.state().generation_input = text.into();
    }

    /// The staged query (cleared when a submission settles)
    #[must_use]
    pub fn generation_input(&self) -> String {
        self.state().generation_input.clone()
    }

    /// Whether a generation cycle is in flight
    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Submit the staged query for generation
    ///
    /// Guarded command: rejects when no profile exists, when the staged
    /// input is blank, or when a cycle is already in flight. On success the
    /// recipe is prepended to the collection and selected; on any settle
    /// the staged input is cleared.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` — blank input or missing profile
    /// - `GenerationInFlight` — concurrent submission rejected
    /// - any error from [`RecipeGenerator::generate`]
    #[instrument(skip(self))]
    pub async fn submit_generation_request(&self) -> AppResult<Recipe> {
        let (query, goal) = {
            let state = self.state();
            let goal = state
                .profile
                .as_ref()
                .map(|p| p.goal)
                .ok_or_else(|| AppError::invalid_input("complete onboarding first"))?;
            let query = state.generation_input.trim().to_owned();
            if query.is_empty() {
                return Err(AppError::invalid_input("describe your ingredients first"));
            }
            (query, goal)
        };

        // Atomic check-and-set: at most one cycle in flight.
        if self
            .inner
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AppError::generation_in_flight());
        }

        let result = self.inner.generator.generate(&query, goal).await;

        // Settle: input clears on both outcomes; the collection only moves
        // on success.
        let outcome = {
            let mut state = self.state();
            state.generation_input.clear();
            match result {
                Ok(recipe) => {
                    state.recipes.insert(0, recipe.clone());
                    state.selected_recipe = Some(recipe.id.clone());
                    info!(id = %recipe.id, title = %recipe.title, "Recipe added to collection");
                    Ok(recipe)
                }
                Err(error) => Err(error),
            }
        };

        self.inner.in_flight.store(false, Ordering::Release);
        outcome
    }
}
