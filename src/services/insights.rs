// ABOUTME: Daily insight client with distinct static fallbacks
// ABOUTME: Always able to hand the UI a non-empty motivational line
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Insight Service
//!
//! Fetches the short motivational "Insight de Poder" line for the user's
//! goal. [`InsightService::daily_insight`] exposes typed failures for
//! callers that want to surface them; [`InsightService::daily_insight_or_default`]
//! reproduces the classic always-a-string behavior with two distinct
//! fallback literals (empty reply vs. failed call).

use std::sync::Arc;

use tracing::{instrument, warn};

use super::prompts;
use crate::constants::insight_fallbacks;
use crate::errors::AppResult;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};
use crate::models::Goal;

/// Daily insight client
#[derive(Clone)]
pub struct InsightService {
    provider: Arc<dyn LlmProvider>,
}

impl InsightService {
    /// Create an insight service backed by the given provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Fetch the daily insight for a goal
    ///
    /// An empty (but successful) reply degrades to the static default, so a
    /// returned `Ok` is always non-empty.
    ///
    /// # Errors
    ///
    /// Propagates transport/provider failures so callers can surface them.
    #[instrument(skip(self), fields(provider = self.provider.name(), goal = %goal))]
    pub async fn daily_insight(&self, goal: Goal) -> AppResult<String> {
        let request = ChatRequest::new(vec![ChatMessage::user(prompts::insight_prompt(goal))]);
        let response = self.provider.complete(&request).await?;

        let text = response.content.trim();
        if text.is_empty() {
            warn!("Provider returned an empty insight, using default copy");
            return Ok(insight_fallbacks::EMPTY_REPLY.to_owned());
        }
        Ok(text.to_owned())
    }

    /// Fetch the daily insight, absorbing any failure into fallback copy
    ///
    /// Guaranteed non-empty for every input.
    pub async fn daily_insight_or_default(&self, goal: Goal) -> String {
        match self.daily_insight(goal).await {
            Ok(text) => text,
            Err(error) => {
                warn!(code = ?error.code, "Insight call failed, using fallback copy");
                insight_fallbacks::CALL_FAILED.to_owned()
            }
        }
    }
}
