// ABOUTME: Integration tests for the daily insight client
// ABOUTME: Verifies the always-non-empty guarantee and the two distinct fallbacks
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

use common::ScriptedProvider;
use vidasana::constants::insight_fallbacks;
use vidasana::errors::{AppError, ErrorCode};
use vidasana::models::Goal;
use vidasana::services::InsightService;

fn service_with(provider: ScriptedProvider) -> InsightService {
    InsightService::new(Arc::new(provider))
}

#[tokio::test]
async fn test_insight_returns_model_text() {
    let service = service_with(ScriptedProvider::with_text(
        "Tu metabolismo es tu motor: aliméntalo con precisión.",
    ));

    let insight = service.daily_insight(Goal::GainMuscle).await.unwrap();
    assert_eq!(insight, "Tu metabolismo es tu motor: aliméntalo con precisión.");
}

#[tokio::test]
async fn test_empty_reply_degrades_to_default_copy() {
    let service = service_with(ScriptedProvider::with_text("   \n"));

    let insight = service.daily_insight(Goal::StayHealthy).await.unwrap();
    assert_eq!(insight, insight_fallbacks::EMPTY_REPLY);
}

#[tokio::test]
async fn test_failure_propagates_in_result_form() {
    let service = service_with(ScriptedProvider::failing(AppError::transport("offline")));

    let error = service.daily_insight(Goal::Detox).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::TransportError);
}

#[tokio::test]
async fn test_or_default_is_non_empty_on_failure() {
    let service = service_with(ScriptedProvider::failing(AppError::provider("boom")));

    let insight = service.daily_insight_or_default(Goal::Detox).await;
    assert_eq!(insight, insight_fallbacks::CALL_FAILED);
    assert!(!insight.is_empty());
}

#[tokio::test]
async fn test_fallback_literals_are_distinct() {
    // The empty-reply default and the failure default must stay different
    // literals; the UI copy relies on that.
    assert_ne!(insight_fallbacks::EMPTY_REPLY, insight_fallbacks::CALL_FAILED);
}

#[tokio::test]
async fn test_or_default_non_empty_for_every_goal() {
    for goal in Goal::ALL {
        let service = service_with(ScriptedProvider::failing(AppError::transport("down")));
        assert!(!service.daily_insight_or_default(goal).await.is_empty());
    }
}
