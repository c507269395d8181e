// ABOUTME: Shared test fixtures - a scripted LLM provider and payload builders
// ABOUTME: Lets integration tests drive the clients without network access
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use vidasana::errors::{AppError, AppResult};
use vidasana::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};

/// A scripted reply for one `complete` call
pub enum ScriptedReply {
    /// Succeed with this body
    Text(String),
    /// Fail with this error
    Fail(AppError),
}

/// LLM provider that replays a script instead of calling a network
///
/// Replies are consumed in order; the last request is recorded so tests can
/// assert on prompt and schema contents.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    last_request: Mutex<Option<ChatRequest>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last_request: Mutex::new(None),
            calls: AtomicUsize::new(0),
            delay: None,
        }
    }

    /// Single successful reply
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(vec![ScriptedReply::Text(text.into())])
    }

    /// Single failing reply
    pub fn failing(error: AppError) -> Self {
        Self::new(vec![ScriptedReply::Fail(error)])
    }

    /// Hold each reply for `delay` before settling (for overlap tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `complete` calls observed
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any call happened
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted Test Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_MESSAGES
    }

    fn default_model(&self) -> &str {
        "scripted-1"
    }

    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ScriptedReply::Fail(AppError::internal("script exhausted")));

        match reply {
            ScriptedReply::Text(content) => Ok(ChatResponse {
                content,
                model: "scripted-1".to_owned(),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            ScriptedReply::Fail(error) => Err(error),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

/// A complete, well-typed recipe payload as the provider would return it
pub fn full_recipe_json() -> serde_json::Value {
    serde_json::json!({
        "title": "Tartar de Atún Elite",
        "description": "Atún rojo con aguacate, tomate confitado y un toque de jengibre.",
        "category": "Cena",
        "time": "20 min",
        "timeValue": 20,
        "calories": 420,
        "ingredients": [
            "200g de atún rojo",
            "1 aguacate",
            "1 tomate",
            "Jengibre fresco (ingrediente secreto)"
        ],
        "instructions": [
            "Corta el atún en dados y marina con jengibre.",
            "Monta el tartar con aguacate y tomate.",
            "Enfría 10 minutos antes de servir."
        ],
        "difficulty": "Media",
        "dietaryRestrictions": ["Sin Gluten"]
    })
}
