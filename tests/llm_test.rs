// ABOUTME: Unit tests for the LLM abstraction layer
// ABOUTME: Covers capabilities, message constructors, and request building
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use vidasana::config::GeminiConfig;
use vidasana::llm::{ChatMessage, ChatRequest, GeminiProvider, LlmCapabilities, LlmProvider, MessageRole};

// ============================================================================
// LlmCapabilities Tests
// ============================================================================

#[test]
fn test_capabilities_flags() {
    let caps = LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_MESSAGES;
    assert!(caps.supports_json_mode());
    assert!(caps.supports_system_messages());

    let none = LlmCapabilities::default();
    assert!(!none.supports_json_mode());
    assert!(!none.supports_system_messages());
}

// ============================================================================
// ChatMessage Tests
// ============================================================================

#[test]
fn test_chat_message_constructors() {
    let system = ChatMessage::system("Eres un chef.");
    assert_eq!(system.role, MessageRole::System);
    assert_eq!(system.content, "Eres un chef.");

    let user = ChatMessage::user("Hola");
    assert_eq!(user.role, MessageRole::User);

    let assistant = ChatMessage::assistant("¡Hola!");
    assert_eq!(assistant.role, MessageRole::Assistant);
}

#[test]
fn test_message_role_serialization() {
    let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
    assert_eq!(json, "\"assistant\"");
}

// ============================================================================
// ChatRequest Tests
// ============================================================================

#[test]
fn test_chat_request_builder() {
    let schema = serde_json::json!({ "type": "OBJECT" });
    let request = ChatRequest::new(vec![ChatMessage::user("Hola")])
        .with_model("gemini-2.5-flash")
        .with_temperature(0.7)
        .with_max_tokens(1000)
        .with_json_schema(schema.clone());

    assert_eq!(request.model, Some("gemini-2.5-flash".to_owned()));
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.max_tokens, Some(1000));
    assert_eq!(request.response_schema, Some(schema));
}

#[test]
fn test_chat_request_defaults() {
    let request = ChatRequest::new(vec![ChatMessage::user("Hola")]);
    assert!(request.model.is_none());
    assert!(request.temperature.is_none());
    assert!(request.max_tokens.is_none());
    assert!(request.response_schema.is_none());
}

// ============================================================================
// GeminiProvider Tests
// ============================================================================

#[test]
fn test_gemini_provider_metadata() {
    let provider = GeminiProvider::new(&GeminiConfig {
        api_key: "test-key".to_owned(),
        model: "gemini-2.5-flash".to_owned(),
    });
    assert_eq!(provider.name(), "gemini");
    assert_eq!(provider.display_name(), "Google Gemini");
    assert_eq!(provider.default_model(), "gemini-2.5-flash");
    assert!(provider.capabilities().supports_json_mode());
}
