//! Test helper utilities for generator integration tests

use std::time::Duration;

use generator::{GeneratorConfig, RetryPolicy};
use shared::{GenerationRequest, SearchIntent, TitleType};

/// Configuration pointing at a mock server, with millisecond backoff
pub fn create_test_config(base_url: &str, api_key: Option<&str>) -> GeneratorConfig {
    GeneratorConfig {
        api_key: api_key.map(str::to_string),
        model: "gemini-2.5-flash".to_string(),
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(2),
        retry: RetryPolicy::fast(3),
    }
}

/// A fully populated request
pub fn create_test_request() -> GenerationRequest {
    GenerationRequest {
        keywords: "AI tools, digital marketing".to_string(),
        content: None,
        title_type: TitleType::HowToGuides,
        search_intent: SearchIntent::Informational,
        language: "English".to_string(),
        audience: Some("small business owners".to_string()),
        count: 3,
    }
}

/// Gemini generateContent response body with a single text part
pub fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 90, "candidatesTokenCount": 40 }
    })
}
