//! Gemini text generation client

use std::time::{Duration, Instant};
use async_trait::async_trait;
use tracing::debug;

use shared::ApiFailure;
use crate::traits::TextProvider;
use crate::types::ProviderResponse;

/// Default Gemini model used for title generation
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default Generative Language API host
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Real Gemini client backed by reqwest
#[derive(Clone)]
pub struct RealGeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl RealGeminiClient {
    /// Create new client for the given host and model
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn failure_for_status(&self, status: reqwest::StatusCode) -> ApiFailure {
        match status.as_u16() {
            401 | 403 => ApiFailure::AuthenticationFailed,
            404 => ApiFailure::ModelUnavailable(self.model.clone()),
            429 => ApiFailure::RateLimitExceeded,
            503 => ApiFailure::ServiceUnavailable,
            _ => ApiFailure::ServerError(status.to_string()),
        }
    }
}

#[async_trait]
impl TextProvider for RealGeminiClient {
    fn model(&self) -> String {
        self.model.clone()
    }

    async fn generate_text(&self, prompt: &str, api_key: &str) -> Result<ProviderResponse, ApiFailure> {
        let request_start = Instant::now();

        let request_body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiFailure::Timeout
                } else {
                    ApiFailure::NetworkError(e.to_string())
                }
            })?;

        let response_time = request_start.elapsed();

        if !response.status().is_success() {
            return Err(self.failure_for_status(response.status()));
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidRequest(format!("Failed to parse response: {}", e)))?;

        let content = extract_text(&response_json)
            .ok_or_else(|| ApiFailure::InvalidRequest("No content in response".to_string()))?;

        let usage_metadata = response_json.get("usageMetadata");
        let prompt_token_count = usage_metadata
            .and_then(|u| u.get("promptTokenCount"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0) as u32;
        let candidates_token_count = usage_metadata
            .and_then(|u| u.get("candidatesTokenCount"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0) as u32;

        debug!(
            model = %self.model,
            response_ms = response_time.as_millis() as u64,
            tokens = prompt_token_count + candidates_token_count,
            "Gemini response received"
        );

        Ok(ProviderResponse {
            content,
            tokens_used: prompt_token_count + candidates_token_count,
            prompt_tokens: prompt_token_count,
            completion_tokens: candidates_token_count,
            model_used: self.model.clone(),
            response_time,
        })
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response_json: &serde_json::Value) -> Option<String> {
    let parts = response_json
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
        .collect();

    if text.is_empty() { None } else { Some(text) }
}
