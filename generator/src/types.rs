//! Generator-specific data types

use std::time::Duration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::ApiFailure;
use uuid::Uuid;

/// Provider response data
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub content: String,
    pub tokens_used: u32,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub model_used: String,
    pub response_time: Duration,
}

/// Raw text returned by the resilient generator, with the failures it absorbed
#[derive(Debug, Clone)]
pub struct GeneratedText {
    pub content: String,
    pub model_used: String,
    /// Attempt number that succeeded (1-based)
    pub attempts: u32,
    /// Failures recorded before the successful attempt, in order
    pub failures: Vec<ApiFailure>,
}

/// Result of one complete generation cycle, owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub request_id: Uuid,
    pub titles: Vec<String>,
    pub attempts: u32,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}
