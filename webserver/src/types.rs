//! Request and response bodies for the HTTP API

use serde::{Deserialize, Serialize};
use shared::GenerationRequest;

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTitlesBody {
    #[serde(flatten)]
    pub request: GenerationRequest,
    /// Per-request Gemini key; the server's configured key is used when absent
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Body of `POST /api/export`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportTitlesBody {
    pub titles: Vec<String>,
}

/// Choices offered by the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormOptions {
    pub title_types: Vec<String>,
    pub search_intents: Vec<String>,
    pub min_count: u8,
    pub max_count: u8,
    pub default_count: u8,
    pub server_has_api_key: bool,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub uptime_seconds: u64,
    pub generations: u64,
}
