//! Title generation pipeline with dependency injection

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use shared::{GenerationRequest, MAX_TITLE_COUNT, MIN_TITLE_COUNT};
use crate::config::GeneratorConfig;
use crate::core::{build_prompt, parse_titles, RetryPolicy};
use crate::error::{GeneratorError, GeneratorResult};
use crate::services::{RealGeminiClient, ResilientGenerator};
use crate::traits::TextProvider;
use crate::types::GenerationOutcome;

/// Validates input, builds the prompt, calls the provider and parses titles
pub struct TitleGenerator<P: TextProvider> {
    generator: ResilientGenerator<P>,
}

impl TitleGenerator<RealGeminiClient> {
    /// Create a pipeline backed by the Gemini API
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let client = RealGeminiClient::new(&config.base_url, &config.model, config.request_timeout);
        Self::new(client, config.api_key.clone(), config.retry.clone())
    }
}

impl<P: TextProvider> TitleGenerator<P> {
    /// Create new pipeline instance
    pub fn new(provider: P, fallback_api_key: Option<String>, policy: RetryPolicy) -> Self {
        Self {
            generator: ResilientGenerator::new(provider, fallback_api_key, policy),
        }
    }

    pub fn model(&self) -> String {
        self.generator.provider().model()
    }

    pub fn provider(&self) -> &P {
        self.generator.provider()
    }

    /// Run one full generation cycle
    ///
    /// On any error no titles are produced.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        api_key: Option<&str>,
    ) -> GeneratorResult<GenerationOutcome> {
        let request_id = Uuid::new_v4();

        if !request.has_subject() {
            warn!(%request_id, "Rejected request without keywords or content");
            return Err(GeneratorError::MissingInput);
        }
        if !request.has_valid_count() {
            return Err(GeneratorError::InvalidRequest {
                message: format!(
                    "Title count must be between {MIN_TITLE_COUNT} and {MAX_TITLE_COUNT}, got {}",
                    request.count
                ),
            });
        }

        info!(
            %request_id,
            count = request.count,
            title_type = %request.title_type,
            search_intent = %request.search_intent,
            language = %request.language,
            "Generating blog titles"
        );

        let prompt = build_prompt(request);
        let generated = self.generator.generate(&prompt, api_key).await?;
        let titles = parse_titles(&generated.content);

        info!(
            %request_id,
            attempts = generated.attempts,
            titles = titles.len(),
            "Generated blog titles"
        );

        Ok(GenerationOutcome {
            request_id,
            titles,
            attempts: generated.attempts,
            model: generated.model_used,
            generated_at: Utc::now(),
        })
    }
}
