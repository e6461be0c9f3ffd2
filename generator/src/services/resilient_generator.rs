//! Retry wrapper around the text provider

use tracing::{debug, error, warn};

use shared::ApiFailure;
use crate::core::{AttemptState, RetryPolicy};
use crate::error::{GeneratorError, GeneratorResult};
use crate::traits::TextProvider;
use crate::types::GeneratedText;

/// Text provider wrapped with credential resolution and bounded retries
pub struct ResilientGenerator<P: TextProvider> {
    provider: P,
    fallback_api_key: Option<String>,
    policy: RetryPolicy,
}

impl<P: TextProvider> ResilientGenerator<P> {
    /// Create a generator with the configured fallback credential
    pub fn new(provider: P, fallback_api_key: Option<String>, policy: RetryPolicy) -> Self {
        Self {
            provider,
            fallback_api_key: fallback_api_key.filter(|key| !key.is_empty()),
            policy,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Pick the per-call credential, else the configured fallback
    pub fn resolve_credential<'a>(&'a self, api_key: Option<&'a str>) -> GeneratorResult<&'a str> {
        api_key
            .filter(|key| !key.is_empty())
            .or(self.fallback_api_key.as_deref())
            .ok_or(GeneratorError::MissingCredential)
    }

    /// Send the prompt, retrying every failure up to the policy's attempt cap
    pub async fn generate(&self, prompt: &str, api_key: Option<&str>) -> GeneratorResult<GeneratedText> {
        let credential = self.resolve_credential(api_key)?;

        let mut failures: Vec<ApiFailure> = Vec::new();
        let mut state = AttemptState::Idle.start();

        while let AttemptState::Attempting(attempt) = state {
            debug!(attempt, max_attempts = self.policy.max_attempts, "Requesting titles");

            match self.provider.generate_text(prompt, credential).await {
                Ok(response) => {
                    debug!(attempt, tokens = response.tokens_used, "Generation attempt succeeded");
                    return Ok(GeneratedText {
                        content: response.content,
                        model_used: response.model_used,
                        attempts: attempt,
                        failures,
                    });
                }
                Err(failure) => {
                    state = state.record(false, &self.policy);
                    let retrying = matches!(state, AttemptState::Attempting(_));
                    warn!(attempt, reason = %failure, retrying, "Generation attempt failed");
                    failures.push(failure);

                    if retrying {
                        let delay = self.policy.backoff_delay(attempt);
                        debug!(backoff_ms = delay.as_millis() as u64, "Backing off before next attempt");
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        let attempts = failures.len() as u32;
        let reason = failures
            .pop()
            .unwrap_or_else(|| ApiFailure::Unknown("no attempts were made".to_string()));
        error!(attempts, reason = %reason, "Generation attempts exhausted");

        Err(GeneratorError::GenerationFailed { attempts, reason })
    }
}
