//! Generator configuration loaded from the environment

use std::str::FromStr;
use std::time::Duration;

use crate::core::RetryPolicy;
use crate::error::{GeneratorError, GeneratorResult};
use crate::services::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_MODEL: &str = "GEMINI_MODEL";
pub const ENV_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_MAX_ATTEMPTS: &str = "GENERATOR_MAX_ATTEMPTS";
pub const ENV_BACKOFF_MIN_SECS: &str = "GENERATOR_BACKOFF_MIN_SECS";
pub const ENV_BACKOFF_MAX_SECS: &str = "GENERATOR_BACKOFF_MAX_SECS";

/// Settings for the text provider and retry wrapper
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Fallback credential used when a request brings none
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            retry: RetryPolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load `.env` if present, then read settings from the process environment
    pub fn from_env() -> GeneratorResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> GeneratorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        config.api_key = get(ENV_API_KEY);
        if let Some(model) = get(ENV_MODEL) {
            config.model = model;
        }
        if let Some(base_url) = get(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        if let Some(value) = get(ENV_MAX_ATTEMPTS) {
            config.retry.max_attempts = parse_setting(ENV_MAX_ATTEMPTS, &value)?;
        }
        if let Some(value) = get(ENV_BACKOFF_MIN_SECS) {
            config.retry.min_delay = Duration::from_secs(parse_setting(ENV_BACKOFF_MIN_SECS, &value)?);
        }
        if let Some(value) = get(ENV_BACKOFF_MAX_SECS) {
            config.retry.max_delay = Duration::from_secs(parse_setting(ENV_BACKOFF_MAX_SECS, &value)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check invariants the retry wrapper relies on
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.retry.max_attempts == 0 {
            return Err(GeneratorError::ConfigError {
                message: format!("{ENV_MAX_ATTEMPTS} must be at least 1"),
            });
        }
        if self.retry.min_delay > self.retry.max_delay {
            return Err(GeneratorError::ConfigError {
                message: format!("{ENV_BACKOFF_MIN_SECS} must not exceed {ENV_BACKOFF_MAX_SECS}"),
            });
        }
        if self.model.is_empty() {
            return Err(GeneratorError::ConfigError {
                message: "Model name must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_setting<T: FromStr>(name: &str, value: &str) -> GeneratorResult<T> {
    value.trim().parse().map_err(|_| GeneratorError::ConfigError {
        message: format!("Invalid value for {name}: '{value}'"),
    })
}
