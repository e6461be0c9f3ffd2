//! Shared logging utilities for consistent tracing across both binaries

use crate::errors::{SharedError, SharedResult};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info};

/// Which binary is emitting traces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Generator,
    WebServer,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Generator => write!(f, "generator"),
            Component::WebServer => write!(f, "webserver"),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Build the per-component filter directive for a base level
pub fn filter_directive(component: Component, log_level: Option<&str>) -> SharedResult<String> {
    let base_level = log_level.unwrap_or("info").to_lowercase();
    if !LOG_LEVELS.contains(&base_level.as_str()) {
        return Err(SharedError::InvalidValue {
            field: "log_level".to_string(),
            message: format!("expected one of {}, got '{base_level}'", LOG_LEVELS.join(", ")),
        });
    }

    Ok(match component {
        Component::Generator => {
            format!("generator={base_level},shared={base_level},reqwest=warn")
        }
        Component::WebServer => {
            format!("webserver={base_level},generator={base_level},shared={base_level},tower_http=debug,axum={base_level}")
        }
    })
}

/// Initialize the stdout tracing subscriber
///
/// `RUST_LOG` takes precedence over the component defaults when it is set.
pub fn init_tracing(component: Component, log_level: Option<&str>) -> SharedResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let directive = match std::env::var("RUST_LOG") {
        Ok(env_directive) if !env_directive.is_empty() => env_directive,
        _ => filter_directive(component, log_level)?,
    };

    let env_filter = EnvFilter::try_new(&directive).map_err(|_| SharedError::InvalidConfig {
        field: "log filter".to_string(),
        value: directive.clone(),
    })?;

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| SharedError::InvalidConfig {
            field: "tracing subscriber".to_string(),
            value: e.to_string(),
        })
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: Component, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: Component, reason: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: Component, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: Component, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
