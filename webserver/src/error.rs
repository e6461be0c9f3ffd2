//! WebServer-specific error types

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use generator::GeneratorError;
use serde_json::json;
use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error(transparent)]
    Generation(#[from] GeneratorError),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Static file not found: {path}")]
    StaticFileNotFound { path: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn config(message: String) -> Self {
        WebServerError::ServerStartup(message)
    }

    /// HTTP status and stable error kind reported to the browser
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            WebServerError::Generation(GeneratorError::MissingInput) => (StatusCode::BAD_REQUEST, "missing_input"),
            WebServerError::Generation(GeneratorError::MissingCredential) => {
                (StatusCode::BAD_REQUEST, "missing_credential")
            }
            WebServerError::Generation(GeneratorError::InvalidRequest { .. }) | WebServerError::InvalidRequest { .. } => {
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            WebServerError::Generation(GeneratorError::GenerationFailed { .. }) => {
                (StatusCode::BAD_GATEWAY, "generation_failed")
            }
            WebServerError::Generation(GeneratorError::ExportError { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "export_failed")
            }
            WebServerError::StaticFileNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    /// Message safe to show to the user
    pub fn user_message(&self) -> String {
        match self {
            // Cause stays in the logs
            WebServerError::Generation(GeneratorError::GenerationFailed { .. }) => {
                "Failed to generate titles.".to_string()
            }
            WebServerError::Generation(GeneratorError::MissingCredential) => {
                "Gemini API key missing.".to_string()
            }
            WebServerError::Generation(GeneratorError::MissingInput) => {
                "Provide keywords OR blog content.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for WebServerError {
    fn from(rejection: JsonRejection) -> Self {
        WebServerError::InvalidRequest {
            details: rejection.body_text(),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!(error = %self, kind, "Request failed");
        } else {
            tracing::debug!(error = %self, kind, "Request rejected");
        }

        let body = json!({
            "status": "error",
            "kind": kind,
            "error": self.user_message(),
        });
        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
