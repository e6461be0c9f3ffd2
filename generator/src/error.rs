//! Generator error types

use thiserror::Error;
use shared::ApiFailure;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generator error types
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Provide keywords or blog content")]
    MissingInput,

    #[error("Gemini API key missing")]
    MissingCredential,

    #[error("Failed to generate titles after {attempts} attempts: {reason}")]
    GenerationFailed { attempts: u32, reason: ApiFailure },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Export error: {message}")]
    ExportError { message: String },
}

impl From<rust_xlsxwriter::XlsxError> for GeneratorError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        GeneratorError::ExportError { message: err.to_string() }
    }
}
