//! Generator trait definitions for dependency injection

use async_trait::async_trait;

use shared::ApiFailure;
use crate::error::GeneratorResult;
use crate::types::ProviderResponse;

/// External text generation service
#[mockall::automock]
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Model identifier requests are sent to
    fn model(&self) -> String;

    /// Send one prompt with the given credential and return the raw text payload
    async fn generate_text(&self, prompt: &str, api_key: &str) -> Result<ProviderResponse, ApiFailure>;
}

/// Serializes an ordered title list into a downloadable file
#[mockall::automock]
pub trait TitleExporter: Send + Sync {
    /// File name offered to the user
    fn file_name(&self) -> &'static str;

    /// MIME type of the produced bytes
    fn content_type(&self) -> &'static str;

    /// Render the titles into file bytes
    fn export(&self, titles: &[String]) -> GeneratorResult<Vec<u8>>;
}
