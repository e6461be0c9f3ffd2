//! REST API handlers
//!
//! Title generation, Excel export and health endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use tracing::info;

use generator::{GenerationOutcome, TextProvider, TitleExporter};
use shared::{SearchIntent, TitleType, DEFAULT_TITLE_COUNT, MAX_TITLE_COUNT, MIN_TITLE_COUNT};
use crate::error::WebServerResult;
use crate::types::{ExportTitlesBody, FormOptions, GenerateTitlesBody, HealthResponse};
use crate::webserver_impl::WebServer;

/// Generate titles - /api/generate
pub async fn generate_titles<P, E>(
    State(webserver): State<WebServer<P, E>>,
    payload: Result<Json<GenerateTitlesBody>, JsonRejection>,
) -> WebServerResult<Json<GenerationOutcome>>
where
    P: TextProvider + 'static,
    E: TitleExporter + 'static,
{
    let Json(body) = payload?;
    let outcome = webserver
        .title_generator()
        .generate(&body.request, body.api_key.as_deref())
        .await?;

    let total = webserver.state().record_generation();
    info!(request_id = %outcome.request_id, titles = outcome.titles.len(), total, "Served generated titles");

    Ok(Json(outcome))
}

/// Download titles as a spreadsheet - /api/export
pub async fn export_titles<P, E>(
    State(webserver): State<WebServer<P, E>>,
    payload: Result<Json<ExportTitlesBody>, JsonRejection>,
) -> WebServerResult<Response>
where
    P: TextProvider + 'static,
    E: TitleExporter + 'static,
{
    let Json(body) = payload?;
    let exporter = webserver.exporter();
    let bytes = exporter.export(&body.titles)?;

    let disposition = format!("attachment; filename=\"{}\"", exporter.file_name());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, exporter.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

/// Form choices - /api/options
pub async fn form_options<P, E>(State(webserver): State<WebServer<P, E>>) -> Json<FormOptions>
where
    P: TextProvider + 'static,
    E: TitleExporter + 'static,
{
    Json(FormOptions {
        title_types: TitleType::ALL.iter().map(|t| t.label().to_string()).collect(),
        search_intents: SearchIntent::ALL.iter().map(|i| i.label().to_string()).collect(),
        min_count: MIN_TITLE_COUNT,
        max_count: MAX_TITLE_COUNT,
        default_count: DEFAULT_TITLE_COUNT,
        server_has_api_key: webserver.state().server_has_api_key,
    })
}

/// Health check - /health
pub async fn health_check<P, E>(State(webserver): State<WebServer<P, E>>) -> Json<HealthResponse>
where
    P: TextProvider + 'static,
    E: TitleExporter + 'static,
{
    let state = webserver.state();
    Json(HealthResponse {
        status: "ok".to_string(),
        model: webserver.title_generator().model(),
        uptime_seconds: state.get_uptime_seconds(),
        generations: state.generations(),
    })
}
