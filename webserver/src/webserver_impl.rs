//! Main webserver implementation
//!
//! Wires the title generation pipeline and the exporter into an axum router
//! using dependency injection, so tests can swap in mock providers.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use generator::{TextProvider, TitleExporter, TitleGenerator};
use shared::{logging, Component};
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{export_titles, form_options, generate_titles, health_check, serve_index};

/// Main webserver struct with dependency injection
pub struct WebServer<P, E>
where
    P: TextProvider,
    E: TitleExporter,
{
    state: Arc<WebServerState>,
    title_generator: Arc<TitleGenerator<P>>,
    exporter: Arc<E>,
}

impl<P, E> Clone for WebServer<P, E>
where
    P: TextProvider,
    E: TitleExporter,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            title_generator: self.title_generator.clone(),
            exporter: self.exporter.clone(),
        }
    }
}

impl<P, E> WebServer<P, E>
where
    P: TextProvider + 'static,
    E: TitleExporter + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(
        bind_address: SocketAddr,
        static_dir: impl Into<PathBuf>,
        title_generator: TitleGenerator<P>,
        exporter: E,
        server_has_api_key: bool,
    ) -> Self {
        let state = Arc::new(WebServerState::new(bind_address, static_dir, server_has_api_key));

        Self {
            state,
            title_generator: Arc::new(title_generator),
            exporter: Arc::new(exporter),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Form page and assets
            .route("/", get(serve_index::<P, E>))
            .nest_service("/static", ServeDir::new(&self.state.static_dir))

            // API routes
            .route("/api/generate", post(generate_titles::<P, E>))
            .route("/api/export", post(export_titles::<P, E>))
            .route("/api/options", get(form_options::<P, E>))

            // Health check
            .route("/health", get(health_check::<P, E>))

            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.state.bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", self.state.bind_address, e)))?;

        logging::log_startup(
            Component::WebServer,
            &format!("title generator on http://{}", self.state.bind_address),
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    logging::log_error(Component::WebServer, "Signal handling", &e);
                }
                logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal");
            })
            .await?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    pub fn title_generator(&self) -> &TitleGenerator<P> {
        &self.title_generator
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }
}
