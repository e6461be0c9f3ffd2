//! Static page handler

use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use generator::{TextProvider, TitleExporter};
use crate::error::{WebServerError, WebServerResult};
use crate::webserver_impl::WebServer;

/// Serve the form page - /
pub async fn serve_index<P, E>(State(webserver): State<WebServer<P, E>>) -> WebServerResult<impl IntoResponse>
where
    P: TextProvider + 'static,
    E: TitleExporter + 'static,
{
    let path = webserver.state().static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(WebServerError::StaticFileNotFound {
            path: path.display().to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}
