//! Test helpers for webserver route tests

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use generator::{MockTextProvider, ProviderResponse, RetryPolicy, TitleGenerator, XlsxTitleExporter};
use webserver::WebServer;

pub type TestServer = WebServer<MockTextProvider, XlsxTitleExporter>;

/// Build a webserver around the given mock provider
pub fn create_test_server(provider: MockTextProvider, fallback_key: Option<&str>, static_dir: &str) -> TestServer {
    let title_generator = TitleGenerator::new(provider, fallback_key.map(str::to_string), RetryPolicy::fast(3));
    WebServer::new(
        "127.0.0.1:0".parse().unwrap(),
        static_dir,
        title_generator,
        XlsxTitleExporter::new(),
        fallback_key.is_some(),
    )
}

pub fn create_router(provider: MockTextProvider, fallback_key: Option<&str>) -> Router {
    create_test_server(provider, fallback_key, "./static").build_router()
}

pub fn provider_response(content: &str) -> ProviderResponse {
    ProviderResponse {
        content: content.to_string(),
        tokens_used: 10,
        prompt_tokens: 6,
        completion_tokens: 4,
        model_used: "mock-model".to_string(),
        response_time: Duration::from_millis(1),
    }
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
