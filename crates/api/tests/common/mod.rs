use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use arcana_api::config::{OpenAiConfig, ServerConfig};
use arcana_api::router::build_app_router;
use arcana_api::state::AppState;
use arcana_openai::OpenAiClient;

/// Build a test `ServerConfig` with safe defaults and the completion
/// service pointed at `openai_base_url` (usually an httpmock server).
pub fn test_config(openai_base_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        openai: OpenAiConfig {
            api_key: "test-key".to_string(),
            base_url: openai_base_url.to_string(),
            model: "gpt-4.1-mini".to_string(),
            max_output_tokens: 700,
        },
    }
}

/// Build the full application router with all middleware layers.
///
/// This goes through [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(openai_base_url: &str) -> Router {
    let config = test_config(openai_base_url);

    let openai = Arc::new(OpenAiClient::new(
        config.openai.api_key.clone(),
        config.openai.base_url.clone(),
        config.openai.model.clone(),
        config.openai.max_output_tokens,
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        openai,
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body and return the raw response.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
