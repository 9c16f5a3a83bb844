use arcana_core::error::CoreError;
use arcana_openai::OpenAiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`OpenAiError`] for upstream
/// completion failures. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `arcana_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The outbound completion call failed (network, auth, rate limit,
    /// malformed response).
    #[error("OpenAI request failed: {0}")]
    OpenAi(#[from] OpenAiError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // Upstream failures embed the underlying message so callers can
            // diagnose provider issues without reading server logs.
            AppError::OpenAi(err) => {
                tracing::error!(error = %err, "OpenAI request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPSTREAM_ERROR",
                    format!("OpenAI request failed: {err}"),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
