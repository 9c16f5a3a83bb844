//! HTTP client for the OpenAI Responses API.
//!
//! Wraps the single endpoint this backend uses (`POST /responses`) with
//! [`reqwest`]. One call per interpretation request, no retries; any
//! failure surfaces as a single [`OpenAiError`].

use crate::responses::{CreateResponse, ResponsePayload};

/// Client for the OpenAI Responses API.
///
/// Holds the credential and request parameters fixed at startup. The
/// inner [`reqwest::Client`] maintains the connection pool, so one
/// `OpenAiClient` is shared across all requests.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_output_tokens: u32,
}

/// Errors from the Responses API layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, decode).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// OpenAI returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl OpenAiClient {
    /// Create a new client.
    ///
    /// * `api_key`           - secret credential, sent as a bearer token.
    /// * `base_url`          - API root, e.g. `https://api.openai.com/v1`.
    /// * `model`             - model identifier, e.g. `gpt-4.1-mini`.
    /// * `max_output_tokens` - generation cap applied to every request.
    pub fn new(api_key: String, base_url: String, model: String, max_output_tokens: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
            max_output_tokens,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful to share one connection pool across clients).
    pub fn with_client(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        model: String,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url,
            model,
            max_output_tokens,
        }
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a completion for the given input text.
    ///
    /// Sends `POST /responses` with the configured model and token cap.
    /// Returns the parsed payload; extracting the concatenated message
    /// text is the caller's job via [`ResponsePayload::output_text`].
    pub async fn create_response(&self, input: &str) -> Result<ResponsePayload, OpenAiError> {
        let body = CreateResponse {
            model: &self.model,
            input,
            max_output_tokens: self.max_output_tokens,
        };

        tracing::debug!(
            model = %self.model,
            input_chars = input.len(),
            "Submitting completion request"
        );

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`OpenAiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, OpenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, OpenAiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
