use std::sync::Arc;

use arcana_openai::OpenAiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Constructed
/// once at startup; per-request data never lives here.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the completion service, sharing one connection pool.
    pub openai: Arc<OpenAiClient>,
}
