/// Server configuration loaded from environment variables.
///
/// All fields except the OpenAI credential have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// OpenAI completion service configuration (credential, model, caps).
    pub openai: OpenAiConfig,
}

/// Configuration for the outbound OpenAI Responses API calls.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Secret API credential. Required; startup fails without it.
    pub api_key: String,
    /// API root URL (default: `https://api.openai.com/v1`).
    pub base_url: String,
    /// Model identifier (default: `gpt-4.1-mini`).
    pub model: String,
    /// Cap on generated tokens per completion (default: `700`).
    pub max_output_tokens: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let openai = OpenAiConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            openai,
        }
    }
}

impl OpenAiConfig {
    /// Load OpenAI settings from environment variables.
    ///
    /// | Env Var                   | Default                      |
    /// |---------------------------|------------------------------|
    /// | `OPENAI_API_KEY`          | REQUIRED                     |
    /// | `OPENAI_BASE_URL`         | `https://api.openai.com/v1`  |
    /// | `OPENAI_MODEL`            | `gpt-4.1-mini`               |
    /// | `OPENAI_MAX_OUTPUT_TOKENS`| `700`                        |
    ///
    /// # Panics
    ///
    /// Panics when `OPENAI_API_KEY` is unset. The process must refuse to
    /// start without the credential rather than fail on the first request.
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".into());

        let max_output_tokens: u32 = std::env::var("OPENAI_MAX_OUTPUT_TOKENS")
            .unwrap_or_else(|_| "700".into())
            .parse()
            .expect("OPENAI_MAX_OUTPUT_TOKENS must be a valid u32");

        Self {
            api_key,
            base_url,
            model,
            max_output_tokens,
        }
    }
}
