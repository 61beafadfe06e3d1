//! Configuration loading from environment variables
//!
//! Mirrors the deployment contract of the original service: everything is
//! driven by `LLM_*` and `GATEWAY_*` variables, with `.env` support handled
//! by the caller (see `main`). Parse failures are reported as
//! [`GatewayError::Config`] so startup fails fast before any request is
//! served.

use std::env;
use std::time::Duration;

use tracing::debug;

use super::{LlmConfig, ServerConfig, Settings};
use crate::utils::error::{GatewayError, Result};

impl Settings {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] for unparseable values, or the
    /// first validation failure (missing credential, malformed endpoint,
    /// out-of-range temperature/timeout).
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut server = ServerConfig::default();
        if let Ok(host) = env::var("GATEWAY_HOST") {
            server.host = host;
        }
        if let Ok(port) = env::var("GATEWAY_PORT") {
            server.port = port
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid GATEWAY_PORT: {}", e)))?;
        }

        let mut llm = LlmConfig::default();
        if let Ok(base_url) = env::var("LLM_BASE_URL") {
            llm.base_url = base_url;
        }
        if let Ok(model) = env::var("LLM_MODEL") {
            llm.model = model;
        }
        if let Ok(api_key) = env::var("LLM_API_KEY") {
            llm.api_key = api_key;
        }
        if let Ok(temperature) = env::var("LLM_TEMPERATURE") {
            llm.temperature = temperature
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid LLM_TEMPERATURE: {}", e)))?;
        }
        if let Ok(max_tokens) = env::var("LLM_MAX_TOKENS") {
            llm.max_tokens = Some(
                max_tokens
                    .parse()
                    .map_err(|e| GatewayError::Config(format!("Invalid LLM_MAX_TOKENS: {}", e)))?,
            );
        }
        if let Ok(prompt) = env::var("LLM_SYSTEM_PROMPT") {
            // An empty or whitespace-only prompt means "no system message".
            let trimmed = prompt.trim();
            llm.system_prompt = if trimmed.is_empty() {
                None
            } else {
                Some(prompt)
            };
        }
        if let Ok(timeout) = env::var("LLM_REQUEST_TIMEOUT") {
            let secs: f64 = timeout
                .parse()
                .map_err(|e| GatewayError::Config(format!("Invalid LLM_REQUEST_TIMEOUT: {}", e)))?;
            if !secs.is_finite() || secs < 0.0 {
                return Err(GatewayError::Config(format!(
                    "Invalid LLM_REQUEST_TIMEOUT: {}",
                    timeout
                )));
            }
            llm.request_timeout = Duration::from_secs_f64(secs);
        }
        if let Ok(retry_transport) = env::var("LLM_RETRY_TRANSPORT_ERRORS") {
            llm.retry_transport_errors = retry_transport.parse().map_err(|e| {
                GatewayError::Config(format!("Invalid LLM_RETRY_TRANSPORT_ERRORS: {}", e))
            })?;
        }

        let settings = Self { server, llm };
        settings.validate()?;

        debug!("Configuration loaded: {:?}", settings);
        Ok(settings)
    }
}
