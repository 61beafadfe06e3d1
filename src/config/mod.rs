//! Gateway configuration
//!
//! Settings are loaded once at startup (see [`Settings::from_env`] in
//! `loader`), validated, and then shared read-only for the process
//! lifetime. Nothing in the request path re-validates configuration.

mod loader;

use std::time::Duration;

use url::Url;

use crate::utils::error::{GatewayError, Result};

/// Upper bound for the configured completion token limit.
pub const MAX_COMPLETION_TOKENS: u32 = 128_000;

/// Upper bound for the configured system prompt length, in characters.
pub const MAX_SYSTEM_PROMPT_CHARS: usize = 8192;

/// Upper bound for the per-attempt request timeout.
pub const MAX_REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Complete gateway configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Provider connection settings
    pub llm: LlmConfig,
}

/// Inbound HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Provider connection parameters.
///
/// `api_key` is an opaque secret; the manual `Debug` impl below keeps it out
/// of log output.
#[derive(Clone)]
pub struct LlmConfig {
    /// OpenAI-compatible base URL (OpenAI, Ollama, Mistral, etc.)
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Bearer credential for the provider
    pub api_key: String,
    /// Sampling temperature, within [0.0, 2.0]
    pub temperature: f32,
    /// Completion token limit; omitted from requests when unset
    pub max_tokens: Option<u32>,
    /// System instruction prepended to every request; `None` when unset or
    /// empty
    pub system_prompt: Option<String>,
    /// Per-attempt timeout for provider calls
    pub request_timeout: Duration,
    /// Whether transport-level failures are retried in addition to rate
    /// limits and provider faults
    pub retry_transport_errors: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: String::new(),
            temperature: 0.7,
            max_tokens: None,
            system_prompt: None,
            request_timeout: Duration::from_secs(30),
            retry_transport_errors: false,
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("system_prompt", &self.system_prompt)
            .field("request_timeout", &self.request_timeout)
            .field("retry_transport_errors", &self.retry_transport_errors)
            .finish()
    }
}

impl LlmConfig {
    /// Validate connection parameters; called once at startup.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| GatewayError::Config(format!("Invalid LLM base URL: {}", e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(GatewayError::Config(format!(
                "LLM base URL must use http or https, got {}",
                url.scheme()
            )));
        }

        if self.model.trim().is_empty() {
            return Err(GatewayError::Config(
                "LLM model must not be empty".to_string(),
            ));
        }

        if self.api_key.is_empty() {
            return Err(GatewayError::Config(
                "LLM API key is required (set LLM_API_KEY)".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(GatewayError::Config(format!(
                "LLM temperature must be within [0.0, 2.0], got {}",
                self.temperature
            )));
        }

        if let Some(max_tokens) = self.max_tokens {
            if max_tokens == 0 || max_tokens > MAX_COMPLETION_TOKENS {
                return Err(GatewayError::Config(format!(
                    "LLM max tokens must be within 1..={}, got {}",
                    MAX_COMPLETION_TOKENS, max_tokens
                )));
            }
        }

        if let Some(prompt) = &self.system_prompt {
            if prompt.chars().count() > MAX_SYSTEM_PROMPT_CHARS {
                return Err(GatewayError::Config(format!(
                    "LLM system prompt exceeds {} characters",
                    MAX_SYSTEM_PROMPT_CHARS
                )));
            }
        }

        if self.request_timeout.is_zero() || self.request_timeout > MAX_REQUEST_TIMEOUT {
            return Err(GatewayError::Config(format!(
                "LLM request timeout must be within (0, {}s], got {:?}",
                MAX_REQUEST_TIMEOUT.as_secs(),
                self.request_timeout
            )));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate all sections.
    pub fn validate(&self) -> Result<()> {
        self.llm.validate()
    }
}
