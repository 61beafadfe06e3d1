//! Provider transport
//!
//! Executes exactly one HTTP POST per invocation and classifies the outcome
//! into the [`LlmError`] taxonomy. Retrying is the caller's concern; this
//! layer never re-sends.

use reqwest::Client;
use tracing::debug;

use crate::config::LlmConfig;
use crate::core::error::LlmError;
use crate::core::message::{ChatCompletionRequest, ChatCompletionResponse};
use crate::utils::error::{GatewayError, Result};

/// HTTP transport to one OpenAI-compatible backend.
///
/// Holds the shared `reqwest::Client` (and with it the connection pool and
/// the per-attempt timeout). Created once at process start; cheap to clone.
#[derive(Debug, Clone)]
pub struct LlmTransport {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl LlmTransport {
    /// Create the transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    /// Execute one chat-completion call.
    ///
    /// # Errors
    ///
    /// Classifies failures per the taxonomy: connection-level problems as
    /// [`LlmError::Transport`], non-2xx statuses by code, and unparseable
    /// 2xx bodies as [`LlmError::MalformedResponse`].
    pub async fn send(
        &self,
        request: &ChatCompletionRequest,
    ) -> std::result::Result<ChatCompletionResponse, LlmError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await.map_err(|e| LlmError::Transport {
            message: format!("failed to read response body: {}", e),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| LlmError::MalformedResponse {
            message: e.to_string(),
        })
    }
}
