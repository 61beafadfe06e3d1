//! Request pipeline composition root
//!
//! Chains request building, the retried transport call, and answer
//! extraction for one inbound question. Stateless across calls; one
//! instance serves all concurrent requests.

use std::sync::Arc;

use tracing::info;

use crate::config::LlmConfig;
use crate::core::builder::build_request;
use crate::core::error::LlmError;
use crate::core::extract::extract_answer;
use crate::core::message::{Answer, Question};
use crate::core::retry::RetryPolicy;
use crate::core::transport::LlmTransport;
use crate::utils::error::Result;

/// The outbound execution pipeline for one provider.
///
/// Constructed once at process start (it owns the shared HTTP client via
/// [`LlmTransport`]) and handed to the HTTP layer behind an `Arc`.
#[derive(Debug, Clone)]
pub struct QuestionPipeline {
    config: Arc<LlmConfig>,
    transport: LlmTransport,
    retry: RetryPolicy,
}

impl QuestionPipeline {
    /// Create the pipeline from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: Arc<LlmConfig>) -> Result<Self> {
        let transport = LlmTransport::new(&config)?;
        let retry = RetryPolicy::from_config(&config);
        Ok(Self {
            config,
            transport,
            retry,
        })
    }

    /// Replace the retry policy. Tests use this to shrink backoff delays.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Answer one question.
    ///
    /// # Errors
    ///
    /// The first failure of whichever stage terminates the chain,
    /// propagated unchanged.
    pub async fn ask(&self, question: &Question) -> std::result::Result<Answer, LlmError> {
        info!(
            model = %self.config.model,
            question_chars = question.as_str().chars().count(),
            "Executing LLM request"
        );

        let request = build_request(&self.config, question);

        let response = self.retry.call(|| self.transport.send(&request)).await?;

        extract_answer(response)
    }
}
