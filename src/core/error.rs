//! Provider failure taxonomy
//!
//! Every way a provider call can fail, classified exactly once at the
//! transport boundary. Callers branch on the kind, never on status codes or
//! message text, so the retry policy and the HTTP mapping stay decoupled
//! from the wire.

use thiserror::Error;

/// Classified failure of one provider call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The request never produced an HTTP response (connect failure, timeout,
    /// TLS failure, connection reset mid-body)
    #[error("Transport failure: {message}")]
    Transport { message: String },

    /// The provider rejected the credential (401 or 403)
    #[error("Provider rejected credentials (status {status})")]
    Authentication { status: u16 },

    /// The provider throttled the request (429)
    #[error("Provider rate limit exceeded")]
    RateLimited,

    /// The provider failed on its side (5xx)
    #[error("Provider internal error (status {status})")]
    ProviderInternal { status: u16 },

    /// Any other non-2xx status; carries the body for diagnostics
    #[error("Provider rejected request (status {status}): {body}")]
    Rejected { status: u16, body: String },

    /// A 2xx response whose body does not parse as a chat completion
    #[error("Malformed provider response: {message}")]
    MalformedResponse { message: String },

    /// A well-formed response with zero choices
    #[error("Provider returned no choices")]
    EmptyChoices,

    /// A well-formed response whose first choice has absent or empty content
    #[error("Provider returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Classify a non-2xx provider response by status code.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Authentication { status },
            429 => Self::RateLimited,
            500..=599 => Self::ProviderInternal { status },
            _ => Self::Rejected { status, body },
        }
    }

    /// Whether another attempt could plausibly succeed.
    ///
    /// Rate limits clear and provider faults recover; everything else fails
    /// the same way on every attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ProviderInternal { .. })
    }

    /// The broad variant of [`is_retryable`](Self::is_retryable): also
    /// retries transport failures, for deployments where connection drops
    /// are routine.
    pub fn is_retryable_or_transport(&self) -> bool {
        self.is_retryable() || matches!(self, Self::Transport { .. })
    }

    /// Stable label for log fields.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Authentication { .. } => "authentication",
            Self::RateLimited => "rate_limited",
            Self::ProviderInternal { .. } => "provider_internal",
            Self::Rejected { .. } => "rejected",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::EmptyChoices => "empty_choices",
            Self::EmptyContent => "empty_content",
        }
    }
}
