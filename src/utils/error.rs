//! Error types for the gateway
//!
//! [`GatewayError`] is the top-level error: it wraps the provider failure
//! taxonomy ([`LlmError`]) and adds the concerns the HTTP layer owns
//! (configuration, input validation). The `ResponseError` impl renders each
//! variant as a status code with a `{"detail": ...}` body and never leaks
//! credential material.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::error::LlmError;

/// Result type alias for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inbound request validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Classified provider failures
    #[error("LLM error: {0}")]
    Provider(#[from] LlmError),

    /// IO errors (server bind, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Provider(llm_error) => match llm_error {
                LlmError::Authentication { .. } => StatusCode::UNAUTHORIZED,
                LlmError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                LlmError::MalformedResponse { .. }
                | LlmError::EmptyChoices
                | LlmError::EmptyContent => StatusCode::BAD_GATEWAY,
                LlmError::Transport { .. }
                | LlmError::ProviderInternal { .. }
                | LlmError::Rejected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "detail": self.to_string(),
        }))
    }
}
