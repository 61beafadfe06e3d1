//! Wire types and domain types
//!
//! The chat-completion request and response shapes as they cross the wire,
//! plus the gateway's own [`Question`] and [`Answer`] types. The response
//! types only name the fields the gateway reads; everything else the
//! provider sends is ignored.

use serde::{Deserialize, Serialize};

use crate::utils::error::GatewayError;

/// Maximum accepted question length, in characters.
pub const MAX_QUESTION_CHARS: usize = 1024;

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One chat message in the outbound request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// A system-role message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// A user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Outbound chat-completion payload.
///
/// `max_tokens` is omitted entirely when unset; providers treat an explicit
/// `null` differently from an absent field.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Inbound chat-completion body, reduced to the fields the gateway reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

/// The message inside a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// A validated user question.
///
/// Construction enforces the length bounds, so every `Question` in the
/// pipeline is known-valid and no later stage re-checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Validate and wrap question text.
    ///
    /// Bounds are counted in characters, not bytes, so multibyte input gets
    /// the full budget.
    ///
    /// # Errors
    ///
    /// [`GatewayError::Validation`] when the text is empty or exceeds
    /// [`MAX_QUESTION_CHARS`].
    pub fn new(text: impl Into<String>) -> Result<Self, GatewayError> {
        let text = text.into();
        if text.is_empty() {
            return Err(GatewayError::Validation(
                "question text must not be empty".to_string(),
            ));
        }
        let chars = text.chars().count();
        if chars > MAX_QUESTION_CHARS {
            return Err(GatewayError::Validation(format!(
                "question text exceeds {} characters (got {})",
                MAX_QUESTION_CHARS, chars
            )));
        }
        Ok(Self(text))
    }

    /// The question text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The generated answer returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Answer {
    /// Generated answer text, verbatim from the provider
    pub text: String,
}
