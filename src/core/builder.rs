//! Provider request assembly
//!
//! Pure function of configuration and question; no I/O. The message
//! sequence is `[system?, user]` where the system message is present only
//! when a non-empty system prompt is configured.

use crate::config::LlmConfig;
use crate::core::message::{ChatCompletionRequest, Message, Question};

/// Build the outbound chat-completion payload.
pub fn build_request(config: &LlmConfig, question: &Question) -> ChatCompletionRequest {
    let mut messages = Vec::with_capacity(2);

    // Config validation normalises empty prompts to None, but an explicit
    // empty string built in tests must behave the same way.
    if let Some(prompt) = config.system_prompt.as_deref() {
        if !prompt.is_empty() {
            messages.push(Message::system(prompt));
        }
    }
    messages.push(Message::user(question.as_str()));

    ChatCompletionRequest {
        model: config.model.clone(),
        messages,
        temperature: config.temperature,
        max_tokens: config.max_tokens,
    }
}
