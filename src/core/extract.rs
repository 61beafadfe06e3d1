//! Answer extraction from raw provider output

use crate::core::error::LlmError;
use crate::core::message::{Answer, ChatCompletionResponse};

/// Extract the answer text from a successful provider response.
///
/// The first choice's content is returned verbatim; no trimming, no
/// re-encoding.
///
/// # Errors
///
/// [`LlmError::EmptyChoices`] when the provider returned no choices,
/// [`LlmError::EmptyContent`] when the first choice's content is absent or
/// empty.
pub fn extract_answer(response: ChatCompletionResponse) -> Result<Answer, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyChoices)?;

    match choice.message.content {
        Some(content) if !content.is_empty() => Ok(Answer { text: content }),
        _ => Err(LlmError::EmptyContent),
    }
}
