//! Outbound request execution pipeline
//!
//! The only part of the gateway with decision logic: building the provider
//! request from configuration, executing it with bounded retry on transient
//! failures, and extracting the answer from the raw provider output.

pub mod builder;
pub mod error;
pub mod extract;
pub mod message;
pub mod pipeline;
pub mod retry;
pub mod transport;

pub use error::LlmError;
pub use message::{Answer, Question};
pub use pipeline::QuestionPipeline;
pub use retry::RetryPolicy;
