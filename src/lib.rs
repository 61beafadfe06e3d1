//! # askgate-rs
//!
//! A small async LLM gateway: one HTTP endpoint that forwards a user
//! question to any OpenAI-compatible chat-completion backend (OpenAI,
//! Ollama, Mistral, Groq, LocalAI, ...) and returns the generated text.
//!
//! The interesting part is the outbound pipeline in [`core`]: request
//! assembly from configuration, a single-shot classified transport, a
//! bounded exponential-backoff retry executor for transient provider
//! failures, and answer extraction. The HTTP surface in [`server`] is thin
//! plumbing over it.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use askgate_rs::config::Settings;
//! use askgate_rs::server;
//!
//! #[tokio::main]
//! async fn main() -> askgate_rs::Result<()> {
//!     let settings = Settings::from_env()?;
//!     server::run_server(settings).await
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::{LlmConfig, ServerConfig, Settings};
pub use core::{Answer, LlmError, Question, QuestionPipeline, RetryPolicy};
pub use utils::error::{GatewayError, Result};
