//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Settings;
use crate::core::QuestionPipeline;

/// HTTP server state shared across handlers.
///
/// Both fields are created once at startup and never mutated afterwards,
/// so cloning the state per worker is cheap and concurrent access needs no
/// coordination.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Settings>,
    /// Outbound request pipeline, owning the provider HTTP client
    pub pipeline: Arc<QuestionPipeline>,
}

impl AppState {
    /// Create a new `AppState` with shared resources.
    pub fn new(config: Arc<Settings>, pipeline: QuestionPipeline) -> Self {
        Self {
            config,
            pipeline: Arc::new(pipeline),
        }
    }
}
