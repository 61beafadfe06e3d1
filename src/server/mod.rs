//! HTTP server assembly
//!
//! Builds the Actix application from shared state and runs it. All shared
//! resources (configuration, the provider HTTP client inside the pipeline)
//! are created here, once, before the first request is served.

pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::config::Settings;
use crate::core::QuestionPipeline;
use crate::server::state::AppState;
use crate::utils::error::Result;

/// Run the gateway until shutdown.
///
/// # Errors
///
/// Returns a configuration error if the pipeline cannot be constructed,
/// or an IO error if the listener cannot bind.
pub async fn run_server(settings: Settings) -> Result<()> {
    let config = Arc::new(settings);
    let pipeline = QuestionPipeline::new(Arc::new(config.llm.clone()))?;
    let app_state = AppState::new(Arc::clone(&config), pipeline);

    let bind_addr = (config.server.host.clone(), config.server.port);
    info!(
        "Server starting at http://{}:{}",
        bind_addr.0, bind_addr.1
    );
    info!("API Endpoints:");
    info!("   GET  /health   - Health check");
    info!("   POST /question - Ask the configured LLM");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(TracingLogger::default())
            .wrap(middleware::PerformanceMiddleware)
            .configure(routes::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
