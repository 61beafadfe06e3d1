//! The question endpoint
//!
//! `POST /question` accepts `{"text": ...}`, validates the length bounds,
//! and hands the typed question to the pipeline. Error rendering (status
//! code + `{"detail"}` body) lives on `GatewayError`.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use crate::core::Question;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;

/// Configure the question route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/question", web::post().to(ask_question));
}

/// Inbound question payload.
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    /// User question or prompt text, 1 to 1024 characters
    pub text: String,
}

/// Accept a question, return the generated answer.
async fn ask_question(
    state: web::Data<AppState>,
    body: web::Json<QuestionRequest>,
) -> Result<HttpResponse, GatewayError> {
    let question = Question::new(body.into_inner().text)?;
    debug!("Question accepted");

    let answer = state.pipeline.ask(&question).await?;

    Ok(HttpResponse::Ok().json(answer))
}
