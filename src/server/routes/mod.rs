//! HTTP route modules

pub mod health;
pub mod question;

use actix_web::web;

/// Register all gateway routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    question::configure_routes(cfg);
    health::configure_routes(cfg);
}
