//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: source wiring and the off-runtime analysis call
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    routes::router()
        .layer(Extension(Arc::new(services)))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}
