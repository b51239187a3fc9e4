use axum::{routing::get, Router};

pub mod reports;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .nest("/api/reports", reports::router())
}
