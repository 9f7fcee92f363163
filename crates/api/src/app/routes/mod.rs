use axum::{Router, routing::get};

pub mod example;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .merge(example::router())
}
