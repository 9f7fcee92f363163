//! HTTP application wiring (axum router).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `errors.rs`: the single dispatch layer that turns handler results into
//!   responses, success and failure alike

use axum::Router;
use tower::ServiceBuilder;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    routes::router().layer(ServiceBuilder::new())
}
