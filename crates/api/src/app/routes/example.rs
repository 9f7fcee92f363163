use axum::response::Response;
use axum::{Router, routing::get};

use armature_core::{ApiResponse, HandlerResult};

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/", get(get_example))
}

pub async fn get_example() -> Response {
    errors::dispatch(example().await)
}

/// Placeholder controller: a fixed success envelope.
async fn example() -> HandlerResult<ApiResponse> {
    Ok(ApiResponse::ok("Ok", "Example for how to use it."))
}
