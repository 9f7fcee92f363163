use axum::response::Response;
use axum::routing::get;
use reqwest::StatusCode;
use serde_json::json;

use armature_api::app::errors;
use armature_core::{ApiResponse, HandlerResult};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: axum::Router) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn example_route_returns_the_fixed_envelope() {
    let srv = TestServer::spawn(armature_api::app::build_app()).await;

    let res = reqwest::get(format!("{}/", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "statusCode": 200,
            "message": "Ok",
            "data": "Example for how to use it.",
            "success": true,
        })
    );
}

#[tokio::test]
async fn health_route_is_alive() {
    let srv = TestServer::spawn(armature_api::app::build_app()).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn failing_handler_reaches_the_centralized_error_response() {
    async fn failing() -> HandlerResult<ApiResponse> {
        Err(anyhow::anyhow!("boom"))?
    }

    async fn boom_route() -> Response {
        errors::dispatch(failing().await)
    }

    let app = armature_api::app::build_app().route("/boom", get(boom_route));
    let srv = TestServer::spawn(app).await;

    let res = reqwest::get(format!("{}/boom", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "handler_failure");
    assert_eq!(body["message"], "boom");
}
