#[tokio::main]
async fn main() {
    armature_observability::init();

    let config = armature_api::config::Config::load();
    let app = armature_api::app::build_app();

    let addr = format!("0.0.0.0:{}", config.port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!(
        "listening on {}",
        listener.local_addr().expect("listener has a local addr")
    );

    axum::serve(listener, app).await.expect("server error");
}
