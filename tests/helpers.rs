#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::{sync::Arc, sync::LazyLock, time::Duration};
use tower::ServiceExt;

use checkin::{
    app_state::AppState,
    config::{LogFormat, StaticProvider},
    forwarder::WebhookClient,
    startup::router,
    telemetry::{get_subscriber, init_subscriber},
};

pub const MAX_PAYLOAD_BYTES: usize = 16 * 1024;

// Only set up tracing once; `TEST_LOG=1` sends it to stdout.
static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = init_subscriber(get_subscriber("debug", LogFormat::Pretty, std::io::stdout));
    } else {
        let _ = init_subscriber(get_subscriber("debug", LogFormat::Pretty, std::io::sink));
    }
});

pub fn test_app(provider: StaticProvider) -> Router {
    LazyLock::force(&TRACING);

    let client = WebhookClient::new(Duration::from_secs(2), Duration::from_secs(5))
        .expect("Failed to build webhook client");
    let state = AppState::new(Arc::new(provider), client);
    router(state, MAX_PAYLOAD_BYTES)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    let body = serde_json::from_slice(&body).expect("response body is not JSON");
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}
