#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use gan_relay::{
    config::InferenceConfig,
    inference::HttpInferenceClient,
    server::{build_router, handlers::AppState},
};
use std::sync::Arc;
use wiremock::MockServer;

/// Inference config pointing at a wiremock server.
pub fn inference_config_for(server: &MockServer) -> InferenceConfig {
    InferenceConfig {
        base_url: server.uri(),
        ..InferenceConfig::default()
    }
}

/// Inference config pointing at a local port nobody listens on.
pub fn unreachable_inference_config() -> InferenceConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    InferenceConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        ..InferenceConfig::default()
    }
}

pub fn create_test_app(config: InferenceConfig) -> Router {
    build_router(AppState {
        inference: Arc::new(HttpInferenceClient::new(config)),
    })
}

pub fn generate_request(method: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/generate")
        .body(Body::empty())
        .expect("valid request")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
