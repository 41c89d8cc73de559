//! Shared helpers for plan-proxy integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use http_body_util::BodyExt;
use plan_proxy::config::{CorsSettings, GeminiSettings};
use plan_proxy::services::GeminiClient;
use plan_proxy::startup::{build_router, AppState, FUNCTION_PATH};
use secrecy::Secret;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-secret-key-7f3a9c";
pub const TEST_MODEL: &str = "gemini-test";

/// Upstream path the proxy is expected to hit.
pub fn generate_content_path() -> String {
    format!("/models/{}:generateContent", TEST_MODEL)
}

pub fn gemini_settings(api_base: &str) -> GeminiSettings {
    GeminiSettings {
        api_key: Secret::new(TEST_API_KEY.to_string()),
        model: TEST_MODEL.to_string(),
        api_base: api_base.to_string(),
        timeout: None,
    }
}

/// Router wired to a real Gemini client pointed at `api_base`.
pub fn app(api_base: &str) -> Router {
    let client = GeminiClient::new(gemini_settings(api_base)).expect("Failed to build client");
    build_router(AppState::new(Arc::new(client)), &CorsSettings::default())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// POST `body` to the plan function path.
pub async fn post_plan(app: Router, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(FUNCTION_PATH)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("Failed to build request");

    send(app, request).await
}

/// Base URL on which nothing is listening.
pub fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
