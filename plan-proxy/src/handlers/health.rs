use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Liveness only; never calls upstream.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "plan-proxy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
