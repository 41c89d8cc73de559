use crate::startup::AppState;
use axum::{
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use proxy_core::error::AppError;

/// Upstream JSON returned byte for byte.
#[derive(Debug)]
pub struct PassThrough(pub Bytes);

impl IntoResponse for PassThrough {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            self.0,
        )
            .into_response()
    }
}

/// POST handler for the plan page.
///
/// The body is taken raw so that a malformed payload is reported through
/// `AppError` like any other failure. Body rejections (over the size limit,
/// unreadable stream) keep the `{"error": ...}` shape.
#[tracing::instrument(skip(state, body))]
pub async fn generate_plan(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<PassThrough, AppError> {
    let body = body.map_err(|rejection| {
        let e = rejection_to_error(rejection);
        tracing::warn!(error = %e, "Rejected generate-plan body");
        e
    })?;
    tracing::debug!(body_len = body.len(), "Received generate-plan body");

    match state.plan_service.generate_plan(&body).await {
        Ok(result) => {
            tracing::info!(response_len = result.len(), "Plan generated");
            Ok(PassThrough(result))
        }
        Err(e) => {
            if e.status_code().is_server_error() {
                tracing::error!(error = %e, "Error in generate-plan handler");
            } else {
                tracing::warn!(error = %e, "Rejected generate-plan request");
            }
            Err(e)
        }
    }
}

fn rejection_to_error(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::InvalidPayload(rejection.body_text())
    }
}
