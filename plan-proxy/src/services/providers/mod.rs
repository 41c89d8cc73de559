//! Upstream content generation.
//!
//! The plan service talks to a [`ContentGenerator`] so the Gemini client can
//! be swapped for a mock in tests.

pub mod gemini;
pub mod mock;

use crate::models::GenerateContentRequest;
use async_trait::async_trait;
use bytes::Bytes;
use proxy_core::error::AppError;
use thiserror::Error;

/// Error type for upstream calls. Every message is safe to return to the
/// caller: no credential, no raw upstream error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status.
    #[error("API error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The request never completed (DNS, connect, TLS, body read).
    #[error("{0}")]
    Transport(String),

    /// Upstream answered 2xx with a body that is not JSON.
    #[error("Invalid JSON in upstream response: {0}")]
    InvalidBody(String),
}

impl UpstreamError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Status { .. } => "upstream_error",
            UpstreamError::Transport(_) => "transport_error",
            UpstreamError::InvalidBody(_) => "invalid_body",
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// One `generateContent` call. Implementations return the upstream JSON body
/// untouched.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Bytes, UpstreamError>;
}
