//! Mock content generator for testing.

use super::{ContentGenerator, UpstreamError};
use crate::models::GenerateContentRequest;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::Mutex;

/// Returns a canned result and records every request it receives.
pub struct MockContentGenerator {
    response: Result<Bytes, UpstreamError>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl MockContentGenerator {
    pub fn returning(body: impl Into<Bytes>) -> Self {
        Self::with_result(Ok(body.into()))
    }

    pub fn failing(error: UpstreamError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(response: Result<Bytes, UpstreamError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, oldest first.
    pub async fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ContentGenerator for MockContentGenerator {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Bytes, UpstreamError> {
        self.requests.lock().await.push(request.clone());
        self.response.clone()
    }
}
