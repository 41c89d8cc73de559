//! The generate-plan operation: decode, presence-check, forward once.

use crate::models::{PlanRequest, MISSING_PROMPT_MESSAGE};
use crate::services::providers::ContentGenerator;
use bytes::Bytes;
use proxy_core::error::AppError;
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct PlanService {
    generator: Arc<dyn ContentGenerator>,
}

impl PlanService {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Forward one plan request and return the upstream body unchanged.
    ///
    /// Missing prompts fail with `BadRequest` before anything is sent
    /// upstream. Every other failure maps to a 500-class `AppError`.
    pub async fn generate_plan(&self, body: &[u8]) -> Result<Bytes, AppError> {
        let decoded: Value =
            serde_json::from_slice(body).map_err(|e| AppError::InvalidPayload(e.to_string()))?;

        let request = PlanRequest::from_json(decoded).ok_or_else(|| {
            AppError::InvalidPayload("Cannot read prompts from a null body".to_string())
        })?;

        let payload = request
            .into_payload()
            .ok_or_else(|| AppError::BadRequest(MISSING_PROMPT_MESSAGE.to_string()))?;

        let result = self.generator.generate_content(&payload).await?;
        Ok(result)
    }
}
