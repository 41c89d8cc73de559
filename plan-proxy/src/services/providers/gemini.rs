//! Gemini `generateContent` client.
//!
//! The API key travels only in the `key` query parameter of the outbound
//! request. Errors are built with the URL stripped and the key redacted.

use super::{ContentGenerator, UpstreamError};
use crate::config::GeminiSettings;
use crate::models::GenerateContentRequest;
use async_trait::async_trait;
use bytes::Bytes;
use metrics::counter;
use reqwest::Client;
use secrecy::ExposeSecret;

const REDACTED: &str = "[REDACTED]";

pub struct GeminiClient {
    config: GeminiSettings,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiSettings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            client: builder.build()?,
        })
    }

    /// Endpoint without credentials; the key is attached per request.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }

    fn redact(&self, message: &str) -> String {
        let key = self.config.api_key.expose_secret();
        if key.is_empty() {
            message.to_string()
        } else {
            message.replace(key.as_str(), REDACTED)
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> UpstreamError {
        UpstreamError::Transport(self.redact(&error_chain(&err.without_url())))
    }
}

/// `outer: cause: root cause`, skipping repeated messages.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<Bytes, UpstreamError> {
        let user_prompt_len: usize = request
            .contents
            .iter()
            .flat_map(|c| &c.parts)
            .map(|p| p.text.len())
            .sum();

        tracing::debug!(
            model = %self.config.model,
            user_prompt_len,
            "Sending request to Gemini API"
        );

        let result = self.call(request).await;

        let outcome = match &result {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        counter!("gemini_requests_total", "outcome" => outcome).increment(1);

        result
    }
}

impl GeminiClient {
    async fn call(&self, request: &GenerateContentRequest) -> Result<Bytes, UpstreamError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.expose_secret().as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %self.redact(&error_text),
                "Gemini API error"
            );

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_slice::<serde::de::IgnoredAny>(&body)
            .map_err(|e| UpstreamError::InvalidBody(e.to_string()))?;

        Ok(body)
    }
}
