use super::{
    prompt::{REFUSAL_SENTENCE, render_prompt},
    types::*,
};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error, info};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Answers one user question. Failures come back as `InferenceResult::Error`.
    async fn get_response(&self, prompt: &str) -> InferenceResult;

    /// Short model identifier for display.
    fn model_name(&self) -> String;
}

/// Client for the Hugging Face text-generation inference API.
pub struct HuggingFaceClient {
    client: reqwest::Client,
    config: InferenceConfig,
}

impl HuggingFaceClient {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = InferenceRequest::new(render_prompt(prompt), self.config.parameters.clone());

        debug!(
            "Sending inference request to {} ({} prompt bytes)",
            self.config.endpoint,
            request.inputs.len()
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                detail: error_detail(&body),
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| Error::internal(format!("Failed to decode response body: {e}")))?;

        CompletionPayload::from_value(value)?.into_text()
    }
}

#[async_trait]
impl LlmClient for HuggingFaceClient {
    async fn get_response(&self, prompt: &str) -> InferenceResult {
        let started = std::time::Instant::now();

        match self.generate(prompt).await {
            Ok(text) if text == REFUSAL_SENTENCE => {
                info!("Model refused an off-topic question in {:?}", started.elapsed());
                InferenceResult::Refused(text)
            }
            Ok(text) => {
                info!(
                    "Received {} bytes of generated text in {:?}",
                    text.len(),
                    started.elapsed()
                );
                InferenceResult::Text(text)
            }
            Err(e) => {
                error!("Inference request failed: {}", e);
                InferenceResult::from_error(&e)
            }
        }
    }

    fn model_name(&self) -> String {
        model_name_from_endpoint(&self.config.endpoint)
    }
}

/// Best-effort detail from a failed response: JSON when it parses, raw text, then `N/A`.
pub fn error_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Ok(pretty) = serde_json::to_string_pretty(&value) {
            return pretty;
        }
    }

    let raw = body.trim();
    if raw.is_empty() {
        "N/A".to_string()
    } else {
        raw.to_string()
    }
}

pub fn model_name_from_endpoint(endpoint: &str) -> String {
    endpoint
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
