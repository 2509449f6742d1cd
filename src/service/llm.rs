//! Shared LLM client
//!
//! Wraps the rig Gemini provider behind the [`GenerativeModel`] trait so
//! services can be exercised without the network.

use std::time::Duration;

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::extractor::ExtractionError;
use rig::providers::gemini;

use crate::model::RiskAssessment;
use crate::model::config::AnalysisConfig;

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Model did not answer within {0}s")]
    Timeout(u64),

    #[error("Failed to create Gemini client: {0}")]
    Client(String),
}

/// A hosted model able to answer a prompt with a structured risk assessment
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Send the prompt and deserialize the structured reply
    async fn extract_assessment(
        &self,
        preamble: &str,
        prompt: &str,
    ) -> Result<RiskAssessment, LlmError>;

    /// Model identifier, used for logging
    fn model_name(&self) -> &str;
}

/// Gemini-backed [`GenerativeModel`]
///
/// The output schema is derived from [`RiskAssessment`] and enforced by the
/// extractor; a reply that does not deserialize is an error.
#[derive(Clone)]
pub struct GeminiClient {
    client: gemini::Client,
    model: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Create a new client with the provided API key
    pub fn new(api_key: &str, config: &AnalysisConfig) -> Result<Self, LlmError> {
        let client = gemini::Client::builder()
            .api_key(api_key)
            .base_url(config.base_url.trim_end_matches('/'))
            .build()
            .map_err(|e| LlmError::Client(e.to_string()))?;

        Ok(Self {
            client,
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
        })
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn extract_assessment(
        &self,
        preamble: &str,
        prompt: &str,
    ) -> Result<RiskAssessment, LlmError> {
        let extractor = self
            .client
            .extractor::<RiskAssessment>(&self.model)
            .preamble(preamble)
            .build();

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling Gemini"
        );

        match tokio::time::timeout(
            Duration::from_secs(self.timeout_secs),
            extractor.extract(prompt),
        )
        .await
        {
            Ok(result) => Ok(result?),
            Err(_) => Err(LlmError::Timeout(self.timeout_secs)),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
