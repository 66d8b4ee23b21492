//! Gemini generation backend implementation.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use intellinote_core::defaults::GEN_MODEL;
use intellinote_core::{Error, GenerationBackend, Result};

use super::types::*;

/// Default Gemini API endpoint.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for the Gemini backend.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL for the API endpoint.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Model to use for generation.
    pub model: String,
}

impl GeminiConfig {
    /// Config with the default endpoint and model.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_GEMINI_URL.to_string(),
            api_key: api_key.into(),
            model: GEN_MODEL.to_string(),
        }
    }
}

/// Gemini generative completion backend.
pub struct GeminiBackend {
    client: Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    /// Create a new Gemini backend with its own HTTP client.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    /// Create a backend sharing an existing HTTP client.
    pub fn with_client(client: Client, config: GeminiConfig) -> Self {
        debug!(
            subsystem = "inference",
            component = "gemini",
            model = %config.model,
            "Initializing Gemini backend"
        );
        Self { client, config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let start = Instant::now();
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<GeminiErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Inference(format!(
                "Gemini returned {}: {}",
                status, message
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let Some(candidate) = result.candidates.first() else {
            let reason = result
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(Error::Inference(format!(
                "Gemini returned no candidates: {}",
                reason
            )));
        };
        if let Some(reason) = candidate.blocked_reason() {
            return Err(Error::Inference(format!(
                "Gemini candidate blocked: {}",
                reason
            )));
        }
        let text = candidate.text();

        info!(
            subsystem = "inference",
            component = "gemini",
            op = "generate",
            model = %self.config.model,
            prompt_len = prompt.len(),
            response_len = text.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Generation complete"
        );
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::with_api_key("k");
        assert_eq!(config.base_url, DEFAULT_GEMINI_URL);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let backend = GeminiBackend::new(GeminiConfig {
            base_url: "http://localhost:9999/v1beta/".to_string(),
            api_key: "k".to_string(),
            model: "gemini-test".to_string(),
        })
        .unwrap();
        assert_eq!(
            backend.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-test:generateContent"
        );
        assert_eq!(backend.model_name(), "gemini-test");
    }
}
