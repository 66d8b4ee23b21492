//! Environment-backed generation provider.
//!
//! The API key is looked up on every [`GenerationProvider::resolve`] call, so
//! setting or clearing `GEMINI_API_KEY` takes effect without a restart.
//! Endpoint and model are fixed at construction.

use std::sync::Arc;

use reqwest::Client;
use tracing::warn;

use intellinote_core::defaults::GEN_MODEL;
use intellinote_core::{Error, GenerationBackend, GenerationProvider, Result};

use crate::gemini::{GeminiBackend, GeminiConfig, DEFAULT_GEMINI_URL};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Resolves a [`GeminiBackend`] when the API key variable is set and non-blank.
pub struct EnvGeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    key_var: String,
}

impl EnvGeminiProvider {
    /// Create a provider for an explicit endpoint and model.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            key_var: API_KEY_VAR.to_string(),
        })
    }

    /// Create from `GEMINI_BASE_URL` and `GEMINI_MODEL`, with defaults.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_GEMINI_URL.to_string());
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| GEN_MODEL.to_string());
        Self::new(base_url, model)
    }

    /// Read the key from a different environment variable.
    pub fn with_key_var(mut self, key_var: impl Into<String>) -> Self {
        self.key_var = key_var.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Option<String> {
        std::env::var(&self.key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl GenerationProvider for EnvGeminiProvider {
    fn resolve(&self) -> Option<Arc<dyn GenerationBackend>> {
        let Some(api_key) = self.api_key() else {
            warn!(
                subsystem = "inference",
                component = "provider",
                key_var = %self.key_var,
                "No generation API key configured"
            );
            return None;
        };
        let config = GeminiConfig {
            base_url: self.base_url.clone(),
            api_key,
            model: self.model.clone(),
        };
        Some(Arc::new(GeminiBackend::with_client(
            self.client.clone(),
            config,
        )))
    }
}
