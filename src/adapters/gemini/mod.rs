//! Gemini adapter for the [`Assistant`] port
//!
//! Sends one `generateContent` request per call. No client-side timeout
//! or retry is applied; the service's own policy governs.

use log::{debug, warn};
use serde::Deserialize;

use crate::config::AssistantConfig;
use crate::core::ports::{AssistKind, Assistant, AssistantError};
use crate::core::services::assistant::{check_reply, prompt};

/// Assistant backed by the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiAssistant {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiAssistant {
    /// Build a client from config, reading the API key from the environment
    pub fn from_config(config: &AssistantConfig) -> anyhow::Result<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            anyhow::anyhow!(
                "Assistant unavailable: set the {} environment variable to your API key",
                config.api_key_env
            )
        })?;
        Ok(Self::new(&config.endpoint, &config.model, api_key))
    }

    /// Build a client with explicit settings
    #[must_use]
    pub fn new(endpoint: &str, model: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.into(),
        }
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!("POST {}", self.url());
        let response: GenerateResponse = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        reply_text(response).ok_or_else(|| anyhow::anyhow!("response contained no text"))
    }

    async fn ask(&self, kind: AssistKind, input: &str) -> Result<String, AssistantError> {
        match self.complete(&prompt(kind, input)).await {
            Ok(text) => check_reply(kind, text),
            Err(e) => {
                warn!("{kind:?} request failed: {e:#}");
                Err(AssistantError::new(kind, format!("{e:#}")))
            },
        }
    }
}

/// Concatenate the text parts of the first candidate
fn reply_text(response: GenerateResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    (!text.is_empty()).then_some(text)
}

impl Assistant for GeminiAssistant {
    async fn generate_pattern(&self, description: &str) -> Result<String, AssistantError> {
        self.ask(AssistKind::GeneratePattern, description).await
    }

    async fn explain_pattern(&self, pattern: &str) -> Result<String, AssistantError> {
        self.ask(AssistKind::ExplainPattern, pattern).await
    }

    async fn generate_sample_text(&self, pattern: &str) -> Result<String, AssistantError> {
        self.ask(AssistKind::GenerateSample, pattern).await
    }
}
