//! Generation client for drafting request language.
//!
//! Talks to the Google Gemini API. Requires GEMINI_API_KEY.

mod config;
mod prompts;

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use config::LlmConfig;
pub use prompts::DRAFT_PROMPT;

/// Generation client.
pub struct LlmClient {
    config: LlmConfig,
    client: Client,
}

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiResponseContent,
}

#[derive(Debug, Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Model catalog response format.
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
    #[serde(rename = "supportedGenerationMethods", default)]
    supported_generation_methods: Vec<String>,
}

impl LlmClient {
    /// Create a new generation client with the given configuration.
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Get the config.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str, LlmError> {
        self.config.api_key.as_deref().ok_or(LlmError::MissingApiKey)
    }

    /// List models that support content generation.
    ///
    /// Names are returned without the `models/` prefix the API prepends.
    pub async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let key = self.api_key()?;
        let url = format!("{}/v1beta/models?key={}", self.config.endpoint, key);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(LlmError::Api(format!("HTTP {}", resp.status())));
        }

        let catalog: ModelsResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        Ok(catalog
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| m.name.trim_start_matches("models/").to_string())
            .collect())
    }

    /// Generate text for a prompt, returning the trimmed response.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let key = self.api_key()?;

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.endpoint, self.config.model, key
        );

        debug!("Generating with model {}", self.config.model);
        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("HTTP {}: {}", status, body)));
        }

        let gemini: GeminiResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        if let Some(error) = gemini.error {
            return Err(LlmError::Api(error.message));
        }

        let text = gemini
            .candidates
            .and_then(|c| c.into_iter().next())
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(LlmError::Parse("Empty generation response".to_string()));
        }

        Ok(text)
    }
}

/// Errors that can occur during generation.
#[derive(Debug)]
pub enum LlmError {
    /// GEMINI_API_KEY is not set
    MissingApiKey,
    /// Failed to connect to the API
    Connection(String),
    /// API returned an error
    Api(String),
    /// Failed to parse response
    Parse(String),
}

impl std::fmt::Display for LlmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmError::MissingApiKey => write!(
                f,
                "GEMINI_API_KEY not set. Get an API key from https://ai.google.dev/"
            ),
            LlmError::Connection(msg) => write!(f, "Connection error: {}", msg),
            LlmError::Api(msg) => write!(f, "API error: {}", msg),
            LlmError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LlmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joined_across_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "I request copies of "},
                        {"text": "all email correspondence."}
                    ]
                }
            }]
        }"#;

        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        let text: String = resp
            .candidates
            .unwrap()
            .into_iter()
            .next()
            .unwrap()
            .content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        assert_eq!(text, "I request copies of all email correspondence.");
    }

    #[test]
    fn test_error_body_decodes() {
        let json = r#"{"error": {"message": "API key not valid"}}"#;
        let resp: GeminiResponse = serde_json::from_str(json).unwrap();
        assert!(resp.candidates.is_none());
        assert_eq!(resp.error.unwrap().message, "API key not valid");
    }

    #[test]
    fn test_missing_key_error() {
        let client = LlmClient::new(LlmConfig {
            api_key: None,
            ..LlmConfig::default()
        });
        assert!(matches!(client.api_key(), Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn test_draft_prompt_placeholders() {
        assert!(DRAFT_PROMPT.contains("{topic}"));
        assert!(DRAFT_PROMPT.contains("{examples}"));
    }
}
