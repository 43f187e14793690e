//! LLM client — the single point of entry for all Gemini API calls in Bulletsmith.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All LLM interactions MUST go through this module.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// Generation temperature. Higher values produce more varied bullets.
pub const TEMPERATURE: f32 = 0.7;
/// Cap on generated output length, in model tokens.
pub const MAX_OUTPUT_TOKENS: u32 = 512;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// The instruction/data pair sent to the text-generation service.
/// Immutable once composed.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system_instruction: String,
    pub user_message: String,
}

/// The text-completion seam. Implement this to swap providers without
/// touching handler or generator code.
///
/// Carried in `AppState` as `Arc<dyn CompletionProvider>`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// One text-generation round trip: prompt in, raw text blob out.
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError>;
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Each submission is a single attempt: no retries, no backoff, and no
/// timeout override beyond the transport defaults.
#[derive(Debug)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Builds a client from startup config. A blank credential fails here,
    /// at boot, not at first submission.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.gemini_api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!("Gemini API key is empty. Set GEMINI_API_KEY.");
        }

        Ok(Self {
            http: Client::builder()
                .build()
                .context("Failed to build Gemini HTTP client")?,
            api_key,
            model: config.gemini_model.trim().to_string(),
            endpoint: config
                .gemini_endpoint
                .trim()
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// The model identifier requests are issued against.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let body = GeminiRequest {
            system_instruction: GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.system_instruction.clone(),
                }],
            },
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.user_message.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .http
            .post(self.request_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Gemini wraps failures in {"error": {"message": ...}}
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GeminiResponse = response.json().await?;
        let text = response_text(&payload);

        if text.trim().is_empty() {
            return Err(LlmError::EmptyContent);
        }

        debug!("Gemini call succeeded: {} chars of generated text", text.len());

        Ok(text)
    }
}

/// Concatenates the text parts of every returned candidate.
fn response_text(payload: &GeminiResponse) -> String {
    payload
        .candidates
        .iter()
        .flat_map(|c| c.content.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
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
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    #[serde(default)]
    content: GeminiCandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}
