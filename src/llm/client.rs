//! Model invocation client
//!
//! Defines the [`ModelClient`] port used by every pipeline step and its
//! production implementation, a direct HTTP client for the Groq
//! OpenAI-compatible chat-completions API.
//!
//! The client is constructed once at startup and passed explicitly to the
//! pipeline (no globals), so tests can substitute a scripted stub.

use crate::config::ModelConfig;
use crate::llm::groq_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by a model invocation
#[derive(Error, Debug)]
pub enum ModelError {
    /// The HTTP request could not be completed (network failure, timeout)
    #[error("failed to call model API: {0}")]
    Request(#[from] reqwest::Error),

    /// The API rejected the request with HTTP 429
    #[error("model API rate limit exceeded (HTTP 429): {0}")]
    RateLimited(String),

    /// The API returned a non-success status other than 429
    #[error("model API returned error status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw error body, for diagnostics
        body: String,
    },

    /// The response body was not valid completion JSON
    #[error("failed to parse model API response: {0}")]
    InvalidResponse(String),

    /// The API answered successfully but produced no text
    #[error("model API returned an empty completion")]
    EmptyCompletion,
}

/// Port for the external text-generation service
///
/// One prompt in, free-form generated text out. Every pipeline step makes
/// exactly one call through this trait.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a prompt and return the raw generated text
    async fn invoke(&self, prompt: &str) -> Result<String, ModelError>;
}

/// Groq chat-completions client
///
/// Sends every prompt as a single user message with temperature 0.0. The
/// per-call timeout from [`ModelConfig`] is applied at the HTTP client
/// level; a timed-out call surfaces as [`ModelError::Request`] and is
/// treated as a step failure by the pipeline. No automatic retries.
pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqClient {
    /// Build a client from configuration
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ModelClient for GroqClient {
    async fn invoke(&self, prompt: &str) -> Result<String, ModelError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: 0.0,
        };

        tracing::debug!(
            url = %url,
            model = %self.model,
            prompt_len = prompt.len(),
            "Calling Groq API"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "Groq API returned error status"
            );

            if status_code == 429 {
                return Err(ModelError::RateLimited(error_body));
            }

            return Err(ModelError::Status {
                status: status_code,
                body: error_body,
            });
        }

        let response_body = response.text().await?;

        let parsed: ChatCompletionResponse = serde_json::from_str(&response_body).map_err(|e| {
            ModelError::InvalidResponse(format!("{} - Response body: {}", e, response_body))
        })?;

        let choice = parsed.choices.first().ok_or(ModelError::EmptyCompletion)?;

        let text = &choice.message.content;
        if text.is_empty() {
            return Err(ModelError::EmptyCompletion);
        }

        tracing::debug!(
            response_len = text.len(),
            "Successfully received response from Groq API"
        );

        Ok(text.clone())
    }
}
