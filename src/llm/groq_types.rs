//! Groq API request/response types
//!
//! Structs that mirror the Groq OpenAI-compatible chat-completions JSON
//! format. Used to serialize requests and deserialize API responses into
//! typed Rust structs.

use serde::{Deserialize, Serialize};

/// Request body for a chat completion
#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    /// Model name (e.g., "llama-3.3-70b-versatile")
    pub model: String,
    /// Conversation messages; the pipeline always sends a single user message
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature; 0.0 for deterministic step output
    pub temperature: f32,
}

/// A single chat message in a request
#[derive(Serialize, Debug)]
pub struct ChatMessage {
    /// Message role (always "user" here)
    pub role: String,
    /// Message text
    pub content: String,
}

/// Top-level chat-completion response
#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    /// Candidate completions; the API returns one unless asked otherwise
    pub choices: Vec<ChatChoice>,
}

/// A single completion choice
#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    /// The generated message
    pub message: ResponseMessage,
    /// Why the model stopped generating (if reported)
    #[serde(default)]
    #[allow(dead_code)] // Part of API response format, may be used in future
    pub finish_reason: Option<String>,
}

/// The generated message inside a choice
#[derive(Deserialize, Debug)]
pub struct ResponseMessage {
    /// Role of the message (e.g., "assistant")
    #[serde(default)]
    #[allow(dead_code)] // Part of API response format, may be used in future
    pub role: String,
    /// The generated text
    #[serde(default)]
    pub content: String,
}
