//! Model invocation layer
//!
//! Contains the [`ModelClient`] port, the Groq HTTP implementation, and the
//! wire types for the chat-completions API.

pub mod client;
pub mod groq_types;

pub use client::{GroqClient, ModelClient, ModelError};
