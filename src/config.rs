//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults. The only required value is the Groq API key;
//! everything else falls back to a default when unset or unparsable.

use std::env;
use thiserror::Error;

/// Default Groq model used for all pipeline steps
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default base URL for the Groq OpenAI-compatible API
pub const DEFAULT_API_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Errors raised while loading configuration
///
/// A configuration error is fatal: `main` reports it and exits before the
/// server binds its listener, so no pipeline run can start without a valid
/// credential.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The Groq API key is missing or blank
    #[error("GROQ_API_KEY is not set; the model API cannot be called without a credential")]
    MissingApiKey,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Model API configuration
    pub model: ModelConfig,
    /// Pipeline execution configuration
    pub pipeline: PipelineConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Model API configuration
#[derive(Clone)]
pub struct ModelConfig {
    /// Groq API key (required, read from `GROQ_API_KEY`)
    pub api_key: String,
    /// Model name sent with every completion request
    pub model: String,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Per-call HTTP timeout in seconds
    pub timeout_secs: u64,
}

// Manual Debug so the API key never ends up in logs.
impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Pipeline execution configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Timeout for a full pipeline run in seconds
    pub run_timeout_secs: u64,
    /// Maximum accepted input length in bytes
    pub max_input_length: usize,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Fails only when `GROQ_API_KEY` is missing or blank; every other
    /// variable has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            },
            model: ModelConfig {
                api_key,
                model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
                base_url: env::var("GROQ_API_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
                timeout_secs: env::var("MODEL_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(30),
            },
            pipeline: PipelineConfig {
                run_timeout_secs: env::var("PIPELINE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(120),
                max_input_length: env::var("MAX_INPUT_LENGTH")
                    .ok()
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(10000),
            },
        })
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "GROQ_API_KEY",
            "GROQ_MODEL",
            "GROQ_API_BASE_URL",
            "MODEL_TIMEOUT_SECS",
            "PIPELINE_TIMEOUT_SECS",
            "MAX_INPUT_LENGTH",
            "HOST",
            "PORT",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key() {
        clear_env();
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_api_key() {
        clear_env();
        env::set_var("GROQ_API_KEY", "   ");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("GROQ_API_KEY", "test-key");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.model.api_key, "test-key");
        assert_eq!(config.model.model, DEFAULT_MODEL);
        assert_eq!(config.model.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.model.timeout_secs, 30);
        assert_eq!(config.pipeline.run_timeout_secs, 120);
        assert_eq!(config.pipeline.max_input_length, 10000);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var("GROQ_API_KEY", "test-key");
        env::set_var("GROQ_MODEL", "llama-3.1-8b-instant");
        env::set_var("MODEL_TIMEOUT_SECS", "5");
        env::set_var("HOST", "127.0.0.1");
        env::set_var("PORT", "3000");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.model.model, "llama-3.1-8b-instant");
        assert_eq!(config.model.timeout_secs, 5);
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_unparsable_numbers_fall_back() {
        clear_env();
        env::set_var("GROQ_API_KEY", "test-key");
        env::set_var("PORT", "not-a-port");
        env::set_var("MODEL_TIMEOUT_SECS", "soon");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.model.timeout_secs, 30);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_debug_redacts_api_key() {
        clear_env();
        env::set_var("GROQ_API_KEY", "super-secret");

        let config = Config::from_env().expect("config should load");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
        clear_env();
    }
}
