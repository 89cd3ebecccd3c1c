//! Application state management
//!
//! The shared state handed to every request handler: the injected model
//! client and the loaded configuration. The state itself is immutable
//! after startup; each pipeline run builds its own session on top of it.

use crate::config::Config;
use crate::llm::ModelClient;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Model client used by every pipeline step
    pub model_client: Arc<dyn ModelClient>,
    /// Configuration loaded at startup
    pub config: Config,
}

impl AppState {
    /// Create the application state
    pub fn new(model_client: Arc<dyn ModelClient>, config: Config) -> Self {
        Self {
            model_client,
            config,
        }
    }
}
