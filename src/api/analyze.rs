//! Analyze API handler
//!
//! HTTP entry point for the text-analysis pipeline. One submission runs
//! one full pipeline; there is no batching and no streaming. A failed run
//! returns a JSON error body, never partial output.

use crate::error::AppError;
use crate::pipeline::{run_pipeline, PipelineState};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Analyze request
#[derive(Deserialize, Debug)]
pub struct AnalyzeRequest {
    /// The text to analyze; empty text is allowed and passed through
    pub text: String,
}

/// Analyze response, one field per pipeline step
#[derive(Serialize, Debug)]
pub struct AnalyzeResponse {
    /// Classification label
    pub classification: String,
    /// Extracted entities, in model order
    pub entities: Vec<String>,
    /// Short summary
    pub summary: String,
}

impl From<PipelineState> for AnalyzeResponse {
    fn from(state: PipelineState) -> Self {
        // The runner only returns a state with every field populated.
        Self {
            classification: state.classification.unwrap_or_default(),
            entities: state.entities.unwrap_or_default(),
            summary: state.summary.unwrap_or_default(),
        }
    }
}

/// POST /api/analyze - run the three-step pipeline on one text
///
/// Rejects inputs over the configured length cap with 400. Empty input is
/// not special-cased: the pipeline still makes all three model calls.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let max_len = state.config.pipeline.max_input_length;
    if request.text.len() > max_len {
        return Err(AppError::InvalidInput(format!(
            "Text too long ({} > {} bytes). Maximum allowed length is {} bytes.",
            request.text.len(),
            max_len,
            max_len
        )));
    }

    tracing::info!(text_len = request.text.len(), "Starting analysis");

    let result = run_pipeline(
        state.model_client.clone(),
        state.config.pipeline.run_timeout_secs,
        &request.text,
    )
    .await?;

    Ok(Json(result.into()))
}
