//! Pipeline runner
//!
//! Executes the linear analysis graph for one input text and assembles the
//! final [`PipelineState`]. Each run gets its own session and its own
//! state; nothing is shared between invocations.
//!
//! Failure policy: no retries and no partial-result recovery. The first
//! failing step aborts the run, later steps are never started, and the
//! caller receives an error instead of a partially filled state.

use crate::error::AppError;
use crate::llm::ModelClient;
use crate::pipeline::graph::build_pipeline_graph;
use crate::pipeline::state::{
    PipelineState, CLASSIFICATION_KEY, ENTITIES_KEY, SUMMARY_KEY, TEXT_KEY,
};
use crate::pipeline::tasks::CLASSIFY_TASK_ID;
use graph_flow::{ExecutionStatus, FlowRunner, InMemorySessionStorage, Session, SessionStorage};
use std::sync::Arc;
use tokio::time::{timeout, Duration};
use uuid::Uuid;

/// Run the full pipeline on one input text
///
/// The whole run is wrapped in a timeout so a hung model call cannot hold
/// the request open indefinitely; the per-call HTTP timeout inside the
/// client is the first line of defense.
///
/// # Arguments
/// * `client` - The injected model client shared by all three steps
/// * `run_timeout_secs` - Overall timeout for the run
/// * `text` - The input text; empty input is passed through untouched
///
/// # Returns
/// * `Ok(PipelineState)` - State with all four fields populated
/// * `Err(AppError)` - If any step fails or the run times out
pub async fn run_pipeline(
    client: Arc<dyn ModelClient>,
    run_timeout_secs: u64,
    text: &str,
) -> Result<PipelineState, AppError> {
    timeout(
        Duration::from_secs(run_timeout_secs),
        run_pipeline_inner(client, text),
    )
    .await
    .map_err(|_| {
        AppError::Timeout(format!(
            "Pipeline run timed out after {} seconds",
            run_timeout_secs
        ))
    })?
}

/// Inner implementation of a pipeline run using graph-flow
async fn run_pipeline_inner(
    client: Arc<dyn ModelClient>,
    text: &str,
) -> Result<PipelineState, AppError> {
    let graph = build_pipeline_graph(client);

    // Session storage is in-memory and per-run; nothing persists.
    let session_storage: Arc<dyn SessionStorage> = Arc::new(InMemorySessionStorage::new());
    let runner = FlowRunner::new(graph, session_storage.clone());

    let session_id = Uuid::new_v4().to_string();
    let session = Session::new_from_task(session_id.clone(), CLASSIFY_TASK_ID);
    session.context.set(TEXT_KEY, text.to_string()).await;

    session_storage
        .save(session)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to save session: {}", e)))?;

    tracing::debug!(
        session_id = %session_id,
        text_len = text.len(),
        "Starting pipeline execution"
    );

    // Drive the graph to completion; a paused graph just continues with the
    // next task.
    loop {
        let execution_result = runner.run(&session_id).await.map_err(convert_graph_error)?;

        match execution_result.status {
            ExecutionStatus::Completed => {
                tracing::debug!(session_id = %session_id, "Pipeline execution completed");
                break;
            }
            ExecutionStatus::Paused { .. } | ExecutionStatus::WaitingForInput => {
                continue;
            }
            ExecutionStatus::Error(err) => {
                tracing::error!(
                    session_id = %session_id,
                    error = %err,
                    "Pipeline execution failed"
                );
                return Err(AppError::PipelineFailed(err.to_string()));
            }
        }
    }

    let final_session = session_storage
        .get(&session_id)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to get final session: {}", e)))?
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Session '{}' not found after execution",
                session_id
            ))
        })?;

    let classification: String = final_session
        .context
        .get(CLASSIFICATION_KEY)
        .await
        .ok_or_else(|| missing_field(CLASSIFICATION_KEY))?;
    let entities: Vec<String> = final_session
        .context
        .get(ENTITIES_KEY)
        .await
        .ok_or_else(|| missing_field(ENTITIES_KEY))?;
    let summary: String = final_session
        .context
        .get(SUMMARY_KEY)
        .await
        .ok_or_else(|| missing_field(SUMMARY_KEY))?;

    tracing::debug!(
        session_id = %session_id,
        classification = %classification,
        entity_count = entities.len(),
        "Assembled final pipeline state"
    );

    Ok(PipelineState {
        text: text.to_string(),
        classification: Some(classification),
        entities: Some(entities),
        summary: Some(summary),
    })
}

fn missing_field(key: &str) -> AppError {
    AppError::PipelineFailed(format!(
        "Pipeline completed but produced no '{}' value",
        key
    ))
}

/// Convert graph-flow errors to application errors
fn convert_graph_error(e: graph_flow::GraphError) -> AppError {
    match e {
        graph_flow::GraphError::TaskExecutionFailed(msg) => AppError::PipelineFailed(msg),
        other => AppError::Internal(anyhow::anyhow!("Graph execution error: {}", other)),
    }
}
