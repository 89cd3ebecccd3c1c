//! Task implementations for GraphFlow-rs
//!
//! One task per pipeline step. Each task reads the input text from the
//! graph-flow context, makes exactly one model invocation, parses the
//! answer, and writes exactly one new context key. A task never touches a
//! key written by an earlier step.
//!
//! A failed model call becomes `GraphError::TaskExecutionFailed`, which
//! stops the graph; later tasks are never run (fail-fast, no retries).

use crate::llm::ModelClient;
use crate::pipeline::prompts;
use crate::pipeline::state::{CLASSIFICATION_KEY, ENTITIES_KEY, SUMMARY_KEY, TEXT_KEY};
use async_trait::async_trait;
use graph_flow::{Context, NextAction, Result as GraphFlowResult, Task, TaskResult};
use std::sync::Arc;

/// Task id of the classification step
pub const CLASSIFY_TASK_ID: &str = "classify";
/// Task id of the entity-extraction step
pub const EXTRACT_ENTITIES_TASK_ID: &str = "extract_entities";
/// Task id of the summarization step
pub const SUMMARIZE_TASK_ID: &str = "summarize";

/// Read the input text out of the context
///
/// The text is set when the session is created; a missing key means the
/// session was constructed wrong, not that a step misbehaved.
async fn input_text(task_id: &str, context: &Context) -> GraphFlowResult<String> {
    context.get::<String>(TEXT_KEY).await.ok_or_else(|| {
        graph_flow::GraphError::TaskExecutionFailed(format!(
            "Task '{}' found no input text in the session context",
            task_id
        ))
    })
}

/// Task that classifies the input text into one of the known categories
pub struct ClassifyTask {
    /// Model client shared by all steps
    client: Arc<dyn ModelClient>,
}

impl ClassifyTask {
    /// Create a new ClassifyTask
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Task for ClassifyTask {
    fn id(&self) -> &str {
        CLASSIFY_TASK_ID
    }

    async fn run(&self, context: Context) -> GraphFlowResult<TaskResult> {
        let text = input_text(CLASSIFY_TASK_ID, &context).await?;

        tracing::debug!(text_len = text.len(), "Executing classification step");

        let raw = self
            .client
            .invoke(&prompts::classification_prompt(&text))
            .await
            .map_err(|e| {
                graph_flow::GraphError::TaskExecutionFailed(format!(
                    "Classification call failed: {}",
                    e
                ))
            })?;

        let label = prompts::parse_classification(&raw);
        context.set(CLASSIFICATION_KEY, label.clone()).await;

        tracing::debug!(label = %label, "Classification step completed");

        Ok(TaskResult::new(Some(label), NextAction::Continue))
    }
}

/// Task that extracts named entities from the input text
pub struct ExtractEntitiesTask {
    /// Model client shared by all steps
    client: Arc<dyn ModelClient>,
}

impl ExtractEntitiesTask {
    /// Create a new ExtractEntitiesTask
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Task for ExtractEntitiesTask {
    fn id(&self) -> &str {
        EXTRACT_ENTITIES_TASK_ID
    }

    async fn run(&self, context: Context) -> GraphFlowResult<TaskResult> {
        let text = input_text(EXTRACT_ENTITIES_TASK_ID, &context).await?;

        tracing::debug!(text_len = text.len(), "Executing entity-extraction step");

        let raw = self
            .client
            .invoke(&prompts::entity_extraction_prompt(&text))
            .await
            .map_err(|e| {
                graph_flow::GraphError::TaskExecutionFailed(format!(
                    "Entity extraction call failed: {}",
                    e
                ))
            })?;

        let entities = prompts::parse_entities(&raw);
        context.set(ENTITIES_KEY, entities.clone()).await;

        tracing::debug!(entity_count = entities.len(), "Entity-extraction step completed");

        Ok(TaskResult::new(
            Some(entities.join(", ")),
            NextAction::Continue,
        ))
    }
}

/// Task that summarizes the input text
pub struct SummarizeTask {
    /// Model client shared by all steps
    client: Arc<dyn ModelClient>,
}

impl SummarizeTask {
    /// Create a new SummarizeTask
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Task for SummarizeTask {
    fn id(&self) -> &str {
        SUMMARIZE_TASK_ID
    }

    async fn run(&self, context: Context) -> GraphFlowResult<TaskResult> {
        let text = input_text(SUMMARIZE_TASK_ID, &context).await?;

        tracing::debug!(text_len = text.len(), "Executing summarization step");

        let raw = self
            .client
            .invoke(&prompts::summarization_prompt(&text))
            .await
            .map_err(|e| {
                graph_flow::GraphError::TaskExecutionFailed(format!(
                    "Summarization call failed: {}",
                    e
                ))
            })?;

        let summary = raw.trim().to_string();
        context.set(SUMMARY_KEY, summary.clone()).await;

        tracing::debug!(summary_len = summary.len(), "Summarization step completed");

        Ok(TaskResult::new(Some(summary), NextAction::Continue))
    }
}
