//! Pipeline graph construction
//!
//! Builds the three-node linear graph-flow graph: classify →
//! extract_entities → summarize. Classification is the designated entry
//! node; the graph terminates after summarization. There is no branching
//! and no cycling.

use crate::llm::ModelClient;
use crate::pipeline::tasks::{
    ClassifyTask, ExtractEntitiesTask, SummarizeTask, CLASSIFY_TASK_ID, EXTRACT_ENTITIES_TASK_ID,
    SUMMARIZE_TASK_ID,
};
use graph_flow::{Graph, GraphBuilder, Task};
use std::sync::Arc;

/// Graph id used for every pipeline run
pub const PIPELINE_GRAPH_ID: &str = "text_analysis_pipeline";

/// Build the linear analysis graph
///
/// Every task shares the same injected model client. The returned graph is
/// immutable and cheap to rebuild, so each run constructs its own.
pub fn build_pipeline_graph(client: Arc<dyn ModelClient>) -> Arc<Graph> {
    let classify: Arc<dyn Task> = Arc::new(ClassifyTask::new(client.clone()));
    let extract_entities: Arc<dyn Task> = Arc::new(ExtractEntitiesTask::new(client.clone()));
    let summarize: Arc<dyn Task> = Arc::new(SummarizeTask::new(client));

    let builder = GraphBuilder::new(PIPELINE_GRAPH_ID)
        .add_task(classify)
        .add_task(extract_entities)
        .add_task(summarize)
        .add_edge(CLASSIFY_TASK_ID, EXTRACT_ENTITIES_TASK_ID)
        .add_edge(EXTRACT_ENTITIES_TASK_ID, SUMMARIZE_TASK_ID)
        .set_start_task(CLASSIFY_TASK_ID);

    Arc::new(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ModelClient, ModelError};
    use async_trait::async_trait;

    struct NoopClient;

    #[async_trait]
    impl ModelClient for NoopClient {
        async fn invoke(&self, _prompt: &str) -> Result<String, ModelError> {
            Ok("ok".to_string())
        }
    }

    #[test]
    fn test_build_pipeline_graph() {
        let graph = build_pipeline_graph(Arc::new(NoopClient));
        assert_eq!(graph.id, PIPELINE_GRAPH_ID);
    }
}
