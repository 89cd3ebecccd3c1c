//! Pipeline state
//!
//! The single record threaded through the three analysis steps. A fresh
//! instance is created per run and discarded once the caller has read the
//! output fields; nothing is shared across requests.

use serde::{Deserialize, Serialize};

/// Context key for the original input text
pub const TEXT_KEY: &str = "text";
/// Context key for the classification label
pub const CLASSIFICATION_KEY: &str = "classification";
/// Context key for the extracted entity list
pub const ENTITIES_KEY: &str = "entities";
/// Context key for the summary
pub const SUMMARY_KEY: &str = "summary";

/// Accumulating state of one pipeline run
///
/// Fields are populated strictly in order classification → entities →
/// summary; once written, a field is never overwritten by a later step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineState {
    /// Original input text, immutable once set
    pub text: String,
    /// Classification label, absent until the classification step ran
    pub classification: Option<String>,
    /// Ordered entity list, absent until the extraction step ran
    pub entities: Option<Vec<String>>,
    /// Summary, absent until the summarization step ran
    pub summary: Option<String>,
}

impl PipelineState {
    /// Create a fresh state holding only the input text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            classification: None,
            entities: None,
            summary: None,
        }
    }

    /// Whether every step has written its field
    pub fn is_complete(&self) -> bool {
        self.classification.is_some() && self.entities.is_some() && self.summary.is_some()
    }
}
