//! API module
//!
//! Contains HTTP request handlers for the analysis endpoint

pub mod analyze;

pub use analyze::{analyze, AnalyzeRequest, AnalyzeResponse};
