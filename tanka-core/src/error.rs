//! Errors that abort extraction
//!
//! Problems confined to one sentence never show up here; they are reported
//! as [`crate::extractor::SkipReason`] and the sentence is passed over.

use crate::analyzer::AnalyzerError;
use thiserror::Error;

/// Extraction failures that stop a whole batch
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The morphological analyzer is unusable
    #[error("analyzer error: {0}")]
    Analyzer(#[from] AnalyzerError),

    /// Worker threads could not be started
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ThreadPool(String),

    /// Batch settings are unusable
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for extraction
pub type Result<T> = std::result::Result<T, ExtractError>;
