//! Error types for the batch pipeline
//!
//! Two layers, matching the propagation policy:
//! - [`ItemError`]: a single item's failure, caught by the coordinator and
//!   recorded in that item's outcome entry — never escapes `run_batch`
//! - [`BatchError`]: raised before any item is processed and propagated
//!   directly to the caller

use wrapcal_provider::{AnalysisError, GenerationError};

/// A single item's pipeline failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    /// Missing or empty required field for this month
    #[error("invalid month input: {0}")]
    Validation(String),

    /// Analysis step failed
    #[error("analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    /// Generation step failed
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl ItemError {
    /// Whether this is an analysis-stage failure
    #[inline]
    #[must_use]
    pub fn is_analysis(&self) -> bool {
        matches!(self, Self::Analysis(_))
    }

    /// Whether this is a generation-stage failure
    #[inline]
    #[must_use]
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation(_))
    }
}

/// Batch-level failures, raised before any item runs
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    /// The item list was empty
    #[error("batch contains no items")]
    EmptyBatch,
}
