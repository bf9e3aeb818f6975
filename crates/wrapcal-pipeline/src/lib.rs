//! Wrapcal Pipeline
//!
//! The batch generation core:
//!
//! - [`run_scene_pipeline`]: drives one month's scene through
//!   analyze → generate against the external capabilities
//! - [`run_batch`]: drives an ordered set of months through the pipeline,
//!   strictly sequentially, isolating per-item failures and reporting
//!   progress after every step
//!
//! The central invariant is partial-failure isolation: one bad month is
//! recorded in its outcome entry and never aborts the batch.
//!
//! # Example
//!
//! ```rust,ignore
//! use wrapcal_pipeline::{run_batch, MonthInput};
//!
//! let items: Vec<(usize, MonthInput)> = months.into_iter().enumerate().collect();
//! let outcome = run_batch(&items, &style, &analyzer, &generator, None).await?;
//! assert_eq!(outcome.len(), items.len());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod batch;
mod error;
mod scene;
mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports
pub use batch::run_batch;
pub use error::{BatchError, ItemError};
pub use scene::run_scene_pipeline;
pub use types::{
    BatchOutcome, MonthInput, OutcomeEntry, PipelineResult, ProgressObserver, ProgressSnapshot,
    SceneContent,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the batch pipeline
    pub use crate::{
        run_batch, run_scene_pipeline, BatchError, BatchOutcome, ItemError, MonthInput,
        OutcomeEntry, PipelineResult, ProgressObserver, ProgressSnapshot, SceneContent,
    };
}
