//! Error types for the studio facade
//!
//! Boundary failures only: anything that happens before the batch starts, or
//! around persistence. Per-month pipeline failures never show up here — they
//! stay inside the batch outcome.

use wrapcal_image::UploadError;
use wrapcal_pipeline::BatchError;
use wrapcal_store::{StoreError, StyleId};

/// Studio-level failures
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Base-style name missing or blank
    #[error("style name is empty")]
    EmptyStyleName,

    /// Style image rejected by the upload policy
    #[error("invalid style image: {0}")]
    InvalidStyleImage(#[from] UploadError),

    /// No stored style with the given id
    #[error("style not found: {0}")]
    StyleNotFound(StyleId),

    /// Month input count does not match the configured calendar size
    #[error("expected {expected} month inputs, got {found}")]
    WrongMonthCount { expected: usize, found: usize },

    /// Batch aborted before processing any item
    #[error("batch rejected: {0}")]
    Batch(#[from] BatchError),

    /// Store backend failure
    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}
