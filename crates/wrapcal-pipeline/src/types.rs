//! Core types for the batch pipeline
//!
//! Defines the month input, the per-item result, the aggregated batch
//! outcome, and the progress observation shape.

use crate::error::ItemError;
use serde::{Deserialize, Serialize};
use wrapcal_image::DataUri;

/// Input for one month's scene
///
/// Immutable during a pipeline invocation; the shared style reference is
/// passed alongside, not stored per month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthInput {
    /// Month identifier (e.g. "Jan")
    pub name: String,
    /// Scene content: an image or a free-text description
    pub content: SceneContent,
}

impl MonthInput {
    /// Month described by an uploaded image
    #[inline]
    #[must_use]
    pub fn image(name: impl Into<String>, image: DataUri) -> Self {
        Self {
            name: name.into(),
            content: SceneContent::Image(image),
        }
    }

    /// Month described by free text
    #[inline]
    #[must_use]
    pub fn text(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: SceneContent::Text(description.into()),
        }
    }
}

/// Scene content for a month
///
/// Exactly one of image/text, by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneContent {
    /// Uploaded scene image
    Image(DataUri),
    /// Free-text scene description
    Text(String),
}

/// Result of one successful pipeline invocation
///
/// Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Editing instruction derived by analysis
    pub instruction: String,
    /// Edited image produced by generation
    pub image: DataUri,
}

/// Per-item record in the batch outcome
///
/// Exactly one of result/error, expressed as a typed `Result` so the
/// isolation contract is visible at the call site.
#[derive(Debug, Clone)]
pub struct OutcomeEntry {
    /// Index of the item in the caller's original ordering
    pub original_index: usize,
    /// The item's pipeline result or its isolated failure
    pub outcome: Result<PipelineResult, ItemError>,
}

impl OutcomeEntry {
    /// Whether the item succeeded
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The result, if the item succeeded
    #[inline]
    #[must_use]
    pub fn result(&self) -> Option<&PipelineResult> {
        self.outcome.as_ref().ok()
    }

    /// The error, if the item failed
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&ItemError> {
        self.outcome.as_ref().err()
    }
}

/// Ordered per-item outcomes of one batch
///
/// Contains exactly one entry per input item, in input order; entries are
/// appended only by the coordinator and never revised.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    entries: Vec<OutcomeEntry>,
}

impl BatchOutcome {
    /// Create an empty outcome with room for `capacity` entries
    #[inline]
    #[must_use]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry (coordinator only)
    #[inline]
    pub(crate) fn push(&mut self, entry: OutcomeEntry) {
        self.entries.push(entry);
    }

    /// All entries, in input order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[OutcomeEntry] {
        &self.entries
    }

    /// Consume into the entry list
    #[inline]
    #[must_use]
    pub fn into_entries(self) -> Vec<OutcomeEntry> {
        self.entries
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful entries
    #[inline]
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.is_success()).count()
    }

    /// Number of failed entries
    #[inline]
    #[must_use]
    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    /// Whether every entry succeeded
    #[inline]
    #[must_use]
    pub fn is_fully_successful(&self) -> bool {
        self.failed() == 0
    }
}

impl<'a> IntoIterator for &'a BatchOutcome {
    type Item = &'a OutcomeEntry;
    type IntoIter = std::slice::Iter<'a, OutcomeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Point-in-time observation of coordinator state
///
/// Emitted transiently through [`ProgressObserver`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Items fully attempted so far (success or failure)
    pub completed: usize,
    /// Total items in the batch
    pub total: usize,
    /// Original index of the item currently being processed, if any
    pub current: Option<usize>,
}

/// Observer of batch progress
///
/// Supplying no observer is a no-op; the coordinator never requires one.
pub trait ProgressObserver: Send + Sync {
    /// Called with a snapshot before and after every item
    fn on_progress(&self, snapshot: ProgressSnapshot);
}
