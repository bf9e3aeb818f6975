//! Batch coordinator
//!
//! Drives an ordered set of months through the single-item pipeline,
//! strictly sequentially: one item's analyze + generate resolves fully
//! before the next begins. Failures are caught per item and recorded in
//! that item's outcome entry; only an empty batch aborts up front.

use crate::error::BatchError;
use crate::scene::run_scene_pipeline;
use crate::types::{BatchOutcome, MonthInput, OutcomeEntry, ProgressObserver, ProgressSnapshot};
use wrapcal_image::DataUri;
use wrapcal_provider::{ImageGenerator, SceneAnalyzer};

/// Run every item through the pipeline, in input order
///
/// The observer (if any) is notified exactly twice per item: before it
/// starts, with `current` set to the item's original index, and after it
/// resolves, with `current` cleared and `completed` advanced. The returned
/// outcome holds exactly one entry per input item, in input order; once
/// started, the batch runs to completion over all items.
pub async fn run_batch(
    items: &[(usize, MonthInput)],
    base_style: &DataUri,
    analyzer: &dyn SceneAnalyzer,
    generator: &dyn ImageGenerator,
    observer: Option<&dyn ProgressObserver>,
) -> Result<BatchOutcome, BatchError> {
    if items.is_empty() {
        return Err(BatchError::EmptyBatch);
    }

    let total = items.len();
    tracing::info!(total, "batch_started");

    let mut outcome = BatchOutcome::with_capacity(total);
    for (position, (original_index, input)) in items.iter().enumerate() {
        notify(
            observer,
            ProgressSnapshot {
                completed: position,
                total,
                current: Some(*original_index),
            },
        );
        tracing::info!(month = %input.name, index = original_index, "item_started");

        let result = run_scene_pipeline(input, base_style, analyzer, generator).await;
        match &result {
            Ok(_) => {
                tracing::info!(month = %input.name, index = original_index, "item_completed");
            }
            Err(e) => {
                // Recorded, not propagated: the batch continues.
                tracing::error!(
                    month = %input.name,
                    index = original_index,
                    error = %e,
                    "item_failed"
                );
            }
        }
        outcome.push(OutcomeEntry {
            original_index: *original_index,
            outcome: result,
        });

        notify(
            observer,
            ProgressSnapshot {
                completed: position + 1,
                total,
                current: None,
            },
        );
    }

    tracing::info!(total, failed = outcome.failed(), "batch_completed");
    Ok(outcome)
}

#[inline]
fn notify(observer: Option<&dyn ProgressObserver>, snapshot: ProgressSnapshot) {
    if let Some(observer) = observer {
        observer.on_progress(snapshot);
    }
}
