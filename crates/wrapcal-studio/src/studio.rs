//! Calendar studio
//!
//! The facade that wires the capabilities, the stores, and the batch
//! coordinator together. Owns boundary validation (style uploads, month
//! counts); per-month failures stay inside the batch outcome so callers can
//! render every successful month and flag the failed ones.

use crate::config::StudioConfig;
use crate::error::StudioError;
use std::sync::Arc;
use wrapcal_image::{validate_upload, DataUri, UploadError};
use wrapcal_pipeline::{run_batch, BatchOutcome, MonthInput, ProgressObserver};
use wrapcal_provider::{ImageGenerator, SceneAnalyzer};
use wrapcal_store::{
    BaseStyle, CalendarId, CalendarStore, MonthSlot, NewBaseStyle, NewCalendar, SavedCalendar,
    StyleId, StyleStore,
};

/// Result of one calendar generation run
#[derive(Debug, Clone)]
pub struct CalendarRun {
    /// Raw per-item outcomes from the coordinator
    pub outcome: BatchOutcome,
    /// Per-month view ready for rendering or persistence
    pub months: Vec<MonthSlot>,
    /// The persisted record, when auto-persistence is enabled
    pub saved: Option<SavedCalendar>,
}

/// The studio facade
pub struct CalendarStudio {
    /// Configuration
    config: StudioConfig,
    /// Analysis capability
    analyzer: Arc<dyn SceneAnalyzer>,
    /// Generation capability
    generator: Arc<dyn ImageGenerator>,
    /// Base-style store
    styles: Arc<dyn StyleStore>,
    /// Finished-calendar store
    calendars: Arc<dyn CalendarStore>,
}

impl CalendarStudio {
    /// Create a studio over the given collaborators
    #[must_use]
    pub fn new(
        config: StudioConfig,
        analyzer: Arc<dyn SceneAnalyzer>,
        generator: Arc<dyn ImageGenerator>,
        styles: Arc<dyn StyleStore>,
        calendars: Arc<dyn CalendarStore>,
    ) -> Self {
        Self {
            config,
            analyzer,
            generator,
            styles,
            calendars,
        }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Validate and store a new base style
    pub async fn create_base_style(
        &self,
        name: &str,
        image: &DataUri,
    ) -> Result<BaseStyle, StudioError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StudioError::EmptyStyleName);
        }
        validate_upload(image, &self.config.upload_policy)?;

        let stored = self
            .styles
            .put(NewBaseStyle {
                name: name.to_string(),
                image: image.clone(),
            })
            .await?;
        tracing::info!(style_id = %stored.id, name = %stored.name, "base style created");
        Ok(stored)
    }

    /// List stored base styles
    pub async fn list_base_styles(&self) -> Result<Vec<BaseStyle>, StudioError> {
        Ok(self.styles.list().await?)
    }

    /// Look up a base style
    pub async fn get_base_style(&self, id: StyleId) -> Result<Option<BaseStyle>, StudioError> {
        Ok(self.styles.get(id).await?)
    }

    /// Delete a base style; returns whether it existed
    pub async fn delete_base_style(&self, id: StyleId) -> Result<bool, StudioError> {
        let removed = self.styles.remove(id).await?;
        if removed {
            tracing::info!(style_id = %id, "base style deleted");
        }
        Ok(removed)
    }

    /// Generate a calendar from twelve month inputs against a stored style
    ///
    /// Boundary failures (unknown style, wrong month count) abort before any
    /// month is processed; per-month failures are isolated in the outcome.
    pub async fn generate_calendar(
        &self,
        style_id: StyleId,
        title: &str,
        months: Vec<MonthInput>,
        observer: Option<&dyn ProgressObserver>,
    ) -> Result<CalendarRun, StudioError> {
        let expected = self.config.months_per_calendar;
        if months.len() != expected {
            return Err(StudioError::WrongMonthCount {
                expected,
                found: months.len(),
            });
        }

        let style = self
            .styles
            .get(style_id)
            .await?
            .ok_or(StudioError::StyleNotFound(style_id))?;
        style
            .image
            .decode()
            .map_err(|e| StudioError::InvalidStyleImage(UploadError::Malformed(e)))?;

        tracing::info!(style_id = %style_id, months = months.len(), "calendar generation started");

        let items: Vec<(usize, MonthInput)> = months.iter().cloned().enumerate().collect();
        let outcome = run_batch(
            &items,
            &style.image,
            self.analyzer.as_ref(),
            self.generator.as_ref(),
            observer,
        )
        .await?;

        let slots = month_slots(&months, &outcome);
        let saved = if self.config.persist_calendars {
            let record = self
                .calendars
                .save(NewCalendar {
                    style_id,
                    title: title.to_string(),
                    months: slots.clone(),
                })
                .await?;
            tracing::info!(calendar_id = %record.id, "calendar persisted");
            Some(record)
        } else {
            None
        };

        tracing::info!(
            succeeded = outcome.succeeded(),
            failed = outcome.failed(),
            "calendar generation finished"
        );

        Ok(CalendarRun {
            outcome,
            months: slots,
            saved,
        })
    }

    /// Look up a persisted calendar
    pub async fn get_calendar(&self, id: CalendarId) -> Result<Option<SavedCalendar>, StudioError> {
        Ok(self.calendars.get(id).await?)
    }

    /// List persisted calendars
    pub async fn list_calendars(&self) -> Result<Vec<SavedCalendar>, StudioError> {
        Ok(self.calendars.list().await?)
    }
}

/// Pair each month input with its outcome entry
fn month_slots(months: &[MonthInput], outcome: &BatchOutcome) -> Vec<MonthSlot> {
    months
        .iter()
        .zip(outcome.entries())
        .map(|(input, entry)| match &entry.outcome {
            Ok(result) => MonthSlot::Generated {
                name: input.name.clone(),
                instruction: result.instruction.clone(),
                image: result.image.clone(),
            },
            Err(e) => MonthSlot::Failed {
                name: input.name.clone(),
                message: e.to_string(),
            },
        })
        .collect()
}
