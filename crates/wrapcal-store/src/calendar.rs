//! Finished-calendar records and their store seam

use crate::style::StyleId;
use crate::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use wrapcal_image::DataUri;

/// Unique calendar identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarId(pub Ulid);

impl CalendarId {
    /// Generate a new calendar ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for CalendarId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One month's slot in a finished calendar
///
/// Mirrors the batch outcome: either the generated image with its
/// instruction, or the failure that month ended with. Failed months are
/// persisted too, never silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MonthSlot {
    /// Month generated successfully
    Generated {
        /// Month name
        name: String,
        /// Editing instruction derived for the scene
        instruction: String,
        /// Generated image
        image: DataUri,
    },
    /// Month failed in the pipeline
    Failed {
        /// Month name
        name: String,
        /// Human-readable failure description
        message: String,
    },
}

impl MonthSlot {
    /// Month name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Generated { name, .. } | Self::Failed { name, .. } => name,
        }
    }

    /// Whether the month generated successfully
    #[inline]
    #[must_use]
    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }
}

/// A persisted finished calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCalendar {
    /// Identifier
    pub id: CalendarId,
    /// Style the calendar was generated against
    pub style_id: StyleId,
    /// Display title
    pub title: String,
    /// Per-month slots, in month order
    pub months: Vec<MonthSlot>,
    /// Persistence time
    pub saved_at: DateTime<Utc>,
}

/// Fields for saving a calendar; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendar {
    /// Style the calendar was generated against
    pub style_id: StyleId,
    /// Display title
    pub title: String,
    /// Per-month slots, in month order
    pub months: Vec<MonthSlot>,
}

/// Write path for finished calendars
#[async_trait]
pub trait CalendarStore: Send + Sync {
    /// Persist a finished calendar and return the stored record
    async fn save(&self, calendar: NewCalendar) -> Result<SavedCalendar, StoreError>;

    /// Look up a calendar by id
    async fn get(&self, id: CalendarId) -> Result<Option<SavedCalendar>, StoreError>;

    /// List all stored calendars, oldest first
    async fn list(&self) -> Result<Vec<SavedCalendar>, StoreError>;
}
