//! Wrapcal Store
//!
//! Persistence seams for the two stored shapes:
//!
//! - [`StyleStore`]: reusable base-style reference images
//! - [`CalendarStore`]: finished calendars (per-month results or failures)
//!
//! Query semantics of a real document store are out of scope; the traits are
//! the seam, and [`MemoryStyleStore`] / [`MemoryCalendarStore`] back them for
//! tests and single-process use.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod calendar;
mod memory;
mod style;

// Re-exports
pub use calendar::{CalendarId, CalendarStore, MonthSlot, NewCalendar, SavedCalendar};
pub use memory::{MemoryCalendarStore, MemoryStyleStore};
pub use style::{BaseStyle, NewBaseStyle, StyleId, StyleStore};

/// Store backend failures
///
/// The in-memory stores never fail; real drivers surface their errors here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Backend-specific failure
    #[error("store backend failure: {0}")]
    Backend(String),
}
