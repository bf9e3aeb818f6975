//! Wrapcal Studio
//!
//! The facade an HTTP edge or UI talks to:
//! - base-style CRUD with upload validation
//! - calendar generation (style lookup → batch pipeline → optional persist)
//!
//! # Example
//!
//! ```rust,ignore
//! use wrapcal_studio::{CalendarStudio, StudioConfig};
//!
//! let studio = CalendarStudio::new(StudioConfig::new(), analyzer, generator, styles, calendars);
//! let style = studio.create_base_style("retro", &style_image).await?;
//! let run = studio.generate_calendar(style.id, "2026 wrapped", months, None).await?;
//! println!("{} of 12 months generated", run.outcome.succeeded());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod config;
mod error;
mod studio;

// Re-exports
pub use config::StudioConfig;
pub use error::StudioError;
pub use studio::{CalendarRun, CalendarStudio};
