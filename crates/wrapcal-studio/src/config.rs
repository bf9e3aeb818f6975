//! Studio configuration

use wrapcal_image::UploadPolicy;

/// Months in a wrapped calendar
const MONTHS_PER_CALENDAR: usize = 12;

/// Studio configuration
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Policy applied to uploaded style images
    pub upload_policy: UploadPolicy,
    /// Required number of month inputs per calendar
    pub months_per_calendar: usize,
    /// Whether finished calendars are persisted automatically
    pub persist_calendars: bool,
}

impl StudioConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom upload policy
    #[inline]
    #[must_use]
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    /// With a custom month count (tests and previews)
    #[inline]
    #[must_use]
    pub fn with_months_per_calendar(mut self, months: usize) -> Self {
        self.months_per_calendar = months;
        self
    }

    /// Without automatic persistence of finished calendars
    #[inline]
    #[must_use]
    pub fn without_persistence(mut self) -> Self {
        self.persist_calendars = false;
        self
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            upload_policy: UploadPolicy::default(),
            months_per_calendar: MONTHS_PER_CALENDAR,
            persist_calendars: true,
        }
    }
}
