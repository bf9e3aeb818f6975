//! In-memory store implementations
//!
//! `DashMap`-backed stores for tests and single-process use. Listing sorts
//! by ULID, which orders records by creation time.

use crate::calendar::{CalendarId, CalendarStore, NewCalendar, SavedCalendar};
use crate::style::{BaseStyle, NewBaseStyle, StyleId, StyleStore};
use crate::StoreError;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

/// In-memory base-style store
#[derive(Debug, Default)]
pub struct MemoryStyleStore {
    styles: DashMap<StyleId, BaseStyle>,
}

impl MemoryStyleStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored styles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[async_trait]
impl StyleStore for MemoryStyleStore {
    async fn put(&self, style: NewBaseStyle) -> Result<BaseStyle, StoreError> {
        let stored = BaseStyle {
            id: StyleId::new(),
            name: style.name,
            image: style.image,
            created_at: Utc::now(),
        };
        self.styles.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: StyleId) -> Result<Option<BaseStyle>, StoreError> {
        Ok(self.styles.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<BaseStyle>, StoreError> {
        let mut styles: Vec<BaseStyle> = self
            .styles
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        styles.sort_by_key(|s| s.id);
        Ok(styles)
    }

    async fn remove(&self, id: StyleId) -> Result<bool, StoreError> {
        Ok(self.styles.remove(&id).is_some())
    }
}

/// In-memory calendar store
#[derive(Debug, Default)]
pub struct MemoryCalendarStore {
    calendars: DashMap<CalendarId, SavedCalendar>,
}

impl MemoryCalendarStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored calendars
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

#[async_trait]
impl CalendarStore for MemoryCalendarStore {
    async fn save(&self, calendar: NewCalendar) -> Result<SavedCalendar, StoreError> {
        let stored = SavedCalendar {
            id: CalendarId::new(),
            style_id: calendar.style_id,
            title: calendar.title,
            months: calendar.months,
            saved_at: Utc::now(),
        };
        self.calendars.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: CalendarId) -> Result<Option<SavedCalendar>, StoreError> {
        Ok(self.calendars.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<SavedCalendar>, StoreError> {
        let mut calendars: Vec<SavedCalendar> = self
            .calendars
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        calendars.sort_by_key(|c| c.id);
        Ok(calendars)
    }
}
