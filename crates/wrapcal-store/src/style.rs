//! Base-style records and their store seam

use crate::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use wrapcal_image::DataUri;

/// Unique base-style identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StyleId(pub Ulid);

impl StyleId {
    /// Generate a new style ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for StyleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reusable base-style avatar image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStyle {
    /// Identifier
    pub id: StyleId,
    /// Display name
    pub name: String,
    /// Validated style reference image
    pub image: DataUri,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a base style; the store assigns id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBaseStyle {
    /// Display name
    pub name: String,
    /// Validated style reference image
    pub image: DataUri,
}

/// Read/write access to stored base styles
#[async_trait]
pub trait StyleStore: Send + Sync {
    /// Persist a new base style and return the stored record
    async fn put(&self, style: NewBaseStyle) -> Result<BaseStyle, StoreError>;

    /// Look up a base style by id
    async fn get(&self, id: StyleId) -> Result<Option<BaseStyle>, StoreError>;

    /// List all stored base styles, oldest first
    async fn list(&self) -> Result<Vec<BaseStyle>, StoreError>;

    /// Remove a base style; returns whether it existed
    async fn remove(&self, id: StyleId) -> Result<bool, StoreError>;
}
