//! Media type handling
//!
//! A minimal validated `type/subtype` wrapper; just enough structure for the
//! data-URI codec and upload policy checks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Validated media type (`type/subtype`, e.g. `image/png`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaType(String);

impl MediaType {
    /// Create a media type, validating the `type/subtype` shape
    pub fn new(value: impl Into<String>) -> Result<Self, MediaTypeError> {
        let value = value.into();
        let Some((kind, subtype)) = value.split_once('/') else {
            return Err(MediaTypeError::MissingSlash(value));
        };
        if kind.is_empty() || subtype.is_empty() || subtype.contains('/') {
            return Err(MediaTypeError::Malformed(value));
        }
        Ok(Self(value))
    }

    /// The full `type/subtype` string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary type (the part before the slash)
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// Whether this is an `image/*` media type
    #[inline]
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind() == "image"
    }
}

impl FromStr for MediaType {
    type Err = MediaTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Media type validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaTypeError {
    /// No `/` separator between type and subtype
    #[error("media type missing '/' separator: {0}")]
    MissingSlash(String),

    /// Empty type/subtype or extra separators
    #[error("malformed media type: {0}")]
    Malformed(String),
}
