//! Upload validation
//!
//! Boundary checks applied to user-supplied images before anything else
//! touches them: the style reference on batch start and base-style images
//! on creation.

use crate::data_uri::{DataUri, DataUriError, ImageData};
use crate::media_type::MediaType;

/// Default payload cap: 10 MiB
const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Policy for accepting uploaded images
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Accepted media types
    pub allowed_media_types: Vec<MediaType>,
    /// Maximum decoded payload size in bytes
    pub max_bytes: usize,
}

impl UploadPolicy {
    /// Create the default policy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a custom payload cap
    #[inline]
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// With a custom media type allow-list
    #[inline]
    #[must_use]
    pub fn with_allowed_media_types(mut self, media_types: Vec<MediaType>) -> Self {
        self.allowed_media_types = media_types;
        self
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        let allowed = ["image/png", "image/jpeg", "image/webp"]
            .iter()
            .filter_map(|mt| MediaType::new(*mt).ok())
            .collect();
        Self {
            allowed_media_types: allowed,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

/// Validate an uploaded image against the policy
///
/// Returns the decoded payload so callers do not decode twice.
pub fn validate_upload(uri: &DataUri, policy: &UploadPolicy) -> Result<ImageData, UploadError> {
    let image = uri.decode()?;

    if !policy.allowed_media_types.contains(&image.media_type) {
        return Err(UploadError::UnsupportedMediaType {
            found: image.media_type.to_string(),
        });
    }

    if image.is_empty() {
        return Err(UploadError::EmptyPayload);
    }

    if image.len() > policy.max_bytes {
        return Err(UploadError::TooLarge {
            size: image.len(),
            limit: policy.max_bytes,
        });
    }

    Ok(image)
}

/// Upload validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// Not a well-formed data URI
    #[error("malformed image upload: {0}")]
    Malformed(#[from] DataUriError),

    /// Media type outside the allow-list
    #[error("unsupported media type: {found}")]
    UnsupportedMediaType { found: String },

    /// Zero-byte payload
    #[error("image payload is empty")]
    EmptyPayload,

    /// Payload exceeds the size cap
    #[error("image payload too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },
}
