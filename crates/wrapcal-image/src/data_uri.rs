//! Data-URI codec
//!
//! Encodes and decodes the `data:<type>/<subtype>;base64,<payload>` string
//! form used for every image payload crossing the pipeline.

use crate::media_type::MediaType;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Marker between the media type and the payload
const BASE64_MARKER: &str = ";base64,";

/// URI scheme prefix
const SCHEME: &str = "data:";

/// An encoded `data:` URI carrying a base64 image payload
///
/// The canonical constructor is [`DataUri::encode`]; values arriving from the
/// outside world (uploads, provider replies) are validated by [`DataUri::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    /// Encode raw bytes into the canonical data-URI form
    ///
    /// Total function: never fails for well-typed inputs.
    #[must_use]
    pub fn encode(bytes: &[u8], media_type: &MediaType) -> Self {
        Self(format!(
            "{SCHEME}{}{BASE64_MARKER}{}",
            media_type.as_str(),
            BASE64.encode(bytes)
        ))
    }

    /// Wrap an externally produced string without validating it
    ///
    /// Validation happens at [`DataUri::decode`]; callers that need a checked
    /// payload up front should decode immediately.
    #[inline]
    #[must_use]
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Decode into media type and raw bytes
    pub fn decode(&self) -> Result<ImageData, DataUriError> {
        decode(&self.0)
    }

    /// The encoded string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the string form is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decoded image payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Media type carried by the URI
    pub media_type: MediaType,
    /// Raw decoded bytes
    pub bytes: Vec<u8>,
}

impl ImageData {
    /// Re-encode into the canonical data-URI form
    #[inline]
    #[must_use]
    pub fn to_data_uri(&self) -> DataUri {
        DataUri::encode(&self.bytes, &self.media_type)
    }

    /// Payload size in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encode raw bytes and a media type into a data URI
#[inline]
#[must_use]
pub fn encode(bytes: &[u8], media_type: &MediaType) -> DataUri {
    DataUri::encode(bytes, media_type)
}

/// Decode a data-URI string into media type and raw bytes
///
/// Fails with [`DataUriError::InvalidFormat`] when the string does not match
/// `data:<type>/<subtype>;base64,<payload>` and with
/// [`DataUriError::InvalidPayload`] when the payload is not valid base64.
pub fn decode(value: &str) -> Result<ImageData, DataUriError> {
    let rest = value
        .strip_prefix(SCHEME)
        .ok_or_else(|| DataUriError::InvalidFormat("missing 'data:' scheme".to_string()))?;

    let Some((media_type, payload)) = rest.split_once(BASE64_MARKER) else {
        return Err(DataUriError::InvalidFormat(
            "missing ';base64,' marker".to_string(),
        ));
    };

    let media_type = MediaType::new(media_type)
        .map_err(|e| DataUriError::InvalidFormat(e.to_string()))?;

    let bytes = BASE64
        .decode(payload.as_bytes())
        .map_err(|e| DataUriError::InvalidPayload(e.to_string()))?;

    Ok(ImageData { media_type, bytes })
}

/// Data-URI codec errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUriError {
    /// String does not match `data:<type>/<subtype>;base64,<payload>`
    #[error("invalid data URI format: {0}")]
    InvalidFormat(String),

    /// Payload is not valid base64
    #[error("invalid data URI payload: {0}")]
    InvalidPayload(String),
}
