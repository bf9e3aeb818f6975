//! Wrapcal Image
//!
//! Image payloads and the data-URI codec used across the workspace.
//!
//! # Core Concepts
//!
//! - [`MediaType`]: validated `type/subtype` media type
//! - [`DataUri`]: encoded `data:<type>/<subtype>;base64,<payload>` string
//! - [`ImageData`]: decoded payload (media type + raw bytes)
//! - [`validate_upload`]: boundary checks applied to user-supplied images
//!
//! # Example
//!
//! ```rust
//! use wrapcal_image::{DataUri, MediaType};
//!
//! let png = MediaType::new("image/png").unwrap();
//! let uri = DataUri::encode(&[0x89, 0x50, 0x4e, 0x47], &png);
//! let decoded = uri.decode().unwrap();
//! assert_eq!(decoded.media_type, png);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod data_uri;
mod media_type;
mod upload;

// Re-exports
pub use data_uri::{decode, encode, DataUri, DataUriError, ImageData};
pub use media_type::{MediaType, MediaTypeError};
pub use upload::{validate_upload, UploadError, UploadPolicy};
