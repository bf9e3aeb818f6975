//! Capability interfaces
//!
//! Request/reply shapes and error taxonomies for the analysis and generation
//! capabilities. Implementations live elsewhere (HTTP in this crate, scripted
//! fakes in the test-utils crate).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wrapcal_image::{DataUri, DataUriError};

/// What kind of scene payload is being analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Free-text description of the scene
    Text,
    /// Encoded image of the scene
    Image,
}

/// Request to the analysis capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Payload kind
    pub kind: SceneKind,
    /// Text description or encoded image, depending on `kind`
    pub payload: String,
}

impl AnalysisRequest {
    /// Request analysis of a free-text description
    #[inline]
    #[must_use]
    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            kind: SceneKind::Text,
            payload: payload.into(),
        }
    }

    /// Request analysis of an encoded image
    #[inline]
    #[must_use]
    pub fn image(payload: impl Into<String>) -> Self {
        Self {
            kind: SceneKind::Image,
            payload: payload.into(),
        }
    }
}

/// Reply from the analysis capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReply {
    /// Short natural-language editing instruction
    pub instruction: String,
}

/// Request to the generation capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Shared style reference image
    pub base_image: DataUri,
    /// Editing instruction produced by analysis
    pub instruction: String,
}

/// Reply from the generation capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReply {
    /// Edited image
    pub image: DataUri,
}

/// Analysis capability
#[async_trait]
pub trait SceneAnalyzer: Send + Sync {
    /// Derive an editing instruction from a scene
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReply, AnalysisError>;
}

/// Generation capability
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Apply an instruction to the base style image
    async fn generate(&self, request: GenerationRequest)
        -> Result<GenerationReply, GenerationError>;
}

/// Analysis capability failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Capability could not be reached
    #[error("analysis service unreachable: {0}")]
    Unreachable(String),

    /// Capability answered but returned no usable instruction
    #[error("analysis returned no instruction")]
    NoInstruction,

    /// Scene image payload is not validly encoded
    #[error("scene image is not a valid data URI: {0}")]
    InvalidImage(#[from] DataUriError),

    /// Capability reported a failure of its own
    #[error("analysis failed: {0}")]
    Provider(String),
}

/// Generation capability failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// Capability could not be reached
    #[error("generation service unreachable: {0}")]
    Unreachable(String),

    /// Capability answered but returned no image
    #[error("generation returned no image")]
    NoImage,

    /// Capability reported a failure of its own
    #[error("generation failed: {0}")]
    Provider(String),
}
