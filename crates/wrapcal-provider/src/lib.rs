//! Wrapcal Provider
//!
//! Interfaces to the two external AI capabilities the pipeline consumes:
//!
//! - [`SceneAnalyzer`]: turns a scene (image or free text) into a short
//!   natural-language editing instruction
//! - [`ImageGenerator`]: applies an instruction to a base style image and
//!   returns the edited image
//!
//! Both are opaque collaborators; failures surface as typed errors carrying a
//! human-readable message. [`HttpProvider`] implements both against a JSON
//! HTTP API.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod capability;
mod http;

// Re-exports
pub use capability::{
    AnalysisError, AnalysisReply, AnalysisRequest, GenerationError, GenerationReply,
    GenerationRequest, ImageGenerator, SceneAnalyzer, SceneKind,
};
pub use http::{HttpProvider, HttpProviderConfig, HttpProviderError};
