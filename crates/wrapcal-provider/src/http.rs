//! HTTP-backed provider
//!
//! Implements both capabilities against a JSON API:
//! `POST {base}/analyze` and `POST {base}/generate`, optional bearer auth.

use crate::capability::{
    AnalysisError, AnalysisReply, AnalysisRequest, GenerationError, GenerationReply,
    GenerationRequest, ImageGenerator, SceneAnalyzer,
};
use async_trait::async_trait;
use std::time::Duration;

/// Default per-request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for [`HttpProvider`]
#[derive(Debug, Clone)]
pub struct HttpProviderConfig {
    /// API base URL, e.g. `https://api.example.com/v1`
    pub base_url: String,
    /// Optional bearer token
    pub api_key: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl HttpProviderConfig {
    /// Create a configuration for the given base URL
    #[inline]
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// With a bearer token
    #[inline]
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// With a per-request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Normalize the base URL so endpoint joining is predictable
fn trim_base_url(base_url: String) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Provider configuration errors
#[derive(Debug, thiserror::Error)]
pub enum HttpProviderError {
    /// HTTP client could not be constructed
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),

    /// Base URL is empty
    #[error("provider base URL is empty")]
    EmptyBaseUrl,
}

/// HTTP-backed implementation of both capabilities
#[derive(Debug, Clone)]
pub struct HttpProvider {
    config: HttpProviderConfig,
    http: reqwest::Client,
}

impl HttpProvider {
    /// Create a provider from configuration
    pub fn new(config: HttpProviderConfig) -> Result<Self, HttpProviderError> {
        if config.base_url.is_empty() {
            return Err(HttpProviderError::EmptyBaseUrl);
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    /// Endpoint URL for a path segment
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url)
    }

    /// POST a JSON body and parse a JSON reply
    async fn post_json<Req, Reply>(&self, path: &str, body: &Req) -> Result<Reply, String>
    where
        Req: serde::Serialize,
        Reply: serde::de::DeserializeOwned,
    {
        let endpoint = self.endpoint(path);
        let mut request = self.http.post(&endpoint).json(body);
        if let Some(api_key) = self.config.api_key.as_deref() {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("request to {endpoint} failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(format!("{endpoint} returned {status}: {detail}"));
        }

        response
            .json::<Reply>()
            .await
            .map_err(|e| format!("invalid response from {endpoint}: {e}"))
    }
}

#[async_trait]
impl SceneAnalyzer for HttpProvider {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReply, AnalysisError> {
        tracing::debug!(kind = ?request.kind, "analysis request");

        let reply: AnalysisReply = self
            .post_json("analyze", &request)
            .await
            .map_err(AnalysisError::Unreachable)?;

        if reply.instruction.trim().is_empty() {
            return Err(AnalysisError::NoInstruction);
        }
        Ok(reply)
    }
}

#[async_trait]
impl ImageGenerator for HttpProvider {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationReply, GenerationError> {
        tracing::debug!(instruction = %request.instruction, "generation request");

        let reply: GenerationReply = self
            .post_json("generate", &request)
            .await
            .map_err(GenerationError::Unreachable)?;

        if reply.image.is_empty() {
            return Err(GenerationError::NoImage);
        }
        Ok(reply)
    }
}
