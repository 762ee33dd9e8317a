//! HTTP client for the visibility API.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use tracing::debug;

use crate::error::{VisibilityError, VisibilityResult};
use crate::types::{AnalysisResult, AnalyzeRequest, Recommendation, ScoreResult, VisibilityConfig};

const USER_AGENT_VALUE: &str = concat!("aivis-sdk/", env!("CARGO_PKG_VERSION"));

/// Client for the visibility API.
///
/// A value object holding the credential and base address; no internal
/// mutable state across calls, so a single client can serve concurrent
/// operations. Each operation is one best-effort round trip: no retry,
/// no caching.
#[derive(Clone)]
pub struct VisibilityClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl VisibilityClient {
    /// Build a client from configuration.
    ///
    /// Fails with [`VisibilityError::Config`] when the API key is empty
    /// or the underlying HTTP client cannot be constructed.
    pub fn new(config: VisibilityConfig) -> VisibilityResult<Self> {
        if config.api_key.is_empty() {
            return Err(VisibilityError::Config {
                message: "API key must not be empty".to_string(),
            });
        }

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| VisibilityError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the visibility score for a brand via `GET /score/{brand}`.
    pub async fn get_score(&self, brand: &str) -> VisibilityResult<ScoreResult> {
        let url = format!("{}/score/{}", self.base_url, brand);
        debug!(url = %url, "fetching visibility score");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// Run a full visibility analysis via `POST /analyze`.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> VisibilityResult<AnalysisResult> {
        let url = format!("{}/analyze", self.base_url);
        debug!(url = %url, query = %request.query, "running visibility analysis");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.bearer())
            .json(request)
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// Fetch recommendations for a query.
    ///
    /// Defined as [`analyze`](Self::analyze) followed by extracting the
    /// `recommendations` field; no independent behavior.
    pub async fn get_recommendations(
        &self,
        request: &AnalyzeRequest,
    ) -> VisibilityResult<Vec<Recommendation>> {
        let analysis = self.analyze(request).await?;
        Ok(analysis.recommendations)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Map non-success statuses to `RequestFailed`, then parse the body.
    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> VisibilityResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(VisibilityError::RequestFailed {
                status: status.to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| VisibilityError::InvalidResponse {
                message: format!("failed to parse response body: {}", e),
            })
    }
}

impl fmt::Debug for VisibilityClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}
