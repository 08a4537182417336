//! Recommendation service client implementation.

use crate::error::SdkError;
use crate::wire::{ErrorBody, HealthStatus, RecommendRequest, RecommendResponse};
use finder_domain::{RecommendationSet, TopK};
use std::time::Duration;
use tracing::{debug, info};

/// Default hard timeout for a single request (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for the assessment recommendation service
///
/// Requests are never retried; a timeout is reported as a failure.
#[derive(Debug, Clone)]
pub struct FinderClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl FinderClient {
    /// Create a client with the default timeout
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, SdkError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SdkError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// Service base address, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service for the `top_k` best assessments for `query`.
    ///
    /// The query is trimmed; a blank query is rejected before any request
    /// is sent.
    pub async fn recommend(&self, query: &str, top_k: TopK) -> Result<RecommendationSet, SdkError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SdkError::Request("Query must not be empty".to_string()));
        }

        let url = format!("{}/recommend", self.base_url);
        let body = RecommendRequest {
            query,
            top_k: top_k.get(),
        };

        info!("requesting {} recommendations from {}", top_k, url);

        let response = self.http_client.post(&url).json(&body).send().await?;
        let response = check_status(response).await?;

        let payload: RecommendResponse = response.json().await?;
        let set = RecommendationSet::from(payload);
        debug!("received {} recommendations", set.recommendations.len());
        Ok(set)
    }

    /// Query `GET /health`
    pub async fn health(&self) -> Result<HealthStatus, SdkError> {
        let url = format!("{}/health", self.base_url);
        let response = self.http_client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into `SdkError::Api`, reading `detail` from
/// the body when present.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SdkError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.detail_text())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());

    debug!("service returned HTTP {}: {}", status, body);
    Err(SdkError::Api {
        status: status.as_u16(),
        detail,
    })
}
