//! HTTP document source

use crate::client::check_status;
use crate::error::SdkError;
use finder_domain::DocumentSource;
use std::time::Duration;

/// Fetches test-data documents over HTTP.
///
/// Any non-success status is a load failure.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http_client: reqwest::Client,
}

impl HttpSource {
    /// Create a source with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self, SdkError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SdkError::Request(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http_client })
    }
}

impl DocumentSource for HttpSource {
    type Error = SdkError;

    async fn load(&self, location: &str) -> Result<String, Self::Error> {
        let response = self.http_client.get(location).send().await?;
        let response = check_status(response).await?;
        Ok(response.text().await?)
    }
}
