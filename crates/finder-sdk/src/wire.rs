//! JSON payloads exchanged with the recommendation service.

use finder_domain::{Recommendation, RecommendationSet};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /recommend`
#[derive(Debug, Serialize)]
pub(crate) struct RecommendRequest<'a> {
    pub query: &'a str,
    pub top_k: u32,
}

/// One entry of the `recommendations` array
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RecommendationPayload {
    pub assessment_name: String,
    pub relevance_score: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub test_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    pub assessment_url: String,
}

/// Successful `POST /recommend` response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RecommendResponse {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub total_results: Option<usize>,
    #[serde(default)]
    pub recommendations: Vec<RecommendationPayload>,
}

/// Error body, e.g. `{"detail": "..."}` or a validation error list
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Service health as reported by `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status word, `healthy` when all is well
    pub status: String,
    /// Optional human message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    /// Whether the service reports itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

impl From<RecommendationPayload> for Recommendation {
    fn from(p: RecommendationPayload) -> Self {
        Recommendation {
            assessment_name: p.assessment_name,
            relevance_score: p.relevance_score,
            test_type: p.test_type,
            duration: p.duration,
            assessment_url: p.assessment_url,
        }
    }
}

impl From<RecommendResponse> for RecommendationSet {
    fn from(r: RecommendResponse) -> Self {
        let total_results = r.total_results.unwrap_or(r.recommendations.len());
        RecommendationSet {
            query: r.query,
            total_results,
            recommendations: r.recommendations.into_iter().map(Into::into).collect(),
        }
    }
}

impl ErrorBody {
    /// Render `detail` as display text.
    ///
    /// Strings are used as is; structured details are rendered as JSON.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Accept strings, numbers or null for optional text fields
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
