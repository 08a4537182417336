//! Recommendation module - ranked results from the recommendation service

/// A single recommended assessment
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Display name of the assessment
    pub assessment_name: String,

    /// Relevance in `[0, 1]`
    pub relevance_score: f64,

    /// Assessment category, if known
    pub test_type: Option<String>,

    /// Expected duration, free text
    pub duration: Option<String>,

    /// Link to the assessment page
    pub assessment_url: String,
}

impl Recommendation {
    /// Relevance as a percentage, clamped to `[0, 100]`
    pub fn relevance_percent(&self) -> f64 {
        (self.relevance_score * 100.0).clamp(0.0, 100.0)
    }
}

/// Ranked results for one query
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationSet {
    /// The query as echoed back by the service
    pub query: Option<String>,

    /// Number of results reported by the service
    pub total_results: usize,

    /// Results, best first
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationSet {
    /// Whether the service found nothing
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Human summary line, e.g. `Found 3 relevant assessments`
    pub fn summary(&self) -> String {
        let plural = if self.total_results == 1 { "" } else { "s" };
        format!(
            "Found {} relevant assessment{}",
            self.total_results, plural
        )
    }
}
