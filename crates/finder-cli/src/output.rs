//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use finder_domain::{QueryList, RecommendationSet};
use finder_sdk::HealthStatus;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Characters of a query shown in list previews
const PREVIEW_CHARS: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format recommendation results.
    pub fn format_recommendations(&self, set: &RecommendationSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_recommendations_json(set),
            OutputFormat::Table => Ok(self.format_recommendations_table(set)),
            OutputFormat::Quiet => Ok(set
                .recommendations
                .iter()
                .map(|r| r.assessment_url.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format recommendations as JSON, mirroring the service payload.
    fn format_recommendations_json(&self, set: &RecommendationSet) -> Result<String> {
        let recommendations: Vec<serde_json::Value> = set
            .recommendations
            .iter()
            .map(|r| {
                serde_json::json!({
                    "assessment_name": r.assessment_name,
                    "assessment_url": r.assessment_url,
                    "relevance_score": r.relevance_score,
                    "test_type": r.test_type,
                    "duration": r.duration,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "query": set.query,
            "recommendations": recommendations,
            "total_results": set.total_results,
        }))?)
    }

    /// Format recommendations as a summary line plus table.
    fn format_recommendations_table(&self, set: &RecommendationSet) -> String {
        if set.is_empty() {
            return self.info("No recommendations found for your query.");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Assessment", "Score", "Type", "Duration", "Link"]);

        for (idx, rec) in set.recommendations.iter().enumerate() {
            builder.push_record([
                (idx + 1).to_string(),
                rec.assessment_name.clone(),
                format!("{:.1}%", rec.relevance_percent()),
                rec.test_type.clone().unwrap_or_default(),
                rec.duration.clone().unwrap_or_default(),
                rec.assessment_url.clone(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", self.success(&set.summary()), table)
    }

    /// Format the list of selectable test queries.
    pub fn format_queries(&self, queries: &QueryList, full: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "queries": queries.to_strings(),
                "count": queries.len(),
            }))?),
            OutputFormat::Quiet => Ok(queries.to_strings().join("\n")),
            OutputFormat::Table => {
                if queries.is_empty() {
                    return Ok(self.warning(
                        "No test queries available. Enter a query manually.",
                    ));
                }
                let mut lines = vec![self.info(&format!(
                    "{} test queries available",
                    queries.len()
                ))];
                for (idx, query) in queries.iter().enumerate() {
                    let text = if full {
                        query.to_string()
                    } else {
                        query.preview(PREVIEW_CHARS).replace('\n', " ")
                    };
                    lines.push(format!("Query #{}: {}", idx + 1, text));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a health check result.
    pub fn format_health(&self, url: &str, health: &HealthStatus) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(health)?),
            OutputFormat::Quiet => Ok(health.status.clone()),
            OutputFormat::Table => {
                let mut msg = format!("{} is {}", url, health.status);
                if let Some(message) = &health.message {
                    msg.push_str(&format!(" ({})", message));
                }
                Ok(if health.is_healthy() {
                    self.success(&msg)
                } else {
                    self.warning(&msg)
                })
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_domain::Recommendation;

    fn create_test_set() -> RecommendationSet {
        RecommendationSet {
            query: Some("Java developer".to_string()),
            total_results: 2,
            recommendations: vec![
                Recommendation {
                    assessment_name: "Core Java (Advanced Level)".to_string(),
                    relevance_score: 0.875,
                    test_type: Some("Knowledge & Skills".to_string()),
                    duration: Some("30 minutes".to_string()),
                    assessment_url: "https://example.com/core-java".to_string(),
                },
                Recommendation {
                    assessment_name: "Verify Numerical".to_string(),
                    relevance_score: 0.5,
                    test_type: None,
                    duration: None,
                    assessment_url: "https://example.com/numerical".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_recommendations(&create_test_set()).unwrap();
        assert!(output.starts_with("✓ Found 2 relevant assessments"));
        assert!(output.contains("Core Java (Advanced Level)"));
        assert!(output.contains("87.5%"));
        assert!(output.contains("Duration"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_recommendations(&create_test_set()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total_results"], 2);
        assert_eq!(value["recommendations"][1]["test_type"], serde_json::Value::Null);
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_recommendations(&create_test_set()).unwrap();
        assert_eq!(
            output,
            "https://example.com/core-java\nhttps://example.com/numerical"
        );
    }

    #[test]
    fn test_empty_recommendations() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_recommendations(&RecommendationSet::default())
            .unwrap();
        assert_eq!(output, "ℹ No recommendations found for your query.");
    }

    #[test]
    fn test_query_previews() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let long = format!("First line\n{}", "x".repeat(100));
        let queries = QueryList::from_strings(["Hiring a data analyst", long.as_str()]);

        let output = formatter.format_queries(&queries, false).unwrap();
        assert!(output.contains("Query #1: Hiring a data analyst"));
        assert!(output.contains("Query #2: First line xxx"));
        assert!(output.trim_end().ends_with("..."));
    }

    #[test]
    fn test_empty_queries() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_queries(&QueryList::new(), false).unwrap();
        assert!(output.contains("Enter a query manually"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
