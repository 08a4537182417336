//! Configuration for the Extractor

use crate::error::ExtractorError;
use finder_domain::MIN_QUERY_LENGTH;
use serde::{Deserialize, Serialize};

/// Document format recognizers, tried in configured order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionStrategy {
    /// JSON object with a `queries` array
    Structured,
    /// Single-column CSV with one header line
    Delimited,
}

impl ExtractionStrategy {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ExtractionStrategy::Structured => "structured",
            ExtractionStrategy::Delimited => "delimited",
        }
    }
}

/// Configuration for the Extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Queries must be strictly longer than this (characters, after trimming)
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,

    /// Strategies to attempt, first match wins
    #[serde(default = "default_strategies")]
    pub strategies: Vec<ExtractionStrategy>,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.strategies.is_empty() {
            return Err(ExtractorError::Config(
                "at least one extraction strategy is required".to_string(),
            ));
        }
        for (idx, strategy) in self.strategies.iter().enumerate() {
            if self.strategies[..idx].contains(strategy) {
                return Err(ExtractorError::Config(format!(
                    "strategy '{}' listed more than once",
                    strategy.name()
                )));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_query_length: default_min_query_length(),
            strategies: default_strategies(),
        }
    }
}

fn default_min_query_length() -> usize {
    MIN_QUERY_LENGTH
}

fn default_strategies() -> Vec<ExtractionStrategy> {
    vec![ExtractionStrategy::Structured, ExtractionStrategy::Delimited]
}
