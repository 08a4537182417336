//! Main Extractor implementation

use crate::config::{ExtractionStrategy, ExtractorConfig};
use crate::error::ExtractorError;
use crate::scanner::DelimitedScanner;
use crate::structured::parse_structured;
use finder_domain::{DocumentSource, Query, QueryList};
use tracing::debug;

/// Extract queries from a raw document using the default configuration.
///
/// Never fails: an absent, empty or unrecognizable document gives an empty
/// list.
pub fn extract(document: Option<&str>) -> Vec<String> {
    Extractor::default().extract(document).to_strings()
}

/// Query extractor with a configurable strategy chain
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create an extractor, rejecting an invalid configuration
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the configured strategies in order; the first match wins.
    pub fn extract(&self, document: Option<&str>) -> QueryList {
        let Some(document) = document else {
            return QueryList::new();
        };

        self.config
            .strategies
            .iter()
            .find_map(|strategy| self.apply(*strategy, document))
            .unwrap_or_default()
    }

    /// Run a single strategy.
    ///
    /// Returns `None` when the document is not in the strategy's format.
    pub fn apply(&self, strategy: ExtractionStrategy, document: &str) -> Option<QueryList> {
        let values = match strategy {
            ExtractionStrategy::Structured => match parse_structured(document) {
                Ok(values) => values,
                Err(e) => {
                    debug!("{} strategy did not match: {}", strategy.name(), e);
                    return None;
                }
            },
            ExtractionStrategy::Delimited => DelimitedScanner::scan(document),
        };

        let min_length = self.config.min_query_length;
        let queries: Vec<Query> = values
            .iter()
            .filter_map(|v| Query::with_min_length(v, min_length))
            .collect();

        debug!(
            "{} strategy kept {} of {} values",
            strategy.name(),
            queries.len(),
            values.len()
        );
        Some(QueryList::from(queries))
    }

    /// Load test queries from two sources.
    ///
    /// The primary document must be in the structured form. If it cannot be
    /// loaded or is not structured, the secondary document is run through the
    /// full strategy chain. Failures are logged and never surfaced; when
    /// neither source is usable the result is empty.
    pub async fn load<S: DocumentSource>(
        &self,
        source: &S,
        primary: &str,
        secondary: &str,
    ) -> QueryList {
        match source.load(primary).await {
            Ok(document) => {
                if let Some(queries) = self.apply(ExtractionStrategy::Structured, &document) {
                    return queries;
                }
                debug!("primary source {} is not structured, falling back", primary);
            }
            Err(e) => debug!("primary source {} unavailable: {}", primary, e),
        }

        match source.load(secondary).await {
            Ok(document) => self.extract(Some(&document)),
            Err(e) => {
                debug!("secondary source {} unavailable: {}", secondary, e);
                QueryList::new()
            }
        }
    }
}
