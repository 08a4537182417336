//! State shared by one-shot commands and the REPL.

use crate::config::Config;
use crate::error::{CliError, Result};
use finder_domain::{DocumentSource, QueryList, TopK};
use finder_extractor::{Extractor, FsSource};
use finder_sdk::{FinderClient, HttpSource};
use std::time::Duration;

/// Active service settings plus the lazily loaded test queries.
#[derive(Debug)]
pub struct Session {
    api_url: String,
    top_k: TopK,
    timeout: Duration,
    primary_source: String,
    secondary_source: String,
    queries: Option<QueryList>,
}

impl Session {
    /// Build a session from the active profile and global settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        let profile = config.get_active_profile()?;
        Ok(Self {
            api_url: profile.api_url.clone(),
            top_k: profile.top_k()?,
            timeout: config.settings.timeout(),
            primary_source: config.settings.primary_source.clone(),
            secondary_source: config.settings.secondary_source.clone(),
            queries: None,
        })
    }

    /// Re-read service settings after a profile change. Loaded queries are kept.
    pub fn apply_profile(&mut self, config: &Config) -> Result<()> {
        let profile = config.get_active_profile()?;
        self.api_url = profile.api_url.clone();
        self.top_k = profile.top_k()?;
        Ok(())
    }

    /// Service base address
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Override the service base address for this session
    pub fn set_api_url(&mut self, url: impl Into<String>) {
        self.api_url = url.into();
    }

    /// Default result count
    pub fn top_k(&self) -> TopK {
        self.top_k
    }

    /// Override the result count for this session
    pub fn set_top_k(&mut self, top_k: TopK) {
        self.top_k = top_k;
    }

    /// Service client, optionally for a different base address
    pub fn client(&self, url_override: Option<&str>) -> Result<FinderClient> {
        let url = url_override.unwrap_or(&self.api_url);
        Ok(FinderClient::with_timeout(url, self.timeout)?)
    }

    /// Test queries, loaded on first use.
    ///
    /// An unavailable data set yields an empty list, never an error.
    pub async fn queries(&mut self) -> Result<&QueryList> {
        if self.queries.is_none() {
            let source = DataSource::new(self.timeout)?;
            let loaded = Extractor::default()
                .load(&source, &self.primary_source, &self.secondary_source)
                .await;
            self.queries = Some(loaded);
        }
        Ok(self.queries.get_or_insert_with(QueryList::new))
    }

    /// Replace the cached test queries
    pub fn set_queries(&mut self, queries: QueryList) {
        self.queries = Some(queries);
    }
}

/// Routes `http://` and `https://` locations to HTTP, everything else to
/// the filesystem.
pub struct DataSource {
    fs: FsSource,
    http: HttpSource,
}

impl DataSource {
    /// Create a source whose HTTP fetches use `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            fs: FsSource::new(),
            http: HttpSource::new(timeout)?,
        })
    }
}

impl DocumentSource for DataSource {
    type Error = CliError;

    async fn load(&self, location: &str) -> Result<String> {
        if is_remote(location) {
            Ok(self.http.load(location).await?)
        } else {
            Ok(self.fs.load(location).await?)
        }
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://localhost:5173/data/test-set.csv"));
        assert!(is_remote("HTTPS://example.com/q.json"));
        assert!(!is_remote("data/test-set.csv"));
        assert!(!is_remote("/tmp/http-dump.csv"));
    }

    #[tokio::test]
    async fn test_queries_load_from_configured_files() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("test-set.csv");
        std::fs::write(&csv, "Query\n\"Hiring a data analyst\"\nshort\n").unwrap();

        let mut config = Config::default();
        config.settings.primary_source = dir.path().join("missing.json").display().to_string();
        config.settings.secondary_source = csv.display().to_string();

        let mut session = Session::from_config(&config).unwrap();
        let queries = session.queries().await.unwrap();
        assert_eq!(queries.to_strings(), vec!["Hiring a data analyst".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_data_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.settings.primary_source = dir.path().join("a.json").display().to_string();
        config.settings.secondary_source = dir.path().join("b.csv").display().to_string();

        let mut session = Session::from_config(&config).unwrap();
        assert!(session.queries().await.unwrap().is_empty());
    }

    #[test]
    fn test_overrides() {
        let mut session = Session::from_config(&Config::default()).unwrap();
        session.set_api_url("http://other:9000");
        session.set_top_k(TopK::new(3).unwrap());
        assert_eq!(session.api_url(), "http://other:9000");
        assert_eq!(session.top_k().get(), 3);
        assert_eq!(session.client(None).unwrap().base_url(), "http://other:9000");
    }
}
