//! Filesystem document source

use crate::error::ExtractorError;
use finder_domain::DocumentSource;
use std::path::PathBuf;

/// Reads documents from local files.
///
/// Relative locations are resolved against `root` when one is set.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    root: Option<PathBuf>,
}

impl FsSource {
    /// Resolve locations against the process working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locations against `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(location),
            None => PathBuf::from(location),
        }
    }
}

impl DocumentSource for FsSource {
    type Error = ExtractorError;

    async fn load(&self, location: &str) -> Result<String, Self::Error> {
        let path = self.resolve(location);
        tokio::fs::read_to_string(&path).await.map_err(|e| {
            ExtractorError::SourceUnavailable(format!("{}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.csv"), "Query\nvalue").unwrap();

        let source = FsSource::with_root(dir.path());
        assert_eq!(source.load("doc.csv").await.unwrap(), "Query\nvalue");
    }

    #[tokio::test]
    async fn test_missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::with_root(dir.path());
        let result = source.load("missing.json").await;
        assert!(matches!(result, Err(ExtractorError::SourceUnavailable(_))));
    }
}
