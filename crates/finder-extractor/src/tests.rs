//! Integration tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{extract, ExtractionStrategy, Extractor, ExtractorConfig, FsSource};
    use finder_domain::DocumentSource;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory source that records which locations were requested
    #[derive(Default)]
    struct MapSource {
        documents: HashMap<String, String>,
        requested: RefCell<Vec<String>>,
    }

    impl MapSource {
        fn with(mut self, location: &str, body: &str) -> Self {
            self.documents.insert(location.to_string(), body.to_string());
            self
        }
    }

    impl DocumentSource for MapSource {
        type Error = String;

        async fn load(&self, location: &str) -> Result<String, Self::Error> {
            self.requested.borrow_mut().push(location.to_string());
            self.documents
                .get(location)
                .cloned()
                .ok_or_else(|| format!("{} not found", location))
        }
    }

    #[test]
    fn test_mixed_document() {
        let doc = "header\n\"line one\nstill line one\"\nplain short\nthis one is long enough";
        assert_eq!(
            extract(Some(doc)),
            vec![
                "line one\nstill line one".to_string(),
                "plain short".to_string(),
                "this one is long enough".to_string(),
            ]
        );
    }

    #[test]
    fn test_short_escaped_value_filtered() {
        assert!(extract(Some("h\n\"a\"\"b\"")).is_empty());
    }

    #[test]
    fn test_escaped_quote_survives_when_long_enough() {
        let queries = extract(Some("Query\n\"Looking for a \"\"senior\"\" analyst\"\n"));
        assert_eq!(queries, vec!["Looking for a \"senior\" analyst".to_string()]);
    }

    #[test]
    fn test_empty_and_absent_documents() {
        assert!(extract(None).is_empty());
        assert!(extract(Some("")).is_empty());
        assert!(extract(Some("Query\n")).is_empty());
        assert!(extract(Some("Query")).is_empty());
    }

    #[test]
    fn test_header_discarded_even_when_long() {
        let queries = extract(Some("This header is definitely long\nand this row is long too"));
        assert_eq!(queries, vec!["and this row is long too".to_string()]);
    }

    #[test]
    fn test_trailing_record_without_newline() {
        let queries = extract(Some("Query\nfirst record here\n\"last record, no newline"));
        assert_eq!(
            queries,
            vec![
                "first record here".to_string(),
                "last record, no newline".to_string()
            ]
        );
    }

    #[test]
    fn test_structured_document_is_preferred() {
        // Would yield the raw JSON line if it went through the delimited scanner
        let doc = "{\"queries\": [\"short\", \"  Hiring a data analyst  \", \"Java developer\"]}";
        assert_eq!(
            extract(Some(doc)),
            vec!["Hiring a data analyst".to_string(), "Java developer".to_string()]
        );
    }

    #[test]
    fn test_structured_match_wins_even_when_empty() {
        let doc = "{\"queries\": [\"tiny\"]}\nthis second line is long";
        // Invalid JSON as a whole, so the delimited scanner handles it
        assert_eq!(extract(Some(doc)), vec!["this second line is long".to_string()]);

        let doc = "{\"queries\": [\"tiny\"]}";
        assert!(extract(Some(doc)).is_empty());
    }

    #[test]
    fn test_json_without_queries_falls_back_to_scanner() {
        let doc = "{\"items\": 1}\n\"a value that is long enough\"";
        assert_eq!(extract(Some(doc)), vec!["a value that is long enough".to_string()]);
    }

    #[test]
    fn test_custom_threshold() {
        let config = ExtractorConfig {
            min_query_length: 3,
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(config).unwrap();
        let queries = extractor.extract(Some("h\nabc\nabcd\n"));
        assert_eq!(queries.to_strings(), vec!["abcd".to_string()]);
    }

    #[test]
    fn test_delimited_only_chain_ignores_json() {
        let config = ExtractorConfig {
            strategies: vec![ExtractionStrategy::Delimited],
            ..ExtractorConfig::default()
        };
        let extractor = Extractor::new(config).unwrap();
        let doc = "{\"queries\": [\"Hiring a data analyst\"]}";
        // The JSON text is a lone header line
        assert!(extractor.extract(Some(doc)).is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            strategies: vec![],
            ..ExtractorConfig::default()
        };
        assert!(Extractor::new(config).is_err());
    }

    #[tokio::test]
    async fn test_load_prefers_primary() {
        let source = MapSource::default()
            .with("queries.json", r#"{"queries": ["primary query text"]}"#)
            .with("set.csv", "Query\nsecondary query text");

        let queries = Extractor::default()
            .load(&source, "queries.json", "set.csv")
            .await;

        assert_eq!(queries.to_strings(), vec!["primary query text".to_string()]);
        assert_eq!(*source.requested.borrow(), vec!["queries.json".to_string()]);
    }

    #[tokio::test]
    async fn test_load_falls_back_when_primary_missing() {
        let source = MapSource::default().with("set.csv", "Query\nsecondary query text");

        let queries = Extractor::default()
            .load(&source, "queries.json", "set.csv")
            .await;

        assert_eq!(queries.to_strings(), vec!["secondary query text".to_string()]);
    }

    #[tokio::test]
    async fn test_load_falls_back_on_structural_mismatch() {
        let source = MapSource::default()
            .with("queries.json", "<html>not found</html>")
            .with("set.csv", "Query\nsecondary query text");

        let queries = Extractor::default()
            .load(&source, "queries.json", "set.csv")
            .await;

        assert_eq!(queries.to_strings(), vec!["secondary query text".to_string()]);
        assert_eq!(source.requested.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_load_with_no_sources_is_empty() {
        let source = MapSource::default();
        let queries = Extractor::default()
            .load(&source, "queries.json", "set.csv")
            .await;
        assert!(queries.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("test-set.csv"),
            "Query\r\n\"Need a Java developer who\r\ncollaborates well\"\r\n",
        )
        .unwrap();

        let source = FsSource::with_root(dir.path());
        let queries = Extractor::default()
            .load(&source, "test-queries.json", "test-set.csv")
            .await;

        assert_eq!(
            queries.to_strings(),
            vec!["Need a Java developer who\ncollaborates well".to_string()]
        );
    }

    proptest! {
        #[test]
        fn prop_extraction_is_idempotent(doc in "[a-z \"\n\r]{0,200}") {
            prop_assert_eq!(extract(Some(&doc)), extract(Some(&doc)));
        }

        #[test]
        fn prop_results_are_trimmed_and_long(doc in "(?s).{0,300}") {
            for q in extract(Some(&doc)) {
                prop_assert_eq!(q.as_str(), q.trim());
                prop_assert!(q.chars().count() > 10);
            }
        }

        #[test]
        fn prop_header_line_never_leaks(header in "[A-Za-z ]{11,40}", row in "[a-z]{11,40}") {
            let doc = format!("{}\n{}", header, row);
            prop_assert_eq!(extract(Some(&doc)), vec![row.clone()]);
        }
    }
}
