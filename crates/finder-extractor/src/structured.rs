//! Recognize the pre-processed JSON form of the test data

use crate::error::ExtractorError;
use serde_json::Value;

/// Parse a JSON document of the form `{"queries": ["...", ...]}`.
///
/// Entries are trimmed; blank and non-string entries are skipped. Extra
/// attributes (such as `count`) are ignored. Anything else is an
/// `InvalidFormat` error so that the next strategy can take over.
pub fn parse_structured(document: &str) -> Result<Vec<String>, ExtractorError> {
    let json: Value = serde_json::from_str(document)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let queries = obj
        .get("queries")
        .ok_or_else(|| ExtractorError::InvalidFormat("Missing 'queries' attribute".to_string()))?
        .as_array()
        .ok_or_else(|| ExtractorError::InvalidFormat("'queries' is not an array".to_string()))?;

    Ok(queries
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect())
}
