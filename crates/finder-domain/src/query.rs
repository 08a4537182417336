//! Query module - extracted test queries

use std::fmt;

/// Queries must be strictly longer than this many characters to be kept.
///
/// Anything at or below the threshold is treated as formatting noise
/// (blank cells, placeholders, stray fragments around quotes).
pub const MIN_QUERY_LENGTH: usize = 10;

/// A trimmed query string whose length exceeds a minimum threshold.
///
/// Length is measured in Unicode scalar values, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Build a query using the default threshold.
    ///
    /// Returns `None` when the trimmed text is too short.
    pub fn new(text: &str) -> Option<Self> {
        Self::with_min_length(text, MIN_QUERY_LENGTH)
    }

    /// Build a query with an explicit threshold.
    pub fn with_min_length(text: &str, min_length: usize) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().count() <= min_length {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Borrow the query text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query and return its text
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Shorten the query for single-line display.
    ///
    /// Keeps the first `max_chars` characters and appends `...` when the
    /// query was longer.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.0.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered list of queries.
///
/// Never absent: a failed load is represented by an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryList {
    queries: Vec<Query>,
}

impl QueryList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from raw strings, dropping entries at or below the
    /// default threshold. Order and duplicates are preserved.
    pub fn from_strings<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            queries: values
                .into_iter()
                .filter_map(|v| Query::new(v.as_ref()))
                .collect(),
        }
    }

    /// Number of queries
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    /// Look up a query by its 1-based position, as shown to users.
    pub fn get_numbered(&self, number: usize) -> Option<&Query> {
        number.checked_sub(1).and_then(|idx| self.queries.get(idx))
    }

    /// Iterate over the queries in order
    pub fn iter(&self) -> std::slice::Iter<'_, Query> {
        self.queries.iter()
    }

    /// Copy the query texts out as plain strings
    pub fn to_strings(&self) -> Vec<String> {
        self.queries.iter().map(|q| q.as_str().to_string()).collect()
    }
}

impl From<Vec<Query>> for QueryList {
    fn from(queries: Vec<Query>) -> Self {
        Self { queries }
    }
}

impl IntoIterator for QueryList {
    type Item = Query;
    type IntoIter = std::vec::IntoIter<Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryList {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}
