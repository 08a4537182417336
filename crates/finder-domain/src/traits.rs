//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for fetching raw documents from a known location
///
/// Implemented by the infrastructure layer (finder-extractor for local files,
/// finder-sdk for HTTP). Callers treat any error as "no data available".
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    /// Error type for load operations
    type Error: std::fmt::Display;

    /// Fetch the full text of the document at `location`
    async fn load(&self, location: &str) -> Result<String, Self::Error>;
}
