//! Assessment Finder Domain Layer
//!
//! This crate contains the domain model shared by every other crate in the
//! workspace. It has ZERO external dependencies and defines the value objects
//! and trait interfaces that the infrastructure layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Query**: a trimmed free-text job requirement, long enough to be useful
//! - **Query List**: ordered, possibly empty sequence of queries (duplicates kept)
//! - **Recommendation**: a ranked assessment returned by the recommendation service
//! - **Top K**: the bounded number of results requested from the service
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure domain logic only
//! - Loading, parsing and HTTP live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod query;
pub mod recommendation;
pub mod top_k;
pub mod traits;

// Re-exports for convenience
pub use query::{Query, QueryList, MIN_QUERY_LENGTH};
pub use recommendation::{Recommendation, RecommendationSet};
pub use top_k::TopK;
pub use traits::DocumentSource;
