//! Assessment Finder Rust SDK
//!
//! Client library for the assessment recommendation service.
//!
//! # Example
//!
//! ```no_run
//! use finder_domain::TopK;
//! use finder_sdk::FinderClient;
//!
//! # async fn example() -> Result<(), finder_sdk::SdkError> {
//! let client = FinderClient::new("http://localhost:8000")?;
//! let results = client
//!     .recommend("Java developer with 5 years experience", TopK::default())
//!     .await?;
//!
//! for rec in &results.recommendations {
//!     println!("{} ({:.1}%)", rec.assessment_name, rec.relevance_percent());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod source;
mod wire;

pub use client::{FinderClient, DEFAULT_TIMEOUT_SECS};
pub use error::SdkError;
pub use source::HttpSource;
pub use wire::HealthStatus;
