//! Assessment Finder Extractor
//!
//! Turns raw test-data documents into an ordered list of queries.
//!
//! # Overview
//!
//! Test queries ship in two shapes. The preferred one is a pre-processed JSON
//! document exposing a `queries` array. When that is missing or malformed the
//! extractor falls back to the hand-exported CSV sheet: one header line, then
//! one free-text field per record, where fields may be quoted, may span
//! several lines and may contain doubled quotation marks.
//!
//! # Architecture
//!
//! ```text
//! DocumentSource → Extractor → [Structured, Delimited] → QueryList
//! ```
//!
//! Strategies are tried in order and the first one that recognizes the
//! document wins. The delimited strategy accepts anything, so extraction
//! never fails: an absent or unusable document yields an empty list.
//!
//! # Example Usage
//!
//! ```
//! use finder_extractor::extract;
//!
//! let csv = "Query\n\"Hiring a Java developer,\nfive years\"\nshort\n";
//! let queries = extract(Some(csv));
//! assert_eq!(queries, vec!["Hiring a Java developer,\nfive years".to_string()]);
//!
//! assert!(extract(None).is_empty());
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod loader;
mod scanner;
mod structured;

#[cfg(test)]
mod tests;

pub use config::{ExtractionStrategy, ExtractorConfig};
pub use error::ExtractorError;
pub use extractor::{extract, Extractor};
pub use loader::FsSource;
pub use scanner::{DelimitedScanner, ScanState};
pub use structured::parse_structured;
