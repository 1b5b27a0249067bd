//! Linkage Engine
//!
//! Infers direct and multi-degree relationships from pairwise interaction
//! records (calls, text messages) and produces a classified, filtered graph.
//!
//! # Architecture
//!
//! ```text
//! Rows → Field Extractor → Row Filter → Graph Builder → Path Finder
//!      → Strength Scorer → Classifier & Edge Filter → NetworkAnalysis
//! ```
//!
//! # Key Features
//!
//! - **Alias-based extraction**: column names matched case, punctuation and
//!   accent insensitively
//! - **Order-independent aggregation**: one edge per unordered pair
//! - **Bounded BFS**: links up to three hops, each pair recorded once at its
//!   shortest distance
//! - **Single strength scale**: 0-100 for direct and derived links alike
//! - **Pure**: no state survives a call
//!
//! # Example Usage
//!
//! ```
//! use linkage_engine::{analyze, FilterConfig};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({ "Numéro A": "0601", "Numéro B": "0602", "Type": "Appel" }),
//!     json!({ "Numéro A": "0602", "Numéro B": "0603", "Type": "SMS" }),
//! ];
//!
//! let analysis = analyze(&rows, &FilterConfig::default()).unwrap();
//! for link in analysis.ranked_links(Some(5)) {
//!     println!("{} -> {} (degree {}, strength {})",
//!         link.source, link.target, link.degree, link.strength);
//! }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod builder;
mod config;
mod error;
mod filter;
mod types;

pub mod fields;
pub mod paths;
pub mod time;


pub use analyzer::{analyze, Analyzer};
pub use builder::{build_graph, ContactGraph};
pub use config::{
    DateRange, DurationRange, EngineConfig, FieldAliases, FilterConfig, InteractionFilter,
    MAX_DEGREE,
};
pub use error::EngineError;
pub use fields::{extract_field, extract_record, ExtractedRecord};
pub use filter::{EdgeFilter, RowFilter};
pub use paths::find_links;
pub use types::{ClassifiedEdge, NetworkAnalysis, NetworkStats};
