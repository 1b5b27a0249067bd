//! Linkage Domain Layer
//!
//! This crate holds the value types of the relationship inference engine and
//! the pure scoring rules that operate on them. It performs no I/O and keeps
//! no state; the engine crate composes these pieces into a pipeline.
//!
//! ## Key Concepts
//!
//! - **Node**: a participant, identified by its raw id (usually a phone number)
//! - **Direct Edge**: aggregated interactions between one unordered pair
//! - **Pair Key**: the sorted two-id identity used to deduplicate edges and links
//! - **Multi-Degree Link**: a relationship of 1 to 3 hops with a strength score
//! - **Link Class**: quality tier (primary / secondary / weak) derived from strength

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classification;
pub mod edge;
pub mod interaction;
pub mod link;
pub mod node;
pub mod strength;

// Re-exports for convenience
pub use classification::{ClassificationThresholds, LinkClass};
pub use edge::{DirectEdge, PairKey};
pub use interaction::InteractionType;
pub use link::MultiDegreeLink;
pub use node::{ContactTier, Node};
pub use strength::StrengthConfig;
