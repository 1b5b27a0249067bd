//! Edge module - direct, undirected relationships between two participants

use crate::InteractionType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical identity of an unordered participant pair
///
/// The two ids are stored sorted, so `PairKey::new("b", "a")` and
/// `PairKey::new("a", "b")` are equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    low: String,
    high: String,
}

impl PairKey {
    /// Build the key for two ids in either order
    pub fn new(a: &str, b: &str) -> Self {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        Self {
            low: low.to_string(),
            high: high.to_string(),
        }
    }

    /// The lexicographically smaller id
    pub fn low(&self) -> &str {
        &self.low
    }

    /// The lexicographically larger id
    pub fn high(&self) -> &str {
        &self.high
    }

    /// Whether `id` is one of the two ends
    pub fn contains(&self, id: &str) -> bool {
        self.low == id || self.high == id
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.low, self.high)
    }
}

/// Aggregated interactions between one unordered pair of participants
///
/// `source` and `target` are the canonical (sorted) ends, not the caller
/// and callee of any particular record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectEdge {
    /// Smaller participant id
    pub source: String,

    /// Larger participant id
    pub target: String,

    /// Number of accepted records between the pair
    pub weight: u64,

    /// Records classified as calls
    pub calls: u64,

    /// Records classified as text messages
    pub sms: u64,

    /// Sum of record durations in seconds
    pub total_duration: f64,

    /// Earliest timestamp seen on the pair
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub first_contact: Option<NaiveDateTime>,

    /// Latest timestamp seen on the pair
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_contact: Option<NaiveDateTime>,
}

impl DirectEdge {
    /// Create an empty edge for a pair
    pub fn new(key: &PairKey) -> Self {
        Self {
            source: key.low().to_string(),
            target: key.high().to_string(),
            weight: 0,
            calls: 0,
            sms: 0,
            total_duration: 0.0,
            first_contact: None,
            last_contact: None,
        }
    }

    /// Canonical key of this edge
    pub fn key(&self) -> PairKey {
        PairKey::new(&self.source, &self.target)
    }

    /// Accumulate one record onto the edge
    pub fn record(
        &mut self,
        kind: InteractionType,
        duration: Option<f64>,
        timestamp: Option<NaiveDateTime>,
    ) {
        self.weight += 1;
        match kind {
            InteractionType::Call => self.calls += 1,
            InteractionType::Sms => self.sms += 1,
            InteractionType::Other => {}
        }
        self.total_duration += duration.unwrap_or(0.0);

        if let Some(ts) = timestamp {
            self.first_contact = Some(self.first_contact.map_or(ts, |t| t.min(ts)));
            self.last_contact = Some(self.last_contact.map_or(ts, |t| t.max(ts)));
        }
    }

    /// Whether `id` is one of the two ends
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }

    /// The end opposite to `id`, if `id` is an end
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source == id {
            Some(&self.target)
        } else if self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }
}
