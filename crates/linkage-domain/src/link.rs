//! Multi-degree link module

use crate::PairKey;
use serde::{Deserialize, Serialize};

/// A relationship between two participants at a given hop distance
///
/// `path` runs from `source` to `target` and always holds `degree + 1` ids.
/// Only degree-1 links carry `direct_interactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDegreeLink {
    /// Participant the path starts from
    pub source: String,

    /// Participant the path ends at
    pub target: String,

    /// Hop count of the path (1 = direct, 2 = one intermediary, 3 = two)
    pub degree: u8,

    /// Participant ids from source to target
    pub path: Vec<String>,

    /// Path without its two ends
    #[serde(default)]
    pub intermediate_nodes: Vec<String>,

    /// Path strength in [0, 100]
    pub strength: u8,

    /// Weight of the matching direct edge, for degree-1 links
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub direct_interactions: Option<u64>,
}

impl MultiDegreeLink {
    /// Build a link from a discovered path
    ///
    /// Returns `None` for paths with fewer than two ids.
    pub fn from_path(
        path: Vec<String>,
        strength: u8,
        direct_interactions: Option<u64>,
    ) -> Option<Self> {
        if path.len() < 2 {
            return None;
        }
        let last = path.len() - 1;
        let degree = u8::try_from(last).ok()?;

        Some(Self {
            source: path[0].clone(),
            target: path[last].clone(),
            degree,
            intermediate_nodes: path[1..last].to_vec(),
            path,
            strength,
            direct_interactions: if degree == 1 { direct_interactions } else { None },
        })
    }

    /// Canonical key of the endpoint pair
    pub fn key(&self) -> PairKey {
        PairKey::new(&self.source, &self.target)
    }

    /// Whether the link is a direct connection
    pub fn is_direct(&self) -> bool {
        self.degree == 1
    }

    /// Whether `id` is one of the two endpoints
    pub fn has_endpoint(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}
