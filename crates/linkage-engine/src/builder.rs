//! Direct graph construction and pruning

use crate::fields::ExtractedRecord;
use indexmap::IndexMap;
use linkage_domain::{DirectEdge, Node, PairKey};
use std::collections::HashSet;
use tracing::debug;

/// Nodes and direct edges built from one set of records
///
/// Both sequences are in first-seen order, which keeps output stable for a
/// given input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactGraph {
    /// One node per distinct participant
    pub nodes: Vec<Node>,
    /// One edge per unordered participant pair
    pub edges: Vec<DirectEdge>,
}

/// Aggregate records into nodes and direct edges
///
/// Repeated records between the same pair accumulate onto one edge; counts
/// do not depend on record order.
pub fn build_graph<'a, I>(records: I) -> ContactGraph
where
    I: IntoIterator<Item = &'a ExtractedRecord>,
{
    let mut nodes: IndexMap<String, Node> = IndexMap::new();
    let mut edges: IndexMap<PairKey, DirectEdge> = IndexMap::new();

    for record in records {
        if record.caller == record.callee {
            continue;
        }

        for id in [&record.caller, &record.callee] {
            nodes
                .entry(id.clone())
                .or_insert_with(|| Node::new(id.as_str()))
                .record(record.kind);
        }

        let key = PairKey::new(&record.caller, &record.callee);
        edges
            .entry(key)
            .or_insert_with_key(DirectEdge::new)
            .record(record.kind, record.duration, record.timestamp);
    }

    ContactGraph {
        nodes: nodes.into_values().collect(),
        edges: edges.into_values().collect(),
    }
}

impl ContactGraph {
    /// Whether the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up the direct edge between two participants
    pub fn edge(&self, a: &str, b: &str) -> Option<&DirectEdge> {
        let key = PairKey::new(a, b);
        self.edges
            .iter()
            .find(|e| e.source == key.low() && e.target == key.high())
    }

    /// Keep only whitelisted participants and their direct contacts
    ///
    /// Edges survive when at least one end is whitelisted; nodes survive when
    /// they are an end of a surviving edge. An empty whitelist is a no-op.
    pub fn restrict_to_contacts(&mut self, whitelist: &[String]) {
        if whitelist.is_empty() {
            return;
        }
        let allowed: HashSet<&str> = whitelist.iter().map(String::as_str).collect();

        self.edges
            .retain(|e| allowed.contains(e.source.as_str()) || allowed.contains(e.target.as_str()));

        let kept: HashSet<&str> = self
            .edges
            .iter()
            .flat_map(|e| [e.source.as_str(), e.target.as_str()])
            .collect();
        let before = self.nodes.len();
        self.nodes.retain(|n| kept.contains(n.id.as_str()));

        debug!(
            "Whitelist of {} ids kept {}/{} nodes and {} edges",
            allowed.len(),
            self.nodes.len(),
            before,
            self.edges.len()
        );
    }

    /// Drop participants with fewer than `min` interactions and their edges
    ///
    /// A node with exactly `min` interactions is kept.
    pub fn drop_below_interactions(&mut self, min: u64) {
        if min == 0 {
            return;
        }
        let before = self.nodes.len();
        self.nodes.retain(|n| n.interactions >= min);

        let kept: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .retain(|e| kept.contains(e.source.as_str()) && kept.contains(e.target.as_str()));

        debug!(
            "Minimum of {} interactions dropped {} nodes",
            min,
            before - self.nodes.len()
        );
    }
}
