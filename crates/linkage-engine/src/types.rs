//! Result types of an analysis

use linkage_domain::{DirectEdge, LinkClass, MultiDegreeLink, Node};
use serde::{Deserialize, Serialize};

/// A direct edge or derived link, classified and ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEdge {
    /// One end (canonical source for direct edges, path start for derived)
    pub source: String,

    /// The other end
    pub target: String,

    /// 1 for direct edges, 2 or 3 for derived links
    pub degree: u8,

    /// Direct interaction count; zero for derived links
    pub weight: u64,

    /// Strength in [0, 100]
    pub strength: u8,

    /// Quality tier derived from `strength`
    pub classification: LinkClass,

    /// Calls on the direct edge
    pub calls: u64,

    /// Text messages on the direct edge
    pub sms: u64,

    /// Total seconds on the direct edge
    pub total_duration: f64,

    /// Full path for derived links
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub path: Vec<String>,

    /// Intermediaries for derived links
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub intermediate_nodes: Vec<String>,
}

impl ClassifiedEdge {
    /// Wrap a direct edge with its strength and class
    pub fn direct(edge: &DirectEdge, strength: u8, classification: LinkClass) -> Self {
        Self {
            source: edge.source.clone(),
            target: edge.target.clone(),
            degree: 1,
            weight: edge.weight,
            strength,
            classification,
            calls: edge.calls,
            sms: edge.sms,
            total_duration: edge.total_duration,
            path: Vec::new(),
            intermediate_nodes: Vec::new(),
        }
    }

    /// Wrap a derived link with its path strength
    pub fn derived(link: &MultiDegreeLink, classification: LinkClass) -> Self {
        Self {
            source: link.source.clone(),
            target: link.target.clone(),
            degree: link.degree,
            weight: 0,
            strength: link.strength,
            classification,
            calls: 0,
            sms: 0,
            total_duration: 0.0,
            path: link.path.clone(),
            intermediate_nodes: link.intermediate_nodes.clone(),
        }
    }

    /// Whether this edge comes from a derived link
    pub fn is_derived(&self) -> bool {
        self.degree > 1
    }
}

/// Summary statistics of an analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    /// Nodes after whitelist and minimum-interaction pruning
    pub total_nodes: usize,

    /// Direct edges after pruning
    pub total_direct_edges: usize,

    /// Multi-degree links discovered, before edge filters
    pub total_multi_degree_links: usize,

    /// `2 · direct edges / nodes`, or 0 with no nodes
    pub average_connections: f64,
}

impl NetworkStats {
    /// Compute statistics from the pruned graph sizes
    pub fn compute(nodes: usize, direct_edges: usize, multi_degree_links: usize) -> Self {
        let average_connections = if nodes == 0 {
            0.0
        } else {
            2.0 * direct_edges as f64 / nodes as f64
        };
        Self {
            total_nodes: nodes,
            total_direct_edges: direct_edges,
            total_multi_degree_links: multi_degree_links,
            average_connections,
        }
    }
}

/// Complete output of one analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkAnalysis {
    /// Surviving participants
    pub nodes: Vec<Node>,

    /// Direct and derived edges that passed every filter
    pub edges: Vec<ClassifiedEdge>,

    /// Every discovered link, before edge filters
    pub multi_degree_links: Vec<MultiDegreeLink>,

    /// Summary statistics
    pub stats: NetworkStats,
}

impl NetworkAnalysis {
    /// Look up a surviving node
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Links ordered by strength (desc), then degree (asc), then pair key
    pub fn ranked_links(&self, limit: Option<usize>) -> Vec<&MultiDegreeLink> {
        let mut ranked: Vec<&MultiDegreeLink> = self.multi_degree_links.iter().collect();
        ranked.sort_by(|a, b| {
            b.strength
                .cmp(&a.strength)
                .then(a.degree.cmp(&b.degree))
                .then_with(|| a.key().cmp(&b.key()))
        });
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Every link with `id` as an endpoint, in discovery order
    pub fn links_for(&self, id: &str) -> Vec<&MultiDegreeLink> {
        self.multi_degree_links
            .iter()
            .filter(|l| l.has_endpoint(id))
            .collect()
    }

    /// Edges of the given class
    pub fn edges_of_class(&self, class: LinkClass) -> impl Iterator<Item = &ClassifiedEdge> {
        self.edges.iter().filter(move |e| e.classification == class)
    }
}
