//! Multi-degree path finder
//!
//! Breadth-first search from every node over the undirected adjacency graph
//! induced by the direct edges. Each unordered endpoint pair is recorded
//! once, at the first (and therefore shortest) distance it is reached.
//!
//! Cost is O(N · (N + E)) in the worst case, bounded in practice by the
//! depth cap: at depth 3 every source visits at most its 3-hop neighborhood.

use crate::builder::ContactGraph;
use crate::config::MAX_DEGREE;
use indexmap::IndexMap;
use linkage_domain::strength::path_strength;
use linkage_domain::{MultiDegreeLink, PairKey, StrengthConfig};
use std::collections::{HashMap, HashSet, VecDeque};

/// Undirected adjacency lists keyed by participant id
///
/// Neighbors are listed in edge first-seen order.
pub struct Adjacency<'g> {
    neighbors: IndexMap<&'g str, Vec<&'g str>>,
}

impl<'g> Adjacency<'g> {
    /// Build adjacency from a graph; edges to unknown nodes are ignored
    pub fn from_graph(graph: &'g ContactGraph) -> Self {
        let mut neighbors: IndexMap<&'g str, Vec<&'g str>> = graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), Vec::new()))
            .collect();

        for edge in &graph.edges {
            let (a, b) = (edge.source.as_str(), edge.target.as_str());
            if a == b || !neighbors.contains_key(a) || !neighbors.contains_key(b) {
                continue;
            }
            if let Some(list) = neighbors.get_mut(a) {
                list.push(b);
            }
            if let Some(list) = neighbors.get_mut(b) {
                list.push(a);
            }
        }

        Self { neighbors }
    }

    /// Direct neighbors of `id`
    pub fn neighbors(&self, id: &str) -> &[&'g str] {
        self.neighbors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of direct neighbors of `id`
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }
}

/// Discover links of degree 1 through `max_depth`
///
/// `max_depth` is clamped to `[1, MAX_DEGREE]`. Sources are visited in node
/// order, so results are stable for a given graph.
pub fn find_links(
    graph: &ContactGraph,
    max_depth: usize,
    config: &StrengthConfig,
) -> Vec<MultiDegreeLink> {
    let max_depth = max_depth.clamp(1, usize::from(MAX_DEGREE));
    let adjacency = Adjacency::from_graph(graph);
    let weights: HashMap<PairKey, u64> = graph.edges.iter().map(|e| (e.key(), e.weight)).collect();

    let mut recorded: HashSet<PairKey> = HashSet::new();
    let mut links = Vec::new();

    for node in &graph.nodes {
        let source = node.id.as_str();
        let mut parents: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::from([source]);
        let mut queue: VecDeque<(&str, usize)> = VecDeque::from([(source, 0)]);

        while let Some((current, depth)) = queue.pop_front() {
            if depth == max_depth {
                continue;
            }
            for &next in adjacency.neighbors(current) {
                if !visited.insert(next) {
                    continue;
                }
                parents.insert(next, current);
                queue.push_back((next, depth + 1));

                let key = PairKey::new(source, next);
                if recorded.contains(&key) {
                    continue;
                }

                let path = trace_path(&parents, source, next);
                let counts: Vec<usize> = path.iter().map(|id| adjacency.degree(id)).collect();
                let strength = path_strength(&counts, config);
                let direct = weights.get(&key).copied();

                if let Some(link) = MultiDegreeLink::from_path(path, strength, direct) {
                    links.push(link);
                    recorded.insert(key);
                }
            }
        }
    }

    links
}

/// Walk parent pointers back from `target` to `source`
fn trace_path(parents: &HashMap<&str, &str>, source: &str, target: &str) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;
    while current != source {
        match parents.get(current) {
            Some(&parent) => {
                path.push(parent.to_string());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
