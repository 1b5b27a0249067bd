//! Property tests for graph construction and link discovery

use linkage_domain::PairKey;
use linkage_engine::{analyze, FilterConfig};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};

/// Rows over a small id space so that paths and repeats are common
fn rows_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..8, 0u8..8), 0..40)
}

fn to_rows(pairs: &[(u8, u8)]) -> Vec<Value> {
    pairs
        .iter()
        .map(|(a, b)| json!({ "caller": format!("p{}", a), "callee": format!("p{}", b), "type": "call" }))
        .collect()
}

proptest! {
    /// Property: Edge weight equals the number of rows between the pair, in any order
    #[test]
    fn test_weights_are_order_independent(pairs in rows_strategy()) {
        let forward = to_rows(&pairs);
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = analyze(&forward, &FilterConfig::default()).unwrap();
        let b = analyze(&reversed, &FilterConfig::default()).unwrap();

        let mut expected: HashMap<PairKey, u64> = HashMap::new();
        for (x, y) in pairs.iter().filter(|(x, y)| x != y) {
            *expected.entry(PairKey::new(&format!("p{}", x), &format!("p{}", y))).or_insert(0) += 1;
        }

        for analysis in [&a, &b] {
            let weights: HashMap<PairKey, u64> = analysis
                .edges
                .iter()
                .filter(|e| e.degree == 1)
                .map(|e| (PairKey::new(&e.source, &e.target), e.weight))
                .collect();
            prop_assert_eq!(&weights, &expected);
        }
    }

    /// Property: No node is its own neighbor
    #[test]
    fn test_no_self_loops(pairs in rows_strategy()) {
        let analysis = analyze(&to_rows(&pairs), &FilterConfig::default()).unwrap();
        prop_assert!(analysis.edges.iter().all(|e| e.source != e.target));
        prop_assert!(analysis.multi_degree_links.iter().all(|l| l.source != l.target));
    }

    /// Property: Each unordered pair appears at most once among links
    #[test]
    fn test_links_are_deduplicated(pairs in rows_strategy()) {
        let analysis = analyze(&to_rows(&pairs), &FilterConfig::default()).unwrap();
        let keys: HashSet<PairKey> = analysis.multi_degree_links.iter().map(|l| l.key()).collect();
        prop_assert_eq!(keys.len(), analysis.multi_degree_links.len());
    }

    /// Property: Paths are simple and their hop count equals the degree
    #[test]
    fn test_paths_are_simple(pairs in rows_strategy()) {
        let analysis = analyze(&to_rows(&pairs), &FilterConfig::default()).unwrap();
        for link in &analysis.multi_degree_links {
            let unique: HashSet<&String> = link.path.iter().collect();
            prop_assert_eq!(unique.len(), link.path.len());
            prop_assert_eq!(link.path.len(), usize::from(link.degree) + 1);
            prop_assert!((1..=3).contains(&link.degree));
            prop_assert_eq!(link.intermediate_nodes.len(), usize::from(link.degree) - 1);
        }
    }

    /// Property: Every hop of a derived path is a direct edge
    #[test]
    fn test_paths_follow_edges(pairs in rows_strategy()) {
        let analysis = analyze(&to_rows(&pairs), &FilterConfig::default()).unwrap();
        let direct: HashSet<PairKey> = analysis
            .edges
            .iter()
            .filter(|e| e.degree == 1)
            .map(|e| PairKey::new(&e.source, &e.target))
            .collect();
        for link in &analysis.multi_degree_links {
            for hop in link.path.windows(2) {
                prop_assert!(direct.contains(&PairKey::new(&hop[0], &hop[1])));
            }
            // A derived pair never has a direct edge of its own
            if link.degree > 1 {
                prop_assert!(!direct.contains(&link.key()));
            }
        }
    }

    /// Property: Degree-1 links and direct edges always score 100
    #[test]
    fn test_direct_links_full_strength(pairs in rows_strategy()) {
        let analysis = analyze(&to_rows(&pairs), &FilterConfig::default()).unwrap();
        for link in analysis.multi_degree_links.iter().filter(|l| l.degree == 1) {
            prop_assert_eq!(link.strength, 100);
            prop_assert!(link.direct_interactions.is_some());
        }
        for edge in analysis.edges.iter().filter(|e| e.degree == 1) {
            prop_assert_eq!(edge.strength, 100);
        }
    }

    /// Property: Identical inputs produce identical outputs
    #[test]
    fn test_idempotence(pairs in rows_strategy()) {
        let rows = to_rows(&pairs);
        let first = analyze(&rows, &FilterConfig::default()).unwrap();
        let second = analyze(&rows, &FilterConfig::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}
