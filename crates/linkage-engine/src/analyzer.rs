//! The analysis pipeline
//!
//! ```text
//! rows → extract → row filter → build graph → whitelist → min interactions
//!      → find links → classify → edge filter → NetworkAnalysis
//! ```

use crate::builder::{build_graph, ContactGraph};
use crate::config::{EngineConfig, FilterConfig, MAX_DEGREE};
use crate::error::EngineError;
use crate::fields::{extract_record, ExtractedRecord};
use crate::filter::{EdgeFilter, RowFilter};
use crate::paths::find_links;
use crate::types::{ClassifiedEdge, NetworkAnalysis, NetworkStats};
use linkage_domain::strength::DIRECT_STRENGTH;
use linkage_domain::MultiDegreeLink;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Runs analyses with a fixed engine configuration
///
/// Holds no state between calls: the same rows and filters always produce
/// the same result.
///
/// # Examples
///
/// ```
/// use linkage_engine::{Analyzer, EngineConfig, FilterConfig};
/// use serde_json::json;
///
/// let rows = vec![
///     json!({ "caller": "A", "callee": "B", "type": "call" }),
///     json!({ "caller": "B", "callee": "C", "type": "sms" }),
/// ];
///
/// let analyzer = Analyzer::new(EngineConfig::default());
/// let analysis = analyzer.analyze(&rows, &FilterConfig::default()).unwrap();
///
/// assert_eq!(analysis.stats.total_nodes, 3);
/// assert_eq!(analysis.stats.total_direct_edges, 2);
/// assert!(analysis.edges.iter().any(|e| e.degree == 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: EngineConfig,
}

impl Analyzer {
    /// Create an analyzer
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer after validating its configuration
    pub fn try_new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self::new(config))
    }

    /// The engine configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Extract every row, skipping malformed ones
    pub fn extract(&self, rows: &[Value]) -> Vec<ExtractedRecord> {
        rows.iter()
            .enumerate()
            .filter_map(|(idx, row)| {
                let record = extract_record(row, &self.config.aliases);
                if record.is_none() {
                    debug!("Skipping row {}: missing or identical participants", idx);
                }
                record
            })
            .collect()
    }

    /// Run the full pipeline over `rows`
    pub fn analyze(
        &self,
        rows: &[Value],
        filters: &FilterConfig,
    ) -> Result<NetworkAnalysis, EngineError> {
        filters.validate().map_err(EngineError::InvalidFilter)?;
        let row_filter = RowFilter::from_config(filters)?;

        let extracted = self.extract(rows);
        let extracted_count = extracted.len();
        let accepted: Vec<ExtractedRecord> = extracted
            .into_iter()
            .filter(|r| row_filter.accepts(r))
            .collect();
        debug!(
            "{} of {} rows extracted, {} passed row filters",
            extracted_count,
            rows.len(),
            accepted.len()
        );

        let mut graph = build_graph(&accepted);
        graph.restrict_to_contacts(&filters.contact_whitelist);
        graph.drop_below_interactions(filters.min_interactions);

        if filters.max_path_length > usize::from(MAX_DEGREE) {
            warn!(
                "max_path_length {} exceeds supported degree {}, searching {} hops",
                filters.max_path_length, MAX_DEGREE, MAX_DEGREE
            );
        }
        let links = find_links(&graph, filters.max_path_length, &self.config.strength);
        let edges = self.classify(&graph, &links, filters)?;
        let stats = NetworkStats::compute(graph.nodes.len(), graph.edges.len(), links.len());

        info!(
            "Analyzed {} rows: {} nodes, {} direct edges, {} multi-degree links, {} edges shown",
            rows.len(),
            stats.total_nodes,
            stats.total_direct_edges,
            stats.total_multi_degree_links,
            edges.len()
        );

        Ok(NetworkAnalysis {
            nodes: graph.nodes,
            edges,
            multi_degree_links: links,
            stats,
        })
    }

    /// Classify direct edges and derived links, keeping those that pass
    fn classify(
        &self,
        graph: &ContactGraph,
        links: &[MultiDegreeLink],
        filters: &FilterConfig,
    ) -> Result<Vec<ClassifiedEdge>, EngineError> {
        let thresholds = &self.config.classification;
        let edge_filter = EdgeFilter::new(filters);
        let direct_class = thresholds.classify(DIRECT_STRENGTH);

        let mut edges: Vec<ClassifiedEdge> = graph
            .edges
            .iter()
            .map(|edge| ClassifiedEdge::direct(edge, DIRECT_STRENGTH, direct_class))
            .filter(|edge| edge_filter.accepts(edge))
            .collect();

        if !filters.show_indirect_connections {
            return Ok(edges);
        }

        let known: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for link in links.iter().filter(|l| !l.is_direct()) {
            ensure_endpoints(&known, link)?;
            let edge = ClassifiedEdge::derived(link, thresholds.classify(link.strength));
            if edge_filter.accepts(&edge) {
                edges.push(edge);
            }
        }

        Ok(edges)
    }
}

/// Both endpoints of a derived link must be surviving nodes
fn ensure_endpoints(known: &HashSet<&str>, link: &MultiDegreeLink) -> Result<(), EngineError> {
    match [&link.source, &link.target]
        .into_iter()
        .find(|id| !known.contains(id.as_str()))
    {
        Some(missing) => Err(EngineError::NodeNotFound(missing.clone())),
        None => Ok(()),
    }
}

/// Run an analysis with the default engine configuration
pub fn analyze(rows: &[Value], filters: &FilterConfig) -> Result<NetworkAnalysis, EngineError> {
    Analyzer::default().analyze(rows, filters)
}
