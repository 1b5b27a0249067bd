//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use colored::*;
use linkage_domain::{LinkClass, MultiDegreeLink};
use linkage_engine::{FilterConfig, NetworkAnalysis};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a complete analysis.
    pub fn format_analysis(&self, analysis: &NetworkAnalysis, show_links: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Table => Ok(self.format_analysis_table(analysis, show_links)),
            OutputFormat::Quiet => Ok(analysis
                .edges
                .iter()
                .map(|e| format!("{}\t{}\t{}", e.source, e.target, e.degree))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a list of links.
    pub fn format_links(&self, links: &[&MultiDegreeLink]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(links)?),
            OutputFormat::Table => Ok(self.format_links_table(links)),
            OutputFormat::Quiet => Ok(links
                .iter()
                .map(|l| l.key().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a filter configuration.
    pub fn format_filters(&self, filters: &FilterConfig) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(filters)?),
            OutputFormat::Table | OutputFormat::Quiet => {
                filters.to_toml().map_err(CliError::Config)
            }
        }
    }

    fn format_analysis_table(&self, analysis: &NetworkAnalysis, show_links: bool) -> String {
        if analysis.nodes.is_empty() {
            return self.colorize("No interactions found.", "yellow");
        }

        let stats = &analysis.stats;
        let mut sections = vec![self.info(&format!(
            "{} nodes, {} direct edges, {} multi-degree links, {:.2} average connections",
            stats.total_nodes,
            stats.total_direct_edges,
            stats.total_multi_degree_links,
            stats.average_connections
        ))];

        let mut nodes = Builder::default();
        nodes.push_record(["Contact", "Interactions", "Calls", "SMS", "Tier"]);
        for node in &analysis.nodes {
            nodes.push_record([
                node.id.clone(),
                node.interactions.to_string(),
                node.calls.to_string(),
                node.sms.to_string(),
                node.tier.as_str().to_string(),
            ]);
        }
        sections.push(finish(nodes));

        if analysis.edges.is_empty() {
            sections.push(self.colorize("No edges passed the filters.", "yellow"));
        } else {
            let mut edges = Builder::default();
            edges.push_record(["Source", "Target", "Degree", "Weight", "Strength", "Class", "Via"]);
            for edge in &analysis.edges {
                edges.push_record([
                    edge.source.clone(),
                    edge.target.clone(),
                    edge.degree.to_string(),
                    edge.weight.to_string(),
                    edge.strength.to_string(),
                    self.class_label(edge.classification),
                    edge.intermediate_nodes.join(" > "),
                ]);
            }
            sections.push(finish(edges));

            let counts: Vec<String> = LinkClass::ALL
                .iter()
                .map(|class| {
                    format!("{} {}", analysis.edges_of_class(*class).count(), class.as_str())
                })
                .collect();
            sections.push(counts.join(", "));
        }

        if show_links {
            sections.push(self.format_links_table(&analysis.ranked_links(None)));
        }

        sections.join("\n")
    }

    fn format_links_table(&self, links: &[&MultiDegreeLink]) -> String {
        if links.is_empty() {
            return self.colorize("No links found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Source", "Target", "Degree", "Strength", "Path", "Direct"]);
        for link in links {
            builder.push_record([
                link.source.clone(),
                link.target.clone(),
                link.degree.to_string(),
                link.strength.to_string(),
                link.path.join(" > "),
                link.direct_interactions
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]);
        }
        finish(builder)
    }

    fn class_label(&self, class: LinkClass) -> String {
        let color = match class {
            LinkClass::Primary => "green",
            LinkClass::Secondary => "yellow",
            LinkClass::Weak => "red",
        };
        self.colorize(class.as_str(), color)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn finish(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkage_engine::analyze;
    use serde_json::json;

    fn sample() -> NetworkAnalysis {
        let rows = vec![
            json!({ "caller": "A", "callee": "B", "type": "call" }),
            json!({ "caller": "A", "callee": "B", "type": "sms" }),
            json!({ "caller": "B", "callee": "C", "type": "call" }),
        ];
        analyze(&rows, &FilterConfig::default()).unwrap()
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_analysis(&sample(), false).unwrap();
        assert!(output.contains("multiDegreeLinks"));
        assert!(output.contains("averageConnections"));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&sample(), true).unwrap();
        assert!(output.contains("3 nodes, 2 direct edges"));
        assert!(output.contains("Interactions"));
        assert!(output.contains("Strength"));
        assert!(output.contains("A > B > C"));
    }

    #[test]
    fn test_quiet_links() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let analysis = sample();
        let output = formatter.format_links(&analysis.ranked_links(Some(1))).unwrap();
        assert_eq!(output, "A|B");
    }

    #[test]
    fn test_empty_analysis() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_analysis(&NetworkAnalysis::default(), false)
            .unwrap();
        assert!(output.contains("No interactions found"));
    }

    #[test]
    fn test_filters_as_toml() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_filters(&FilterConfig::default()).unwrap();
        assert!(output.contains("max_path_length = 3"));
        assert_eq!(FilterConfig::from_toml(&output).unwrap(), FilterConfig::default());
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.class_label(LinkClass::Weak), "weak");
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
