//! Links command implementation.

use crate::cli::LinksArgs;
use crate::commands::run_analysis;
use crate::error::Result;
use crate::output::Formatter;
use linkage_domain::MultiDegreeLink;
use linkage_engine::NetworkAnalysis;

/// Pick the links to show: ranked, or one contact's links in discovery order.
pub fn select_links<'a>(
    analysis: &'a NetworkAnalysis,
    args: &LinksArgs,
) -> Vec<&'a MultiDegreeLink> {
    let candidates = match &args.contact {
        Some(contact) => analysis.links_for(contact),
        None => analysis.ranked_links(None),
    };

    candidates
        .into_iter()
        .filter(|l| args.degree.is_none_or(|d| l.degree == d))
        .take(args.limit.unwrap_or(usize::MAX))
        .collect()
}

/// Execute the links command.
pub fn execute_links(args: LinksArgs, formatter: &Formatter) -> Result<()> {
    let analysis = run_analysis(&args.input)?;
    let links = select_links(&analysis, &args);
    println!("{}", formatter.format_links(&links)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::InputArgs;
    use linkage_engine::{analyze, FilterConfig};
    use serde_json::json;

    fn args(limit: Option<usize>, degree: Option<u8>, contact: Option<&str>) -> LinksArgs {
        LinksArgs {
            input: InputArgs {
                rows: "-".into(),
                filters: None,
                config: None,
            },
            limit,
            degree,
            contact: contact.map(String::from),
        }
    }

    fn chain() -> NetworkAnalysis {
        let rows: Vec<_> = [("A", "B"), ("B", "C"), ("C", "D")]
            .iter()
            .map(|(a, b)| json!({ "caller": a, "callee": b, "type": "call" }))
            .collect();
        analyze(&rows, &FilterConfig::default()).unwrap()
    }

    #[test]
    fn test_ranked_with_limit() {
        let analysis = chain();
        let links = select_links(&analysis, &args(Some(2), None, None));
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|l| l.degree == 1));
    }

    #[test]
    fn test_degree_filter() {
        let analysis = chain();
        let links = select_links(&analysis, &args(None, Some(3), None));
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_contact_filter() {
        let analysis = chain();
        let links = select_links(&analysis, &args(None, None, Some("D")));
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.has_endpoint("D")));
    }
}
