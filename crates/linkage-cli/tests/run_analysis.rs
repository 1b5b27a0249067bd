//! File-to-analysis tests for the CLI commands

use linkage_cli::cli::InputArgs;
use linkage_cli::commands::run_analysis;
use linkage_cli::CliError;
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const ROWS: &str = r#"{
  "rows": [
    { "Numéro A": "0601", "Numéro B": "0602", "Type": "Appel", "Durée": "01:30" },
    { "Numéro A": "0602", "Numéro B": "0601", "Type": "SMS" },
    { "Numéro A": "0602", "Numéro B": "0603", "Type": "Appel", "Durée": "00:10" }
  ]
}"#;

#[test]
fn test_rows_with_defaults() {
    let rows = temp_file(".json", ROWS);
    let input = InputArgs {
        rows: rows.path().to_path_buf(),
        filters: None,
        config: None,
    };

    let analysis = run_analysis(&input).unwrap();
    assert_eq!(analysis.stats.total_nodes, 3);
    assert_eq!(analysis.stats.total_direct_edges, 2);
    assert_eq!(analysis.stats.total_multi_degree_links, 3);
}

#[test]
fn test_rows_with_filter_file() {
    let rows = temp_file(".json", ROWS);
    let filters = temp_file(
        ".toml",
        "interaction_type = \"calls\"\nshow_indirect_connections = false\n\n[duration_range]\nmin = 60.0\n",
    );
    let input = InputArgs {
        rows: rows.path().to_path_buf(),
        filters: Some(filters.path().to_path_buf()),
        config: None,
    };

    let analysis = run_analysis(&input).unwrap();
    let ids: Vec<&str> = analysis.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["0601", "0602"]);
    assert_eq!(analysis.edges.len(), 1);
    assert_eq!(analysis.edges[0].weight, 1);
}

#[test]
fn test_custom_aliases_file() {
    let rows = temp_file(".json", r#"[{ "msisdn": "1", "peer": "2" }]"#);
    let config = temp_file(".toml", "[aliases]\ncaller = [\"msisdn\"]\ncallee = [\"peer\"]\n");
    let input = InputArgs {
        rows: rows.path().to_path_buf(),
        filters: None,
        config: Some(config.path().to_path_buf()),
    };

    let analysis = run_analysis(&input).unwrap();
    assert_eq!(analysis.stats.total_nodes, 2);
}

#[test]
fn test_invalid_rows_file() {
    let rows = temp_file(".json", r#""not rows""#);
    let input = InputArgs {
        rows: rows.path().to_path_buf(),
        filters: None,
        config: None,
    };

    assert!(matches!(run_analysis(&input), Err(CliError::InvalidInput(_))));
}
