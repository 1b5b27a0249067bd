//! Analyze command implementation.

use crate::cli::{AnalyzeArgs, InputArgs};
use crate::config::{load_engine_config, load_filters};
use crate::error::Result;
use crate::input::read_rows;
use crate::output::Formatter;
use linkage_engine::{Analyzer, NetworkAnalysis};

/// Load inputs and run the engine.
pub fn run_analysis(input: &InputArgs) -> Result<NetworkAnalysis> {
    let config = load_engine_config(input.config.as_deref())?;
    let filters = load_filters(input.filters.as_deref())?;
    let rows = read_rows(&input.rows)?;

    let analyzer = Analyzer::try_new(config)?;
    Ok(analyzer.analyze(&rows, &filters)?)
}

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    let analysis = run_analysis(&args.input)?;
    println!("{}", formatter.format_analysis(&analysis, args.show_links)?);
    Ok(())
}
