//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Linkage - infer who is connected to whom from call and SMS records.
#[derive(Debug, Parser)]
#[command(name = "linkage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "table")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (pairs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a rows file and print nodes, edges and statistics
    Analyze(AnalyzeArgs),

    /// List discovered links ranked by strength
    Links(LinksArgs),

    /// Print a filter configuration as TOML
    Filters(FiltersArgs),
}

/// Inputs shared by every analysis command.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// JSON file of interaction rows ("-" reads stdin)
    pub rows: PathBuf,

    /// Filter configuration (.toml or .json)
    #[arg(long, env = "LINKAGE_FILTERS")]
    pub filters: Option<PathBuf>,

    /// Engine configuration: field aliases, strength and thresholds (.toml)
    #[arg(short, long, env = "LINKAGE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the analyze command.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also list the raw multi-degree links
    #[arg(long)]
    pub show_links: bool,
}

/// Arguments for the links command.
#[derive(Debug, Args)]
pub struct LinksArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of links
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only links of this degree
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub degree: Option<u8>,

    /// Only links with this participant as an endpoint
    #[arg(long)]
    pub contact: Option<String>,
}

/// Arguments for the filters command.
#[derive(Debug, Args)]
pub struct FiltersArgs {
    /// Preset to print
    #[arg(short, long, value_enum, default_value = "default")]
    pub preset: PresetArg,
}

/// Filter presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PresetArg {
    /// Everything shown
    Default,
    /// Direct contacts only
    DirectOnly,
    /// Strong primary links only
    StrongOnly,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<PresetArg> for linkage_engine::FilterConfig {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Default => linkage_engine::FilterConfig::default(),
            PresetArg::DirectOnly => linkage_engine::FilterConfig::direct_only(),
            PresetArg::StrongOnly => linkage_engine::FilterConfig::strong_only(),
        }
    }
}
