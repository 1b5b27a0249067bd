//! Linkage CLI - infer direct and multi-degree contacts from interaction logs.

use clap::Parser;
use linkage_cli::commands;
use linkage_cli::{Cli, Command, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays pipeable
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> linkage_cli::Result<()> {
    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &formatter),
        Command::Links(args) => commands::execute_links(args, &formatter),
        Command::Filters(args) => commands::execute_filters(args, &formatter),
    }
}
