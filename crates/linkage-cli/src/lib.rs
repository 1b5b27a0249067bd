//! Linkage CLI library.
//!
//! Loads interaction rows and filter files, runs the analysis engine and
//! renders the result as a table, JSON or a bare pair list.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::OutputFormat;
pub use error::{CliError, Result};
pub use output::Formatter;
