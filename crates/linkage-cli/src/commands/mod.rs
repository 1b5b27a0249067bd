//! Command implementations.

pub mod analyze;
pub mod filters;
pub mod links;

pub use self::analyze::{execute_analyze, run_analysis};
pub use self::filters::execute_filters;
pub use self::links::{execute_links, select_links};
