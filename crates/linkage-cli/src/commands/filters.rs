//! Filters command implementation.

use crate::cli::FiltersArgs;
use crate::error::Result;
use crate::output::Formatter;
use linkage_engine::FilterConfig;

/// Execute the filters command.
pub fn execute_filters(args: FiltersArgs, formatter: &Formatter) -> Result<()> {
    let filters: FilterConfig = args.preset.into();
    println!("{}", formatter.format_filters(&filters)?);
    Ok(())
}
