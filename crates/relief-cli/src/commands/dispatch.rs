//! Dispatch command handler.

use std::path::Path;

use anyhow::Result;

use relief_lib::DispatchOptions;

use crate::commands::load;
use relief_cli::output::{print_dispatch, OutputFormat};

/// Handle the dispatch subcommand.
///
/// Stock changes only live for the duration of the command.
pub fn handle_dispatch(
    data_dir: Option<&Path>,
    location: &str,
    avoid_hazards: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut dataset = load(data_dir)?;
    let target = dataset.atlas.resolve(location)?;
    let options = DispatchOptions {
        avoid_hazards,
        ..DispatchOptions::default()
    };

    let report = dataset.shelters.dispatch_supplies(
        &dataset.zones,
        &dataset.graph,
        &dataset.atlas,
        &target,
        &options,
    )?;

    print_dispatch(&report, &dataset.atlas, format)?;
    Ok(())
}
