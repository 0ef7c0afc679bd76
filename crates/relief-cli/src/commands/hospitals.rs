//! Hospitals command handler.

use std::path::Path;

use anyhow::Result;

use relief_lib::{distribute_hospital_demands, render_hospital_allocation};

use crate::commands::load;
use relief_cli::output::{render_json, OutputFormat};

/// Handle the hospitals subcommand.
pub fn handle_hospitals(data_dir: Option<&Path>, format: OutputFormat) -> Result<()> {
    let dataset = load(data_dir)?;
    let allocation = distribute_hospital_demands(&dataset.atlas, &dataset.graph);

    match format {
        OutputFormat::Text => print!("{}", render_hospital_allocation(&allocation, &dataset.atlas)),
        OutputFormat::Json => render_json(&allocation)?,
    }
    Ok(())
}
