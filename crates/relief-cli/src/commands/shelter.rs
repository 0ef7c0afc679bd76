//! Shelter command handler.

use std::path::Path;

use anyhow::Result;

use relief_lib::HazardClassifier;

use crate::commands::load;
use relief_cli::output::{format_missing, format_route, render_json, OutputFormat};

/// Handle the shelter subcommand.
///
/// Not finding a shelter is a normal outcome and exits successfully.
pub fn handle_shelter(data_dir: Option<&Path>, from: &str, format: OutputFormat) -> Result<()> {
    let dataset = load(data_dir)?;
    let origin = dataset.atlas.resolve(from)?;

    let found = dataset.shelters.find_nearest_shelter(
        &dataset.graph,
        &origin,
        &dataset.atlas,
        &HazardClassifier::default(),
    );

    match format {
        OutputFormat::Json => render_json(&found)?,
        OutputFormat::Text => match &found {
            Some(found) => println!("{}", format_route("Nearest shelter", &found.route, &dataset.atlas)),
            None => println!("{}", format_missing("shelter", &origin, &dataset.atlas)),
        },
    }
    Ok(())
}
