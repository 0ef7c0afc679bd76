//! Route command handler for computing paths between locations.

use std::path::Path;

use anyhow::{anyhow, Result};

use relief_lib::{shortest_path, HazardClassifier, RouteSummary};

use crate::commands::load;
use relief_cli::output::{format_route, render_json, OutputFormat};

/// Handle the route subcommand.
///
/// Affected areas are avoided unless `ignore_hazards` is set. A missing route
/// is reported as an error; there is no automatic retry without avoidance.
pub fn handle_route(
    data_dir: Option<&Path>,
    from: &str,
    to: &str,
    ignore_hazards: bool,
    format: OutputFormat,
) -> Result<()> {
    let dataset = load(data_dir)?;
    let start = dataset.atlas.resolve(from)?;
    let goal = dataset.atlas.resolve(to)?;

    let classifier = HazardClassifier::default();
    let is_hazardous = |id: &str| classifier.is_hazardous(id, &dataset.atlas);
    let hazard: Option<&dyn Fn(&str) -> bool> = if ignore_hazards {
        None
    } else {
        Some(&is_hazardous)
    };

    let route = shortest_path(&dataset.graph, &start, &goal, hazard)
        .ok_or_else(|| anyhow!("no route found between {from} and {to}"))?;

    match format {
        OutputFormat::Text => println!("{}", format_route("Route", &route, &dataset.atlas)),
        OutputFormat::Json => render_json(&RouteSummary::from_route(&route, &dataset.atlas))?,
    }
    Ok(())
}
