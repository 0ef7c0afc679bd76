//! Respond command handler running the full incident response.

use std::path::Path;

use anyhow::Result;

use relief_lib::{respond, ResponseOptions};

use crate::commands::load;
use relief_cli::output::{format_response, render_json, OutputFormat};

/// Handle the respond subcommand.
pub fn handle_respond(
    data_dir: Option<&Path>,
    location: &str,
    dispatch_avoids_hazards: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut dataset = load(data_dir)?;
    let options = ResponseOptions {
        dispatch_avoids_hazards,
        ..ResponseOptions::default()
    };

    let response = respond(&mut dataset, location, &options)?;

    match format {
        OutputFormat::Text => println!("{}", format_response(&response, &dataset.atlas)),
        OutputFormat::Json => render_json(&response)?,
    }
    Ok(())
}
