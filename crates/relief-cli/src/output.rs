//! Output formatting for relief command results.
//!
//! Every command renders either human-readable text or pretty-printed JSON.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use relief_lib::{render_dispatch, DispatchReport, IncidentResponse, NameLookup, Route, RouteSummary};

const UNKNOWN_NAME: &str = "<unknown>";

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Serialize any value as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Text for a labelled route, e.g. `Nearest shelter: School Relief Shelter (N8), 3 hops`.
pub fn format_route(label: &str, route: &Route, lookup: &dyn NameLookup) -> String {
    let summary = RouteSummary::from_route(route, lookup);
    let goal = summary
        .goal()
        .map(|step| {
            format!(
                "{} ({})",
                step.name.as_deref().unwrap_or(UNKNOWN_NAME),
                step.id
            )
        })
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());
    format!(
        "{label}: {goal}, {} hops\n  Path: {}",
        summary.hops,
        summary.render_plain()
    )
}

/// Text for a missing result, e.g. `No shelter found near Patel Nagar Main`.
pub fn format_missing(what: &str, location: &str, lookup: &dyn NameLookup) -> String {
    format!(
        "No {what} found near {}",
        lookup.name_of(location).unwrap_or(location)
    )
}

/// Render a dispatch report in the chosen format.
pub fn print_dispatch(
    report: &DispatchReport,
    lookup: &dyn NameLookup,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            print!("{}", render_dispatch(report, lookup));
            Ok(())
        }
        OutputFormat::Json => render_json(report),
    }
}

/// Render the text form of a full incident response.
pub fn format_response(response: &IncidentResponse, lookup: &dyn NameLookup) -> String {
    let location = response.location.as_str();
    let mut sections = Vec::new();

    sections.push(match &response.hospital {
        Some(found) => format_route("Nearest hospital", &found.route, lookup),
        None => format_missing("hospital", location, lookup),
    });
    sections.push(match &response.shelter {
        Some(found) => format_route("Nearest shelter", &found.route, lookup),
        None => format_missing("shelter", location, lookup),
    });
    sections.push(match (&response.dispatch, &response.dispatch_error) {
        (Some(report), _) => render_dispatch(report, lookup).trim_end().to_string(),
        (None, Some(error)) => format!("Dispatch skipped: {error}"),
        (None, None) => "Dispatch skipped".to_string(),
    });
    sections.push(match &response.rescue_team {
        Some(assignment) => {
            let base = lookup
                .name_of(&assignment.team.base)
                .unwrap_or(&assignment.team.base);
            let status = if assignment.team.available {
                "available"
            } else {
                "unavailable"
            };
            format!(
                "Rescue team {} based at {} ({status}) assigned\n  Path: {}",
                assignment.team.id,
                base,
                RouteSummary::from_route(&assignment.route, lookup).render_plain()
            )
        }
        None => format_missing("rescue team", location, lookup),
    });

    sections.join("\n\n")
}
