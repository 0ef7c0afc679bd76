use std::fmt::Write;

use serde::Serialize;

use crate::atlas::{LocationId, NameLookup};
use crate::dispatch::DispatchReport;
use crate::hospital::HospitalAllocation;
use crate::path::Route;

const UNKNOWN_NAME: &str = "<unknown>";

/// Step taken during traversal of a route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RouteStep {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }
}

/// Structured representation of a route with resolved location names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub hops: usize,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Resolve the names of every step in `route`.
    pub fn from_route(route: &Route, lookup: &dyn NameLookup) -> Self {
        let steps = route
            .steps
            .iter()
            .enumerate()
            .map(|(index, id)| RouteStep {
                index,
                id: id.clone(),
                name: lookup.name_of(id).map(str::to_string),
            })
            .collect();

        Self {
            hops: route.hops(),
            steps,
        }
    }

    pub fn start(&self) -> Option<&RouteStep> {
        self.steps.first()
    }

    pub fn goal(&self) -> Option<&RouteStep> {
        self.steps.last()
    }

    /// Render the step names joined by arrows.
    pub fn render_plain(&self) -> String {
        self.steps
            .iter()
            .map(RouteStep::display_name)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Render a dispatch report as plain text, one block per resource.
pub fn render_dispatch(report: &DispatchReport, lookup: &dyn NameLookup) -> String {
    let mut buffer = String::new();
    let zone_name = lookup.name_of(&report.zone).unwrap_or(UNKNOWN_NAME);
    let _ = writeln!(
        buffer,
        "Dispatching supplies to {} ({}), severity {}:",
        zone_name, report.zone, report.severity
    );

    if report.resources.is_empty() {
        let _ = writeln!(buffer, "  No outstanding requirements.");
        return buffer;
    }

    for dispatch in &report.resources {
        let _ = writeln!(
            buffer,
            "{}: required {}, supplied {}",
            dispatch.resource,
            dispatch.required,
            dispatch.supplied()
        );
        for delivery in &dispatch.deliveries {
            let _ = writeln!(
                buffer,
                "  Received {} units from shelter {} ({}) at distance: {} hops",
                delivery.units,
                delivery.shelter,
                lookup.name_of(&delivery.shelter).unwrap_or(UNKNOWN_NAME),
                delivery.distance
            );
        }
        if dispatch.shortfall > 0 {
            let _ = writeln!(buffer, "  Shortfall of {} units", dispatch.shortfall);
        }
    }
    buffer
}

/// Render a hospital allocation as plain text, one block per hospital.
pub fn render_hospital_allocation(
    allocation: &HospitalAllocation,
    lookup: &dyn NameLookup,
) -> String {
    let mut buffer = String::new();
    if allocation.hospitals.is_empty() {
        let _ = writeln!(buffer, "No hospitals in dataset.");
    }

    for hospital in &allocation.hospitals {
        let _ = writeln!(
            buffer,
            "{} ({}): load {} of {}",
            lookup.name_of(&hospital.hospital).unwrap_or(UNKNOWN_NAME),
            hospital.hospital,
            hospital.load,
            hospital.capacity
        );
        for assignment in &hospital.assignments {
            let _ = writeln!(
                buffer,
                "  {} units from {} ({}) at distance: {} hops",
                assignment.units,
                lookup.name_of(&assignment.area).unwrap_or(UNKNOWN_NAME),
                assignment.area,
                assignment.distance
            );
        }
    }
    for demand in &allocation.unassigned {
        let _ = writeln!(
            buffer,
            "Unassigned demand of {} units at {} ({})",
            demand.units,
            lookup.name_of(&demand.area).unwrap_or(UNKNOWN_NAME),
            demand.area
        );
    }
    buffer
}
