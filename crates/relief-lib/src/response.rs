//! Full incident response for a named disaster location.

use serde::Serialize;
use tracing::{info, warn};

use crate::atlas::LocationId;
use crate::dataset::Dataset;
use crate::dispatch::{DispatchOptions, DispatchReport};
use crate::error::{Error, Result};
use crate::hazard::HazardClassifier;
use crate::rescue::{assign_rescue_team, find_nearest_facility, FacilityRoute, TeamAssignment};
use crate::shelter::ShelterRoute;

/// Facility kind searched for medical care.
pub const HOSPITAL_KIND: &str = "hospital";

/// Settings for [`respond`].
#[derive(Debug, Clone, Default)]
pub struct ResponseOptions {
    pub classifier: HazardClassifier,
    /// Route dispatch distances around affected areas as well.
    pub dispatch_avoids_hazards: bool,
}

/// Result of every response step. Steps that found nothing are `None`.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentResponse {
    pub location: LocationId,
    pub hospital: Option<FacilityRoute>,
    pub shelter: Option<ShelterRoute>,
    pub dispatch: Option<DispatchReport>,
    /// Reason dispatch did not run, when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_error: Option<String>,
    pub rescue_team: Option<TeamAssignment>,
}

/// Run hospital search, shelter search, supply dispatch and rescue-team
/// assignment for the location named `location_name`.
///
/// Only an unknown location name aborts the response. A missing disaster zone
/// is recorded in the response and the remaining steps still run. Shelter
/// stock in `dataset` is drained by the dispatch step.
pub fn respond(
    dataset: &mut Dataset,
    location_name: &str,
    options: &ResponseOptions,
) -> Result<IncidentResponse> {
    let location = dataset.atlas.resolve(location_name)?;
    info!(location = %location, name = location_name, "responding to incident");

    let hospital = find_nearest_facility(
        &dataset.atlas,
        &dataset.graph,
        &location,
        HOSPITAL_KIND,
        &options.classifier,
    );

    let shelter = dataset.shelters.find_nearest_shelter(
        &dataset.graph,
        &location,
        &dataset.atlas,
        &options.classifier,
    );

    let dispatch_options = DispatchOptions {
        avoid_hazards: options.dispatch_avoids_hazards,
        classifier: options.classifier.clone(),
    };
    let (dispatch, dispatch_error) = match dataset.shelters.dispatch_supplies(
        &dataset.zones,
        &dataset.graph,
        &dataset.atlas,
        &location,
        &dispatch_options,
    ) {
        Ok(report) => (Some(report), None),
        Err(err @ Error::UnknownDisasterZone { .. }) => {
            warn!("{err}");
            (None, Some(err.to_string()))
        }
        Err(err) => return Err(err),
    };

    let rescue_team = assign_rescue_team(
        &dataset.graph,
        &dataset.teams,
        &location,
        &dataset.atlas,
        &options.classifier,
    );

    Ok(IncidentResponse {
        location,
        hospital,
        shelter,
        dispatch,
        dispatch_error,
        rescue_team,
    })
}
