use serde::Serialize;

use crate::atlas::{Atlas, LocationId, NameLookup};
use crate::graph::LocationGraph;
use crate::hazard::HazardClassifier;
use crate::path::{shortest_path, Route};

/// Rescue team stationed at a base location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RescueTeam {
    pub id: String,
    pub base: LocationId,
    /// Travel speed in km/h.
    pub speed: u32,
    pub available: bool,
}

/// Team chosen for a zone and the route it takes from its base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAssignment {
    pub team: RescueTeam,
    pub route: Route,
}

/// Facility of a given kind closest to some origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityRoute {
    pub facility: LocationId,
    pub route: Route,
}

/// Pick the team whose base is fewest hops from `zone`, avoiding affected areas.
///
/// Availability is reported but not used to filter teams. Ties keep the team
/// loaded first.
pub fn assign_rescue_team(
    graph: &LocationGraph,
    teams: &[RescueTeam],
    zone: &str,
    lookup: &dyn NameLookup,
    classifier: &HazardClassifier,
) -> Option<TeamAssignment> {
    let is_hazardous = |id: &str| classifier.is_hazardous(id, lookup);
    let mut best: Option<TeamAssignment> = None;

    for team in teams {
        let Some(route) = shortest_path(graph, &team.base, zone, Some(&is_hazardous)) else {
            continue;
        };
        if best
            .as_ref()
            .is_none_or(|current| route.hops() < current.route.hops())
        {
            best = Some(TeamAssignment {
                team: team.clone(),
                route,
            });
        }
    }

    best
}

/// Find the nearest location of `kind` reachable from `from` without crossing
/// affected areas. Ties keep the facility listed first in the atlas.
pub fn find_nearest_facility(
    atlas: &Atlas,
    graph: &LocationGraph,
    from: &str,
    kind: &str,
    classifier: &HazardClassifier,
) -> Option<FacilityRoute> {
    let is_hazardous = |id: &str| classifier.is_hazardous(id, atlas);
    let mut best: Option<FacilityRoute> = None;

    for facility in atlas.locations_of_kind(kind) {
        let Some(route) = shortest_path(graph, from, &facility.id, Some(&is_hazardous)) else {
            continue;
        };
        if best
            .as_ref()
            .is_none_or(|current| route.hops() < current.route.hops())
        {
            best = Some(FacilityRoute {
                facility: facility.id.clone(),
                route,
            });
        }
    }

    best
}
