//! Value types describing the outcome of a supply dispatch.

use serde::Serialize;

use crate::atlas::LocationId;
use crate::hazard::HazardClassifier;
use crate::resource::Resource;

/// Options controlling how dispatch measures shelter distances.
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Route around affected areas when measuring shelter distance.
    ///
    /// Off by default: dispatch distances use the unrestricted shortest path,
    /// unlike shelter search which rejects hazardous routes.
    pub avoid_hazards: bool,
    pub classifier: HazardClassifier,
}

/// Units sent from one shelter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub shelter: LocationId,
    pub units: u32,
    /// Hop count between the shelter and the zone.
    pub distance: usize,
}

/// Outcome of serving one resource requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDispatch {
    pub resource: Resource,
    pub required: u32,
    pub deliveries: Vec<Delivery>,
    /// Portion of `required` no shelter could cover.
    pub shortfall: u32,
}

impl ResourceDispatch {
    /// Total units delivered across all shelters.
    pub fn supplied(&self) -> u32 {
        self.deliveries.iter().map(|delivery| delivery.units).sum()
    }

    pub fn is_fulfilled(&self) -> bool {
        self.shortfall == 0
    }
}

/// Per-resource dispatch outcome for one disaster zone, in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub zone: LocationId,
    pub severity: u32,
    pub resources: Vec<ResourceDispatch>,
}

impl DispatchReport {
    /// Outcome for `resource`, if the zone required it.
    pub fn resource(&self, resource: Resource) -> Option<&ResourceDispatch> {
        self.resources
            .iter()
            .find(|dispatch| dispatch.resource == resource)
    }

    /// Sum of shortfalls across all resources.
    ///
    /// Widened to `u64` since each shortfall may reach `u32::MAX`.
    pub fn total_shortfall(&self) -> u64 {
        self.resources
            .iter()
            .map(|dispatch| u64::from(dispatch.shortfall))
            .sum()
    }

    /// Whether every required resource was fully covered.
    pub fn is_fulfilled(&self) -> bool {
        self.resources.iter().all(ResourceDispatch::is_fulfilled)
    }
}
