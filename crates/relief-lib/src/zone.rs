use std::collections::BTreeMap;

use serde::Serialize;

use crate::atlas::LocationId;
use crate::resource::Resource;

/// Location that requires relief supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisasterZone {
    pub location: LocationId,
    pub required: BTreeMap<Resource, u32>,
    /// Carried through to reports; allocation does not consult it.
    pub severity: u32,
}

impl DisasterZone {
    pub fn new(location: impl Into<LocationId>, severity: u32) -> Self {
        Self {
            location: location.into(),
            required: BTreeMap::new(),
            severity,
        }
    }

    /// Builder-style helper setting the requirement for `resource`.
    pub fn requiring(mut self, resource: Resource, amount: u32) -> Self {
        self.required.insert(resource, amount);
        self
    }

    /// Required quantity of `resource`, if the zone lists it.
    pub fn required_of(&self, resource: Resource) -> Option<u32> {
        self.required.get(&resource).copied()
    }

    /// Fold another record for the same location into this zone.
    ///
    /// The requirement for `resource` is overwritten and the highest severity is kept.
    pub fn merge(&mut self, resource: Resource, amount: u32, severity: u32) {
        self.required.insert(resource, amount);
        self.severity = self.severity.max(severity);
    }
}

/// Find the zone registered at `location`.
pub fn find_zone<'a>(zones: &'a [DisasterZone], location: &str) -> Option<&'a DisasterZone> {
    zones.iter().find(|zone| zone.location == location)
}
