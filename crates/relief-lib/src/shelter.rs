//! Shelter stock registry, nearest-shelter search and supply dispatch.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, info};

use crate::atlas::{LocationId, NameLookup};
use crate::dispatch::{Delivery, DispatchOptions, DispatchReport, ResourceDispatch};
use crate::error::{Error, Result};
use crate::graph::LocationGraph;
use crate::hazard::HazardClassifier;
use crate::path::{shortest_path, Route};
use crate::resource::Resource;
use crate::zone::{find_zone, DisasterZone};

/// Name fragments identifying supply depots, which do not house people.
pub const SUPPLY_DEPOT_MARKERS: &[&str] = &["Warehouse", "Storehouse"];

/// Whether a display name denotes a supply depot rather than a shelter.
pub fn is_supply_depot(name: &str) -> bool {
    SUPPLY_DEPOT_MARKERS
        .iter()
        .any(|marker| name.contains(marker))
}

/// Location holding relief stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shelter {
    pub location: LocationId,
    pub stock: BTreeMap<Resource, u32>,
    pub vehicle_capacity: u32,
}

impl Shelter {
    pub fn new(location: impl Into<LocationId>, vehicle_capacity: u32) -> Self {
        Self {
            location: location.into(),
            stock: BTreeMap::new(),
            vehicle_capacity,
        }
    }

    /// Builder-style helper setting the stock of `resource`.
    pub fn stocking(mut self, resource: Resource, quantity: u32) -> Self {
        self.stock.insert(resource, quantity);
        self
    }

    /// Units of `resource` on hand; zero when the resource is not listed.
    pub fn stock_of(&self, resource: Resource) -> u32 {
        self.stock.get(&resource).copied().unwrap_or(0)
    }
}

/// Nearest eligible shelter together with the route to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelterRoute {
    pub shelter: LocationId,
    pub route: Route,
}

/// Shelters in load order, addressed by location.
#[derive(Debug, Clone, Default)]
pub struct ShelterRegistry {
    shelters: Vec<Shelter>,
    index: HashMap<LocationId, usize>,
}

impl ShelterRegistry {
    /// Build a registry from shelters in load order.
    ///
    /// Shelters sharing a location are merged the same way as input records.
    pub fn new(shelters: impl IntoIterator<Item = Shelter>) -> Self {
        let mut registry = Self::default();
        for shelter in shelters {
            match registry.index.get(&shelter.location) {
                Some(&slot) => {
                    let existing = &mut registry.shelters[slot];
                    existing.stock.extend(shelter.stock);
                    existing.vehicle_capacity =
                        existing.vehicle_capacity.max(shelter.vehicle_capacity);
                }
                None => registry.push(shelter),
            }
        }
        registry
    }

    fn push(&mut self, shelter: Shelter) {
        self.index
            .insert(shelter.location.clone(), self.shelters.len());
        self.shelters.push(shelter);
    }

    /// Fold one stock record into the registry.
    ///
    /// The stock for `resource` is overwritten and the largest vehicle capacity is kept.
    pub fn merge_record(
        &mut self,
        location: &str,
        resource: Resource,
        quantity: u32,
        vehicle_capacity: u32,
    ) {
        match self.shelter_mut(location) {
            Some(shelter) => {
                shelter.stock.insert(resource, quantity);
                shelter.vehicle_capacity = shelter.vehicle_capacity.max(vehicle_capacity);
            }
            None => self.push(Shelter::new(location, vehicle_capacity).stocking(resource, quantity)),
        }
    }

    pub fn len(&self) -> usize {
        self.shelters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelters.is_empty()
    }

    /// All shelters in load order.
    pub fn shelters(&self) -> &[Shelter] {
        &self.shelters
    }

    /// Lookup a shelter by location.
    pub fn shelter(&self, location: &str) -> Option<&Shelter> {
        self.index.get(location).map(|&slot| &self.shelters[slot])
    }

    /// Mutable lookup by location.
    pub fn shelter_mut(&mut self, location: &str) -> Option<&mut Shelter> {
        self.index
            .get(location)
            .copied()
            .map(move |slot| &mut self.shelters[slot])
    }

    /// Find the closest shelter that people can be routed to from `from`.
    ///
    /// Supply depots are skipped. Each candidate's unrestricted shortest path
    /// is rejected when any interior hop is hazardous; no detour is attempted.
    /// Ties keep the shelter loaded first.
    pub fn find_nearest_shelter(
        &self,
        graph: &LocationGraph,
        from: &str,
        lookup: &dyn NameLookup,
        classifier: &HazardClassifier,
    ) -> Option<ShelterRoute> {
        let mut best: Option<ShelterRoute> = None;

        for shelter in &self.shelters {
            if lookup.name_of(&shelter.location).is_some_and(is_supply_depot) {
                continue;
            }

            let Some(route) = shortest_path(graph, from, &shelter.location, None) else {
                continue;
            };
            if best
                .as_ref()
                .is_some_and(|current| route.hops() >= current.route.hops())
            {
                continue;
            }

            if let Some(hazard) = route
                .interior()
                .iter()
                .find(|step| classifier.is_hazardous(step, lookup))
            {
                debug!(
                    shelter = %shelter.location,
                    hazard = %hazard,
                    "rejecting shelter route through affected area"
                );
                continue;
            }

            best = Some(ShelterRoute {
                shelter: shelter.location.clone(),
                route,
            });
        }

        best
    }

    /// Drain shelter stock into the disaster zone at `target`.
    ///
    /// Resources are served in [`Resource::PRIORITY`] order. For each one the
    /// reachable shelters holding stock are drained nearest first (load order
    /// on equal distance) until the requirement is met or candidates run out.
    /// Any remainder is reported as a shortfall.
    pub fn dispatch_supplies(
        &mut self,
        zones: &[DisasterZone],
        graph: &LocationGraph,
        lookup: &dyn NameLookup,
        target: &str,
        options: &DispatchOptions,
    ) -> Result<DispatchReport> {
        let zone = find_zone(zones, target).ok_or_else(|| Error::UnknownDisasterZone {
            location: lookup.name_of(target).unwrap_or(target).to_string(),
        })?;

        let is_hazardous = |id: &str| options.classifier.is_hazardous(id, lookup);
        let hazard: Option<&dyn Fn(&str) -> bool> = if options.avoid_hazards {
            Some(&is_hazardous)
        } else {
            None
        };

        let mut resources = Vec::new();
        for resource in Resource::PRIORITY {
            let required = match zone.required_of(resource) {
                Some(amount) if amount > 0 => amount,
                _ => continue,
            };

            let mut candidates: Vec<(usize, usize)> = self
                .shelters
                .iter()
                .enumerate()
                .filter(|(_, shelter)| shelter.stock_of(resource) > 0)
                .filter_map(|(slot, shelter)| {
                    shortest_path(graph, &zone.location, &shelter.location, hazard)
                        .map(|route| (slot, route.hops()))
                })
                .collect();
            candidates.sort_by_key(|&(_, distance)| distance);

            let mut remaining = required;
            let mut deliveries = Vec::new();
            for (slot, distance) in candidates {
                if remaining == 0 {
                    break;
                }

                let shelter = &mut self.shelters[slot];
                let available = shelter.stock_of(resource);
                let units = remaining.min(available);
                if units == 0 {
                    continue;
                }

                shelter.stock.insert(resource, available - units);
                remaining -= units;
                debug!(
                    %resource,
                    shelter = %shelter.location,
                    units,
                    distance,
                    "dispatched supplies"
                );
                deliveries.push(Delivery {
                    shelter: shelter.location.clone(),
                    units,
                    distance,
                });
            }

            if remaining > 0 {
                info!(%resource, shortfall = remaining, zone = %zone.location, "requirement not met");
            }

            resources.push(ResourceDispatch {
                resource,
                required,
                deliveries,
                shortfall: remaining,
            });
        }

        Ok(DispatchReport {
            zone: zone.location.clone(),
            severity: zone.severity,
            resources,
        })
    }
}
