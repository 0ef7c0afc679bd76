//! Spreading affected-area casualty demand across hospital capacity.

use serde::Serialize;
use tracing::{debug, info};

use crate::atlas::{Atlas, LocationId};
use crate::graph::LocationGraph;
use crate::path::shortest_path;
use crate::response::HOSPITAL_KIND;

/// Location kind whose `Demand` column is distributed to hospitals.
pub const AFFECTED_AREA_KIND: &str = "affected_area";

/// Demand from one affected area placed at a hospital.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandAssignment {
    pub area: LocationId,
    pub units: u32,
    /// Hop count between the area and the hospital.
    pub distance: usize,
}

/// A hospital's capacity and the demand placed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HospitalLoad {
    pub hospital: LocationId,
    pub capacity: u32,
    /// Units assigned so far; never exceeds `capacity`.
    pub load: u32,
    pub assignments: Vec<DemandAssignment>,
}

impl HospitalLoad {
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.load)
    }
}

/// Demand no reachable hospital could absorb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnassignedDemand {
    pub area: LocationId,
    pub units: u32,
}

/// Outcome of [`distribute_hospital_demands`], hospitals in atlas order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HospitalAllocation {
    pub hospitals: Vec<HospitalLoad>,
    pub unassigned: Vec<UnassignedDemand>,
}

impl HospitalAllocation {
    /// Load record for `hospital`.
    pub fn hospital(&self, hospital: &str) -> Option<&HospitalLoad> {
        self.hospitals.iter().find(|load| load.hospital == hospital)
    }

    /// Total demand left without a hospital.
    pub fn total_unassigned(&self) -> u64 {
        self.unassigned
            .iter()
            .map(|demand| u64::from(demand.units))
            .sum()
    }
}

/// Assign each affected area's demand to hospitals, nearest first.
///
/// Areas are processed in atlas order. For each one, hospitals that are
/// reachable and still have spare capacity are stable-sorted by hop count
/// and filled greedily, so capacity used by earlier areas is unavailable to
/// later ones. Missing capacity counts as zero and missing demand is skipped.
/// Routes ignore hazards.
pub fn distribute_hospital_demands(atlas: &Atlas, graph: &LocationGraph) -> HospitalAllocation {
    let mut hospitals: Vec<HospitalLoad> = atlas
        .locations_of_kind(HOSPITAL_KIND)
        .map(|hospital| HospitalLoad {
            hospital: hospital.id.clone(),
            capacity: hospital.capacity.unwrap_or(0),
            load: 0,
            assignments: Vec::new(),
        })
        .collect();
    let mut unassigned = Vec::new();

    for area in atlas.locations_of_kind(AFFECTED_AREA_KIND) {
        let demand = area.demand.unwrap_or(0);
        if demand == 0 {
            continue;
        }

        let mut candidates: Vec<(usize, usize)> = hospitals
            .iter()
            .enumerate()
            .filter(|(_, hospital)| hospital.remaining_capacity() > 0)
            .filter_map(|(slot, hospital)| {
                shortest_path(graph, &area.id, &hospital.hospital, None)
                    .map(|route| (slot, route.hops()))
            })
            .collect();
        candidates.sort_by_key(|&(_, distance)| distance);

        let mut remaining = demand;
        for (slot, distance) in candidates {
            if remaining == 0 {
                break;
            }

            let hospital = &mut hospitals[slot];
            let units = remaining.min(hospital.remaining_capacity());
            hospital.load += units;
            remaining -= units;
            debug!(
                area = %area.id,
                hospital = %hospital.hospital,
                units,
                distance,
                "assigned hospital demand"
            );
            hospital.assignments.push(DemandAssignment {
                area: area.id.clone(),
                units,
                distance,
            });
        }

        if remaining > 0 {
            info!(area = %area.id, unassigned = remaining, "hospital capacity exhausted");
            unassigned.push(UnassignedDemand {
                area: area.id.clone(),
                units: remaining,
            });
        }
    }

    HospitalAllocation {
        hospitals,
        unassigned,
    }
}
