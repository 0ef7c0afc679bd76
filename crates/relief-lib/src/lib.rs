//! Relief library entry points.
//!
//! This crate loads the relief dataset, builds the location graph, and runs
//! hazard-aware route searches, nearest-shelter queries, greedy supply
//! dispatch and hospital demand distribution. Higher-level consumers (the
//! CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.
//!

#![deny(warnings)]

pub mod atlas;
pub mod dataset;
pub mod dispatch;
pub mod error;
pub mod graph;
pub mod hazard;
pub mod hospital;
pub mod output;
pub mod path;
pub mod rescue;
pub mod resource;
pub mod response;
pub mod shelter;
pub mod zone;

pub use atlas::{Atlas, LocationId, LocationInfo, NameLookup};
pub use dataset::{load_dataset, resolve_data_dir, Dataset, DatasetPaths};
pub use dispatch::{Delivery, DispatchOptions, DispatchReport, ResourceDispatch};
pub use error::{Error, Result};
pub use graph::LocationGraph;
pub use hazard::HazardClassifier;
pub use hospital::{
    distribute_hospital_demands, DemandAssignment, HospitalAllocation, HospitalLoad,
    UnassignedDemand,
};
pub use output::{render_dispatch, render_hospital_allocation, RouteStep, RouteSummary};
pub use path::{nearest_reachable, shortest_path, HazardPredicate, Route};
pub use rescue::{assign_rescue_team, find_nearest_facility, FacilityRoute, RescueTeam, TeamAssignment};
pub use resource::Resource;
pub use response::{respond, IncidentResponse, ResponseOptions};
pub use shelter::{Shelter, ShelterRegistry, ShelterRoute};
pub use zone::{find_zone, DisasterZone};
