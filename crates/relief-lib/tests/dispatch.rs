mod common;

use relief_lib::{
    DisasterZone, DispatchOptions, Error, LocationGraph, Resource, Shelter, ShelterRegistry,
};

use common::{load_fixture, names};

fn star_graph() -> LocationGraph {
    LocationGraph::from_edges([("Z", "S1"), ("Z", "M"), ("M", "S2"), ("M", "S3")])
}

#[test]
fn single_resource_conserves_units() {
    let graph = star_graph();
    let lookup = names(&[("Z", "Zone")]);
    let mut registry = ShelterRegistry::new([
        Shelter::new("S2", 1).stocking(Resource::Water, 40),
        Shelter::new("S1", 1).stocking(Resource::Water, 25),
        Shelter::new("S3", 1).stocking(Resource::Water, 10),
    ]);
    let zones = vec![DisasterZone::new("Z", 3).requiring(Resource::Water, 100)];
    let before: u32 = registry
        .shelters()
        .iter()
        .map(|s| s.stock_of(Resource::Water))
        .sum();

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &DispatchOptions::default())
        .expect("zone exists");
    let water = report.resource(Resource::Water).expect("water dispatched");
    let after: u32 = registry
        .shelters()
        .iter()
        .map(|s| s.stock_of(Resource::Water))
        .sum();

    assert_eq!(water.supplied() + water.shortfall, water.required);
    assert_eq!(before - after, water.supplied());
    assert_eq!(water.shortfall, 25);
    assert!(registry
        .shelters()
        .iter()
        .all(|s| s.stock_of(Resource::Water) == 0));
}

#[test]
fn nearest_shelter_drains_first_and_ties_keep_load_order() {
    let graph = star_graph();
    let lookup = names(&[]);
    let mut registry = ShelterRegistry::new([
        Shelter::new("S3", 1).stocking(Resource::Food, 30),
        Shelter::new("S2", 1).stocking(Resource::Food, 30),
        Shelter::new("S1", 1).stocking(Resource::Food, 30),
    ]);
    let zones = vec![DisasterZone::new("Z", 1).requiring(Resource::Food, 50)];

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &DispatchOptions::default())
        .expect("zone exists");
    let food = report.resource(Resource::Food).expect("food dispatched");

    let sources: Vec<(&str, u32, usize)> = food
        .deliveries
        .iter()
        .map(|d| (d.shelter.as_str(), d.units, d.distance))
        .collect();
    assert_eq!(sources, vec![("S1", 30, 1), ("S3", 20, 2)]);
    assert!(food.is_fulfilled());
    assert_eq!(registry.shelter("S3").map(|s| s.stock_of(Resource::Food)), Some(10));
    assert_eq!(registry.shelter("S2").map(|s| s.stock_of(Resource::Food)), Some(30));
}

#[test]
fn medicine_is_reported_before_food() {
    let graph = star_graph();
    let lookup = names(&[]);
    let mut registry = ShelterRegistry::new([Shelter::new("S1", 1)
        .stocking(Resource::Food, 15)
        .stocking(Resource::Medicine, 5)]);
    let zones = vec![DisasterZone::new("Z", 2)
        .requiring(Resource::Food, 15)
        .requiring(Resource::Medicine, 5)];

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &DispatchOptions::default())
        .expect("zone exists");

    let order: Vec<Resource> = report.resources.iter().map(|r| r.resource).collect();
    assert_eq!(order, vec![Resource::Medicine, Resource::Food]);
    assert!(report.is_fulfilled());
}

#[test]
fn zero_and_missing_requirements_are_skipped() {
    let graph = star_graph();
    let lookup = names(&[]);
    let mut registry = ShelterRegistry::new([Shelter::new("S1", 1).stocking(Resource::Water, 5)]);
    let zones = vec![DisasterZone::new("Z", 2).requiring(Resource::Water, 0)];

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &DispatchOptions::default())
        .expect("zone exists");

    assert!(report.resources.is_empty());
    assert_eq!(registry.shelter("S1").map(|s| s.stock_of(Resource::Water)), Some(5));
}

#[test]
fn unreachable_resource_does_not_stop_later_resources() {
    let mut graph = star_graph();
    graph.add_edge("Far", "Island");
    let lookup = names(&[]);
    let mut registry = ShelterRegistry::new([
        Shelter::new("Island", 1).stocking(Resource::Medicine, 100),
        Shelter::new("S2", 1).stocking(Resource::Water, 100),
    ]);
    let zones = vec![DisasterZone::new("Z", 5)
        .requiring(Resource::Medicine, 10)
        .requiring(Resource::Water, 10)];

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &DispatchOptions::default())
        .expect("zone exists");

    let medicine = report.resource(Resource::Medicine).expect("medicine entry");
    assert!(medicine.deliveries.is_empty());
    assert_eq!(medicine.shortfall, 10);
    assert!(report.resource(Resource::Water).expect("water entry").is_fulfilled());
    assert_eq!(
        registry.shelter("Island").map(|s| s.stock_of(Resource::Medicine)),
        Some(100)
    );
}

#[test]
fn unknown_zone_is_an_error_and_leaves_stock_untouched() {
    let graph = star_graph();
    let lookup = names(&[("M", "Market")]);
    let mut registry = ShelterRegistry::new([Shelter::new("S1", 1).stocking(Resource::Food, 5)]);
    let zones = vec![DisasterZone::new("Z", 1).requiring(Resource::Food, 5)];

    let error = registry
        .dispatch_supplies(&zones, &graph, &lookup, "M", &DispatchOptions::default())
        .expect_err("no zone at M");

    assert!(matches!(error, Error::UnknownDisasterZone { ref location } if location == "Market"));
    assert_eq!(registry.shelter("S1").map(|s| s.stock_of(Resource::Food)), Some(5));
}

#[test]
fn dispatch_distance_ignores_hazards_by_default() {
    let graph = LocationGraph::from_edges([("Z", "A"), ("A", "S")]);
    let lookup = names(&[("A", "Flood Area")]);
    let mut registry = ShelterRegistry::new([Shelter::new("S", 1).stocking(Resource::Food, 10)]);
    let zones = vec![DisasterZone::new("Z", 1).requiring(Resource::Food, 10)];

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &DispatchOptions::default())
        .expect("zone exists");
    assert!(report.is_fulfilled());
}

#[test]
fn hazard_aware_dispatch_excludes_blocked_shelters() {
    let graph = LocationGraph::from_edges([("Z", "A"), ("A", "S")]);
    let lookup = names(&[("A", "Flood Area")]);
    let mut registry = ShelterRegistry::new([Shelter::new("S", 1).stocking(Resource::Food, 10)]);
    let zones = vec![DisasterZone::new("Z", 1).requiring(Resource::Food, 10)];
    let options = DispatchOptions {
        avoid_hazards: true,
        ..DispatchOptions::default()
    };

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &options)
        .expect("zone exists");
    assert_eq!(report.total_shortfall(), 10);
    assert_eq!(registry.shelter("S").map(|s| s.stock_of(Resource::Food)), Some(10));
}

#[test]
fn fixture_dispatch_drains_in_priority_order() {
    let mut dataset = load_fixture();

    let report = dataset
        .shelters
        .dispatch_supplies(
            &dataset.zones,
            &dataset.graph,
            &dataset.atlas,
            "N1",
            &DispatchOptions::default(),
        )
        .expect("zone N1 exists");

    assert_eq!(report.severity, 5);
    let medicine = report.resource(Resource::Medicine).expect("medicine");
    let sources: Vec<(&str, u32)> = medicine
        .deliveries
        .iter()
        .map(|d| (d.shelter.as_str(), d.units))
        .collect();
    assert_eq!(sources, vec![("N9", 10), ("N7", 50), ("N8", 10)]);

    let food = report.resource(Resource::Food).expect("food");
    assert_eq!(food.supplied(), 120);
    assert_eq!(food.deliveries.len(), 1);

    let water = report.resource(Resource::Water).expect("water");
    assert_eq!(water.supplied(), 580);
    assert_eq!(water.shortfall, 320);

    let n9 = dataset.shelters.shelter("N9").expect("N9 loaded");
    assert_eq!(n9.stock_of(Resource::Food), 380);
    assert_eq!(n9.stock_of(Resource::Water), 0);
}

#[test]
fn second_dispatch_sees_drained_stock() {
    let mut dataset = load_fixture();
    let options = DispatchOptions::default();

    dataset
        .shelters
        .dispatch_supplies(&dataset.zones, &dataset.graph, &dataset.atlas, "N1", &options)
        .expect("first dispatch");
    let again = dataset
        .shelters
        .dispatch_supplies(&dataset.zones, &dataset.graph, &dataset.atlas, "N1", &options)
        .expect("second dispatch");

    let medicine = again.resource(Resource::Medicine).expect("medicine");
    assert_eq!(medicine.supplied(), 20);
    assert_eq!(medicine.shortfall, 50);
    let water = again.resource(Resource::Water).expect("water");
    assert_eq!(water.shortfall, 900);
}

#[test]
fn maximal_requirements_total_without_overflow() {
    let graph = star_graph();
    let lookup = names(&[]);
    let mut registry = ShelterRegistry::default();
    let zones = vec![DisasterZone::new("Z", 1)
        .requiring(Resource::Medicine, u32::MAX)
        .requiring(Resource::Food, 1)];

    let report = registry
        .dispatch_supplies(&zones, &graph, &lookup, "Z", &DispatchOptions::default())
        .expect("zone exists");

    assert_eq!(report.total_shortfall(), u64::from(u32::MAX) + 1);
    assert!(!report.is_fulfilled());
}
