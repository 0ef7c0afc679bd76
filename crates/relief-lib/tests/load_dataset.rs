mod common;

use std::fs;

use relief_lib::dataset::{load_shelters, NODES_FILENAME};
use relief_lib::{load_dataset, DatasetPaths, Error, Resource, Result};
use tempfile::tempdir;

use common::fixture_dir;

#[test]
fn fixture_dataset_loads_every_table() -> Result<()> {
    let dataset = load_dataset(&DatasetPaths::for_dir(&fixture_dir()))?;

    assert_eq!(dataset.atlas.len(), 11);
    assert_eq!(dataset.graph.edge_count(), 11, "duplicate N2-N1 edge collapses");
    assert_eq!(dataset.shelters.len(), 3);
    assert_eq!(dataset.zones.len(), 2);
    assert_eq!(dataset.teams.len(), 3);

    assert_eq!(
        dataset.atlas.location_id_by_name("Patel Nagar Main"),
        Some("N1")
    );
    let community = dataset.shelters.shelter("N7").expect("N7 stocked");
    assert_eq!(community.stock_of(Resource::Food), 100);
    assert_eq!(community.vehicle_capacity, 5);
    Ok(())
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempdir().expect("create temp dir");
    let error = load_dataset(&DatasetPaths::for_dir(dir.path())).expect_err("empty dir");

    match error {
        Error::DatasetFileMissing { path } => assert!(path.ends_with(NODES_FILENAME)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_supply_row_names_file_and_row() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("relief_supplies.txt");
    fs::write(
        &path,
        "Location,Stock_Level,Supply_Type,Vehicle_Capacity\nS1,10,Food,2\nS2,-5,Water,1\n",
    )
    .expect("write supplies");

    let error = load_shelters(&path).expect_err("negative stock");
    let message = error.to_string();
    assert!(message.contains("relief_supplies.txt"), "{message}");
    assert!(message.contains("row 3"), "{message}");
}
