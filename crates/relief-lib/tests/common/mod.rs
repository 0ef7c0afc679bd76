//! Common test utilities and fixture helpers.

use std::collections::HashMap;
use std::path::PathBuf;

use relief_lib::{load_dataset, Dataset, DatasetPaths};

/// Path to the fixture dataset directory.
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/dehradun")
}

/// Load the fixture dataset from disk.
#[allow(dead_code)]
pub fn load_fixture() -> Dataset {
    load_dataset(&DatasetPaths::for_dir(&fixture_dir())).expect("fixture dataset loads")
}

/// Build an id -> name lookup from literal pairs.
#[allow(dead_code)]
pub fn names(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}
