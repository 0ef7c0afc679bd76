// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments and dispatches
// to these handlers.

pub mod dispatch;
pub mod hospitals;
pub mod respond;
pub mod route;
pub mod shelter;

use std::path::Path;

use anyhow::{Context, Result};

use relief_lib::{load_dataset, resolve_data_dir, Dataset, DatasetPaths};

/// Resolve the data directory and load every dataset file from it.
pub fn load(data_dir: Option<&Path>) -> Result<Dataset> {
    let dir = resolve_data_dir(data_dir).context("failed to resolve the relief data directory")?;
    load_dataset(&DatasetPaths::for_dir(&dir))
        .with_context(|| format!("failed to load dataset from {}", dir.display()))
}
