//! Locating and loading the tabular relief dataset.
//!
//! The dataset is a directory of five comma-separated files, each with a
//! header row. Columns are read by position and surrounding whitespace is
//! trimmed. Repeated shelter and disaster-zone rows for one location are
//! merged as they are read.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use tracing::{debug, info, warn};

use crate::atlas::{Atlas, LocationInfo};
use crate::error::{Error, Result};
use crate::graph::LocationGraph;
use crate::rescue::RescueTeam;
use crate::resource::Resource;
use crate::shelter::ShelterRegistry;
use crate::zone::DisasterZone;

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "RELIEF_DATA_DIR";

pub const NODES_FILENAME: &str = "nodes.txt";
pub const EDGES_FILENAME: &str = "edges.txt";
pub const SUPPLIES_FILENAME: &str = "relief_supplies.txt";
pub const RESCUE_TEAMS_FILENAME: &str = "rescue_teams.txt";
pub const DISASTER_ZONES_FILENAME: &str = "disaster_zones.txt";

/// Availability value marking a rescue team as ready for deployment.
const AVAILABLE_MARKER: &str = "Available";

/// Paths to the dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub nodes: PathBuf,
    pub edges: PathBuf,
    pub supplies: PathBuf,
    pub rescue_teams: PathBuf,
    pub disaster_zones: PathBuf,
}

impl DatasetPaths {
    /// Standard file layout inside `dir`.
    pub fn for_dir(dir: &Path) -> Self {
        Self {
            nodes: dir.join(NODES_FILENAME),
            edges: dir.join(EDGES_FILENAME),
            supplies: dir.join(SUPPLIES_FILENAME),
            rescue_teams: dir.join(RESCUE_TEAMS_FILENAME),
            disaster_zones: dir.join(DISASTER_ZONES_FILENAME),
        }
    }
}

/// Resolve the dataset directory.
///
/// Precedence: the explicit path, then `RELIEF_DATA_DIR`, then the
/// platform-specific data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(DATA_DIR_ENV) {
        debug!(path = ?path, "using data directory from {}", DATA_DIR_ENV);
        return Ok(PathBuf::from(path));
    }
    default_data_dir()
}

/// Platform-specific default data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "relief", "relief").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Everything loaded for one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub atlas: Atlas,
    pub graph: LocationGraph,
    pub shelters: ShelterRegistry,
    pub zones: Vec<DisasterZone>,
    pub teams: Vec<RescueTeam>,
}

/// Load all five dataset files.
pub fn load_dataset(paths: &DatasetPaths) -> Result<Dataset> {
    let atlas = load_nodes(&paths.nodes)?;
    let graph = load_edges(&paths.edges)?;
    let shelters = load_shelters(&paths.supplies)?;
    let zones = load_disaster_zones(&paths.disaster_zones)?;
    let teams = load_rescue_teams(&paths.rescue_teams)?;

    info!(
        locations = atlas.len(),
        edges = graph.edge_count(),
        shelters = shelters.len(),
        zones = zones.len(),
        teams = teams.len(),
        "dataset loaded"
    );

    Ok(Dataset {
        atlas,
        graph,
        shelters,
        zones,
        teams,
    })
}

pub fn load_nodes(path: &Path) -> Result<Atlas> {
    read_nodes(open(path)?, &display_name(path))
}

pub fn load_edges(path: &Path) -> Result<LocationGraph> {
    read_edges(open(path)?, &display_name(path))
}

pub fn load_shelters(path: &Path) -> Result<ShelterRegistry> {
    read_shelters(open(path)?, &display_name(path))
}

pub fn load_disaster_zones(path: &Path) -> Result<Vec<DisasterZone>> {
    read_disaster_zones(open(path)?, &display_name(path))
}

pub fn load_rescue_teams(path: &Path) -> Result<Vec<RescueTeam>> {
    read_rescue_teams(open(path)?, &display_name(path))
}

/// Parse the node table: `ID,Name,Latitude,Longitude,Type[,Capacity,Demand]`.
pub fn read_nodes<R: Read>(reader: R, file: &str) -> Result<Atlas> {
    let mut atlas = Atlas::default();
    for_each_record(reader, file, 2, |row| {
        atlas.insert(LocationInfo {
            id: row.id(0)?.to_string(),
            name: row.text(1).to_string(),
            latitude: row.optional_number(2)?,
            longitude: row.optional_number(3)?,
            kind: row.text(4).to_string(),
            capacity: row.optional_number(5)?,
            demand: row.optional_number(6)?,
        });
        Ok(())
    })?;
    Ok(atlas)
}

/// Parse the edge list: `From,To[,...]`.
pub fn read_edges<R: Read>(reader: R, file: &str) -> Result<LocationGraph> {
    let mut graph = LocationGraph::new();
    for_each_record(reader, file, 2, |row| {
        graph.add_edge(row.id(0)?, row.id(1)?);
        Ok(())
    })?;
    Ok(graph)
}

/// Parse shelter stock: `Location,Stock_Level,Supply_Type,Vehicle_Capacity`.
pub fn read_shelters<R: Read>(reader: R, file: &str) -> Result<ShelterRegistry> {
    let mut registry = ShelterRegistry::default();
    for_each_record(reader, file, 4, |row| {
        let location = row.id(0)?;
        let quantity: u32 = row.number(1)?;
        let vehicle_capacity: u32 = row.number(3)?;
        let Some(resource) = row.resource(2) else {
            return Ok(());
        };
        registry.merge_record(location, resource, quantity, vehicle_capacity);
        Ok(())
    })?;
    Ok(registry)
}

/// Parse disaster zones: `Location_ID,Resource,Amount,Severity`.
pub fn read_disaster_zones<R: Read>(reader: R, file: &str) -> Result<Vec<DisasterZone>> {
    let mut zones: Vec<DisasterZone> = Vec::new();
    for_each_record(reader, file, 4, |row| {
        let location = row.id(0)?;
        let amount: u32 = row.number(2)?;
        let severity: u32 = row.number(3)?;
        let Some(resource) = row.resource(1) else {
            return Ok(());
        };
        match zones.iter_mut().find(|zone| zone.location == location) {
            Some(zone) => zone.merge(resource, amount, severity),
            None => zones.push(DisasterZone::new(location, severity).requiring(resource, amount)),
        }
        Ok(())
    })?;
    Ok(zones)
}

/// Parse rescue teams: `Team_ID,Base_Location,Speed,Availability`.
pub fn read_rescue_teams<R: Read>(reader: R, file: &str) -> Result<Vec<RescueTeam>> {
    let mut teams = Vec::new();
    for_each_record(reader, file, 4, |row| {
        teams.push(RescueTeam {
            id: row.id(0)?.to_string(),
            base: row.id(1)?.to_string(),
            speed: row.number(2)?,
            available: row.text(3) == AVAILABLE_MARKER,
        });
        Ok(())
    })?;
    Ok(teams)
}

fn open(path: &Path) -> Result<fs::File> {
    fs::File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::DatasetFileMissing {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn for_each_record<R, F>(reader: R, file: &str, min_columns: usize, mut handle: F) -> Result<()>
where
    R: Read,
    F: FnMut(&Row<'_>) -> Result<()>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    // The header occupies row 1.
    let mut row_num: u64 = 1;
    for result in csv_reader.records() {
        row_num += 1;
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if record.len() < min_columns {
            return Err(Error::MalformedRecord {
                file: file.to_string(),
                row: row_num,
                message: format!(
                    "expected at least {min_columns} columns, found {}",
                    record.len()
                ),
            });
        }
        handle(&Row {
            record: &record,
            file,
            row: row_num,
        })?;
    }
    Ok(())
}

struct Row<'a> {
    record: &'a StringRecord,
    file: &'a str,
    row: u64,
}

impl Row<'_> {
    fn text(&self, column: usize) -> &str {
        self.record.get(column).unwrap_or_default()
    }

    /// Non-empty identifier in `column`.
    fn id(&self, column: usize) -> Result<&str> {
        match self.text(column) {
            "" => Err(self.malformed(format!("empty identifier in column {}", column + 1))),
            id => Ok(id),
        }
    }

    fn malformed(&self, message: String) -> Error {
        Error::MalformedRecord {
            file: self.file.to_string(),
            row: self.row,
            message,
        }
    }

    fn number<T>(&self, column: usize) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.text(column);
        value
            .parse::<T>()
            .map_err(|err| self.malformed(format!("invalid number '{value}' in column {}: {err}", column + 1)))
    }

    fn optional_number<T>(&self, column: usize) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        if self.text(column).is_empty() {
            Ok(None)
        } else {
            self.number(column).map(Some)
        }
    }

    fn resource(&self, column: usize) -> Option<Resource> {
        match self.text(column).parse() {
            Ok(resource) => Some(resource),
            Err(err) => {
                warn!(file = self.file, row = self.row, "skipping record: {err}");
                None
            }
        }
    }
}
