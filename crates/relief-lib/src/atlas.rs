use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Opaque identifier for a location node.
pub type LocationId = String;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Read-only mapping from location identifier to display name.
///
/// Every query that classifies or describes locations takes a lookup
/// explicitly instead of consulting shared tables.
pub trait NameLookup {
    /// Display name for `id`, if known.
    fn name_of(&self, id: &str) -> Option<&str>;
}

impl NameLookup for HashMap<String, String> {
    fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

/// Reference data for a single node in the location table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationInfo {
    pub id: LocationId,
    pub name: String,
    /// Facility classification such as `hospital`, `shelter` or `warehouse`.
    pub kind: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: Option<u32>,
    pub demand: Option<u32>,
}

/// Directory of known locations with id and name indexes.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    locations: Vec<LocationInfo>,
    id_to_index: HashMap<LocationId, usize>,
    name_to_id: HashMap<String, LocationId>,
}

impl Atlas {
    /// Build an atlas from location records in load order.
    ///
    /// A repeated identifier replaces the earlier record in place.
    pub fn new(locations: impl IntoIterator<Item = LocationInfo>) -> Self {
        let mut atlas = Self::default();
        for location in locations {
            atlas.insert(location);
        }
        atlas
    }

    /// Insert or replace a location record.
    pub fn insert(&mut self, location: LocationInfo) {
        if let Some(&index) = self.id_to_index.get(&location.id) {
            let previous = &self.locations[index].name;
            if self.name_to_id.get(previous) == Some(&location.id) {
                self.name_to_id.remove(previous);
            }
        }
        self.name_to_id
            .insert(location.name.clone(), location.id.clone());
        match self.id_to_index.get(&location.id) {
            Some(&index) => self.locations[index] = location,
            None => {
                self.id_to_index
                    .insert(location.id.clone(), self.locations.len());
                self.locations.push(location);
            }
        }
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the atlas holds no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations in load order.
    pub fn locations(&self) -> &[LocationInfo] {
        &self.locations
    }

    /// Lookup a location record by identifier.
    pub fn location(&self, id: &str) -> Option<&LocationInfo> {
        self.id_to_index.get(id).map(|&index| &self.locations[index])
    }

    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id_by_name(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: &str) -> Option<&str> {
        self.location(id).map(|location| location.name.as_str())
    }

    /// Locations whose kind matches `kind` exactly, in load order.
    pub fn locations_of_kind<'a>(
        &'a self,
        kind: &'a str,
    ) -> impl Iterator<Item = &'a LocationInfo> + 'a {
        self.locations
            .iter()
            .filter(move |location| location.kind == kind)
    }

    /// Suggest up to `limit` known names similar to `name`, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .locations
            .iter()
            .map(|location| {
                let score = strsim::jaro_winkler(&needle, &location.name.to_lowercase());
                (score, location.name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Resolve a display name to its identifier, suggesting close matches on failure.
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        self.location_id_by_name(name)
            .map(str::to_string)
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.fuzzy_location_matches(name, 3),
            })
    }
}

impl NameLookup for Atlas {
    fn name_of(&self, id: &str) -> Option<&str> {
        self.location_name(id)
    }
}
