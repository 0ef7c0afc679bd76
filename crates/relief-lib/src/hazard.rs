//! Classification of affected areas that routes must not pass through.

use crate::atlas::NameLookup;

/// Substring marking a location name as an affected area.
pub const AFFECTED_AREA_MARKER: &str = "Area";

/// Named sites treated as hazardous regardless of their name pattern.
pub const NAMED_HAZARD_SITES: &[&str] = &["Graphic Era University", "Railway Station"];

/// Decides whether a location is an affected area.
///
/// This is the single avoidance rule shared by path search, shelter
/// eligibility and rescue routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HazardClassifier {
    marker: String,
    named_sites: Vec<String>,
}

impl Default for HazardClassifier {
    fn default() -> Self {
        Self {
            marker: AFFECTED_AREA_MARKER.to_string(),
            named_sites: NAMED_HAZARD_SITES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl HazardClassifier {
    /// Treat an additional exact display name as hazardous.
    pub fn with_named_site(mut self, name: impl Into<String>) -> Self {
        self.named_sites.push(name.into());
        self
    }

    /// Whether a display name denotes an affected area.
    pub fn is_hazardous_name(&self, name: &str) -> bool {
        name.contains(self.marker.as_str()) || self.named_sites.iter().any(|site| site == name)
    }

    /// Whether the location `id` is hazardous. Unknown locations are assumed safe.
    pub fn is_hazardous(&self, id: &str, lookup: &dyn NameLookup) -> bool {
        lookup
            .name_of(id)
            .map(|name| self.is_hazardous_name(name))
            .unwrap_or(false)
    }
}
