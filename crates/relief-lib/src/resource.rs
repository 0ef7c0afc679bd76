use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Relief resources handled by the dispatch planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Resource {
    Medicine,
    Food,
    Water,
}

impl Resource {
    /// Order in which a disaster zone's needs are served.
    pub const PRIORITY: [Resource; 3] = [Resource::Medicine, Resource::Food, Resource::Water];

    /// Name used in the input files.
    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Medicine => "Medicine",
            Resource::Food => "Food",
            Resource::Water => "Water",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Medicine" => Ok(Resource::Medicine),
            "Food" => Ok(Resource::Food),
            "Water" => Ok(Resource::Water),
            other => Err(Error::UnknownResource {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_serves_medicine_first() {
        assert_eq!(
            Resource::PRIORITY,
            [Resource::Medicine, Resource::Food, Resource::Water]
        );
    }

    #[test]
    fn parses_names_from_input_files() {
        assert_eq!(" Water ".parse::<Resource>().unwrap(), Resource::Water);
        assert!("Blankets".parse::<Resource>().is_err());
    }
}
