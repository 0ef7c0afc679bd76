use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the relief library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the relief dataset")]
    ProjectDirsUnavailable,

    /// A required dataset file was not present in the data directory.
    #[error("dataset file not found at {path}")]
    DatasetFileMissing { path: PathBuf },

    /// Raised when a record in one of the tabular input files cannot be parsed.
    #[error("malformed record in {file} at row {row}: {message}")]
    MalformedRecord {
        file: String,
        row: u64,
        message: String,
    },

    /// Raised when a location name could not be found in the atlas.
    #[error("unknown location name: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a dispatch targets a location with no disaster zone record.
    #[error("no disaster zone information found for location {location}")]
    UnknownDisasterZone { location: String },

    /// Raised when an unrecognised resource name is parsed.
    #[error("unknown resource type: {name}")]
    UnknownResource { name: String },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
