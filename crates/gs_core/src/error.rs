use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a decoded response into a status record.
///
/// A well-formed response never produces one of these; they flag payloads
/// that break an invariant the extractors rely on.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("dug_onsen_id_array is empty, expected at least the starting site")]
    EmptyDugSites,

    #[error("Dug site id {id} outside 1..={max}")]
    SiteIdOutOfRange { id: i32, max: usize },
}

/// Failures from the snapshot writer.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Writing {} failed after {attempts} attempts: {source}", .path.display())]
    RetriesExhausted {
        path: PathBuf,
        attempts: u32,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while loading configuration or the event database.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
