use reqwest::StatusCode;
use thiserror::Error;

/// Failures that can occur while looking up weather for a single location.
///
/// Only `MissingApiKey` stops a run. Every other variant is logged and
/// reported to the user as "no data" for the affected location.
#[derive(Debug, Error)]
pub enum WtrError {
    #[error("no OpenWeather API key configured")]
    MissingApiKey,

    #[error("invalid location '{0}': only alphabetic characters are allowed")]
    InvalidLocation(String),

    #[error("request to OpenWeather failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenWeather responded with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse OpenWeather response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no geocoding match for '{0}'")]
    LocationNotFound(String),

    #[error("coordinates for '{0}' are incomplete")]
    IncompleteCoordinates(String),
}

pub type Result<T, E = WtrError> = std::result::Result<T, E>;
