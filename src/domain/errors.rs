//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Select an image and obtain your location first")]
    MissingInput,

    #[error("A submission is already in flight")]
    Busy,

    #[error("Geolocation is not supported by this location provider")]
    LocationUnsupported,

    #[error("Unable to access location: {0}")]
    LocationDenied(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Response parse failed: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),
}
