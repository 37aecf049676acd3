//! User-visible notices raised by the client.

use crate::domain::Coordinates;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    LocationObtained(Coordinates),
    LocationDenied(String),
    LocationUnsupported,
    MissingInput,
    Busy,
    UploadFailed,
}

impl Notice {
    pub fn is_problem(&self) -> bool {
        !matches!(self, Notice::LocationObtained(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LocationObtained(c) => write!(f, "Location obtained! ({})", c),
            Notice::LocationDenied(reason) => {
                write!(f, "Unable to access location ({}). Pass --lat/--lon or use a geotagged photo.", reason)
            }
            Notice::LocationUnsupported => write!(f, "Geolocation not supported by this location provider."),
            Notice::MissingInput => write!(f, "Please select an image and allow location access first!"),
            Notice::Busy => write!(f, "Still analyzing the previous photo, please wait."),
            Notice::UploadFailed => write!(f, "Failed to upload image or get analysis."),
        }
    }
}
