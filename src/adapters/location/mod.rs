//! Location providers. Implement LocationPort.
//!
//! A terminal has no browser geolocation; position comes from flags/config or the photo's GPS tags.

pub mod exif_location;
pub mod fixed;

pub use exif_location::ExifLocation;
pub use fixed::{FixedLocation, UnavailableLocation};
