//! Fixed and absent location providers.

use crate::domain::{Coordinates, DomainError, SelectedFile};
use crate::ports::LocationPort;
use tracing::debug;

/// Always reports the coordinates it was built with (CLI flags or config).
pub struct FixedLocation {
    coordinates: Coordinates,
}

impl FixedLocation {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait::async_trait]
impl LocationPort for FixedLocation {
    async fn current_position(
        &self,
        _photo: Option<&SelectedFile>,
    ) -> Result<Coordinates, DomainError> {
        debug!(coords = %self.coordinates, "fixed location");
        Ok(self.coordinates)
    }
}

/// No location capability configured.
pub struct UnavailableLocation;

#[async_trait::async_trait]
impl LocationPort for UnavailableLocation {
    async fn current_position(
        &self,
        _photo: Option<&SelectedFile>,
    ) -> Result<Coordinates, DomainError> {
        Err(DomainError::LocationUnsupported)
    }
}
