//! Application use cases. Orchestrate domain logic via ports.

pub mod upload_client;
pub mod view;

pub use upload_client::{ClientPhase, SubmitOutcome, UploadClient};
pub use view::{ErrorPanel, PlaceEntry, PlacesPanel, ResultView};
