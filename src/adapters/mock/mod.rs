//! In-memory adapters for offline runs and tests.
//!
//! No network; responses and notices stay in process.

pub mod mock_uploader;
pub mod recording_notices;

pub use mock_uploader::MockUploader;
pub use recording_notices::RecordingNotices;
