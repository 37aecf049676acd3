//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    AnalysisResponse, Coordinates, DomainError, Notice, SelectedFile, ServiceStatus,
    UploadRequest,
};

/// Remote analysis service. One call per submission, never retried.
#[async_trait::async_trait]
pub trait UploadPort: Send + Sync {
    /// POST the file (and coordinates, when the route takes them) and parse the JSON reply.
    ///
    /// Network and HTTP failures map to `DomainError::Upload`, bad JSON to `DomainError::Parse`.
    async fn upload(&self, request: &UploadRequest) -> Result<AnalysisResponse, DomainError>;

    /// Probe the service root.
    async fn health(&self) -> Result<ServiceStatus, DomainError>;
}

/// Platform geolocation capability.
#[async_trait::async_trait]
pub trait LocationPort: Send + Sync {
    /// Resolve the current position.
    ///
    /// `photo` is the current selection, for providers that read the position
    /// from the image itself. Returns `LocationUnsupported` when the provider
    /// has no capability at all and `LocationDenied` when it could not produce one.
    async fn current_position(
        &self,
        photo: Option<&SelectedFile>,
    ) -> Result<Coordinates, DomainError>;
}

/// Sink for user-visible notices.
pub trait NoticePort: Send + Sync {
    fn notify(&self, notice: Notice);
}
