//! Core domain layer. No external I/O dependencies beyond reading a picked file.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod notice;
pub mod response;

pub use entities::{
    Coordinates, PreviewHandle, SelectedFile, ServiceStatus, UploadRequest, UploadRoute,
};
pub use errors::DomainError;
pub use notice::Notice;
pub use response::{
    AgentPayload, AgentResponse, AnalysisResponse, Categories, Place, ResponseStatus,
};
