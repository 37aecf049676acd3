//! Upload client. Owns the transient session state and performs one upload per submission.
//!
//! - `select_file` replaces the selection and its preview
//! - `request_location` asks the LocationPort once; failures only raise a notice
//! - `submit` posts once, stores the reply, and always resets loading/file/preview

use crate::domain::{
    AnalysisResponse, Coordinates, DomainError, Notice, PreviewHandle, SelectedFile,
    UploadRequest, UploadRoute,
};
use crate::ports::{LocationPort, NoticePort, UploadPort};
use crate::usecases::view::ResultView;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientPhase {
    Idle,
    Locating,
    Submitting,
}

/// Outcome of a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Reply received and stored.
    Stored,
    /// Request issued but failed; nothing stored.
    Failed,
    /// Precondition not met; no request issued.
    Skipped,
}

pub struct UploadClient {
    uploader: Arc<dyn UploadPort>,
    location: Arc<dyn LocationPort>,
    notices: Arc<dyn NoticePort>,
    route: UploadRoute,

    file: Option<SelectedFile>,
    preview: Option<PreviewHandle>,
    preview_generation: u64,
    coordinates: Option<Coordinates>,
    response: Option<AnalysisResponse>,
    loading: bool,
    phase: ClientPhase,
}

impl UploadClient {
    pub fn new(
        uploader: Arc<dyn UploadPort>,
        location: Arc<dyn LocationPort>,
        notices: Arc<dyn NoticePort>,
        route: UploadRoute,
    ) -> Self {
        Self {
            uploader,
            location,
            notices,
            route,
            file: None,
            preview: None,
            preview_generation: 0,
            coordinates: None,
            response: None,
            loading: false,
            phase: ClientPhase::Idle,
        }
    }

    /// Store `file` as the current selection. `None` clears selection and preview.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.preview = None;
        match file {
            Some(file) => {
                if !file.is_image() {
                    warn!(file = %file.filename, mime = %file.mime_type, "selected file is not an image");
                }
                self.preview_generation += 1;
                let preview = PreviewHandle::for_file(self.preview_generation, &file);
                debug!(preview = %preview, generation = preview.generation, "preview regenerated");
                self.preview = Some(preview);
                self.file = Some(file);
            }
            None => {
                self.file = None;
            }
        }
    }

    /// Ask the location provider once. Coordinates are kept only on success.
    pub async fn request_location(&mut self) -> Result<Coordinates, DomainError> {
        self.set_phase(ClientPhase::Locating);
        let result = self.location.current_position(self.file.as_ref()).await;
        self.set_phase(ClientPhase::Idle);

        match result {
            Ok(coords) => {
                info!(coords = %coords, "location obtained");
                self.coordinates = Some(coords);
                self.notices.notify(Notice::LocationObtained(coords));
                Ok(coords)
            }
            Err(DomainError::LocationUnsupported) => {
                warn!("location provider has no capability");
                self.notices.notify(Notice::LocationUnsupported);
                Err(DomainError::LocationUnsupported)
            }
            Err(e) => {
                warn!(error = %e, "location request failed");
                let reason = match &e {
                    DomainError::LocationDenied(reason) => reason.clone(),
                    other => other.to_string(),
                };
                self.notices.notify(Notice::LocationDenied(reason));
                Err(e)
            }
        }
    }

    /// Upload the selection. One request at most; no retry.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.loading {
            self.notices.notify(Notice::Busy);
            return SubmitOutcome::Skipped;
        }
        let coords_ok = self.coordinates.is_some() || !self.route.requires_coordinates();
        let file = match (self.file.take(), coords_ok) {
            (Some(file), true) => file,
            (file, _) => {
                self.file = file;
                info!(
                    has_file = self.file.is_some(),
                    has_coords = self.coordinates.is_some(),
                    "submit skipped: missing input"
                );
                self.notices.notify(Notice::MissingInput);
                return SubmitOutcome::Skipped;
            }
        };

        self.loading = true;
        self.set_phase(ClientPhase::Submitting);
        self.response = None;

        let request = UploadRequest {
            route: self.route,
            file,
            coordinates: if self.route.requires_coordinates() {
                self.coordinates
            } else {
                None
            },
        };
        let result = self.uploader.upload(&request).await;

        let outcome = match result {
            Ok(response) => {
                info!(
                    places = response.places().map(|p| p.len()).unwrap_or(0),
                    error = response.is_error(),
                    "analysis received"
                );
                self.response = Some(response);
                SubmitOutcome::Stored
            }
            Err(e) => {
                error!(error = %e, "upload failed");
                self.notices.notify(Notice::UploadFailed);
                SubmitOutcome::Failed
            }
        };

        self.loading = false;
        self.set_phase(ClientPhase::Idle);
        self.file = None;
        self.preview = None;
        outcome
    }

    fn set_phase(&mut self, phase: ClientPhase) {
        debug!(from = ?self.phase, to = ?phase, "phase");
        self.phase = phase;
    }

    /// Mirrors the submit button's enabled state.
    pub fn can_submit(&self) -> bool {
        !self.loading
            && self.file.is_some()
            && (self.coordinates.is_some() || !self.route.requires_coordinates())
    }

    pub fn view(&self) -> Option<ResultView> {
        self.response.as_ref().map(ResultView::from_response)
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn response(&self) -> Option<&AnalysisResponse> {
        self.response.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> ClientPhase {
        self.phase
    }

    pub fn route(&self) -> UploadRoute {
        self.route
    }
}
