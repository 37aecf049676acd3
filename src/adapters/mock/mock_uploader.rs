//! Mock upload adapter for running without the analysis service.

use crate::domain::{
    AnalysisResponse, Categories, DomainError, Place, ServiceStatus, UploadRequest,
};
use crate::ports::UploadPort;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

enum Outcome {
    Respond(AnalysisResponse),
    NetworkError,
    ParseError,
}

/// Records every request and answers with a predetermined outcome.
pub struct MockUploader {
    outcome: Outcome,
    delay_ms: u64,
    requests: Mutex<Vec<UploadRequest>>,
}

impl MockUploader {
    /// Answer every upload with canned nearby places.
    pub fn new() -> Self {
        Self::with_response(Self::sample_response())
    }

    pub fn with_response(response: AnalysisResponse) -> Self {
        Self::build(Outcome::Respond(response))
    }

    /// Simulate a connection failure.
    pub fn failing() -> Self {
        Self::build(Outcome::NetworkError)
    }

    /// Simulate a body that is not JSON.
    pub fn garbled() -> Self {
        Self::build(Outcome::ParseError)
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    fn build(outcome: Outcome) -> Self {
        Self {
            outcome,
            delay_ms: 0,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of uploads issued so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn requests(&self) -> Vec<UploadRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn sample_response() -> AnalysisResponse {
        let mut cafe = Place::new("[MOCK] Corner Cafe", "1 Main St", Some(4.5));
        cafe.categories = Some(Categories::One("Cafe, Food".to_string()));
        let mut gallery = Place::new("[MOCK] City Gallery", "22 Art Lane", None);
        gallery.categories = Some(Categories::Many(vec![
            "Art Gallery".to_string(),
            "Tourist Attraction".to_string(),
        ]));
        AnalysisResponse::success(vec![cafe, gallery])
    }
}

impl Default for MockUploader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl UploadPort for MockUploader {
    async fn upload(&self, request: &UploadRequest) -> Result<AnalysisResponse, DomainError> {
        info!(
            file = %request.file.filename,
            route = ?request.route,
            "[MOCK] simulating upload"
        );
        if let Ok(mut log) = self.requests.lock() {
            log.push(request.clone());
        }
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.outcome {
            Outcome::Respond(response) => Ok(response.clone()),
            Outcome::NetworkError => Err(DomainError::Upload("connection refused".to_string())),
            Outcome::ParseError => Err(DomainError::Parse(
                "expected value at line 1 column 1".to_string(),
            )),
        }
    }

    async fn health(&self) -> Result<ServiceStatus, DomainError> {
        Ok(ServiceStatus {
            message: "[MOCK] NearLens API".to_string(),
            status: "running".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SelectedFile, UploadRoute};

    #[tokio::test]
    async fn test_mock_uploader_records_requests() {
        let uploader = MockUploader::new().with_delay(5);
        let request = UploadRequest {
            route: UploadRoute::Analyze,
            file: SelectedFile::new("a.jpg", "image/jpeg", vec![1]),
            coordinates: None,
        };

        let response = uploader.upload(&request).await.unwrap();

        assert_eq!(uploader.calls(), 1);
        assert_eq!(uploader.requests()[0].file.filename, "a.jpg");
        assert_eq!(response.places().unwrap().len(), 2);
        assert!(uploader.health().await.unwrap().is_running());
    }

    #[tokio::test]
    async fn test_failing_uploader() {
        let uploader = MockUploader::failing();
        let request = UploadRequest {
            route: UploadRoute::Quick,
            file: SelectedFile::new("a.jpg", "image/jpeg", vec![1]),
            coordinates: None,
        };
        assert!(matches!(
            uploader.upload(&request).await,
            Err(DomainError::Upload(_))
        ));
        assert_eq!(uploader.calls(), 1);
    }
}
