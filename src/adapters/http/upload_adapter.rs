//! reqwest adapter for the analysis service.
//!
//! Implements `UploadPort` with a single multipart POST per submission. No retry.

use crate::domain::{AnalysisResponse, DomainError, ServiceStatus, UploadRequest, UploadRoute};
use crate::ports::UploadPort;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP adapter for `POST {base}/api/upload` and `POST {base}/upload`.
pub struct HttpUploadAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUploadAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `base_url` - Service root (e.g. "http://localhost:8000"); trailing slashes are trimmed
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, route: UploadRoute) -> String {
        format!("{}{}", self.base_url, route.path())
    }

    fn build_form(request: &UploadRequest) -> Result<Form, DomainError> {
        let part = Part::bytes(request.file.bytes.clone())
            .file_name(request.file.filename.clone())
            .mime_str(&request.file.mime_type)
            .map_err(|e| DomainError::Upload(format!("invalid MIME type: {}", e)))?;
        let mut form = Form::new().part("file", part);
        for (name, value) in request.text_fields() {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

#[async_trait::async_trait]
impl UploadPort for HttpUploadAdapter {
    async fn upload(&self, request: &UploadRequest) -> Result<AnalysisResponse, DomainError> {
        let url = self.endpoint(request.route);
        info!(
            url = %url,
            file = %request.file.filename,
            bytes = request.file.len(),
            "uploading photo"
        );

        let form = Self::build_form(request)?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Upload(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        // `/api/upload` reports failures in the JSON body; `/upload` signals them by status.
        if request.route == UploadRoute::Quick && !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "upload endpoint returned error");
            return Err(DomainError::Upload(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Upload(format!("Failed to read response body: {}", e)))?;
        debug!(status = %status, body_len = body.len(), "received analysis response");

        AnalysisResponse::from_json(&body).map_err(|e| {
            warn!(error = %e, body = %body.chars().take(200).collect::<String>(), "JSON parse failed");
            DomainError::Parse(e.to_string())
        })
    }

    async fn health(&self) -> Result<ServiceStatus, DomainError> {
        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Upload(format!("HTTP request failed: {}", e)))?;
        if !response.status().is_success() {
            return Err(DomainError::Upload(format!(
                "health probe returned {}",
                response.status()
            )));
        }
        response
            .json::<ServiceStatus>()
            .await
            .map_err(|e| DomainError::Parse(e.to_string()))
    }
}
