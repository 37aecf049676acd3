//! Domain entities. Pure data structures for the upload round trip.
//!
//! No HTTP/terminal types here — adapters map to and from these.

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// User-chosen image blob awaiting submission.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Read a file from disk. MIME type is inferred from the extension.
    pub async fn from_path(path: &Path) -> Result<Self, DomainError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DomainError::Io(format!("read {}: {}", path.display(), e)))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime_type = mime_for_path(path);
        Ok(Self::new(filename, mime_type, bytes))
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Keep image bytes out of logs.
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("filename", &self.filename)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Local preview reference for the current selection.
///
/// `generation` increases with every selection, so a handle from an older
/// selection never compares equal to the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHandle {
    pub generation: u64,
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

impl PreviewHandle {
    pub fn for_file(generation: u64, file: &SelectedFile) -> Self {
        Self {
            generation,
            filename: file.filename.clone(),
            mime_type: file.mime_type.clone(),
            size_bytes: file.len(),
        }
    }
}

impl fmt::Display for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.filename,
            self.mime_type,
            human_size(self.size_bytes)
        )
    }
}

fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KIB {
        format!("{} B", bytes)
    } else if b < KIB * KIB {
        format!("{:.1} KiB", b / KIB)
    } else {
        format!("{:.1} MiB", b / (KIB * KIB))
    }
}

/// Device position. Produced once per explicit location request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Form-field encoding: shortest decimal that round-trips (`37.5`, `-122`).
    pub fn latitude_field(&self) -> String {
        self.latitude.to_string()
    }

    pub fn longitude_field(&self) -> String {
        self.longitude.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Which upload endpoint to post to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadRoute {
    /// `/api/upload`: file + coordinates, wrapped `{status, agent_response, error}` reply.
    #[default]
    Analyze,
    /// `/upload`: file only, bare `{places}` reply.
    Quick,
}

impl UploadRoute {
    pub fn path(self) -> &'static str {
        match self {
            UploadRoute::Analyze => "/api/upload",
            UploadRoute::Quick => "/upload",
        }
    }

    pub fn requires_coordinates(self) -> bool {
        matches!(self, UploadRoute::Analyze)
    }
}

impl std::str::FromStr for UploadRoute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "analyze" => Ok(UploadRoute::Analyze),
            "quick" => Ok(UploadRoute::Quick),
            other => Err(DomainError::Config(format!("unknown upload route: {}", other))),
        }
    }
}

/// One submission, as handed to the upload port.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub route: UploadRoute,
    pub file: SelectedFile,
    pub coordinates: Option<Coordinates>,
}

impl UploadRequest {
    /// Text fields sent next to the `file` part.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        match self.coordinates {
            Some(c) => vec![
                ("latitude", c.latitude_field()),
                ("longitude", c.longitude_field()),
            ],
            None => Vec::new(),
        }
    }
}

/// Reply of the service's root health probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl ServiceStatus {
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_fields_are_plain_decimals() {
        let c = Coordinates::new(37.5, -122.0);
        assert_eq!(c.latitude_field(), "37.5");
        assert_eq!(c.longitude_field(), "-122");
    }

    #[test]
    fn test_coordinates_display_four_places() {
        let c = Coordinates::new(0.347_612, 32.582_71);
        assert_eq!(c.to_string(), "0.3476, 32.5827");
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("shot.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_text_fields_without_coordinates() {
        let req = UploadRequest {
            route: UploadRoute::Quick,
            file: SelectedFile::new("a.png", "image/png", vec![1, 2, 3]),
            coordinates: None,
        };
        assert!(req.text_fields().is_empty());
    }

    #[test]
    fn test_route_paths_and_parse() {
        assert_eq!(UploadRoute::Analyze.path(), "/api/upload");
        assert_eq!(UploadRoute::Quick.path(), "/upload");
        assert_eq!("Quick".parse::<UploadRoute>().unwrap(), UploadRoute::Quick);
        assert!("bogus".parse::<UploadRoute>().is_err());
    }

    #[test]
    fn test_preview_display() {
        let file = SelectedFile::new("cafe.jpg", "image/jpeg", vec![0; 2048]);
        let preview = PreviewHandle::for_file(3, &file);
        assert_eq!(preview.to_string(), "cafe.jpg (image/jpeg, 2.0 KiB)");
    }

    #[tokio::test]
    async fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.png");
        std::fs::write(&path, b"\x89PNG....").unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(file.filename, "storefront.png");
        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.len(), 8);
        assert!(file.is_image());
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let err = SelectedFile::from_path(Path::new("/nonexistent/nearlens/x.jpg"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Io(_)));
    }
}
