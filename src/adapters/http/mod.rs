//! HTTP adapter for the remote analysis service.

pub mod upload_adapter;

pub use upload_adapter::HttpUploadAdapter;
