//! Application configuration. Service URL, default location, timeouts.

use crate::domain::{Coordinates, UploadRoute};
use serde::Deserialize;

/// Base URL used when neither NEARLENS_API_BASE_URL nor API_BASE_URL is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Upload request timeout. Analysis runs an agent pipeline server-side, so this is generous.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the analysis service. Read from NEARLENS_API_BASE_URL (or API_BASE_URL).
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Default latitude when no location flag is given. Read from NEARLENS_LATITUDE.
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Default longitude when no location flag is given. Read from NEARLENS_LONGITUDE.
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Upload request timeout in seconds. Read from NEARLENS_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Upload route: "analyze" (default) or "quick". Read from NEARLENS_ROUTE.
    #[serde(default)]
    pub route: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NEARLENS"));
        if let Ok(path) = std::env::var("NEARLENS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // API_BASE_URL is read directly (no prefix) so an existing frontend .env keeps working
        if cfg.api_base_url.is_none() {
            if let Ok(url) = std::env::var("API_BASE_URL") {
                cfg.api_base_url = Some(url);
            }
        }
        Ok(cfg)
    }

    /// Returns the base URL without trailing slashes.
    pub fn api_base_url_or_default(&self) -> String {
        let url = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        url.trim_end_matches('/').to_string()
    }

    /// Returns the request timeout in seconds. Defaults to 60 if unset.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Returns the configured default location, if both halves are set.
    pub fn default_location(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        }
    }

    /// Returns the upload route. Unknown values fall back to `analyze` with a warning.
    pub fn route_or_default(&self) -> UploadRoute {
        match self.route.as_deref() {
            None => UploadRoute::default(),
            Some(raw) => raw.parse::<UploadRoute>().unwrap_or_else(|e| {
                tracing::warn!(route = %raw, error = %e, "ignoring NEARLENS_ROUTE");
                UploadRoute::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let cfg = AppConfig {
            api_base_url: Some("https://nearlens.example.com/ ".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.api_base_url_or_default(), "https://nearlens.example.com");
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_base_url_or_default(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.request_timeout_secs_or_default(), 60);
        assert_eq!(cfg.route_or_default(), UploadRoute::Analyze);
        assert!(cfg.default_location().is_none());
    }

    #[test]
    fn test_default_location_needs_both_halves() {
        let half = AppConfig {
            latitude: Some(1.0),
            ..AppConfig::default()
        };
        assert!(half.default_location().is_none());

        let full = AppConfig {
            latitude: Some(1.0),
            longitude: Some(2.0),
            ..AppConfig::default()
        };
        assert_eq!(full.default_location(), Some(Coordinates::new(1.0, 2.0)));
    }

    #[test]
    fn test_route_parsing() {
        let cfg = AppConfig {
            route: Some("quick".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.route_or_default(), UploadRoute::Quick);

        let bad = AppConfig {
            route: Some("sideways".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(bad.route_or_default(), UploadRoute::Analyze);
    }
}
