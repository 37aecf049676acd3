//! Analysis service reply. Loosely structured; parsing is tolerant of the
//! shapes the service actually emits (string agent replies, `"N/A"` ratings,
//! `types` instead of `categories`, bare `{places}` from `/upload`).

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// JSON payload returned after an upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_response: Option<AgentResponse>,
    /// Top-level list; only the `/upload` route fills this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places: Option<Vec<Place>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude_input: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude_input: Option<f64>,
}

impl AnalysisResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn success(places: Vec<Place>) -> Self {
        Self {
            status: Some(ResponseStatus::Success),
            agent_response: Some(AgentResponse::Structured(AgentPayload {
                places: Some(places),
                ..AgentPayload::default()
            })),
            ..Self::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Some(ResponseStatus::Error),
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Places from whichever list the reply carries.
    pub fn places(&self) -> Option<&[Place]> {
        match &self.agent_response {
            Some(AgentResponse::Structured(payload)) => payload.places.as_deref(),
            _ => self.places.as_deref(),
        }
    }

    pub fn is_error(&self) -> bool {
        match self.status {
            Some(ResponseStatus::Error) => true,
            // The service's exception path returns `{error}` with no status.
            None => self.error.is_some() && self.agent_response.is_none(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgentResponse {
    Structured(AgentPayload),
    Text(String),
    /// Anything else (arrays, mistyped objects); kept so the rest of the reply still renders.
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub places: Option<Vec<Place>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Business/landmark record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default, deserialize_with = "string_lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "string_lenient")]
    pub address: String,
    #[serde(
        default,
        deserialize_with = "rating_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(
        default,
        deserialize_with = "categories_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<Categories>,
    /// The places tool's wire name for categories.
    #[serde(
        default,
        deserialize_with = "categories_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub types: Option<Categories>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, address: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            rating,
            ..Self::default()
        }
    }

    /// `categories`, else `types`.
    pub fn categories(&self) -> Option<&Categories> {
        self.categories.as_ref().or(self.types.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Categories {
    One(String),
    Many(Vec<String>),
}

impl Categories {
    pub fn joined(&self) -> String {
        match self {
            Categories::One(s) => s.clone(),
            Categories::Many(v) => v.join(", "),
        }
    }
}

/// Accepts a number, a numeric string, or a placeholder like `"N/A"` (-> `None`).
fn rating_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// `null` -> empty, numbers/bools -> their text.
fn string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

/// A string, a list of strings (non-strings skipped), anything else -> `None`.
fn categories_lenient<'de, D>(deserializer: D) -> Result<Option<Categories>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => Some(Categories::One(s)),
        Some(serde_json::Value::Array(items)) => Some(Categories::Many(
            items
                .into_iter()
                .filter_map(|v| match v {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        )),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_with_places() {
        let body = r#"{"status":"success","agent_response":{"places":[{"name":"Cafe X","address":"1 Main St","rating":4.5}]}}"#;
        let resp = AnalysisResponse::from_json(body).unwrap();
        assert_eq!(resp.status, Some(ResponseStatus::Success));
        let places = resp.places().unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Cafe X");
        assert_eq!(places[0].rating, Some(4.5));
        assert!(!resp.is_error());
    }

    #[test]
    fn test_parse_service_place_shape() {
        let body = r#"{"places":[{"name":"Kampala Mall","address":"Plot 1","rating":"N/A","types":"Shopping Mall, Store","photo":null}]}"#;
        let resp = AnalysisResponse::from_json(body).unwrap();
        let place = &resp.places().unwrap()[0];
        assert_eq!(place.rating, None);
        assert_eq!(
            place.categories(),
            Some(&Categories::One("Shopping Mall, Store".to_string()))
        );
        assert_eq!(place.photo, None);
    }

    #[test]
    fn test_categories_list() {
        let body = r#"{"name":"Park","address":"","categories":["park","tourist_attraction"],"rating":"4.1"}"#;
        let place: Place = serde_json::from_str(body).unwrap();
        assert_eq!(place.categories().unwrap().joined(), "park, tourist_attraction");
        assert_eq!(place.rating, Some(4.1));
    }

    #[test]
    fn test_text_agent_response() {
        let body = r#"{"status":"success","latitude_input":1.5,"longitude_input":2.0,"agent_response":"No specific response generated by the agent."}"#;
        let resp = AnalysisResponse::from_json(body).unwrap();
        assert!(matches!(resp.agent_response, Some(AgentResponse::Text(_))));
        assert!(resp.places().is_none());
        assert_eq!(resp.latitude_input, Some(1.5));
    }

    #[test]
    fn test_error_without_status() {
        let resp = AnalysisResponse::from_json(r#"{"error":"Failed to initialize session: x"}"#).unwrap();
        assert!(resp.is_error());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let resp = AnalysisResponse::from_json(r#"{"status":"pending"}"#).unwrap();
        assert_eq!(resp.status, Some(ResponseStatus::Unknown));
        assert!(!resp.is_error());
    }

    #[test]
    fn test_place_with_both_categories_and_types() {
        let body = r#"{"name":"Museum","address":"2 Hill Rd","categories":["museum"],"types":"Museum, Tourist Attraction"}"#;
        let place: Place = serde_json::from_str(body).unwrap();
        assert_eq!(place.categories().unwrap().joined(), "museum");
        assert_eq!(place.types.unwrap().joined(), "Museum, Tourist Attraction");
    }

    #[test]
    fn test_null_address_keeps_reply() {
        let body = r#"{"status":"success","agent_response":{"places":[{"name":"Kiosk","address":null,"rating":3.9,"types":null}]}}"#;
        let resp = AnalysisResponse::from_json(body).unwrap();
        let place = &resp.places().unwrap()[0];
        assert_eq!(place.name, "Kiosk");
        assert_eq!(place.address, "");
        assert!(place.categories().is_none());
    }

    #[test]
    fn test_unexpected_agent_response_shape_is_kept() {
        let body = r#"{"status":"success","agent_response":[{"name":"x"}],"latitude_input":1.0}"#;
        let resp = AnalysisResponse::from_json(body).unwrap();
        assert!(matches!(resp.agent_response, Some(AgentResponse::Other(_))));
        assert!(resp.places().is_none());
        assert_eq!(resp.latitude_input, Some(1.0));
    }
}
