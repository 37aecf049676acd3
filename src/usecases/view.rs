//! Result view model. What the terminal draws for a stored reply.

use crate::domain::{AgentResponse, AnalysisResponse, Coordinates, Place};

/// Shown when the agent replied without any places.
pub const NO_PLACES_TEXT: &str = "No specific textual response from the agent.";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub places: Option<PlacesPanel>,
    pub error: Option<ErrorPanel>,
    pub searched_at: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacesPanel {
    pub entries: Vec<PlaceEntry>,
    /// Free text the agent sent instead of (or next to) places.
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceEntry {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub categories: String,
    pub photo: Option<String>,
}

impl PlaceEntry {
    /// A zero rating means the place is unrated.
    pub fn rating_label(&self) -> String {
        self.rating
            .filter(|r| *r > 0.0)
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

impl From<&Place> for PlaceEntry {
    fn from(place: &Place) -> Self {
        Self {
            name: place.name.clone(),
            address: place.address.clone(),
            rating: place.rating,
            categories: place
                .categories()
                .map(|c| c.joined())
                .unwrap_or_default(),
            photo: place.photo.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub message: String,
}

impl ResultView {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        let places = if response.agent_response.is_some() || response.places.is_some() {
            let entries = response
                .places()
                .unwrap_or_default()
                .iter()
                .map(PlaceEntry::from)
                .collect();
            let note = match &response.agent_response {
                Some(AgentResponse::Text(text)) => Some(text.clone()),
                Some(AgentResponse::Structured(payload)) => {
                    payload.message.clone().or_else(|| payload.error.clone())
                }
                Some(AgentResponse::Other(_)) | None => None,
            };
            Some(PlacesPanel { entries, note })
        } else {
            None
        };

        let error = response.is_error().then(|| ErrorPanel {
            message: response.error.clone().unwrap_or_default(),
        });

        let searched_at = match (response.latitude_input, response.longitude_input) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };

        Self {
            places,
            error,
            searched_at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_none() && self.error.is_none()
    }
}
