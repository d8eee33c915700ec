//! Geoapify client for the two upstream lookups the planner consumes:
//! forward geocoding and category-filtered places search.
//!
//! Requires the `GEOAPIFY_API_KEY` environment variable.

use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const GEOAPIFY_GEOCODE_URL: &str = "https://api.geoapify.com/v1/geocode/search";
const GEOAPIFY_PLACES_URL: &str = "https://api.geoapify.com/v2/places";

// Per-call timeouts; geocoding answers fast, places queries can be slower.
const GEOCODE_TIMEOUT_SECS: u64 = 5;
const PLACES_TIMEOUT_SECS: u64 = 10;

#[derive(Debug)]
pub enum GeoapifyError {
    EnvironmentError(String),
    HttpError(reqwest::Error),
    NotFound(String),
    ResponseError(String),
}

impl fmt::Display for GeoapifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoapifyError::EnvironmentError(msg) => write!(f, "Environment error: {}", msg),
            GeoapifyError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeoapifyError::NotFound(place) => {
                write!(f, "Could not find coordinates for city '{}'.", place)
            }
            GeoapifyError::ResponseError(msg) => write!(f, "Response error: {}", msg),
        }
    }
}

impl Error for GeoapifyError {}

impl From<reqwest::Error> for GeoapifyError {
    fn from(err: reqwest::Error) -> Self {
        GeoapifyError::HttpError(err)
    }
}

impl GeoapifyError {
    /// Human-readable message for a failed geocoding call, matching the
    /// channel the failure came from.
    pub fn geocoding_message(&self) -> String {
        match self {
            GeoapifyError::NotFound(_) => self.to_string(),
            GeoapifyError::HttpError(err) => format!("Network error during geocoding: {}", err),
            _ => format!("Error processing geocode data: {}", self),
        }
    }
}

/// Sparse GeoJSON properties of one returned place. Geoapify omits most
/// fields for minor venues, so everything here is optional.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlaceRecord {
    pub name: Option<String>,
    pub address_line1: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    pub formatted: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<PlaceFeature>,
}

#[derive(Debug, Deserialize)]
struct PlaceFeature {
    #[serde(default)]
    properties: PlaceRecord,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    // Geoapify orders these [lon, lat]
    coordinates: Vec<f64>,
}

/// The two collaborator operations the planner and hotel search consume.
/// Implemented by [`GeoapifyClient`]; tests supply their own stand-ins.
pub trait PlacesOperations {
    async fn geocode(&self, place_name: &str) -> Result<(f64, f64), GeoapifyError>;

    async fn search_places(
        &self,
        lat: f64,
        lon: f64,
        category: &str,
        radius_m: u32,
        limit: u32,
    ) -> Result<Vec<PlaceRecord>, GeoapifyError>;
}

#[derive(Clone)]
pub struct GeoapifyClient {
    client: Client,
    api_key: String,
}

impl GeoapifyClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    pub fn from_env() -> Result<Self, GeoapifyError> {
        let api_key = env::var("GEOAPIFY_API_KEY").map_err(|_| {
            GeoapifyError::EnvironmentError("GEOAPIFY_API_KEY not set".to_string())
        })?;

        Ok(Self::new(api_key))
    }
}

impl PlacesOperations for GeoapifyClient {
    /// Resolve a place name to `(lat, lon)` via forward geocoding.
    async fn geocode(&self, place_name: &str) -> Result<(f64, f64), GeoapifyError> {
        let response = self
            .client
            .get(GEOAPIFY_GEOCODE_URL)
            .query(&[
                ("text", place_name.to_string()),
                ("limit", "1".to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .timeout(Duration::from_secs(GEOCODE_TIMEOUT_SECS))
            .send()
            .await?
            .error_for_status()?;

        let response_text = response.text().await?;
        let geocode_response: GeocodeResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                GeoapifyError::ResponseError(format!("Failed to parse geocode response: {}", e))
            })?;

        extract_coordinates(geocode_response, place_name)
    }

    /// List places of one category around a point. The caller treats a
    /// per-category failure as non-fatal, so no retries happen here.
    async fn search_places(
        &self,
        lat: f64,
        lon: f64,
        category: &str,
        radius_m: u32,
        limit: u32,
    ) -> Result<Vec<PlaceRecord>, GeoapifyError> {
        let response = self
            .client
            .get(GEOAPIFY_PLACES_URL)
            .query(&[
                ("categories", category.to_string()),
                ("filter", format!("circle:{},{},{}", lon, lat, radius_m)),
                ("limit", limit.to_string()),
                ("apiKey", self.api_key.clone()),
            ])
            .timeout(Duration::from_secs(PLACES_TIMEOUT_SECS))
            .send()
            .await?
            .error_for_status()?;

        let response_text = response.text().await?;
        let places_response: PlacesResponse = serde_json::from_str(&response_text).map_err(|e| {
            GeoapifyError::ResponseError(format!("Failed to parse places response: {}", e))
        })?;

        Ok(places_response
            .features
            .into_iter()
            .map(|feature| feature.properties)
            .collect())
    }
}

fn extract_coordinates(
    response: GeocodeResponse,
    place_name: &str,
) -> Result<(f64, f64), GeoapifyError> {
    let feature = response
        .features
        .into_iter()
        .next()
        .ok_or_else(|| GeoapifyError::NotFound(place_name.to_string()))?;

    let coords = feature.geometry.coordinates;
    if coords.len() < 2 {
        return Err(GeoapifyError::ResponseError(format!(
            "Malformed geocode coordinates for '{}'",
            place_name
        )));
    }

    Ok((coords[1], coords[0]))
}
