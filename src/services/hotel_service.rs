use rand::Rng;
use std::error::Error;
use std::fmt;
use url::Url;

use crate::models::hotel::{HotelOption, HotelRequest};
use crate::services::geoapify_service::{GeoapifyError, PlacesOperations};

const HOTEL_CATEGORY: &str = "accommodation.hotel";
const HOTEL_SEARCH_RADIUS_M: u32 = 10_000;
const MAX_HOTEL_RESULTS: u32 = 15;

#[derive(Debug)]
pub enum HotelSearchError {
    LocationNotFound(String),
    LookupFailed(String),
}

impl fmt::Display for HotelSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelSearchError::LocationNotFound(message) => write!(f, "{}", message),
            HotelSearchError::LookupFailed(message) => write!(f, "{}", message),
        }
    }
}

impl Error for HotelSearchError {}

pub struct HotelService;

impl HotelService {
    /// Find hotels around the requested city, cheapest first. Nightly prices
    /// and ratings are synthesized since the places API rarely carries them;
    /// only the budget tier influences the price band.
    pub async fn search_hotels<P: PlacesOperations>(
        provider: &P,
        request: &HotelRequest,
    ) -> Result<Vec<HotelOption>, HotelSearchError> {
        let (lat, lon) = provider
            .geocode(&request.city)
            .await
            .map_err(|err| HotelSearchError::LocationNotFound(err.geocoding_message()))?;

        // Unlike activity pooling there is a single category here, so a
        // failed lookup fails the whole search.
        let records = provider
            .search_places(lat, lon, HOTEL_CATEGORY, HOTEL_SEARCH_RADIUS_M, MAX_HOTEL_RESULTS)
            .await
            .map_err(|err| match err {
                GeoapifyError::HttpError(inner) => HotelSearchError::LookupFailed(format!(
                    "Network error during hotel search: {}",
                    inner
                )),
                other => HotelSearchError::LookupFailed(format!(
                    "Error processing hotel data: {}",
                    other
                )),
            })?;

        let mut rng = rand::thread_rng();
        let (price_min, price_max) = price_band(request.budget.as_deref());

        let mut hotels: Vec<HotelOption> = records
            .into_iter()
            .filter_map(|record| {
                // Nameless records are useless to travelers.
                let name = record.name?;
                let address = record
                    .formatted
                    .unwrap_or_else(|| "Address not available".to_string());
                let link = record
                    .website
                    .unwrap_or_else(|| search_link(&name, &request.city));

                Some(HotelOption {
                    name,
                    address,
                    rating: mock_rating(&mut rng),
                    price_per_night: rng.gen_range(price_min..=price_max),
                    link,
                })
            })
            .collect();

        hotels.sort_by_key(|hotel| hotel.price_per_night);
        Ok(hotels)
    }
}

fn price_band(budget: Option<&str>) -> (u32, u32) {
    match budget.map(str::to_lowercase).as_deref() {
        Some("budget") => (2000, 4500),
        Some("luxury") => (10_000, 25_000),
        _ => (4500, 9500),
    }
}

// Uniform 3.5..5.0 rounded to one decimal.
fn mock_rating<R: Rng>(rng: &mut R) -> f64 {
    (rng.gen_range(3.5..5.0_f64) * 10.0).round() / 10.0
}

fn search_link(name: &str, city: &str) -> String {
    match Url::parse_with_params(
        "https://www.google.com/search",
        &[("q", format!("{} {}", name, city))],
    ) {
        Ok(url) => url.to_string(),
        Err(_) => "https://www.google.com/search".to_string(),
    }
}
