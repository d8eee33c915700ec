use serde::{Deserialize, Serialize};

/// Body of `POST /search_hotels`. Dates and room preference are accepted
/// for wire compatibility but only `city` and `budget` drive the lookup.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HotelRequest {
    pub city: String,
    pub check_in: String,
    pub check_out: String,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub room_preference: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HotelOption {
    pub name: String,
    pub address: String,
    pub rating: f64,
    pub price_per_night: u32,
    pub link: String,
}
