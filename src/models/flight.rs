use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlightRequest {
    pub source: String,
    pub destination: String,
    pub date: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlightOption {
    pub airline: String,
    pub flight_number: String,
    pub source: String,
    pub destination: String,
    pub departure: String,
    /// Same value as `departure`; trip-summary consumers read this key.
    pub departure_time: String,
    pub price: u32,
}
