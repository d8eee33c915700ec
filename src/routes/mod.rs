pub mod flight;
pub mod health;
pub mod hotel;
pub mod itinerary;
