pub mod flight_service;
pub mod geoapify_service;
pub mod hotel_service;
pub mod interest_service;
pub mod itinerary_generation_service;
pub mod poi_service;
