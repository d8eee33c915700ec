use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::flight::FlightOption;

const MOCK_AIRLINES: [(&str, &str); 5] = [
    ("Indigo", "I"),
    ("Spicejet", "SP"),
    ("Vistara", "VI"),
    ("Air India", "AI"),
    ("Akasa Air", "AK"),
];

// Departures land on quarter-hour marks between 05:00 and 22:45.
const DEPARTURE_MINUTES: [u32; 4] = [0, 15, 30, 45];

pub struct FlightService;

impl FlightService {
    /// Generate 3 to 5 mock flight options for the route, cheapest first.
    /// The travel date must already be validated by the caller.
    pub fn search_flights(
        source: &str,
        destination: &str,
        travel_date: NaiveDate,
    ) -> Vec<FlightOption> {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(3..=5);

        let mut flights: Vec<FlightOption> = (0..count)
            .map(|_| Self::mock_flight(source, destination, travel_date, &mut rng))
            .collect();

        flights.sort_by_key(|flight| flight.price);
        flights
    }

    fn mock_flight<R: Rng>(
        source: &str,
        destination: &str,
        travel_date: NaiveDate,
        rng: &mut R,
    ) -> FlightOption {
        let (airline, code) = MOCK_AIRLINES.choose(rng).copied().unwrap_or(MOCK_AIRLINES[0]);

        let hour = rng.gen_range(5..=22);
        let minute = DEPARTURE_MINUTES.choose(rng).copied().unwrap_or(0);
        let departure = travel_date
            .and_hms_opt(hour, minute, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| travel_date.format("%Y-%m-%d").to_string());

        FlightOption {
            airline: airline.to_string(),
            flight_number: format!("{}{}", code, rng.gen_range(100..=999)),
            source: title_case(source),
            destination: title_case(destination),
            departure_time: departure.clone(),
            departure,
            price: rng.gen_range(4500..=20000),
        }
    }
}

fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn travel_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 19).unwrap()
    }

    #[test]
    fn test_generates_three_to_five_options_sorted_by_price() {
        for _ in 0..20 {
            let flights = FlightService::search_flights("delhi", "jaipur", travel_date());

            assert!((3..=5).contains(&flights.len()));
            for pair in flights.windows(2) {
                assert!(pair[0].price <= pair[1].price);
            }
        }
    }

    #[test]
    fn test_flight_numbers_match_their_airline_code() {
        let flights = FlightService::search_flights("delhi", "jaipur", travel_date());

        for flight in flights {
            let code = MOCK_AIRLINES
                .iter()
                .find(|(airline, _)| *airline == flight.airline)
                .map(|(_, code)| *code)
                .expect("unknown airline in mock output");

            let digits = flight.flight_number.strip_prefix(code).unwrap();
            let number: u32 = digits.parse().unwrap();
            assert!((100..=999).contains(&number));
        }
    }

    #[test]
    fn test_departures_fall_on_the_travel_date_at_quarter_hours() {
        for _ in 0..20 {
            for flight in FlightService::search_flights("delhi", "jaipur", travel_date()) {
                assert_eq!(flight.departure_time, flight.departure);
                assert!(flight.departure.starts_with("2025-12-19 "));

                let clock = flight.departure.strip_prefix("2025-12-19 ").unwrap();
                let (hour, minute) = clock.split_once(':').unwrap();
                let hour: u32 = hour.parse().unwrap();
                let minute: u32 = minute.parse().unwrap();
                assert!((5..=22).contains(&hour));
                assert!(DEPARTURE_MINUTES.contains(&minute));
            }
        }
    }

    #[test]
    fn test_prices_stay_within_the_fare_band() {
        for flight in FlightService::search_flights("delhi", "jaipur", travel_date()) {
            assert!((4500..=20000).contains(&flight.price));
        }
    }

    #[test]
    fn test_endpoints_are_title_cased() {
        let flights = FlightService::search_flights("new delhi", "MUMBAI", travel_date());

        for flight in &flights {
            assert_eq!(flight.source, "New Delhi");
            assert_eq!(flight.destination, "Mumbai");
        }
    }
}
