use chrono::{Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::models::itinerary::{
    DayActivity, DayPlan, DaySchedule, Itinerary, ItineraryRequest, TimeSlot, Venue,
};
use crate::services::geoapify_service::PlacesOperations;
use crate::services::interest_service::InterestService;
use crate::services::poi_service::PoiService;

const TARGET_POIS_PER_DAY: usize = 2;
const DATE_FORMAT: &str = "%Y-%m-%d";
const DAY_LABEL_FORMAT: &str = "%a, %b %d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefillPolicy {
    /// When the working list runs dry mid-trip, rebuild it from venues not
    /// yet used anywhere in the trip; only once none remain does the whole
    /// pool come back, allowing repeats across days.
    UniqueFirstThenRepeat,
}

#[derive(Clone)]
pub struct PlannerConfig {
    pub target_pois_per_day: usize,
    pub refill_policy: RefillPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            target_pois_per_day: TARGET_POIS_PER_DAY,
            refill_policy: RefillPolicy::UniqueFirstThenRepeat,
        }
    }
}

/// Terminal failures of the planning pipeline. Partial category failures are
/// not represented here; they degrade to a note on a successful result.
#[derive(Debug)]
pub enum PlanningError {
    LocationNotFound(String),
    NoMappableInterests(Vec<String>),
    AllCategoriesFailed(Vec<String>),
    NoVenuesFound { city: String, interests: String },
}

impl fmt::Display for PlanningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanningError::LocationNotFound(message) => write!(f, "{}", message),
            PlanningError::NoMappableInterests(tags) => write!(
                f,
                "Could not map interests '{}' to API categories.",
                tags.join(", ")
            ),
            PlanningError::AllCategoriesFailed(errors) => {
                write!(f, "Failed to fetch activities: {}", errors.join("; "))
            }
            PlanningError::NoVenuesFound { city, interests } => write!(
                f,
                "Could not find activities in {} matching interests: {}.",
                city, interests
            ),
        }
    }
}

impl Error for PlanningError {}

pub struct ItineraryPlanner {
    config: PlannerConfig,
}

impl Default for ItineraryPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ItineraryPlanner {
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline: geocode the city, resolve interests, pool
    /// venues, then schedule them across the trip days. The random source is
    /// injected so callers can make scheduling deterministic.
    pub async fn plan<P: PlacesOperations, R: Rng>(
        &self,
        provider: &P,
        request: &ItineraryRequest,
        rng: &mut R,
    ) -> Result<Itinerary, PlanningError> {
        let (lat, lon) = provider
            .geocode(&request.destination_city)
            .await
            .map_err(|err| PlanningError::LocationNotFound(err.geocoding_message()))?;

        let tags = request.interest_tags();
        let categories = InterestService::resolve_categories(&tags);
        if categories.is_empty() {
            return Err(PlanningError::NoMappableInterests(tags));
        }

        let duration_days = trip_duration_days(&request.check_in_date, &request.check_out_date);

        let pool = PoiService::collect_venues(provider, lat, lon, &categories).await;
        if pool.venues.is_empty() {
            if !pool.errors.is_empty() {
                return Err(PlanningError::AllCategoriesFailed(pool.errors));
            }
            return Err(PlanningError::NoVenuesFound {
                city: request.destination_city.clone(),
                interests: request.interests.clone(),
            });
        }

        let days = self.build_day_plans(
            &request.destination_city,
            &request.check_in_date,
            duration_days,
            &pool.venues,
            rng,
        );

        let note = if pool.errors.is_empty() {
            None
        } else {
            Some(format!(
                "Could not fetch suggestions for all interests due to: {}",
                pool.errors.join("; ")
            ))
        };

        Ok(Itinerary {
            schedule: DaySchedule { days },
            note,
        })
    }

    /// Distribute a non-empty venue pool across the trip days. Venues are
    /// taken from the front of a shuffled working list, two per day, with
    /// placeholder activities filling any shortfall.
    pub fn build_day_plans<R: Rng>(
        &self,
        city: &str,
        check_in_date: &str,
        duration_days: i64,
        pool: &[Venue],
        rng: &mut R,
    ) -> Vec<DayPlan> {
        let mut shuffled: Vec<Venue> = pool.to_vec();
        shuffled.shuffle(rng);

        // Labels fall back to today when the check-in date is unparseable
        // (those trips were already clamped to a single day).
        let start_date = NaiveDate::parse_from_str(check_in_date, DATE_FORMAT)
            .unwrap_or_else(|_| Utc::now().date_naive());

        let mut available = shuffled.clone();
        let mut assigned_ever: HashSet<String> = HashSet::new();
        let mut days: Vec<DayPlan> = Vec::with_capacity(duration_days as usize);

        for day_num in 0..duration_days {
            let date = start_date + Duration::days(day_num);
            let label = format!("Day {} ({})", day_num + 1, date.format(DAY_LABEL_FORMAT));

            let take = available.len().min(self.config.target_pois_per_day);
            let mut activities: Vec<DayActivity> = Vec::new();
            for (slot_index, venue) in available.drain(..take).enumerate() {
                let time = if slot_index == 0 {
                    TimeSlot::Morning
                } else {
                    TimeSlot::AfternoonEvening
                };
                assigned_ever.insert(venue.name.clone());
                activities.push(DayActivity {
                    time,
                    name: venue.name,
                    category: venue.category,
                    duration: venue.duration,
                    cost: venue.cost,
                });
            }

            if activities.is_empty() {
                activities.push(DayActivity {
                    time: TimeSlot::FullDay,
                    name: format!("Explore {} / Local Markets", city),
                    category: "Leisure/Shopping".to_string(),
                    duration: "Variable".to_string(),
                    cost: "Variable".to_string(),
                });
            } else if activities.len() < self.config.target_pois_per_day {
                activities.push(DayActivity {
                    time: TimeSlot::Evening,
                    name: format!("Relax / Dinner in {}", city),
                    category: "Leisure/Food".to_string(),
                    duration: "Variable".to_string(),
                    cost: "Variable".to_string(),
                });
            }

            days.push(DayPlan { label, activities });

            if available.is_empty() && day_num < duration_days - 1 {
                available = self.refill(&shuffled, &assigned_ever, rng);
            }
        }

        days
    }

    fn refill<R: Rng>(
        &self,
        pool: &[Venue],
        assigned_ever: &HashSet<String>,
        rng: &mut R,
    ) -> Vec<Venue> {
        match self.config.refill_policy {
            RefillPolicy::UniqueFirstThenRepeat => {
                println!("Refilling venue pool (repeats possible once all venues are used)");
                let mut unused: Vec<Venue> = pool
                    .iter()
                    .filter(|venue| !assigned_ever.contains(&venue.name))
                    .cloned()
                    .collect();
                unused.shuffle(rng);

                if unused.is_empty() {
                    let mut repeats = pool.to_vec();
                    repeats.shuffle(rng);
                    return repeats;
                }

                unused
            }
        }
    }
}

/// Inclusive day count of the trip window, clamped to at least one day.
/// Unparseable or inverted date ranges degrade to a 1-day trip.
pub fn trip_duration_days(check_in: &str, check_out: &str) -> i64 {
    let parsed = match (
        NaiveDate::parse_from_str(check_in, DATE_FORMAT),
        NaiveDate::parse_from_str(check_out, DATE_FORMAT),
    ) {
        (Ok(start), Ok(end)) => (end - start).num_days() + 1,
        _ => {
            eprintln!("Error parsing dates: {}, {}", check_in, check_out);
            1
        }
    };

    parsed.max(1)
}
