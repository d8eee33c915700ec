use futures::future::join_all;
use std::collections::HashSet;

use crate::models::itinerary::Venue;
use crate::services::geoapify_service::{GeoapifyError, PlaceRecord, PlacesOperations};

// At most this many resolved categories are queried per request.
pub const MAX_CATEGORIES: usize = 3;
pub const SEARCH_RADIUS_M: u32 = 10_000;
pub const RESULTS_PER_CATEGORY: u32 = 10;

/// Venues pooled across categories, plus the per-category failures that were
/// tolerated along the way. A failed category contributes zero venues and one
/// error string; it never aborts the other lookups.
#[derive(Debug, Default)]
pub struct VenuePool {
    pub venues: Vec<Venue>,
    pub errors: Vec<String>,
}

pub struct PoiService;

impl PoiService {
    /// Fan out one places lookup per category and pool the results in
    /// category order, deduplicated by venue name (first occurrence wins).
    pub async fn collect_venues<P: PlacesOperations>(
        provider: &P,
        lat: f64,
        lon: f64,
        categories: &[String],
    ) -> VenuePool {
        let lookups = categories
            .iter()
            .take(MAX_CATEGORIES)
            .map(|category| async move {
                let outcome = provider
                    .search_places(lat, lon, category, SEARCH_RADIUS_M, RESULTS_PER_CATEGORY)
                    .await;
                (category, outcome)
            });

        let mut pool = VenuePool::default();
        let mut seen_names: HashSet<String> = HashSet::new();

        // join_all keeps lookup order, so pooling stays deterministic for a
        // given provider response set.
        for (category, outcome) in join_all(lookups).await {
            match outcome {
                Ok(records) => {
                    for record in records {
                        let venue = Self::venue_from_record(record, category);
                        if seen_names.insert(venue.name.clone()) {
                            pool.venues.push(venue);
                        }
                    }
                }
                Err(GeoapifyError::HttpError(err)) => {
                    eprintln!("Places lookup failed for category '{}': {}", category, err);
                    pool.errors
                        .push(format!("Network error for category '{}'", category));
                }
                Err(err) => {
                    eprintln!("Places lookup failed for category '{}': {}", category, err);
                    pool.errors
                        .push(format!("Processing error for category '{}'", category));
                }
            }
        }

        pool
    }

    fn venue_from_record(record: PlaceRecord, requested_category: &str) -> Venue {
        let name = record
            .name
            .or(record.address_line1)
            .unwrap_or_else(|| "Unknown Place".to_string());

        // Provider categories are dotted paths like "historic.castle"; only
        // the head is shown to users.
        let category = record
            .categories
            .first()
            .and_then(|raw| raw.split('.').next())
            .map(str::to_string)
            .unwrap_or_else(|| requested_category.to_string());

        Venue {
            name,
            category,
            duration: "N/A".to_string(),
            cost: "N/A".to_string(),
        }
    }
}
