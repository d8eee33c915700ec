use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A point of interest pulled from the places provider. `name` is the
/// dedup key within a planning request's pool.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Venue {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub duration: String,
    pub cost: String,
}

/// Part of day an activity is slotted into.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Morning,
    #[serde(rename = "Afternoon/Evening")]
    AfternoonEvening,
    Evening,
    #[serde(rename = "Full Day")]
    FullDay,
}

/// One scheduled entry of a day: either a real venue or a placeholder.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayActivity {
    pub time: TimeSlot,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub duration: String,
    pub cost: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    pub label: String,
    pub activities: Vec<DayActivity>,
}

/// Ordered day-label → activity-list mapping. Serializes to a JSON object
/// whose keys keep day order, e.g. `{"Day 1 (Mon, Jun 02)": [...], ...}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    pub days: Vec<DayPlan>,
}

impl Serialize for DaySchedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.label, &day.activities)?;
        }
        map.end()
    }
}

/// Final planning result: the full schedule plus an optional note about
/// categories that could not be fetched. The note is never folded into a
/// day's activity list.
#[derive(Debug, Clone, Serialize)]
pub struct Itinerary {
    pub schedule: DaySchedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryRequest {
    pub destination_city: String,
    pub check_in_date: String,
    pub check_out_date: String,
    #[serde(default = "default_interests")]
    pub interests: String,
}

fn default_interests() -> String {
    "general".to_string()
}

impl ItineraryRequest {
    /// Lowercased, trimmed interest tags parsed from the comma-separated
    /// request field. Blank input collapses to the single tag `general`.
    pub fn interest_tags(&self) -> Vec<String> {
        let tags: Vec<String> = self
            .interests
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        if tags.is_empty() {
            vec!["general".to_string()]
        } else {
            tags
        }
    }
}
