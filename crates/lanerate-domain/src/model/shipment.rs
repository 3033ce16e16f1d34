use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lanerate_types::{LoadSize, TrailerType};

/// One posted load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub origin_city: String,
    pub destination_city: String,
    pub origin_state: String,
    pub destination_state: String,
    pub pickup_date: NaiveDate,
    pub dropoff_date: NaiveDate, // not checked against pickup_date
    pub age_days: u32,           // days since posting
    pub rate: f64,               // currency units
    pub distance_miles: f64,
    pub trailer_type: TrailerType,
    pub load_size: LoadSize,
    pub weight_lbs: u32,
}

impl ShipmentRecord {
    /// Lane key, e.g. `"Los Angeles -> Dallas"`
    pub fn lane(&self) -> String {
        format_lane(&self.origin_city, &self.destination_city)
    }

    /// Rate per mile, when the distance allows it
    pub fn rate_per_mile(&self) -> Option<f64> {
        if self.distance_miles.is_finite() && self.distance_miles > 0.0 {
            Some(self.rate / self.distance_miles)
        } else {
            None
        }
    }

    pub fn matches_lane(&self, origin_city: &str, destination_city: &str) -> bool {
        self.origin_city == origin_city && self.destination_city == destination_city
    }
}

pub(crate) fn format_lane(origin_city: &str, destination_city: &str) -> String {
    format!("{} -> {}", origin_city, destination_city)
}
