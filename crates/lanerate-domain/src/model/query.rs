use serde::{Deserialize, Serialize};

use lanerate_types::TrailerType;

use super::shipment::format_lane;

/// Origin/destination/trailer selection for a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneQuery {
    pub origin_city: String,
    pub destination_city: String,
    pub trailer_type: TrailerType,
}

impl LaneQuery {
    pub fn new(
        origin_city: impl Into<String>,
        destination_city: impl Into<String>,
        trailer_type: TrailerType,
    ) -> Self {
        Self {
            origin_city: origin_city.into(),
            destination_city: destination_city.into(),
            trailer_type,
        }
    }

    pub fn lane(&self) -> String {
        format_lane(&self.origin_city, &self.destination_city)
    }
}

impl std::fmt::Display for LaneQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.lane(), self.trailer_type)
    }
}
