//! Repository trait definitions for shipment data sources

use chrono::NaiveDate;

use lanerate_types::{Error, TrailerType};

use crate::model::ShipmentRecord;
use crate::service::filter_by_pickup_window;

/// Source of shipment records.
///
/// Implementations only need `find_all`; the narrower queries default to
/// filtering its result and preserve record order.
pub trait ShipmentRepository {
    /// Load all shipment records
    fn find_all(&self) -> Result<Vec<ShipmentRecord>, Error>;

    /// Records on one lane, any trailer type
    fn find_by_lane(
        &self,
        origin_city: &str,
        destination_city: &str,
    ) -> Result<Vec<ShipmentRecord>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|r| r.matches_lane(origin_city, destination_city))
            .collect())
    }

    /// Records with the given trailer type
    fn find_by_trailer(&self, trailer_type: TrailerType) -> Result<Vec<ShipmentRecord>, Error> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|r| r.trailer_type == trailer_type)
            .collect())
    }

    /// Records picked up inside an inclusive date window
    fn find_by_pickup_window(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<ShipmentRecord>, Error> {
        let all = self.find_all()?;
        Ok(filter_by_pickup_window(&all, from, to)
            .into_iter()
            .cloned()
            .collect())
    }
}
