//! Query Service - Browse the Record Set
//!
//! Read-only views used to populate selections and overview tables:
//! - Lane catalog (origins, destinations, trailer types)
//! - Per-lane summaries

use lanerate_domain::repository::ShipmentRepository;
use lanerate_domain::service::{destinations_from, summarize_lanes, LaneCatalog, LaneSummary};
use lanerate_types::TrailerType;
use thiserror::Error;

/// Errors specific to the query service
#[derive(Debug, Error)]
pub enum QueryServiceError {
    #[error("Shipment data not accessible: {0}")]
    SourceError(String),
}

impl From<lanerate_types::Error> for QueryServiceError {
    fn from(err: lanerate_types::Error) -> Self {
        QueryServiceError::SourceError(err.to_string())
    }
}

/// Distinct origins, destinations, and trailer types in the data
pub fn get_catalog(repo: &dyn ShipmentRepository) -> Result<LaneCatalog, QueryServiceError> {
    let records = repo.find_all()?;
    Ok(LaneCatalog::from_records(&records))
}

/// Destinations with at least one load from `origin_city`
pub fn get_destinations(
    repo: &dyn ShipmentRepository,
    origin_city: &str,
) -> Result<Vec<String>, QueryServiceError> {
    let records = repo.find_all()?;
    Ok(destinations_from(&records, origin_city))
}

/// Lane summaries, optionally for one trailer type
pub fn get_lane_summaries(
    repo: &dyn ShipmentRepository,
    trailer_type: Option<TrailerType>,
) -> Result<Vec<LaneSummary>, QueryServiceError> {
    let records = match trailer_type {
        Some(t) => repo.find_by_trailer(t)?,
        None => repo.find_all()?,
    };
    Ok(summarize_lanes(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lanerate_infra::persistence::InMemoryShipmentRepository;
    use lanerate_infra::SyntheticShipmentSource;

    fn repo() -> SyntheticShipmentSource {
        SyntheticShipmentSource::new(3, 200, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
    }

    #[test]
    fn test_catalog_from_synthetic() {
        let catalog = get_catalog(&repo()).unwrap();
        assert!(catalog.origins.contains(&"Chicago".to_string()));
        assert!(catalog.destinations.contains(&"Denver".to_string()));
        assert!(!catalog.trailer_types.is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let empty = InMemoryShipmentRepository::default();
        assert!(get_catalog(&empty).unwrap().is_empty());
        assert!(get_destinations(&empty, "Miami").unwrap().is_empty());
    }

    #[test]
    fn test_summaries_by_trailer() {
        let summaries = get_lane_summaries(&repo(), Some(TrailerType::Reefer)).unwrap();
        assert!(!summaries.is_empty());
        assert!(summaries.iter().all(|s| s.trailer_type == TrailerType::Reefer));

        let all = get_lane_summaries(&repo(), None).unwrap();
        assert_eq!(all.iter().map(|s| s.count).sum::<usize>(), 200);
    }
}
