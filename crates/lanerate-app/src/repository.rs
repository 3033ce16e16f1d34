//! Opening the configured shipment data source

use std::path::PathBuf;

use chrono::Local;
use lanerate_domain::repository::ShipmentRepository;
use lanerate_infra::persistence::FileShipmentRepository;
use lanerate_infra::SyntheticShipmentSource;
use lanerate_types::Result;

use crate::config::Config;

/// Open the shipment repository for this run.
///
/// `data_override` wins over `config.data_path`; with neither, a seeded
/// synthetic source anchored at today's date is used.
pub fn open_shipment_repo(
    config: &Config,
    data_override: Option<PathBuf>,
) -> Result<Box<dyn ShipmentRepository>> {
    match data_override.or_else(|| config.data_path.clone()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "opening CSV shipment data");
            Ok(Box::new(open_csv_repo(path)?))
        }
        None => {
            tracing::debug!(seed = config.synthetic_seed, count = config.synthetic_count, "using synthetic shipment data");
            Ok(Box::new(open_synthetic_source(config)))
        }
    }
}

/// Open shipment repository from CSV
pub fn open_csv_repo(csv_path: PathBuf) -> Result<FileShipmentRepository> {
    FileShipmentRepository::new(csv_path)
}

/// Synthetic source from config seed and count
pub fn open_synthetic_source(config: &Config) -> SyntheticShipmentSource {
    SyntheticShipmentSource::new(
        config.synthetic_seed,
        config.synthetic_count,
        Local::now().date_naive(),
    )
}
