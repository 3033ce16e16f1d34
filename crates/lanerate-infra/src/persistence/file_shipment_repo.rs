//! CSV-backed implementation of ShipmentRepository

use std::path::{Path, PathBuf};

use lanerate_domain::model::ShipmentRecord;
use lanerate_domain::repository::ShipmentRepository;
use lanerate_types::Error;

use crate::csv_loader::load_shipments;

/// Shipment repository loaded once from a CSV file
pub struct FileShipmentRepository {
    csv_path: PathBuf,
    records: Vec<ShipmentRecord>,
}

impl FileShipmentRepository {
    /// Create a new repository from a CSV file path
    pub fn new(csv_path: PathBuf) -> Result<Self, Error> {
        if !csv_path.exists() {
            return Err(Error::FileNotFound(csv_path.display().to_string()));
        }
        let records = load_shipments(&csv_path).map_err(|e| Error::CsvLoader(e.to_string()))?;
        Ok(Self { csv_path, records })
    }

    /// Get the CSV path
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Reload data from CSV
    pub fn reload(&mut self) -> Result<(), Error> {
        self.records =
            load_shipments(&self.csv_path).map_err(|e| Error::CsvLoader(e.to_string()))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ShipmentRepository for FileShipmentRepository {
    fn find_all(&self) -> Result<Vec<ShipmentRecord>, Error> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanerate_types::TrailerType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let content = "origin_city,destination_city,origin_state,destination_state,pickup_date,dropoff_date,age_days,rate,distance_miles,trailer_type,load_size,weight_lbs\n\
                       Los Angeles,Dallas,CA,TX,2026-03-02,2026-03-05,4,2850,1435,Van,Full,38000\n\
                       Los Angeles,Dallas,CA,TX,2026-03-09,2026-03-12,2,3100,1435,Reefer,Full,36000\n\
                       Miami,Atlanta,FL,GA,2026-04-01,2026-04-02,0,1400,662,Van,Partial,9000\n";
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_find_all() {
        let csv = create_test_csv();
        let repo = FileShipmentRepository::new(csv.path().to_path_buf()).unwrap();
        assert_eq!(repo.find_all().unwrap().len(), 3);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_default_queries() {
        let csv = create_test_csv();
        let repo = FileShipmentRepository::new(csv.path().to_path_buf()).unwrap();
        assert_eq!(repo.find_by_lane("Los Angeles", "Dallas").unwrap().len(), 2);
        let vans = repo.find_by_trailer(TrailerType::Van).unwrap();
        assert_eq!(vans.len(), 2);
        assert_eq!(vans[1].origin_city, "Miami");
        let april = repo
            .find_by_pickup_window(chrono::NaiveDate::from_ymd_opt(2026, 4, 1), None)
            .unwrap();
        assert_eq!(april.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = FileShipmentRepository::new(PathBuf::from("/nonexistent/loads.csv"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let mut csv = create_test_csv();
        let mut repo = FileShipmentRepository::new(csv.path().to_path_buf()).unwrap();
        csv.write_all(b"Denver,Seattle,CO,WA,2026-04-03,2026-04-05,1,2300,1316,Flatbed,Full,41000\n")
            .unwrap();
        csv.flush().unwrap();
        repo.reload().unwrap();
        assert_eq!(repo.len(), 4);
    }
}
