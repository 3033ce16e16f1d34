use lanerate_domain::model::ShipmentRecord;
use lanerate_domain::repository::ShipmentRepository;
use lanerate_types::Error;

/// Fixed, in-memory record set
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipmentRepository {
    records: Vec<ShipmentRecord>,
}

impl InMemoryShipmentRepository {
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }
}

impl From<Vec<ShipmentRecord>> for InMemoryShipmentRepository {
    fn from(records: Vec<ShipmentRecord>) -> Self {
        Self::new(records)
    }
}

impl ShipmentRepository for InMemoryShipmentRepository {
    fn find_all(&self) -> Result<Vec<ShipmentRecord>, Error> {
        Ok(self.records.clone())
    }
}
