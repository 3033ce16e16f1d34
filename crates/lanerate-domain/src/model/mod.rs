//! Domain model types

pub mod query;
pub mod shipment;

pub use query::LaneQuery;
pub use shipment::ShipmentRecord;
