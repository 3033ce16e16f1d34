//! Infrastructure layer
//!
//! Concrete shipment data sources: CSV files, in-memory fixtures, and a
//! seeded synthetic generator for demos.

pub mod csv_loader;
pub mod persistence;
pub mod synthetic;

pub use synthetic::SyntheticShipmentSource;
