//! Repository implementations
//!
//! This module provides file-based and in-memory implementations of
//! `ShipmentRepository`.

mod file_shipment_repo;
mod memory_shipment_repo;

pub use file_shipment_repo::FileShipmentRepository;
pub use memory_shipment_repo::InMemoryShipmentRepository;
