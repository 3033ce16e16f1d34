//! Domain layer for lane rate evaluation
//!
//! - `model`: shipment records and search queries
//! - `service`: filtering, reference rate, tiering, summaries
//! - `repository`: data source trait

pub mod model;
pub mod repository;
pub mod service;
