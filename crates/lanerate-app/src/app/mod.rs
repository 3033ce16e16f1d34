//! Application Layer
//!
//! This module provides the application layer that orchestrates between
//! the CLI and the domain/infrastructure layers.
//!
//! The app layer contains:
//! - `search_service`: the lane search request handler
//! - `query_service`: catalog and lane summary queries

pub mod query_service;
pub mod search_service;

pub use search_service::{
    handle_search, handle_search_records, SearchRequest, SearchResponse, SearchServiceError,
};
