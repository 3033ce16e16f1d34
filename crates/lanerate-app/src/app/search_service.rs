//! Search Service - Lane Search Request Handler
//!
//! One call per user search: (records, request) -> response. No state is
//! kept between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lanerate_domain::model::{LaneQuery, ShipmentRecord};
use lanerate_domain::repository::ShipmentRepository;
use lanerate_domain::service::{evaluate_search, filter_by_pickup_window, SearchOutcome};

use crate::config::validate_margin;

/// Errors specific to the search service
#[derive(Debug, Error)]
pub enum SearchServiceError {
    #[error("Shipment data not accessible: {0}")]
    Source(String),

    #[error("Invalid margin: {0}")]
    InvalidMargin(String),

    #[error("Invalid pickup window: {from} is after {to}")]
    InvalidWindow { from: NaiveDate, to: NaiveDate },

    #[error("Search failed: {0}")]
    Evaluation(String),
}

impl From<lanerate_types::Error> for SearchServiceError {
    fn from(err: lanerate_types::Error) -> Self {
        SearchServiceError::Evaluation(err.to_string())
    }
}

/// Parameters of a single search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: LaneQuery,
    /// Overrides the configured margin
    pub margin: Option<f64>,
    pub pickup_from: Option<NaiveDate>,
    pub pickup_to: Option<NaiveDate>,
}

impl SearchRequest {
    pub fn new(query: LaneQuery) -> Self {
        Self {
            query,
            margin: None,
            pickup_from: None,
            pickup_to: None,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_pickup_window(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.pickup_from = from;
        self.pickup_to = to;
        self
    }
}

/// What the caller renders: outcome plus summary line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
    /// Records considered after the pickup window was applied
    pub records_considered: usize,
    pub outcome: SearchOutcome,
}

/// Run a search against an in-memory record set
pub fn handle_search_records(
    records: &[ShipmentRecord],
    request: &SearchRequest,
    default_margin: f64,
) -> std::result::Result<SearchResponse, SearchServiceError> {
    let margin = request.margin.unwrap_or(default_margin);
    validate_margin(margin).map_err(|e| SearchServiceError::InvalidMargin(e.to_string()))?;

    if let (Some(from), Some(to)) = (request.pickup_from, request.pickup_to) {
        if from > to {
            return Err(SearchServiceError::InvalidWindow { from, to });
        }
    }

    let windowed: Vec<ShipmentRecord>;
    let windowed_search = request.pickup_from.is_some() || request.pickup_to.is_some();
    let considered: &[ShipmentRecord] = if windowed_search {
        windowed = filter_by_pickup_window(records, request.pickup_from, request.pickup_to)
            .into_iter()
            .cloned()
            .collect();
        &windowed
    } else {
        records
    };

    let outcome = evaluate_search(considered, &request.query, margin)?;
    if outcome.is_empty() {
        tracing::info!(query = %request.query, "no loads for selection");
    } else {
        tracing::info!(query = %request.query, matches = outcome.rows().len(), "loads found");
    }

    Ok(SearchResponse {
        message: outcome.message(),
        records_considered: considered.len(),
        outcome,
    })
}

/// Load records from `repo` and run a search
pub fn handle_search(
    repo: &dyn ShipmentRepository,
    request: &SearchRequest,
    default_margin: f64,
) -> std::result::Result<SearchResponse, SearchServiceError> {
    let records = repo
        .find_all()
        .map_err(|e| SearchServiceError::Source(e.to_string()))?;
    handle_search_records(&records, request, default_margin)
}
