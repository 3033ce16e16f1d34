//! Lane search: Idle -> {NoResults, ResultsReady}
//!
//! The filtered match set only lives inside [`evaluate_search`]. Every search
//! starts from scratch; [`SearchSession`] keeps the latest outcome only.

use serde::{Deserialize, Serialize};

use lanerate_types::{RateTier, Result};

use crate::model::{LaneQuery, ShipmentRecord};
use crate::service::lane_rate::{categorize_rate, compute_reference_rate, filter_by_lane_and_trailer};

pub const NO_RESULTS_MESSAGE: &str = "No loads available for this selection.";

/// Where a search session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    NoResults,
    ResultsReady,
}

/// A matching record with its tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TieredShipment {
    pub record: ShipmentRecord,
    pub tier: RateTier,
}

/// Result of one search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
    NoResults {
        query: LaneQuery,
    },
    ResultsReady {
        query: LaneQuery,
        reference_rate: f64,
        margin: f64,
        rows: Vec<TieredShipment>,
    },
}

impl SearchOutcome {
    pub fn state(&self) -> SearchState {
        match self {
            SearchOutcome::NoResults { .. } => SearchState::NoResults,
            SearchOutcome::ResultsReady { .. } => SearchState::ResultsReady,
        }
    }

    pub fn query(&self) -> &LaneQuery {
        match self {
            SearchOutcome::NoResults { query } | SearchOutcome::ResultsReady { query, .. } => query,
        }
    }

    pub fn rows(&self) -> &[TieredShipment] {
        match self {
            SearchOutcome::NoResults { .. } => &[],
            SearchOutcome::ResultsReady { rows, .. } => rows,
        }
    }

    pub fn reference_rate(&self) -> Option<f64> {
        match self {
            SearchOutcome::NoResults { .. } => None,
            SearchOutcome::ResultsReady { reference_rate, .. } => Some(*reference_rate),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// User-facing summary line
    pub fn message(&self) -> String {
        match self.rows().len() {
            0 => NO_RESULTS_MESSAGE.to_string(),
            1 => "Found 1 load for this selection.".to_string(),
            n => format!("Found {} loads for this selection.", n),
        }
    }

    /// Row count per tier, in tier order (zero counts included)
    pub fn tier_counts(&self) -> Vec<(RateTier, usize)> {
        RateTier::ALL
            .iter()
            .map(|tier| (*tier, self.rows().iter().filter(|r| r.tier == *tier).count()))
            .collect()
    }
}

/// A search surface: `Idle` until the first submit, then the state of the
/// latest outcome. Each submit replaces the previous outcome.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    last: Option<SearchOutcome>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SearchState {
        self.last.as_ref().map_or(SearchState::Idle, SearchOutcome::state)
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.last.as_ref()
    }

    /// Run a search. A failed search leaves the session `Idle`.
    pub fn submit(
        &mut self,
        records: &[ShipmentRecord],
        query: &LaneQuery,
        margin: f64,
    ) -> Result<&SearchOutcome> {
        self.last = None;
        let outcome = evaluate_search(records, query, margin)?;
        Ok(self.last.insert(outcome))
    }
}

/// Run a full search over `records`.
///
/// An empty match set short-circuits to [`SearchOutcome::NoResults`] before
/// any aggregate is computed.
pub fn evaluate_search(
    records: &[ShipmentRecord],
    query: &LaneQuery,
    margin: f64,
) -> Result<SearchOutcome> {
    let matches = filter_by_lane_and_trailer(
        records,
        &query.origin_city,
        &query.destination_city,
        query.trailer_type,
    );

    if matches.is_empty() {
        tracing::debug!(query = %query, "no matching loads");
        return Ok(SearchOutcome::NoResults {
            query: query.clone(),
        });
    }

    let reference_rate = compute_reference_rate(matches.iter().copied())?;
    let rows = matches
        .into_iter()
        .map(|record| TieredShipment {
            tier: categorize_rate(record.rate, reference_rate, margin),
            record: record.clone(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(query = %query, matches = rows.len(), reference_rate, "search complete");

    Ok(SearchOutcome::ResultsReady {
        query: query.clone(),
        reference_rate,
        margin,
        rows,
    })
}

pub fn generate_search_report(outcome: &SearchOutcome) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Lane Rate Report                    \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Lane:            {}\n", outcome.query().lane()));
    report.push_str(&format!("  Trailer:         {}\n", outcome.query().trailer_type));
    report.push_str(&format!("  {}\n\n", outcome.message()));

    let SearchOutcome::ResultsReady {
        reference_rate,
        margin,
        rows,
        ..
    } = outcome
    else {
        report.push_str("==================================================\n");
        return report;
    };

    report.push_str(&format!("  Reference rate:  ${:.2}\n", reference_rate));
    report.push_str(&format!("  Margin:          ${:.2}\n", margin));
    for (tier, count) in outcome.tier_counts() {
        report.push_str(&format!("  {:<16} {}\n", format!("{}:", tier), count));
    }
    report.push('\n');

    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<11} {:<11} {:>5} {:>10} {:>8} {:>8} {:<14}\n",
        "Pickup", "Dropoff", "Age", "Rate", "Miles", "$/mi", "Tier"
    ));
    report.push_str("-".repeat(70).as_str());
    report.push('\n');
    for row in rows {
        let r = &row.record;
        let per_mile = r
            .rate_per_mile()
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "-".to_string());
        report.push_str(&format!(
            "{:<11} {:<11} {:>5} {:>10.2} {:>8.0} {:>8} {:<14}\n",
            r.pickup_date.format("%Y-%m-%d"),
            r.dropoff_date.format("%Y-%m-%d"),
            r.age_days,
            r.rate,
            r.distance_miles,
            per_mile,
            row.tier.label()
        ));
    }
    report.push('\n');
    report.push_str("==================================================\n");
    report
}
