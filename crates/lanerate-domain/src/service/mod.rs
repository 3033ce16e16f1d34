//! Domain services

pub mod lane_rate;
pub mod lane_summary;
pub mod search;

pub use lane_rate::{
    categorize_rate, compute_reference_rate, filter_by_lane_and_trailer, filter_by_pickup_window,
    DEFAULT_MARGIN,
};
pub use lane_summary::{
    destinations_from, generate_summary_report, summarize_lanes, LaneCatalog, LaneSummary,
};
pub use search::{
    evaluate_search, generate_search_report, SearchOutcome, SearchSession, SearchState,
    TieredShipment,
    NO_RESULTS_MESSAGE,
};
