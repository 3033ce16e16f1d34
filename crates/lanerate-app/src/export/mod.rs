//! Export functionality

mod excel;

pub use excel::export_search_to_excel;
