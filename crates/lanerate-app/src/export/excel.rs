//! Excel export of search results

use lanerate_domain::service::SearchOutcome;
use lanerate_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::app::SearchResponse;

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export a search response to an Excel file
pub fn export_search_to_excel(response: &SearchResponse, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, response)?;

    let loads_sheet = workbook.add_worksheet();
    write_loads_sheet(loads_sheet, &response.outcome)?;

    workbook.save(output_path).map_err(xlsx_err)?;
    tracing::info!(path = %output_path.display(), rows = response.outcome.rows().len(), "exported search results");

    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, response: &SearchResponse) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("$#,##0.00");
    let query = response.outcome.query();

    sheet
        .write_string_with_format(0, 0, "Lane Rate Report", &header_format)
        .map_err(xlsx_err)?;

    sheet.write_string(2, 0, "Lane:").map_err(xlsx_err)?;
    sheet.write_string(2, 1, query.lane()).map_err(xlsx_err)?;
    sheet.write_string(3, 0, "Trailer:").map_err(xlsx_err)?;
    sheet
        .write_string(3, 1, query.trailer_type.label())
        .map_err(xlsx_err)?;
    sheet.write_string(4, 0, "Result:").map_err(xlsx_err)?;
    sheet
        .write_string(4, 1, &response.message)
        .map_err(xlsx_err)?;

    if let Some(reference) = response.outcome.reference_rate() {
        sheet.write_string(5, 0, "Reference rate:").map_err(xlsx_err)?;
        sheet
            .write_number_with_format(5, 1, reference, &money_format)
            .map_err(xlsx_err)?;
    }

    sheet
        .write_string_with_format(7, 0, "Tier Distribution", &header_format)
        .map_err(xlsx_err)?;

    let mut row = 8;
    for (tier, count) in response.outcome.tier_counts() {
        sheet.write_string(row, 0, tier.label()).map_err(xlsx_err)?;
        sheet.write_number(row, 1, count as f64).map_err(xlsx_err)?;
        row += 1;
    }

    sheet.set_column_width(0, 18).map_err(xlsx_err)?;
    sheet.set_column_width(1, 36).map_err(xlsx_err)?;
    Ok(())
}

fn write_loads_sheet(sheet: &mut Worksheet, outcome: &SearchOutcome) -> Result<()> {
    sheet.set_name("Loads").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let money_format = Format::new().set_num_format("$#,##0.00");

    let headers = [
        "Origin",
        "Origin State",
        "Destination",
        "Destination State",
        "Pickup",
        "Dropoff",
        "Age (days)",
        "Rate",
        "Distance (mi)",
        "Rate/mi",
        "Trailer",
        "Load Size",
        "Weight (lbs)",
        "Tier",
    ];

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (idx, tiered) in outcome.rows().iter().enumerate() {
        let row = (idx + 1) as u32;
        let r = &tiered.record;
        sheet.write_string(row, 0, &r.origin_city).map_err(xlsx_err)?;
        sheet.write_string(row, 1, &r.origin_state).map_err(xlsx_err)?;
        sheet.write_string(row, 2, &r.destination_city).map_err(xlsx_err)?;
        sheet.write_string(row, 3, &r.destination_state).map_err(xlsx_err)?;
        sheet
            .write_string(row, 4, r.pickup_date.format("%Y-%m-%d").to_string())
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 5, r.dropoff_date.format("%Y-%m-%d").to_string())
            .map_err(xlsx_err)?;
        sheet.write_number(row, 6, r.age_days as f64).map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 7, r.rate, &money_format)
            .map_err(xlsx_err)?;
        sheet.write_number(row, 8, r.distance_miles).map_err(xlsx_err)?;
        if let Some(per_mile) = r.rate_per_mile() {
            sheet
                .write_number_with_format(row, 9, per_mile, &money_format)
                .map_err(xlsx_err)?;
        }
        sheet.write_string(row, 10, r.trailer_type.label()).map_err(xlsx_err)?;
        sheet.write_string(row, 11, r.load_size.label()).map_err(xlsx_err)?;
        sheet.write_number(row, 12, r.weight_lbs as f64).map_err(xlsx_err)?;
        sheet.write_string(row, 13, tiered.tier.label()).map_err(xlsx_err)?;
    }

    Ok(())
}
