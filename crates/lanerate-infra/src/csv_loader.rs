//! CSV loader and writer for shipment records
//!
//! Columns are looked up by header name, so column order is free.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

use lanerate_domain::model::ShipmentRecord;
use lanerate_types::{LoadSize, TrailerType};

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid date format in row {row}: {value}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Invalid value in row {row}, column {column}: {value}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

pub const COLUMNS: [&str; 12] = [
    "origin_city",
    "destination_city",
    "origin_state",
    "destination_state",
    "pickup_date",
    "dropoff_date",
    "age_days",
    "rate",
    "distance_miles",
    "trailer_type",
    "load_size",
    "weight_lbs",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Positions of the required columns within a header row
struct ColumnIndex([usize; COLUMNS.len()]);

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CsvLoaderError> {
        let mut positions = [0usize; COLUMNS.len()];
        for (slot, name) in positions.iter_mut().zip(COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| CsvLoaderError::MissingColumn(name.to_string()))?;
        }
        Ok(Self(positions))
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, column: &'static str) -> &'r str {
        COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|i| record.get(self.0[i]))
            .unwrap_or("")
    }
}

/// Load shipment records from a CSV file with a header row
pub fn load_shipments<P: AsRef<Path>>(path: P) -> Result<Vec<ShipmentRecord>, CsvLoaderError> {
    let records = parse_shipments(File::open(path.as_ref())?)?;
    tracing::info!(path = %path.as_ref().display(), count = records.len(), "loaded shipments");
    Ok(records)
}

/// Parse shipment records from any reader holding CSV with a header row
pub fn parse_shipments<R: Read>(reader: R) -> Result<Vec<ShipmentRecord>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        if record.iter().all(|f| f.is_empty()) {
            continue;
        }
        let row_num = row_idx + 2; // header is row 1
        records.push(parse_record(&record, &index, row_num)?);
    }

    tracing::debug!(count = records.len(), "parsed shipment records");
    Ok(records)
}

fn parse_record(
    record: &csv::StringRecord,
    index: &ColumnIndex,
    row_num: usize,
) -> Result<ShipmentRecord, CsvLoaderError> {
    let text = |column: &'static str| index.get(record, column).to_string();

    let rate = parse_f64(index.get(record, "rate"), row_num, "rate")?;
    let distance_miles = parse_f64(index.get(record, "distance_miles"), row_num, "distance_miles")?;
    if rate <= 0.0 || distance_miles <= 0.0 {
        tracing::warn!(row = row_num, rate, distance_miles, "non-positive rate or distance");
    }

    let trailer_raw = index.get(record, "trailer_type");
    let trailer_type: TrailerType = trailer_raw.parse().map_err(|_| CsvLoaderError::InvalidValue {
        row: row_num,
        column: "trailer_type",
        value: trailer_raw.to_string(),
    })?;

    let load_raw = index.get(record, "load_size");
    let load_size: LoadSize = load_raw.parse().map_err(|_| CsvLoaderError::InvalidValue {
        row: row_num,
        column: "load_size",
        value: load_raw.to_string(),
    })?;

    Ok(ShipmentRecord {
        origin_city: text("origin_city"),
        destination_city: text("destination_city"),
        origin_state: text("origin_state"),
        destination_state: text("destination_state"),
        pickup_date: parse_date(index.get(record, "pickup_date"), row_num)?,
        dropoff_date: parse_date(index.get(record, "dropoff_date"), row_num)?,
        age_days: parse_u32(index.get(record, "age_days"), row_num, "age_days")?,
        rate,
        distance_miles,
        trailer_type,
        load_size,
        weight_lbs: parse_u32(index.get(record, "weight_lbs"), row_num, "weight_lbs")?,
    })
}

fn parse_date(s: &str, row_num: usize) -> Result<NaiveDate, CsvLoaderError> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| CsvLoaderError::InvalidDate {
            row: row_num,
            value: s.to_string(),
        })
}

/// Drop thousands separators. `None` unless commas sit between 3-digit groups.
fn strip_thousands(s: &str) -> Option<String> {
    let (int_part, frac_part) = s.split_at(s.find('.').unwrap_or(s.len()));
    if frac_part.contains(',') {
        return None;
    }
    if !int_part.contains(',') {
        return Some(s.to_string());
    }

    let digits = int_part.trim_start_matches(|c| c == '-' || c == '+');
    let mut groups = digits.split(',');
    let head_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    if head_ok && groups.all(|g| g.len() == 3) {
        Some(s.replace(',', ""))
    } else {
        None
    }
}

fn parse_f64(s: &str, row_num: usize, column: &'static str) -> Result<f64, CsvLoaderError> {
    let invalid = || CsvLoaderError::InvalidNumber {
        row: row_num,
        column,
        value: s.to_string(),
    };
    // Allow "$1,250.00" style currency
    let cleaned = strip_thousands(&s.replace('$', "")).ok_or_else(invalid)?;
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid()),
    }
}

fn parse_u32(s: &str, row_num: usize, column: &'static str) -> Result<u32, CsvLoaderError> {
    strip_thousands(s)
        .and_then(|cleaned| cleaned.parse::<u32>().ok())
        .ok_or_else(|| CsvLoaderError::InvalidNumber {
            row: row_num,
            column,
            value: s.to_string(),
        })
}

/// Write shipment records as CSV with the standard header
pub fn write_shipments<W: Write>(writer: W, records: &[ShipmentRecord]) -> Result<(), CsvLoaderError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for r in records {
        wtr.write_record([
            r.origin_city.clone(),
            r.destination_city.clone(),
            r.origin_state.clone(),
            r.destination_state.clone(),
            r.pickup_date.format("%Y-%m-%d").to_string(),
            r.dropoff_date.format("%Y-%m-%d").to_string(),
            r.age_days.to_string(),
            r.rate.to_string(),
            r.distance_miles.to_string(),
            r.trailer_type.label().to_string(),
            r.load_size.label().to_string(),
            r.weight_lbs.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write shipment records to a CSV file, creating parent directories
pub fn save_shipments<P: AsRef<Path>>(path: P, records: &[ShipmentRecord]) -> Result<(), CsvLoaderError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_shipments(File::create(path)?, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
origin_city,destination_city,origin_state,destination_state,pickup_date,dropoff_date,age_days,rate,distance_miles,trailer_type,load_size,weight_lbs
Los Angeles,Dallas,CA,TX,2026-03-02,2026-03-05,4,\"$2,850.00\",1435,Van,Full,38000
Chicago,Atlanta,IL,GA,03/10/2026,03/12/2026,1,1650.5,716,Reefer,Partial,12000
";

    #[test]
    fn test_parse_sample() {
        let records = parse_shipments(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].lane(), "Los Angeles -> Dallas");
        assert!((records[0].rate - 2850.0).abs() < 1e-9);
        assert_eq!(records[1].trailer_type, TrailerType::Reefer);
        assert_eq!(records[1].load_size, LoadSize::Partial);
        assert_eq!(records[1].pickup_date, NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
    }

    #[test]
    fn test_reordered_columns() {
        let csv = "\
rate,trailer_type,load_size,weight_lbs,origin_city,destination_city,origin_state,destination_state,pickup_date,dropoff_date,age_days,distance_miles
900,flatbed,ltl,5000,Houston,Denver,TX,CO,2026/02/01,2026/02/03,0,1030
";
        let records = parse_shipments(csv.as_bytes()).unwrap();
        assert_eq!(records[0].origin_city, "Houston");
        assert_eq!(records[0].trailer_type, TrailerType::Flatbed);
        assert_eq!(records[0].rate, 900.0);
    }

    #[test]
    fn test_missing_column() {
        let csv = "origin_city,destination_city\nA,B\n";
        let err = parse_shipments(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CsvLoaderError::MissingColumn(ref c) if c == "origin_state"));
    }

    #[test]
    fn test_invalid_trailer_reports_row() {
        let csv = SAMPLE.replace("Reefer", "Tanker");
        let err = parse_shipments(csv.as_bytes()).unwrap_err();
        match err {
            CsvLoaderError::InvalidValue { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, "trailer_type");
                assert_eq!(value, "Tanker");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_date_and_number() {
        let bad_date = SAMPLE.replace("2026-03-02", "yesterday");
        assert!(matches!(
            parse_shipments(bad_date.as_bytes()).unwrap_err(),
            CsvLoaderError::InvalidDate { row: 2, .. }
        ));

        let bad_rate = SAMPLE.replace("1650.5", "n/a");
        assert!(matches!(
            parse_shipments(bad_rate.as_bytes()).unwrap_err(),
            CsvLoaderError::InvalidNumber { row: 3, column: "rate", .. }
        ));
    }

    #[test]
    fn test_negative_rate_is_accepted() {
        let csv = SAMPLE.replace("1650.5", "-20");
        let records = parse_shipments(csv.as_bytes()).unwrap();
        assert_eq!(records[1].rate, -20.0);
    }

    #[test]
    fn test_write_then_parse() {
        let records = parse_shipments(SAMPLE.as_bytes()).unwrap();
        let mut buf = Vec::new();
        write_shipments(&mut buf, &records).unwrap();
        let reparsed = parse_shipments(buf.as_slice()).unwrap();
        assert_eq!(reparsed, records);
    }

    #[test]
    fn test_write_keeps_full_precision() {
        let mut records = parse_shipments(SAMPLE.as_bytes()).unwrap();
        records[0].rate = 1049.995;
        records[1].distance_miles = 716.4375;
        let mut buf = Vec::new();
        write_shipments(&mut buf, &records).unwrap();
        let reparsed = parse_shipments(buf.as_slice()).unwrap();
        assert_eq!(reparsed[0].rate, 1049.995);
        assert_eq!(reparsed[1].distance_miles, 716.4375);
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_f64("$12,345.50", 2, "rate").unwrap(), 12345.5);
        assert_eq!(parse_f64("-1,000", 2, "rate").unwrap(), -1000.0);
        assert_eq!(parse_u32("45,000", 2, "weight_lbs").unwrap(), 45000);

        for bad in ["1,2,3", ",100", "1000,", "12,34", "1,000.5,0"] {
            assert!(
                matches!(parse_f64(bad, 4, "rate"), Err(CsvLoaderError::InvalidNumber { row: 4, .. })),
                "{bad} should be rejected"
            );
        }
        assert!(parse_u32("4,50,00", 2, "weight_lbs").is_err());
    }
}
