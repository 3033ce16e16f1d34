//! Lane rate evaluation: filtering, reference rate, and tiering

use chrono::NaiveDate;

use lanerate_types::{Error, RateTier, Result, TrailerType};

use crate::model::ShipmentRecord;

/// Absolute tier margin in currency units (not a percentage)
pub const DEFAULT_MARGIN: f64 = 50.0;

/// Records on the given lane with the given trailer type, in input order.
pub fn filter_by_lane_and_trailer<'a>(
    records: &'a [ShipmentRecord],
    origin_city: &str,
    destination_city: &str,
    trailer_type: TrailerType,
) -> Vec<&'a ShipmentRecord> {
    records
        .iter()
        .filter(|r| r.matches_lane(origin_city, destination_city) && r.trailer_type == trailer_type)
        .collect()
}

/// Records whose pickup date falls inside `[from, to]`. A missing bound is open.
pub fn filter_by_pickup_window(
    records: &[ShipmentRecord],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<&ShipmentRecord> {
    records
        .iter()
        .filter(|r| from.map_or(true, |d| r.pickup_date >= d))
        .filter(|r| to.map_or(true, |d| r.pickup_date <= d))
        .collect()
}

/// Arithmetic mean of `rate` over the records.
///
/// Returns [`Error::UndefinedAggregate`] when there are no records.
pub fn compute_reference_rate<'a, I>(records: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a ShipmentRecord>,
{
    // Running mean; a plain sum overflows for rates near f64::MAX
    let mut mean = 0.0_f64;
    let mut count = 0_usize;
    for r in records {
        count += 1;
        let n = count as f64;
        mean += r.rate / n - mean / n;
    }

    if count == 0 {
        return Err(Error::UndefinedAggregate);
    }
    Ok(mean)
}

/// Tier for a single rate. First matching rule wins; intervals are half-open.
///
/// A NaN on either side fails every `<` test and resolves to `High`.
pub fn categorize_rate(rate: f64, reference_rate: f64, margin: f64) -> RateTier {
    if rate < reference_rate - margin {
        RateTier::Low
    } else if rate < reference_rate {
        RateTier::BelowAverage
    } else if rate < reference_rate + margin {
        RateTier::AboveAverage
    } else {
        RateTier::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shipment::fixtures::record;

    fn sample() -> Vec<ShipmentRecord> {
        vec![
            record("Los Angeles", "Dallas", TrailerType::Van, 1000.0),
            record("Los Angeles", "Dallas", TrailerType::Reefer, 1300.0),
            record("Houston", "Dallas", TrailerType::Van, 700.0),
            record("Los Angeles", "Dallas", TrailerType::Van, 1100.0),
            record("Los Angeles", "Denver", TrailerType::Van, 900.0),
        ]
    }

    #[test]
    fn test_filter_matches_all_three_fields() {
        let records = sample();
        let matches = filter_by_lane_and_trailer(&records, "Los Angeles", "Dallas", TrailerType::Van);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].rate, 1000.0);
        assert_eq!(matches[1].rate, 1100.0);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let records = sample();
        let matches = filter_by_lane_and_trailer(&records, "los angeles", "Dallas", TrailerType::Van);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_filter_no_match() {
        let records = sample();
        let matches = filter_by_lane_and_trailer(&records, "Miami", "Seattle", TrailerType::Flatbed);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_pickup_window() {
        let mut records = sample();
        records[0].pickup_date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        records[4].pickup_date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();

        let from = NaiveDate::from_ymd_opt(2026, 2, 1);
        let to = NaiveDate::from_ymd_opt(2026, 3, 31);
        assert_eq!(filter_by_pickup_window(&records, from, to).len(), 3);
        assert_eq!(filter_by_pickup_window(&records, from, None).len(), 4);
        assert_eq!(filter_by_pickup_window(&records, None, None).len(), 5);

        // Bounds are inclusive
        let exact = NaiveDate::from_ymd_opt(2026, 1, 10);
        assert_eq!(filter_by_pickup_window(&records, exact, exact).len(), 1);
    }

    #[test]
    fn test_reference_rate_mean() {
        let records = sample();
        let matches = filter_by_lane_and_trailer(&records, "Los Angeles", "Dallas", TrailerType::Van);
        let reference = compute_reference_rate(matches.iter().copied()).unwrap();
        assert!((reference - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_rate_large_rates_stay_finite() {
        let records = vec![
            record("A", "B", TrailerType::Van, 1.0e308),
            record("A", "B", TrailerType::Van, 1.0e308),
        ];
        let reference = compute_reference_rate(&records).unwrap();
        assert!(reference.is_finite());
        assert_eq!(reference, 1.0e308);
        assert_eq!(categorize_rate(1.0e308, reference, DEFAULT_MARGIN), RateTier::AboveAverage);

        let mixed = vec![
            record("A", "B", TrailerType::Van, f64::MAX),
            record("A", "B", TrailerType::Van, -f64::MAX),
        ];
        assert_eq!(compute_reference_rate(&mixed).unwrap(), 0.0);
    }

    #[test]
    fn test_reference_rate_empty_is_undefined() {
        let records: Vec<ShipmentRecord> = Vec::new();
        let err = compute_reference_rate(&records).unwrap_err();
        assert!(matches!(err, Error::UndefinedAggregate));
    }

    #[test]
    fn test_categorize_boundaries() {
        let reference = 1050.0;
        assert_eq!(categorize_rate(999.99, reference, DEFAULT_MARGIN), RateTier::Low);
        assert_eq!(categorize_rate(1000.0, reference, DEFAULT_MARGIN), RateTier::BelowAverage);
        assert_eq!(categorize_rate(1049.99, reference, DEFAULT_MARGIN), RateTier::BelowAverage);
        assert_eq!(categorize_rate(1050.0, reference, DEFAULT_MARGIN), RateTier::AboveAverage);
        assert_eq!(categorize_rate(1099.99, reference, DEFAULT_MARGIN), RateTier::AboveAverage);
        assert_eq!(categorize_rate(1100.0, reference, DEFAULT_MARGIN), RateTier::High);
    }

    #[test]
    fn test_categorize_rate_equal_to_reference() {
        assert_eq!(categorize_rate(812.5, 812.5, DEFAULT_MARGIN), RateTier::AboveAverage);
    }

    #[test]
    fn test_categorize_zero_margin() {
        assert_eq!(categorize_rate(99.0, 100.0, 0.0), RateTier::BelowAverage);
        assert_eq!(categorize_rate(100.0, 100.0, 0.0), RateTier::High);
    }

    #[test]
    fn test_categorize_nan_is_high() {
        assert_eq!(categorize_rate(f64::NAN, 100.0, DEFAULT_MARGIN), RateTier::High);
    }
}
