//! Per-lane aggregates and the lane catalog

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use lanerate_types::TrailerType;

use crate::model::ShipmentRecord;

/// Aggregates for one (lane, trailer) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneSummary {
    pub origin_city: String,
    pub destination_city: String,
    pub trailer_type: TrailerType,
    pub count: usize,
    pub mean_rate: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub mean_distance_miles: f64,
    /// Mean over records with a usable distance
    pub mean_rate_per_mile: Option<f64>,
}

impl LaneSummary {
    pub fn lane(&self) -> String {
        crate::model::shipment::format_lane(&self.origin_city, &self.destination_city)
    }
}

#[derive(Default)]
struct Accumulator {
    count: usize,
    rate_sum: f64,
    min_rate: f64,
    max_rate: f64,
    distance_sum: f64,
    per_mile_sum: f64,
    per_mile_count: usize,
}

impl Accumulator {
    fn push(&mut self, record: &ShipmentRecord) {
        if self.count == 0 {
            self.min_rate = record.rate;
            self.max_rate = record.rate;
        } else {
            self.min_rate = self.min_rate.min(record.rate);
            self.max_rate = self.max_rate.max(record.rate);
        }
        self.count += 1;
        self.rate_sum += record.rate;
        self.distance_sum += record.distance_miles;
        if let Some(per_mile) = record.rate_per_mile() {
            self.per_mile_sum += per_mile;
            self.per_mile_count += 1;
        }
    }
}

/// Group records by (origin, destination, trailer). Sorted by lane, then trailer.
pub fn summarize_lanes(records: &[ShipmentRecord]) -> Vec<LaneSummary> {
    let mut groups: BTreeMap<(&str, &str, TrailerType), Accumulator> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.origin_city.as_str(), record.destination_city.as_str(), record.trailer_type))
            .or_default()
            .push(record);
    }

    groups
        .into_iter()
        .map(|((origin, destination, trailer_type), acc)| {
            let n = acc.count as f64;
            LaneSummary {
                origin_city: origin.to_string(),
                destination_city: destination.to_string(),
                trailer_type,
                count: acc.count,
                mean_rate: acc.rate_sum / n,
                min_rate: acc.min_rate,
                max_rate: acc.max_rate,
                mean_distance_miles: acc.distance_sum / n,
                mean_rate_per_mile: (acc.per_mile_count > 0)
                    .then(|| acc.per_mile_sum / acc.per_mile_count as f64),
            }
        })
        .collect()
}

/// Distinct selectable values present in a record set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneCatalog {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    pub trailer_types: Vec<TrailerType>,
}

impl LaneCatalog {
    pub fn from_records(records: &[ShipmentRecord]) -> Self {
        let mut origins = BTreeSet::new();
        let mut destinations = BTreeSet::new();
        let mut trailer_types = BTreeSet::new();
        for r in records {
            origins.insert(r.origin_city.as_str());
            destinations.insert(r.destination_city.as_str());
            trailer_types.insert(r.trailer_type);
        }
        Self {
            origins: origins.into_iter().map(str::to_string).collect(),
            destinations: destinations.into_iter().map(str::to_string).collect(),
            trailer_types: trailer_types.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

/// Destinations served from `origin_city`, sorted
pub fn destinations_from(records: &[ShipmentRecord], origin_city: &str) -> Vec<String> {
    records
        .iter()
        .filter(|r| r.origin_city == origin_city)
        .map(|r| r.destination_city.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn generate_summary_report(summaries: &[LaneSummary]) -> String {
    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str("              Lane Summary                        \n");
    report.push_str("==================================================\n\n");
    report.push_str(&format!("  Groups: {}\n", summaries.len()));
    report.push_str(&format!(
        "  Loads:  {}\n\n",
        summaries.iter().map(|s| s.count).sum::<usize>()
    ));

    if summaries.is_empty() {
        report.push_str("  No loads in the data set.\n\n");
        report.push_str("==================================================\n");
        return report;
    }

    report.push_str("-".repeat(88).as_str());
    report.push('\n');
    report.push_str(&format!(
        "{:<34} {:<8} {:>5} {:>10} {:>10} {:>10} {:>7}\n",
        "Lane", "Trailer", "Loads", "Mean", "Min", "Max", "$/mi"
    ));
    report.push_str("-".repeat(88).as_str());
    report.push('\n');
    for s in summaries {
        report.push_str(&format!(
            "{:<34} {:<8} {:>5} {:>10.2} {:>10.2} {:>10.2} {:>7}\n",
            truncate_str(&s.lane(), 33),
            s.trailer_type.label(),
            s.count,
            s.mean_rate,
            s.min_rate,
            s.max_rate,
            s.mean_rate_per_mile
                .map(|v| format!("{:.2}", v))
                .unwrap_or_else(|| "-".to_string()),
        ));
    }
    report.push('\n');
    report.push_str("==================================================\n");
    report
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shipment::fixtures::record;

    fn sample() -> Vec<ShipmentRecord> {
        vec![
            record("Los Angeles", "Dallas", TrailerType::Van, 1000.0),
            record("Los Angeles", "Dallas", TrailerType::Van, 1400.0),
            record("Los Angeles", "Dallas", TrailerType::Reefer, 1500.0),
            record("Chicago", "Atlanta", TrailerType::Flatbed, 1200.0),
            record("Los Angeles", "Seattle", TrailerType::Van, 1100.0),
        ]
    }

    #[test]
    fn test_summarize_groups_and_sorts() {
        let summaries = summarize_lanes(&sample());
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries[0].lane(), "Chicago -> Atlanta");
        assert_eq!(summaries[1].trailer_type, TrailerType::Reefer);
        assert_eq!(summaries[2].trailer_type, TrailerType::Van);

        let van = &summaries[2];
        assert_eq!(van.count, 2);
        assert!((van.mean_rate - 1200.0).abs() < 1e-9);
        assert_eq!(van.min_rate, 1000.0);
        assert_eq!(van.max_rate, 1400.0);
        assert!((van.mean_rate_per_mile.unwrap() - 1200.0 / 1400.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_without_distance() {
        let mut r = record("Miami", "Denver", TrailerType::Van, 900.0);
        r.distance_miles = 0.0;
        let summaries = summarize_lanes(&[r]);
        assert!(summaries[0].mean_rate_per_mile.is_none());
    }

    #[test]
    fn test_catalog() {
        let catalog = LaneCatalog::from_records(&sample());
        assert_eq!(catalog.origins, vec!["Chicago", "Los Angeles"]);
        assert_eq!(catalog.destinations, vec!["Atlanta", "Dallas", "Seattle"]);
        assert_eq!(
            catalog.trailer_types,
            vec![TrailerType::Flatbed, TrailerType::Reefer, TrailerType::Van]
        );
        assert!(LaneCatalog::from_records(&[]).is_empty());
    }

    #[test]
    fn test_destinations_from() {
        assert_eq!(destinations_from(&sample(), "Los Angeles"), vec!["Dallas", "Seattle"]);
        assert!(destinations_from(&sample(), "Miami").is_empty());
    }

    #[test]
    fn test_summary_report() {
        let report = generate_summary_report(&summarize_lanes(&sample()));
        assert!(report.contains("Groups: 4"));
        assert!(report.contains("Loads:  5"));
        assert!(report.contains("Chicago -> Atlanta"));
        assert!(generate_summary_report(&[]).contains("No loads"));
    }
}
