//! Seeded synthetic shipment data for demos and smoke tests

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanerate_domain::model::ShipmentRecord;
use lanerate_domain::repository::ShipmentRepository;
use lanerate_types::{Error, LoadSize, TrailerType};

const ORIGINS: [(&str, &str); 5] = [
    ("Los Angeles", "CA"),
    ("New York", "NY"),
    ("Houston", "TX"),
    ("Chicago", "IL"),
    ("Miami", "FL"),
];

const DESTINATIONS: [(&str, &str); 5] = [
    ("Dallas", "TX"),
    ("Atlanta", "GA"),
    ("Seattle", "WA"),
    ("Denver", "CO"),
    ("San Francisco", "CA"),
];

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_COUNT: usize = 500;

/// Per-mile multiplier by trailer type
fn trailer_factor(trailer_type: TrailerType) -> f64 {
    match trailer_type {
        TrailerType::Van => 1.0,
        TrailerType::Reefer => 1.2,
        TrailerType::Flatbed => 1.15,
    }
}

/// Generates the same records for the same seed, count, and anchor date.
#[derive(Debug, Clone)]
pub struct SyntheticShipmentSource {
    seed: u64,
    count: usize,
    anchor: NaiveDate,
}

impl SyntheticShipmentSource {
    pub fn new(seed: u64, count: usize, anchor: NaiveDate) -> Self {
        Self {
            seed,
            count,
            anchor,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self) -> Vec<ShipmentRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let records: Vec<ShipmentRecord> = (0..self.count).map(|_| self.next_record(&mut rng)).collect();
        tracing::debug!(seed = self.seed, count = records.len(), "generated synthetic shipments");
        records
    }

    fn next_record(&self, rng: &mut StdRng) -> ShipmentRecord {
        let (origin_city, origin_state) = ORIGINS[rng.random_range(0..ORIGINS.len())];
        let (destination_city, destination_state) = DESTINATIONS[rng.random_range(0..DESTINATIONS.len())];
        let trailer_type = TrailerType::ALL[rng.random_range(0..TrailerType::ALL.len())];

        let distance_miles = round_to(rng.random_range(200.0..1500.0), 1);
        let per_mile = rng.random_range(1.5..2.5);
        let rate = round_to(per_mile * distance_miles * trailer_factor(trailer_type), 2);

        let (load_size, weight_lbs) = if rng.random_bool(0.7) {
            (LoadSize::Full, rng.random_range(20_000..=45_000))
        } else {
            (LoadSize::Partial, rng.random_range(5_000..20_000))
        };

        let pickup_date = self.anchor + Duration::days(rng.random_range(0..60));
        let transit_days = (distance_miles / 500.0).ceil() as i64;

        ShipmentRecord {
            origin_city: origin_city.to_string(),
            destination_city: destination_city.to_string(),
            origin_state: origin_state.to_string(),
            destination_state: destination_state.to_string(),
            pickup_date,
            dropoff_date: pickup_date + Duration::days(transit_days),
            age_days: rng.random_range(0..=30),
            rate,
            distance_miles,
            trailer_type,
            load_size,
            weight_lbs,
        }
    }
}

impl ShipmentRepository for SyntheticShipmentSource {
    fn find_all(&self) -> Result<Vec<ShipmentRecord>, Error> {
        Ok(self.generate())
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
