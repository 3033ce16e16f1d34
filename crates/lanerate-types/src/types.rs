//! Shared vocabularies for shipment records and rate tiers

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseKindError;

/// Trailer equipment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize, Deserialize)]
pub enum TrailerType {
    Flatbed,
    Reefer,
    Van,
}

impl TrailerType {
    pub const ALL: [TrailerType; 3] = [TrailerType::Flatbed, TrailerType::Reefer, TrailerType::Van];

    pub fn label(&self) -> &'static str {
        match self {
            TrailerType::Flatbed => "Flatbed",
            TrailerType::Reefer => "Reefer",
            TrailerType::Van => "Van",
        }
    }
}

impl std::fmt::Display for TrailerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TrailerType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flatbed" | "flat" => Ok(TrailerType::Flatbed),
            "reefer" | "refrigerated" => Ok(TrailerType::Reefer),
            "van" | "dry van" | "dryvan" => Ok(TrailerType::Van),
            _ => Err(ParseKindError {
                kind: "trailer type",
                value: s.to_string(),
            }),
        }
    }
}

/// Load size (full truckload or partial)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum LoadSize {
    Full,
    Partial,
}

impl LoadSize {
    pub fn label(&self) -> &'static str {
        match self {
            LoadSize::Full => "Full",
            LoadSize::Partial => "Partial",
        }
    }
}

impl std::fmt::Display for LoadSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LoadSize {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" | "ftl" => Ok(LoadSize::Full),
            "partial" | "ltl" => Ok(LoadSize::Partial),
            _ => Err(ParseKindError {
                kind: "load size",
                value: s.to_string(),
            }),
        }
    }
}

/// Position of a rate relative to the lane's reference rate.
///
/// Ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// rate < reference - margin
    Low,
    /// reference - margin <= rate < reference
    BelowAverage,
    /// reference <= rate < reference + margin
    AboveAverage,
    /// rate >= reference + margin
    High,
}

impl RateTier {
    pub const ALL: [RateTier; 4] = [
        RateTier::Low,
        RateTier::BelowAverage,
        RateTier::AboveAverage,
        RateTier::High,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RateTier::Low => "Low",
            RateTier::BelowAverage => "Below average",
            RateTier::AboveAverage => "Above average",
            RateTier::High => "High",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            RateTier::Low => "low",
            RateTier::BelowAverage => "below_average",
            RateTier::AboveAverage => "above_average",
            RateTier::High => "high",
        }
    }
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
