//! Configuration file types.
//!
//! These structures mirror `families.yaml` exactly and are deserialized before
//! being validated into [`FamilySchedule`](super::FamilySchedule) values.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// A single rate tier as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct TierEntry {
    /// Clock time at which the tier ends, e.g. `"11:00 PM"`.
    pub until: String,
    /// Hourly rate paid within the tier.
    pub rate: Decimal,
    /// Display label for the tier.
    pub label: String,
}

/// One family's entry in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyEntry {
    /// Display name, e.g. `"Family A"`.
    pub name: String,
    /// One-line summary of the family's rates.
    #[serde(default)]
    pub description: String,
    /// Tiers in ascending order of `until`.
    pub tiers: Vec<TierEntry>,
}

/// Root of `families.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FamiliesConfig {
    /// Map of family identifier to its schedule entry.
    pub families: BTreeMap<String, FamilyEntry>,
}
