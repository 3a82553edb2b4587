use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Average generation mix of one calendar day
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMix {
    pub date: NaiveDate,
    /// Fuel type -> average percentage across the day, rounded to 2 decimals
    pub average_energy_mix: BTreeMap<String, f64>,
    pub clean_energy_percentage: f64,
}

/// Per-day mixes in ascending date order
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MixReport {
    pub energy_mix_days: Vec<DayMix>,
}

impl MixReport {
    pub fn len(&self) -> usize {
        self.energy_mix_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy_mix_days.is_empty()
    }
}

impl From<Vec<DayMix>> for MixReport {
    fn from(energy_mix_days: Vec<DayMix>) -> Self {
        Self { energy_mix_days }
    }
}

/// Contiguous window with the highest average clean-energy share
#[cfg_attr(feature = "swagger", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub clean_energy_percentage: f64,
}

impl ChargingWindow {
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}
