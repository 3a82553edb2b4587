use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fuel types counted as clean (zero or low carbon) generation.
pub const CLEAN_FUELS: [&str; 5] = ["biomass", "nuclear", "hydro", "wind", "solar"];

/// Upstream series granularity: one interval per half hour.
pub const INTERVALS_PER_HOUR: u32 = 2;

pub fn is_clean_fuel(fuel: &str) -> bool {
    CLEAN_FUELS.contains(&fuel)
}

/// Share of a single fuel type in an interval's generation mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelMix {
    pub fuel: String,
    /// Percentage of total generation (0 - 100)
    pub perc: f64,
}

impl FuelMix {
    pub fn new(fuel: impl Into<String>, perc: f64) -> Self {
        Self {
            fuel: fuel.into(),
            perc,
        }
    }

    pub fn is_clean(&self) -> bool {
        is_clean_fuel(&self.fuel)
    }
}

/// Half-open generation interval `[from, to)` with its fuel mix snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub generation_mix: Vec<FuelMix>,
}

impl Interval {
    /// Summed percentage of all clean fuels in this interval
    pub fn clean_share(&self) -> f64 {
        self.generation_mix
            .iter()
            .filter(|m| m.is_clean())
            .map(|m| m.perc)
            .sum()
    }
}
