use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::round2;
use crate::domain::{is_clean_fuel, DayMix, Interval};

/// Group intervals by the UTC calendar date of their start and average each day.
///
/// Days come out in ascending order. An empty input gives an empty vector.
pub fn aggregate_by_day(intervals: &[Interval]) -> Vec<DayMix> {
    let mut days: BTreeMap<NaiveDate, Vec<&Interval>> = BTreeMap::new();
    for interval in intervals {
        days.entry(interval.from.date_naive())
            .or_default()
            .push(interval);
    }

    days.into_iter()
        .map(|(date, group)| average_day(date, &group))
        .collect()
}

/// Average fuel mix and clean-energy share of one day's intervals.
///
/// Each fuel's mean is rounded to 2 decimals; the clean percentage is the sum
/// of the rounded clean-fuel means, rounded once more.
pub fn average_day(date: NaiveDate, intervals: &[&Interval]) -> DayMix {
    if intervals.is_empty() {
        return DayMix {
            date,
            average_energy_mix: BTreeMap::new(),
            clean_energy_percentage: 0.0,
        };
    }

    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for interval in intervals {
        for mix in &interval.generation_mix {
            *sums.entry(mix.fuel.as_str()).or_insert(0.0) += mix.perc;
        }
    }

    let count = intervals.len() as f64;
    let mut clean = 0.0;
    let average_energy_mix: BTreeMap<String, f64> = sums
        .into_iter()
        .map(|(fuel, sum)| {
            let average = round2(sum / count);
            if is_clean_fuel(fuel) {
                clean += average;
            }
            (fuel.to_string(), average)
        })
        .collect();

    DayMix {
        date,
        average_energy_mix,
        clean_energy_percentage: round2(clean),
    }
}
