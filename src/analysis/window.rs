use super::round2;
use crate::domain::{ChargingWindow, Interval, INTERVALS_PER_HOUR};

/// Number of consecutive intervals covering `hours` hours
pub fn window_size(hours: u32) -> usize {
    hours.saturating_mul(INTERVALS_PER_HOUR) as usize
}

/// Find the `hours`-long run of consecutive intervals with the highest summed
/// clean-energy share.
///
/// Returns `None` when `hours` is zero or there are fewer intervals than the
/// window needs. The window sum is maintained incrementally, so the scan is
/// O(n). On equal sums the earliest window wins.
pub fn find_optimal_window(intervals: &[Interval], hours: u32) -> Option<ChargingWindow> {
    let size = window_size(hours);
    if size == 0 || intervals.len() < size {
        return None;
    }

    let shares: Vec<f64> = intervals.iter().map(Interval::clean_share).collect();

    let mut sum: f64 = shares[..size].iter().sum();
    let mut best_sum = sum;
    let mut best_start = 0;

    for start in 1..=shares.len() - size {
        sum += shares[start + size - 1] - shares[start - 1];
        if sum > best_sum {
            best_sum = sum;
            best_start = start;
        }
    }

    Some(ChargingWindow {
        start_time: intervals[best_start].from,
        end_time: intervals[best_start + size - 1].to,
        clean_energy_percentage: round2(best_sum / size as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FuelMix;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use rstest::rstest;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 11, 0, 0, 0).unwrap()
    }

    fn series(clean: &[f64]) -> Vec<Interval> {
        clean
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let from = base() + Duration::minutes(30 * i as i64);
                Interval {
                    from,
                    to: from + Duration::minutes(30),
                    generation_mix: vec![
                        FuelMix::new("wind", *c),
                        FuelMix::new("gas", 100.0 - c),
                    ],
                }
            })
            .collect()
    }

    /// O(n * size) reference: recompute every window from scratch.
    fn brute_force_start(intervals: &[Interval], size: usize) -> Option<(usize, f64)> {
        if size == 0 || intervals.len() < size {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for start in 0..=intervals.len() - size {
            let sum: f64 = intervals[start..start + size]
                .iter()
                .map(Interval::clean_share)
                .sum();
            if best.map_or(true, |(_, b)| sum > b) {
                best = Some((start, sum));
            }
        }
        best
    }

    #[test]
    fn test_finds_high_clean_block() {
        let mut clean = vec![30.0; 6];
        clean.extend([80.0; 6]);
        clean.extend([50.0; 6]);
        let intervals = series(&clean);

        let window = find_optimal_window(&intervals, 3).unwrap();
        assert_eq!(window.start_time, intervals[6].from);
        assert_eq!(window.end_time, intervals[11].to);
        assert_eq!(window.clean_energy_percentage, 80.0);
    }

    #[test]
    fn test_insufficient_data() {
        let intervals = series(&[50.0, 60.0]);
        assert!(find_optimal_window(&intervals, 3).is_none());
        assert!(find_optimal_window(&[], 1).is_none());
    }

    #[test]
    fn test_exact_fit_uses_whole_series() {
        let intervals = series(&[10.0, 20.0, 30.0, 40.0]);
        let window = find_optimal_window(&intervals, 2).unwrap();
        assert_eq!(window.start_time, intervals[0].from);
        assert_eq!(window.end_time, intervals[3].to);
        assert_eq!(window.clean_energy_percentage, 25.0);
    }

    #[test]
    fn test_ties_keep_earliest_window() {
        let intervals = series(&[70.0, 70.0, 10.0, 70.0, 70.0]);
        let window = find_optimal_window(&intervals, 1).unwrap();
        assert_eq!(window.start_time, intervals[0].from);
    }

    #[test]
    fn test_zero_and_huge_hours_do_not_panic() {
        let intervals = series(&[50.0; 96]);
        assert!(find_optimal_window(&intervals, 0).is_none());
        assert!(find_optimal_window(&intervals, u32::MAX).is_none());
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let intervals = series(&[12.0, 55.5, 55.5, 40.0, 61.25, 61.25, 3.0, 99.0]);
        let first = find_optimal_window(&intervals, 1);
        for _ in 0..10 {
            assert_eq!(find_optimal_window(&intervals, 1), first);
        }
    }

    #[rstest]
    #[case(1, 2)]
    #[case(3, 6)]
    #[case(6, 12)]
    fn test_window_size(#[case] hours: u32, #[case] expected: usize) {
        assert_eq!(window_size(hours), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    fn test_duration_matches_hours(#[case] hours: u32) {
        let clean: Vec<f64> = (0..96).map(|i| ((i * 37) % 100) as f64).collect();
        let window = find_optimal_window(&series(&clean), hours).unwrap();
        assert_eq!(window.duration(), Duration::hours(i64::from(hours)));
    }

    proptest! {
        #[test]
        fn matches_brute_force(
            clean in prop::collection::vec(0u8..=100, 0..120),
            hours in 1u32..=8,
        ) {
            // Whole percentages keep every window sum exact in f64.
            let clean: Vec<f64> = clean.into_iter().map(f64::from).collect();
            let intervals = series(&clean);
            let size = window_size(hours);

            match (find_optimal_window(&intervals, hours), brute_force_start(&intervals, size)) {
                (None, None) => prop_assert!(intervals.len() < size),
                (Some(window), Some((start, sum))) => {
                    prop_assert_eq!(window.start_time, intervals[start].from);
                    prop_assert_eq!(window.end_time, intervals[start + size - 1].to);
                    prop_assert_eq!(window.clean_energy_percentage, round2(sum / size as f64));
                    prop_assert_eq!(window.duration(), Duration::hours(i64::from(hours)));
                }
                (found, reference) => prop_assert!(
                    false,
                    "finder {:?} disagrees with reference {:?}",
                    found,
                    reference
                ),
            }
        }
    }
}
