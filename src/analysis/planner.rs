//! Query ranges for the two inbound operations.
//!
//! Queried at an exact midnight, the generation endpoint also returns the
//! `23:30 - 00:00` interval of the previous day. Both ranges therefore start
//! one minute past midnight.

use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::domain::TimeWindow;

pub const BOUNDARY_OFFSET_MINUTES: i64 = 1;
pub const MIX_REPORT_DAYS: i64 = 3;
pub const OPTIMAL_SEARCH_DAYS: i64 = 2;

fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Today, tomorrow and the day after tomorrow
pub fn mix_report_window(now: DateTime<Utc>) -> TimeWindow {
    let today = start_of_day(now) + Duration::minutes(BOUNDARY_OFFSET_MINUTES);
    TimeWindow::new(today, today + Duration::days(MIX_REPORT_DAYS))
}

/// Tomorrow and the day after; only future slots are useful for charging
pub fn optimal_search_window(now: DateTime<Utc>) -> TimeWindow {
    let tomorrow =
        start_of_day(now) + Duration::days(1) + Duration::minutes(BOUNDARY_OFFSET_MINUTES);
    TimeWindow::new(tomorrow, tomorrow + Duration::days(OPTIMAL_SEARCH_DAYS))
}
