use chrono::{DateTime, Utc};
use std::fmt;

/// Upstream path timestamp format: UTC at second precision
pub const UPSTREAM_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Half-open query range `[from, to)` sent to the upstream series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeWindow {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    pub fn from_param(&self) -> String {
        self.from.format(UPSTREAM_TIME_FORMAT).to_string()
    }

    pub fn to_param(&self) -> String {
        self.to.format(UPSTREAM_TIME_FORMAT).to_string()
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from_param(), self.to_param())
    }
}
