use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer};
use thiserror::Error;
use tracing::warn;

use crate::domain::{FuelMix, Interval};

/// Failure to decode an upstream response body
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed generation payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("interval {index} is empty or reversed: {from} .. {to}")]
    InvalidInterval {
        index: usize,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

/// Decode a generation response body into intervals, preserving upstream order.
///
/// `{"data": []}` is a valid, empty series. A body without a top-level
/// `data` field is rejected.
pub fn parse_intervals(body: &[u8]) -> Result<Vec<Interval>, ParseError> {
    let raw: RawResponse = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "generation JSON parse failed");
        ParseError::Json(e)
    })?;

    raw.data
        .into_iter()
        .enumerate()
        .map(|(index, r)| {
            if r.from >= r.to {
                warn!(index, from = %r.from, to = %r.to, "generation interval rejected");
                return Err(ParseError::InvalidInterval {
                    index,
                    from: r.from,
                    to: r.to,
                });
            }
            Ok(Interval {
                from: r.from,
                to: r.to,
                generation_mix: r
                    .generationmix
                    .into_iter()
                    .map(|m| FuelMix::new(m.fuel, m.perc))
                    .collect(),
            })
        })
        .collect()
}

/// Parse an upstream timestamp. Accepts RFC 3339 and the minute-precision
/// `2025-12-10T00:30Z` form the generation endpoint emits.
pub fn parse_upstream_time(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%MZ")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

fn upstream_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_upstream_time(&s).ok_or_else(|| de::Error::custom(format!("invalid timestamp `{s}`")))
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    data: Vec<RawInterval>,
}

#[derive(Debug, Deserialize)]
struct RawInterval {
    #[serde(deserialize_with = "upstream_time")]
    from: DateTime<Utc>,
    #[serde(deserialize_with = "upstream_time")]
    to: DateTime<Utc>,
    #[serde(default)]
    generationmix: Vec<RawFuelMix>,
}

#[derive(Debug, Deserialize)]
struct RawFuelMix {
    fuel: String,
    perc: f64,
}
