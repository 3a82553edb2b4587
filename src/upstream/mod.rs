pub mod client;
pub mod parse;

pub use client::*;
pub use parse::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::TimeWindow;

/// Failure to retrieve the raw series from the upstream source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}")]
    Status { status: reqwest::StatusCode },
}

/// Source of raw generation-mix interval data
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntervalSource: Send + Sync {
    /// Fetch the raw response body for `[window.from, window.to)`
    async fn fetch(&self, window: TimeWindow) -> Result<Vec<u8>, FetchError>;
}
