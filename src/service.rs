use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::{
    aggregate_by_day, find_optimal_window, mix_report_window, optimal_search_window, window_size,
};
use crate::config::Config;
use crate::domain::{ChargingWindow, Interval, MixReport, TimeWindow};
use crate::upstream::{parse_intervals, CarbonIntensityClient, FetchError, IntervalSource, ParseError};

/// Why an operation produced no result
#[derive(Debug, Error)]
pub enum CarbonError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("insufficient data: {required} intervals required, {available} available")]
    InsufficientData { required: usize, available: usize },
}

impl CarbonError {
    pub fn kind(&self) -> &'static str {
        match self {
            CarbonError::Fetch(_) => "fetch",
            CarbonError::Parse(_) => "parse",
            CarbonError::InsufficientData { .. } => "insufficient_data",
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub service: Arc<CarbonIntensityService>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let client = CarbonIntensityClient::from_config(&cfg.upstream)?;
        Ok(Self::with_source(cfg, Arc::new(client)))
    }

    pub fn with_source(cfg: Config, source: Arc<dyn IntervalSource>) -> Self {
        Self {
            cfg,
            service: Arc::new(CarbonIntensityService::new(source)),
        }
    }
}

/// Fetches the generation series and derives the mix report and charging windows.
///
/// Every call plans its own range and makes exactly one upstream request.
pub struct CarbonIntensityService {
    source: Arc<dyn IntervalSource>,
}

impl CarbonIntensityService {
    pub fn new(source: Arc<dyn IntervalSource>) -> Self {
        Self { source }
    }

    /// Average mix for today and the next two days
    pub async fn average_energy_mix(&self) -> Result<MixReport, CarbonError> {
        self.average_energy_mix_at(Utc::now()).await
    }

    pub async fn average_energy_mix_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<MixReport, CarbonError> {
        let window = mix_report_window(now);
        let intervals = self.load(window).await?;
        if intervals.is_empty() {
            warn!(%window, "no generation intervals for mix report");
            return Err(CarbonError::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        let report = MixReport::from(aggregate_by_day(&intervals));
        info!(
            %window,
            intervals = intervals.len(),
            days = report.len(),
            "energy mix computed"
        );
        Ok(report)
    }

    /// Cleanest `hours`-long window within tomorrow and the day after
    pub async fn optimal_window(&self, hours: u32) -> Result<ChargingWindow, CarbonError> {
        self.optimal_window_at(Utc::now(), hours).await
    }

    pub async fn optimal_window_at(
        &self,
        now: DateTime<Utc>,
        hours: u32,
    ) -> Result<ChargingWindow, CarbonError> {
        let window = optimal_search_window(now);
        let intervals = self.load(window).await?;

        let Some(best) = find_optimal_window(&intervals, hours) else {
            let required = window_size(hours);
            warn!(
                %window,
                hours,
                required,
                available = intervals.len(),
                "not enough intervals for charging window"
            );
            return Err(CarbonError::InsufficientData {
                required,
                available: intervals.len(),
            });
        };

        info!(
            hours,
            start = %best.start_time,
            end = %best.end_time,
            clean_energy_percentage = best.clean_energy_percentage,
            "optimal charging window found"
        );
        Ok(best)
    }

    async fn load(&self, window: TimeWindow) -> Result<Vec<Interval>, CarbonError> {
        let body = self.source.fetch(window).await?;
        Ok(parse_intervals(&body)?)
    }
}
