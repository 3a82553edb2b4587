use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use std::time::Duration;
use tracing::{debug, warn};

use super::{FetchError, IntervalSource};
use crate::{config::UpstreamConfig, domain::TimeWindow};

/// Client for the GB Carbon Intensity generation endpoint
#[derive(Clone)]
pub struct CarbonIntensityClient {
    base_url: String,
    client: reqwest::Client,
}

impl CarbonIntensityClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("carbon-intensity-api/0.1"),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self { base_url, client })
    }

    pub fn from_config(cfg: &UpstreamConfig) -> Result<Self> {
        Self::new(
            cfg.base_url.clone(),
            Duration::from_secs(cfg.http_timeout_seconds),
        )
    }

    fn url_for(&self, window: &TimeWindow) -> String {
        format!(
            "{}/generation/{}/{}",
            self.base_url.trim_end_matches('/'),
            window.from_param(),
            window.to_param()
        )
    }
}

#[async_trait]
impl IntervalSource for CarbonIntensityClient {
    async fn fetch(&self, window: TimeWindow) -> Result<Vec<u8>, FetchError> {
        let url = self.url_for(&window);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, %url, "generation GET failed");
            FetchError::Transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, %url, "generation API error");
            return Err(FetchError::Status { status });
        }

        let body = resp.bytes().await.map_err(|e| {
            warn!(error = %e, %url, "generation read failed");
            FetchError::Transport(e)
        })?;
        debug!(%url, bytes = body.len(), "generation series fetched");
        Ok(body.to_vec())
    }
}
