use std::time::Duration;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::config::BACKEND;
use crate::domain::{Bar, Symbol, Timeframe};
use crate::models::{Alert, AlertDraft, PairMetrics, PairSeries};

/// Thin HTTP client for the analytics service.
///
/// Error policy follows the dashboard contract: transport problems (network
/// unreachable, non-2xx status) surface as errors for the engine to log and
/// swallow, while a body that parses to the wrong shape is normalized to the
/// type's empty default so the UI degrades to placeholders.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    base_url: String,
    http: reqwest::Client,
}

impl AnalyticsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(BACKEND.client.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {path} failed"))?
            .error_for_status()
            .with_context(|| format!("GET {path} returned an error status"))?;

        // Wrong-shape or unparseable bodies become the empty default, not errors
        Ok(response.json::<T>().await.unwrap_or_default())
    }

    pub async fn fetch_bars(&self, symbol: Symbol, timeframe: Timeframe) -> Result<Vec<Bar>> {
        self.get_json(
            "/bars",
            &[
                ("symbol", symbol.code()),
                ("timeframe", timeframe.code().to_string()),
            ],
        )
        .await
    }

    pub async fn fetch_pair_metrics(
        &self,
        y: Symbol,
        x: Symbol,
        window: u32,
    ) -> Result<PairMetrics> {
        self.get_json(
            "/pair",
            &[("y", y.code()), ("x", x.code()), ("window", window.to_string())],
        )
        .await
    }

    pub async fn fetch_pair_series(
        &self,
        y: Symbol,
        x: Symbol,
        window: u32,
    ) -> Result<PairSeries> {
        self.get_json(
            "/pair_series",
            &[("y", y.code()), ("x", x.code()), ("window", window.to_string())],
        )
        .await
    }

    pub async fn fetch_alerts(&self) -> Result<Vec<Alert>> {
        self.get_json("/alerts", &[]).await
    }

    pub async fn create_alert(&self, draft: &AlertDraft) -> Result<Alert> {
        let url = format!("{}/alerts", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .context("POST /alerts failed")?
            .error_for_status()
            .context("POST /alerts returned an error status")?;

        response
            .json::<Alert>()
            .await
            .context("POST /alerts returned an unreadable alert")
    }

    /// URL for the CSV download. The file is opened externally (browser),
    /// never parsed by this client.
    pub fn export_url(&self, symbol: Symbol, timeframe: Timeframe) -> String {
        format!(
            "{}/export?symbol={}&timeframe={}",
            self.base_url,
            symbol.code(),
            timeframe.code()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed_of_trailing_slashes() {
        let client = AnalyticsClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn export_url_carries_symbol_and_timeframe() {
        let client = AnalyticsClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.export_url(Symbol::EthUsdt, Timeframe::M1),
            "http://localhost:8000/export?symbol=ethusdt&timeframe=1m"
        );
    }
}
