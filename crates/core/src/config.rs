//! Configuration structures for the stock analyzer.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default provider endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.quandl.com/api/v3/datatables/WIKI/PRICES";

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upstream fetch configuration.
    pub fetch: FetchConfig,
    /// Analytics configuration.
    pub analytics: AnalyticsConfig,
}

impl Config {
    /// Load configuration from a JSON file. Missing sections take their defaults.
    ///
    /// The result is not validated; callers layer overrides first and then
    /// call [`Config::validate`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Reject configurations no fetch or analytics run could use.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.tickers.is_empty() {
            return Err(Error::config("at least one ticker is required"));
        }
        if self.fetch.end_date < self.fetch.start_date {
            return Err(Error::config(format!(
                "end date {} is before start date {}",
                self.fetch.end_date, self.fetch.start_date
            )));
        }
        if self.analytics.busy_volume_factor <= 0.0 {
            return Err(Error::config("busy volume factor must be positive"));
        }
        Ok(())
    }
}

/// Upstream data provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Datatable endpoint URL.
    pub endpoint: String,
    /// Tickers to request.
    pub tickers: Vec<String>,
    /// First date requested (inclusive).
    pub start_date: NaiveDate,
    /// Last date requested (inclusive).
    pub end_date: NaiveDate,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Provider API key.
    pub api_key: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tickers: vec!["COF".to_string(), "GOOGL".to_string(), "MSFT".to_string()],
            start_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2017, 6, 30).unwrap_or_default(),
            timeout_secs: 60,
            api_key: None,
        }
    }
}

/// Analytics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Multiple of average volume a day must exceed to count as busy.
    pub busy_volume_factor: f64,
    /// Run the four analytics concurrently.
    pub parallel: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            busy_volume_factor: 1.10,
            parallel: true,
        }
    }
}
