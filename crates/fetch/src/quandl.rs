//! HTTP client for the provider's datatable endpoint.

use crate::source::DataSource;
use analyzer_core::{Error, FetchConfig, Result};
use analyzer_ingestion::{ApiResponse, Datatable};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::{info, warn};

/// Build the request URL for `config`.
///
/// Query parameters are emitted in key order: `api_key`, `date.gte`,
/// `date.lte`, `ticker` (comma-joined).
pub fn build_request_url(config: &FetchConfig, api_key: &str) -> Result<String> {
    let mut url = Url::parse(&config.endpoint)
        .map_err(|e| Error::config(format!("invalid endpoint '{}': {e}", config.endpoint)))?;

    url.query_pairs_mut()
        .append_pair("api_key", api_key)
        .append_pair("date.gte", &config.start_date.format("%Y-%m-%d").to_string())
        .append_pair("date.lte", &config.end_date.format("%Y-%m-%d").to_string())
        .append_pair("ticker", &config.tickers.join(","));

    Ok(url.into())
}

/// Map a response status onto the provider's error semantics.
pub fn check_status(status: StatusCode) -> Result<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::BAD_REQUEST => Err(Error::Unauthorized),
        other => Err(Error::Status(other.as_u16())),
    }
}

/// Provider client.
pub struct QuandlClient {
    client: reqwest::Client,
    config: FetchConfig,
}

impl QuandlClient {
    /// Create a client with the configured request timeout.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::fetch(e.to_string()))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl DataSource for QuandlClient {
    fn name(&self) -> &str {
        &self.config.endpoint
    }

    async fn fetch(&self) -> Result<Datatable> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::config("an API key is required"))?;
        let url = build_request_url(&self.config, api_key)?;

        info!(
            endpoint = %self.config.endpoint,
            tickers = ?self.config.tickers,
            "requesting datatable"
        );
        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "provider request failed");
            Error::fetch(e.to_string())
        })?;

        check_status(response.status())?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::fetch(e.to_string()))?;
        Ok(ApiResponse::from_json(&body)?.datatable)
    }
}
