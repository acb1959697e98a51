mod cli;
mod output;

use analyzer_core::Config;
use analyzer_features::AnalyticsEngine;
use analyzer_fetch::{fetch_series, DataSource, FileSource, QuandlClient};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Metric};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if let Err(error) = run(cli, &mut out).await {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Layer command-line overrides on top of the file or default configuration.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(key) = &cli.api_key {
        config.fetch.api_key = Some(key.clone());
    }
    if let Some(tickers) = &cli.tickers {
        config.fetch.tickers = tickers.clone();
    }
    if let Some(start) = cli.start_date {
        config.fetch.start_date = start;
    }
    if let Some(end) = cli.end_date {
        config.fetch.end_date = end;
    }

    config.validate()?;
    Ok(config)
}

async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;

    let source: Box<dyn DataSource> = match &cli.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(QuandlClient::new(config.fetch.clone())?),
    };
    let series = fetch_series(source.as_ref())
        .await
        .with_context(|| format!("loading data from {}", source.name()))?;

    let engine = AnalyticsEngine::new(config.analytics.clone());
    let metric = cli.metric();
    info!(?metric, tickers = series.len(), "running analytics");

    match metric {
        Metric::MonthlyAverages => output::render(out, &engine.average_monthly(&series)),
        Metric::MaxDailyProfit => output::render(out, &engine.max_daily_profit(&series)),
        Metric::BusiestDays => output::render(out, &engine.busiest_days(&series)?),
        Metric::BiggestLoser => output::render(out, &engine.biggest_loser(&series)),
        Metric::All => output::render(out, &engine.run_all(&series)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const SAVED_RESPONSE: &str =
        concat!(env!("CARGO_MANIFEST_DIR"), "/../fetch/testdata/valid_response.json");

    /// Run the binary's pipeline against the saved response and parse every
    /// JSON document it printed.
    async fn run_saved(flags: &[&str]) -> Vec<Value> {
        let args = ["stock-analyzer", "--input", SAVED_RESPONSE]
            .into_iter()
            .chain(flags.iter().copied());
        let cli = Cli::try_parse_from(args).unwrap();

        let mut out = Vec::new();
        run(cli, &mut out).await.unwrap();
        serde_json::Deserializer::from_slice(&out)
            .into_iter::<Value>()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "stock-analyzer",
            "--api-key",
            "abc",
            "--tickers",
            "AAPL",
            "--end-date",
            "2017-03-31",
        ])
        .unwrap();

        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.fetch.api_key.as_deref(), Some("abc"));
        assert_eq!(config.fetch.tickers, vec!["AAPL"]);
        assert_eq!(config.fetch.start_date.to_string(), "2017-01-01");
        assert_eq!(config.fetch.end_date.to_string(), "2017-03-31");
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let cli = Cli::try_parse_from(["stock-analyzer", "--end-date", "2016-01-01"]).unwrap();
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_flags_apply_before_validating_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"fetch": {{"start_date": "2018-02-01"}}}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["stock-analyzer", "--config", path]).unwrap();
        assert!(resolve_config(&cli).is_err());

        let cli = Cli::try_parse_from([
            "stock-analyzer",
            "--config",
            path,
            "--end-date",
            "2018-06-30",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.fetch.start_date.to_string(), "2018-02-01");
        assert_eq!(config.fetch.end_date.to_string(), "2018-06-30");
    }

    #[tokio::test]
    async fn test_default_metric_renders_monthly_averages() {
        let docs = run_saved(&[]).await;
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["COF"][0]["month"], "2017-01");
        assert_eq!(docs[0]["COF"][0]["averageOpen"], 88.935);
    }

    #[tokio::test]
    async fn test_biggest_loser_renders_one_document() {
        let docs = run_saved(&["--biggest-loser"]).await;
        assert_eq!(docs.len(), 1);
        // COF and MSFT both have two loss days; COF sorts first.
        assert_eq!(docs[0]["ticker"], "COF");
        assert_eq!(docs[0]["lossDayCount"], 2);
    }

    #[tokio::test]
    async fn test_each_metric_renders_one_document() {
        for flag in ["--max-daily-profit", "--busiest-days", "--all"] {
            let docs = run_saved(&[flag]).await;
            assert_eq!(docs.len(), 1, "{flag}");
        }

        let docs = run_saved(&["--all"]).await;
        assert_eq!(docs[0]["biggestLoser"]["ticker"], "COF");
        assert_eq!(docs[0]["maxDailyProfit"].as_array().unwrap().len(), 3);
    }
}
