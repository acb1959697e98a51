//! Analytics engine.
//!
//! Combines the four analytics behind one configured entry point.

use analyzer_core::{
    AnalyticsConfig, LossLeader, MaxProfitResult, MonthlyAverage, Result, SeriesMap, Ticker,
    VolumeReport,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::{
    loser::calc_biggest_loser, monthly::calc_average_monthly, profit::calc_max_daily_profit,
    volume::calc_busiest_days_with,
};

/// All four analytics for one series map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub monthly_averages: BTreeMap<Ticker, Vec<MonthlyAverage>>,
    pub max_daily_profit: Vec<MaxProfitResult>,
    pub busiest_days: BTreeMap<Ticker, VolumeReport>,
    pub biggest_loser: LossLeader,
}

/// Analytics engine.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    /// Create a new engine from configuration.
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    /// Monthly open/close averages per ticker.
    pub fn average_monthly(&self, series: &SeriesMap) -> BTreeMap<Ticker, Vec<MonthlyAverage>> {
        calc_average_monthly(series)
    }

    /// Widest high-low day per ticker.
    pub fn max_daily_profit(&self, series: &SeriesMap) -> Vec<MaxProfitResult> {
        calc_max_daily_profit(series)
    }

    /// Busy days per ticker using the configured volume factor.
    pub fn busiest_days(&self, series: &SeriesMap) -> Result<BTreeMap<Ticker, VolumeReport>> {
        calc_busiest_days_with(series, self.config.busy_volume_factor)
    }

    /// Ticker with the most loss days.
    pub fn biggest_loser(&self, series: &SeriesMap) -> LossLeader {
        calc_biggest_loser(series)
    }

    /// Compute every metric.
    ///
    /// The computations only borrow `series`, so with `parallel` set they run
    /// on the rayon pool without any locking.
    pub fn run_all(&self, series: &SeriesMap) -> Result<AnalyticsReport> {
        let ((monthly_averages, max_daily_profit), (busiest_days, biggest_loser)) =
            if self.config.parallel {
                rayon::join(
                    || {
                        rayon::join(
                            || self.average_monthly(series),
                            || self.max_daily_profit(series),
                        )
                    },
                    || rayon::join(|| self.busiest_days(series), || self.biggest_loser(series)),
                )
            } else {
                (
                    (self.average_monthly(series), self.max_daily_profit(series)),
                    (self.busiest_days(series), self.biggest_loser(series)),
                )
            };

        let report = AnalyticsReport {
            monthly_averages,
            max_daily_profit,
            busiest_days: busiest_days?,
            biggest_loser,
        };
        info!(
            tickers = series.len(),
            loser = %report.biggest_loser.ticker,
            "computed analytics report"
        );
        Ok(report)
    }
}
