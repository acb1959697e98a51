//! Busy-day detection by volume.

use analyzer_core::{
    AnalyticsConfig, BusyDay, DailyRecord, Error, Result, SeriesMap, Ticker, VolumeReport,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Average volume and busy days for one ticker.
///
/// A day is busy when its volume is strictly above `factor` times the
/// average. Busy days keep their record order.
pub fn volume_report(ticker: &str, records: &[DailyRecord], factor: f64) -> Result<VolumeReport> {
    if records.is_empty() {
        return Err(Error::empty_series(ticker));
    }

    let total: f64 = records.iter().map(|r| r.volume).sum();
    let average_volume = total / records.len() as f64;
    let threshold = average_volume * factor;

    let days = records
        .iter()
        .filter(|r| r.volume > threshold)
        .map(|r| BusyDay {
            date: r.date.clone(),
            volume: r.volume,
        })
        .collect();

    Ok(VolumeReport {
        average_volume,
        days,
    })
}

/// Busy days for every ticker using the default analytics volume factor.
///
/// Fails as a whole if any ticker has no records.
pub fn calc_busiest_days(series: &SeriesMap) -> Result<BTreeMap<Ticker, VolumeReport>> {
    calc_busiest_days_with(series, AnalyticsConfig::default().busy_volume_factor)
}

/// Busy days for every ticker with an explicit volume factor.
pub fn calc_busiest_days_with(
    series: &SeriesMap,
    factor: f64,
) -> Result<BTreeMap<Ticker, VolumeReport>> {
    series
        .iter()
        .map(|(ticker, records)| {
            let report = volume_report(ticker, records, factor)?;
            debug!(
                %ticker,
                average = report.average_volume,
                busy = report.days.len(),
                "computed volume report"
            );
            Ok((ticker.clone(), report))
        })
        .collect()
}
