//! Reference series shared by the analytics tests.

use analyzer_core::{DailyRecord, SeriesMap};

pub fn record(ticker: &str, date: &str, ohlcv: [f64; 5]) -> DailyRecord {
    let [open, high, low, close, volume] = ohlcv;
    DailyRecord {
        ticker: ticker.to_string(),
        date: date.to_string(),
        open,
        high,
        low,
        close,
        volume,
    }
}

/// COF and GOOGL, first trading days of January 2017.
pub fn sample_series() -> SeriesMap {
    let mut series = SeriesMap::new();
    series.insert(
        "COF".to_string(),
        vec![
            record("COF", "2017-01-03", [88.55, 89.6, 87.79, 88.87, 3.441067e+06]),
            record("COF", "2017-01-04", [89.13, 90.77, 89.13, 90.3, 2.630905e+06]),
            record("COF", "2017-01-05", [89.84, 89.9299, 87.6, 88.38, 2.223944e+06]),
            record("COF", "2017-01-09", [88.22, 88.4, 87.4, 87.44, 2.122775e+06]),
        ],
    );
    series.insert(
        "GOOGL".to_string(),
        vec![
            record("GOOGL", "2017-01-03", [800.62, 811.435, 796.89, 808.01, 1.959033e+06]),
            record("GOOGL", "2017-01-04", [809.89, 813.43, 804.11, 807.77, 1.515339e+06]),
            record("GOOGL", "2017-01-05", [807.5, 813.74, 805.92, 813.02, 1.340535e+06]),
        ],
    );
    series
}
