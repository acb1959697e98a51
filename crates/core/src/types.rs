//! Core data types for the stock analyzer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ticker symbol.
pub type Ticker = String;

/// Per-ticker daily records, in first-seen row order within each ticker.
///
/// Keyed by a `BTreeMap` so traversal across tickers is lexical and every
/// reduction over it is deterministic.
pub type SeriesMap = BTreeMap<Ticker, Vec<DailyRecord>>;

/// Describes one positional column in a raw provider row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name (matched case-insensitively).
    pub name: String,
    /// Provider type label (e.g. "BigDecimal(34,12)"). Informational only.
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// One untyped provider row, positionally aligned with the column list.
pub type RawRow = Vec<serde_json::Value>;

/// One trading day for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Ticker symbol.
    pub ticker: Ticker,
    /// ISO date ("YYYY-MM-DD").
    pub date: String,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Traded volume.
    pub volume: f64,
}

impl DailyRecord {
    /// Month key ("YYYY-MM") used for grouping.
    ///
    /// Falls back to the whole date when it is shorter than seven bytes.
    #[inline]
    pub fn month(&self) -> &str {
        self.date.get(..7).unwrap_or(&self.date)
    }

    /// Intraday high-low range.
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Closed below its open.
    #[inline]
    pub fn is_loss(&self) -> bool {
        self.close < self.open
    }
}

/// Average open and close for one ticker over one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    pub month: String,
    pub average_open: f64,
    pub average_close: f64,
}

/// The single day with the widest high-low range for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxProfitResult {
    pub ticker: Ticker,
    /// Empty when no day had a positive range.
    pub date: String,
    pub profit: f64,
}

/// A day whose volume cleared the busy threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyDay {
    pub date: String,
    pub volume: f64,
}

/// Average volume for a ticker and the days that exceeded it by the busy factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeReport {
    pub average_volume: f64,
    pub days: Vec<BusyDay>,
}

/// The ticker with the most loss days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LossLeader {
    /// Empty when no ticker had a loss day.
    pub ticker: Ticker,
    pub loss_day_count: i64,
}

impl LossLeader {
    /// Result when no ticker recorded a loss.
    pub fn none() -> Self {
        Self {
            ticker: String::new(),
            loss_day_count: 0,
        }
    }
}
