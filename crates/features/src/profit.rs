//! Maximum single-day profit (high minus low).

use analyzer_core::{DailyRecord, MaxProfitResult, SeriesMap};
use tracing::debug;

/// The widest high-low day for one ticker.
///
/// Starts from zero, so a ticker whose ranges are never positive reports an
/// empty date and zero profit. A later day that only ties the running
/// maximum does not replace the earlier one.
pub fn max_daily_profit(ticker: &str, records: &[DailyRecord]) -> MaxProfitResult {
    let mut best = MaxProfitResult {
        ticker: ticker.to_string(),
        date: String::new(),
        profit: 0.0,
    };

    for record in records {
        let profit = record.range();
        if profit > best.profit {
            best.profit = profit;
            best.date.clone_from(&record.date);
        }
    }

    best
}

/// One result per ticker, in lexical ticker order.
pub fn calc_max_daily_profit(series: &SeriesMap) -> Vec<MaxProfitResult> {
    series
        .iter()
        .map(|(ticker, records)| {
            let result = max_daily_profit(ticker, records);
            debug!(%ticker, date = %result.date, profit = result.profit, "max daily profit");
            result
        })
        .collect()
}
