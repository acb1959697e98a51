//! Monthly open/close averages.

use analyzer_core::{DailyRecord, MonthlyAverage, SeriesMap, Ticker};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Running sums for one month.
#[derive(Debug)]
struct MonthAccumulator<'a> {
    month: &'a str,
    sum_open: f64,
    sum_close: f64,
    count: usize,
}

impl<'a> MonthAccumulator<'a> {
    fn new(month: &'a str) -> Self {
        Self {
            month,
            sum_open: 0.0,
            sum_close: 0.0,
            count: 0,
        }
    }

    fn add(&mut self, record: &DailyRecord) {
        self.sum_open += record.open;
        self.sum_close += record.close;
        self.count += 1;
    }

    fn finish(&self) -> MonthlyAverage {
        let n = self.count as f64;
        MonthlyAverage {
            month: self.month.to_string(),
            average_open: self.sum_open / n,
            average_close: self.sum_close / n,
        }
    }
}

/// Average open and close per month for one ticker's records.
///
/// Months appear in order of their first record, not chronologically.
pub fn monthly_averages(records: &[DailyRecord]) -> Vec<MonthlyAverage> {
    let mut months: Vec<MonthAccumulator<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let month = record.month();
        let slot = *index.entry(month).or_insert_with(|| {
            months.push(MonthAccumulator::new(month));
            months.len() - 1
        });
        months[slot].add(record);
    }

    months.iter().map(MonthAccumulator::finish).collect()
}

/// Monthly averages for every ticker with at least one record.
pub fn calc_average_monthly(series: &SeriesMap) -> BTreeMap<Ticker, Vec<MonthlyAverage>> {
    series
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(ticker, records)| {
            let averages = monthly_averages(records);
            debug!(%ticker, months = averages.len(), "computed monthly averages");
            (ticker.clone(), averages)
        })
        .collect()
}
