//! Biggest loser: the ticker with the most down days.

use analyzer_core::{DailyRecord, LossLeader, SeriesMap};
use tracing::debug;

/// Number of days that closed below their open.
pub fn loss_day_count(records: &[DailyRecord]) -> i64 {
    records.iter().filter(|r| r.is_loss()).count() as i64
}

/// The ticker with the most loss days.
///
/// Tickers are visited in lexical order and the leader only changes on a
/// strictly greater count, so ties go to the lexically first ticker. A
/// ticker needs at least one loss day to be selected.
pub fn calc_biggest_loser(series: &SeriesMap) -> LossLeader {
    let mut leader = LossLeader::none();

    for (ticker, records) in series {
        let count = loss_day_count(records);
        debug!(%ticker, loss_days = count, "counted loss days");
        if count > leader.loss_day_count {
            leader = LossLeader {
                ticker: ticker.clone(),
                loss_day_count: count,
            };
        }
    }

    leader
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{record, sample_series};

    #[test]
    fn test_reference_sample() {
        let leader = calc_biggest_loser(&sample_series());
        assert_eq!(leader.ticker, "COF");
        assert_eq!(leader.loss_day_count, 2);
    }

    #[test]
    fn test_flat_day_is_not_a_loss() {
        let records = vec![
            record("X", "2017-01-02", [10.0, 0.0, 0.0, 10.0, 0.0]),
            record("X", "2017-01-03", [10.0, 0.0, 0.0, 9.99, 0.0]),
            record("X", "2017-01-04", [10.0, 0.0, 0.0, 10.01, 0.0]),
        ];
        assert_eq!(loss_day_count(&records), 1);
    }

    #[test]
    fn test_tie_goes_to_first_ticker() {
        let mut series = SeriesMap::new();
        for ticker in ["MSFT", "AAPL"] {
            series.insert(
                ticker.to_string(),
                vec![record(ticker, "2017-01-02", [10.0, 0.0, 0.0, 9.0, 0.0])],
            );
        }
        let leader = calc_biggest_loser(&series);
        assert_eq!(leader.ticker, "AAPL");
        assert_eq!(leader.loss_day_count, 1);
    }

    #[test]
    fn test_no_losses() {
        let mut series = SeriesMap::new();
        series.insert(
            "UP".to_string(),
            vec![record("UP", "2017-01-02", [10.0, 0.0, 0.0, 11.0, 0.0])],
        );
        series.insert("EMPTY".to_string(), Vec::new());

        assert_eq!(calc_biggest_loser(&series), LossLeader::none());
    }
}
