//! Command-line arguments.

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Descriptive analytics over daily stock prices.
///
/// Prints monthly open/close averages unless another metric is selected.
#[derive(Debug, Parser)]
#[command(name = "stock-analyzer", author, version, about)]
pub struct Cli {
    /// Provider API key.
    #[arg(long, env = "QUANDL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Calculate the maximum daily profit for each security.
    #[arg(long)]
    pub max_daily_profit: bool,

    /// Calculate the days each security traded over 110% of its average volume.
    #[arg(long)]
    pub busiest_days: bool,

    /// Find the security with the most losing days.
    #[arg(long)]
    pub biggest_loser: bool,

    /// Print every metric in one JSON object.
    #[arg(long, conflicts_with_all = ["max_daily_profit", "busiest_days", "biggest_loser"])]
    pub all: bool,

    /// Read a saved provider response instead of calling the API.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated tickers to request.
    #[arg(long, value_delimiter = ',')]
    pub tickers: Option<Vec<String>>,

    /// First date requested (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Last date requested (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
}

/// The metric selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    MonthlyAverages,
    MaxDailyProfit,
    BusiestDays,
    BiggestLoser,
    All,
}

impl Cli {
    /// Resolve the metric flags. Earlier flags win when several are set.
    pub fn metric(&self) -> Metric {
        if self.all {
            Metric::All
        } else if self.max_daily_profit {
            Metric::MaxDailyProfit
        } else if self.busiest_days {
            Metric::BusiestDays
        } else if self.biggest_loser {
            Metric::BiggestLoser
        } else {
            Metric::MonthlyAverages
        }
    }
}
